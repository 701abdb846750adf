//! Port definitions (trait abstractions) for external collaborators.
//!
//! Ports define the interfaces that the auto-selection core expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No registry/filesystem scanning details: locators hand back finished
//!   [`Environment`](crate::domain::Environment) values
//! - "Nothing found" is `None` or an empty list, never an error

pub mod candidate_selector;
pub mod environment_locator;
pub mod event_emitter;
pub mod platform_probe;
pub mod selection_context;
pub mod selection_store;

use thiserror::Error;

pub use candidate_selector::BestCandidateSelector;
pub use environment_locator::{EnvironmentLocator, StaticLocator};
pub use event_emitter::{NoopSelectionEmitter, SelectionEventEmitter};
pub use platform_probe::{FixedPlatform, PlatformProbe};
pub use selection_context::SelectionContext;
pub use selection_store::{InMemorySelectionStore, SelectionStore};

#[cfg(test)]
pub use candidate_selector::MockBestCandidateSelector;
#[cfg(test)]
pub use platform_probe::MockPlatformProbe;

/// Domain-specific errors for selection store operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors).
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors raised by a locator while enumerating candidates.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// The discovery source could not be read.
    #[error("Discovery failed for {source_name}: {reason}")]
    Discovery { source_name: String, reason: String },

    /// The discovery source does not exist on this machine.
    #[error("Discovery source unavailable: {0}")]
    Unavailable(String),
}

/// Error type returned by rules and the manager.
///
/// Normal "nothing selected" outcomes are never errors; this only carries
/// collaborator faults, which abort the current pass.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// Selection store failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Locator failed.
    #[error(transparent)]
    Locator(#[from] LocatorError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),
}
