//! # pyselect-core
//!
//! Automatic selection of the default Python interpreter.
//!
//! A manager runs a prioritized chain of rules for a resource (a workspace
//! folder or file). Each rule consults its collaborators, may commit a
//! choice, and tells the manager whether to continue. The first rule whose
//! choice is authoritative ends the pass.
//!
//! # Layout
//!
//! - `domain` - environments, resource scopes, OS families, chain control values
//! - `ports` - traits for locators, the candidate selector, the platform probe,
//!   the selection store and event emission
//! - `services` - the rules, the manager, and the persisted selection slot
//! - `settings` - user-facing configuration of the chain
//! - `paths` - data directory and database location

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod events;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    ContinuationSignal, Environment, EnvironmentKind, OsFamily, ResourceScope, RuleId,
    SelectionOutcome,
};
pub use events::SelectionEvent;
pub use paths::{PathError, data_root, database_path};
pub use ports::{
    BestCandidateSelector, EnvironmentLocator, FixedPlatform, InMemorySelectionStore,
    LocatorError, NoopSelectionEmitter, PlatformProbe, RepositoryError, SelectionContext,
    SelectionError, SelectionEventEmitter, SelectionStore, StaticLocator,
};
pub use services::{
    AutoSelectionManager, AutoSelectionRule, Collaborators, Locators, PersistedSelection,
    RuleCommitter, build_manager,
};
pub use settings::{AutoSelectionSettings, SettingsError, SettingsUpdate, validate_settings};

// Only used by integration tests
#[cfg(test)]
use tracing_subscriber as _;
