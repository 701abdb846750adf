//! Services orchestrating the auto-selection chain.
//!
//! Services depend only on ports. Adapters provide the implementations and
//! wire them through [`build_manager`].

pub mod factory;
pub mod manager;
pub mod persisted_selection;
pub mod rules;

pub use factory::{Collaborators, Locators, build_manager};
pub use manager::AutoSelectionManager;
pub use persisted_selection::{GLOBAL_SELECTION_KEY, PersistedSelection};
pub use rules::{
    AutoSelectionRule, CachedRule, LocatorRule, PersistingCommitter, RuleCommitter,
    UserDefinedRule, WindowsRegistryRule,
};
