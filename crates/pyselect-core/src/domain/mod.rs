//! Domain types for interpreter auto-selection.
//!
//! These are pure data types with no infrastructure dependencies.

mod environment;
mod platform;
mod selection;

pub use environment::{Environment, EnvironmentKind, ResourceScope};
pub use platform::OsFamily;
pub use selection::{ContinuationSignal, RuleId, SelectionOutcome};
