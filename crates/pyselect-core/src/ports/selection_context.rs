//! Capability surface a rule sees of the manager running it.
//!
//! Rules never hold the manager itself. For every pass the manager hands
//! each rule a context exposing the cross-rule state of that pass.

use async_trait::async_trait;

use super::SelectionError;
use crate::domain::{Environment, RuleId};

/// Cross-rule state for one selection pass.
#[async_trait]
pub trait SelectionContext: Send + Sync {
    /// Whether a rule already registered a selection during this pass.
    fn has_committed_selection(&self) -> bool;

    /// The current global auto-selected environment.
    ///
    /// Reading never changes persisted state.
    async fn global_selection(&self) -> Result<Option<Environment>, SelectionError>;

    /// Record `environment` as the global auto-selected environment on
    /// behalf of `rule`.
    ///
    /// On error nothing was written and the pass flag is unchanged.
    async fn register_selection(
        &self,
        rule: RuleId,
        environment: Environment,
    ) -> Result<(), SelectionError>;
}
