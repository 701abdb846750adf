//! Auto-selection rules.
//!
//! Every rule implements [`AutoSelectionRule`]. A rule tries to choose an
//! environment for a resource and tells the manager whether the chain should
//! go on. Rules that discover candidates write their choice through a
//! [`RuleCommitter`], which also decides whether that choice is final.
//!
//! # Default chain
//!
//! | order | rule | source |
//! |-------|------|--------|
//! | 1 | [`UserDefinedRule`] | explicit interpreter path in settings |
//! | 2 | [`CachedRule`] | what the discovery rules chose previously |
//! | 3 | [`LocatorRule`] (`CurrentPath`) | interpreters on `PATH` |
//! | 4 | [`WindowsRegistryRule`] | `PythonCore` registry keys, Windows only |
//! | 5 | [`LocatorRule`] (`SystemWide`) | every known interpreter |

mod cached;
mod commit;
mod locator;
mod user_defined;
mod windows_registry;

#[cfg(test)]
pub(crate) mod test_support;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{ContinuationSignal, Environment, ResourceScope, RuleId};
use crate::ports::{BestCandidateSelector, EnvironmentLocator, SelectionContext, SelectionError};

pub use cached::CachedRule;
pub use commit::PersistingCommitter;
pub use locator::LocatorRule;
pub use user_defined::UserDefinedRule;
pub use windows_registry::WindowsRegistryRule;

/// One link of the auto-selection chain.
#[async_trait]
pub trait AutoSelectionRule: Send + Sync {
    /// Identifier of this rule.
    fn id(&self) -> RuleId;

    /// Try to select an environment for `resource`.
    ///
    /// Performs at most one commit. Collaborator failures are returned as
    /// errors and abort the pass; "nothing found" is never an error.
    async fn evaluate(
        &self,
        resource: Option<&ResourceScope>,
        manager: &dyn SelectionContext,
    ) -> Result<ContinuationSignal, SelectionError>;
}

/// Writes a rule's choice and decides whether it is authoritative.
#[async_trait]
pub trait RuleCommitter: Send + Sync {
    /// Persist `environment` (which may be `None`) as this rule's choice.
    ///
    /// Returns `true` when the choice should stop the chain.
    async fn commit(
        &self,
        environment: Option<Environment>,
        manager: &dyn SelectionContext,
    ) -> Result<bool, SelectionError>;

    /// The choice persisted by an earlier commit, if it still exists on disk.
    async fn previous_selection(&self) -> Result<Option<Environment>, SelectionError>;
}

/// Discover, pick the best candidate, commit.
///
/// The candidate list is handed to the selector even when empty.
pub(crate) async fn select_and_commit(
    rule: RuleId,
    locator: &dyn EnvironmentLocator,
    selector: &dyn BestCandidateSelector,
    committer: &dyn RuleCommitter,
    resource: Option<&ResourceScope>,
    manager: &dyn SelectionContext,
) -> Result<ContinuationSignal, SelectionError> {
    let candidates = locator.discover(resource).await?;
    let best = selector.pick_best(&candidates);
    debug!(
        rule = %rule,
        candidates = candidates.len(),
        best = best.as_ref().map(ToString::to_string),
        "Picked best candidate"
    );

    let authoritative = committer.commit(best, manager).await?;
    Ok(ContinuationSignal::from_commit(authoritative))
}
