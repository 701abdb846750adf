//! Platform-independent discovery rule.

use std::sync::Arc;

use async_trait::async_trait;

use super::{AutoSelectionRule, RuleCommitter, select_and_commit};
use crate::domain::{ContinuationSignal, ResourceScope, RuleId};
use crate::ports::{BestCandidateSelector, EnvironmentLocator, SelectionContext, SelectionError};

/// Selects the best interpreter reported by one locator.
///
/// Used for the `PATH` and system-wide sources, which apply on every
/// platform.
pub struct LocatorRule {
    id: RuleId,
    locator: Arc<dyn EnvironmentLocator>,
    selector: Arc<dyn BestCandidateSelector>,
    committer: Arc<dyn RuleCommitter>,
}

impl LocatorRule {
    pub fn new(
        id: RuleId,
        locator: Arc<dyn EnvironmentLocator>,
        selector: Arc<dyn BestCandidateSelector>,
        committer: Arc<dyn RuleCommitter>,
    ) -> Self {
        Self {
            id,
            locator,
            selector,
            committer,
        }
    }

    /// Rule over interpreters found on `PATH`.
    pub fn current_path(
        locator: Arc<dyn EnvironmentLocator>,
        selector: Arc<dyn BestCandidateSelector>,
        committer: Arc<dyn RuleCommitter>,
    ) -> Self {
        Self::new(RuleId::CurrentPath, locator, selector, committer)
    }

    /// Rule over every interpreter known on the machine.
    pub fn system_wide(
        locator: Arc<dyn EnvironmentLocator>,
        selector: Arc<dyn BestCandidateSelector>,
        committer: Arc<dyn RuleCommitter>,
    ) -> Self {
        Self::new(RuleId::SystemWide, locator, selector, committer)
    }
}

#[async_trait]
impl AutoSelectionRule for LocatorRule {
    fn id(&self) -> RuleId {
        self.id
    }

    async fn evaluate(
        &self,
        resource: Option<&ResourceScope>,
        manager: &dyn SelectionContext,
    ) -> Result<ContinuationSignal, SelectionError> {
        select_and_commit(
            self.id,
            self.locator.as_ref(),
            self.selector.as_ref(),
            self.committer.as_ref(),
            resource,
            manager,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Environment;
    use crate::ports::MockBestCandidateSelector;
    use crate::services::rules::test_support::{
        FakeContext, RecordingCommitter, RecordingLocator, env,
    };

    #[tokio::test]
    async fn test_discovers_once_and_commits_best() {
        let locator = Arc::new(RecordingLocator::returning(vec![env(3, 9), env(3, 11)]));
        let committer = Arc::new(RecordingCommitter::answering(true));
        let mut selector = MockBestCandidateSelector::new();
        selector
            .expect_pick_best()
            .times(1)
            .return_const(Some(env(3, 11)));

        let rule = LocatorRule::current_path(locator.clone(), Arc::new(selector), committer.clone());
        let signal = rule.evaluate(None, &FakeContext::new()).await.unwrap();

        assert_eq!(rule.id(), RuleId::CurrentPath);
        assert_eq!(signal, ContinuationSignal::Stop);
        assert_eq!(locator.call_count(), 1);
        assert_eq!(committer.commits(), vec![Some(env(3, 11))]);
    }

    #[tokio::test]
    async fn test_no_candidates_proceeds() {
        let mut selector = MockBestCandidateSelector::new();
        selector.expect_pick_best().times(1).return_const(None::<Environment>);
        let committer = Arc::new(RecordingCommitter::answering(false));

        let rule = LocatorRule::system_wide(
            Arc::new(RecordingLocator::returning(vec![])),
            Arc::new(selector),
            committer.clone(),
        );
        let signal = rule.evaluate(None, &FakeContext::new()).await.unwrap();

        assert_eq!(rule.id(), RuleId::SystemWide);
        assert_eq!(signal, ContinuationSignal::Proceed);
        assert_eq!(committer.commits(), vec![None]);
    }
}
