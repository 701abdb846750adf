//! Rule that reuses what the discovery rules chose before.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{AutoSelectionRule, RuleCommitter};
use crate::domain::{ContinuationSignal, ResourceScope, RuleId};
use crate::ports::{BestCandidateSelector, SelectionContext, SelectionError};

/// Picks the best of the environments previously committed by other rules.
///
/// Runs ahead of the discovery rules so a warm start needs no scanning.
/// Sources whose remembered interpreter vanished from disk are ignored.
pub struct CachedRule {
    sources: Vec<Arc<dyn RuleCommitter>>,
    selector: Arc<dyn BestCandidateSelector>,
    committer: Arc<dyn RuleCommitter>,
}

impl CachedRule {
    /// `sources` are the committers of the rules whose choices are reused.
    pub fn new(
        sources: Vec<Arc<dyn RuleCommitter>>,
        selector: Arc<dyn BestCandidateSelector>,
        committer: Arc<dyn RuleCommitter>,
    ) -> Self {
        Self {
            sources,
            selector,
            committer,
        }
    }
}

#[async_trait]
impl AutoSelectionRule for CachedRule {
    fn id(&self) -> RuleId {
        RuleId::Cached
    }

    async fn evaluate(
        &self,
        _resource: Option<&ResourceScope>,
        manager: &dyn SelectionContext,
    ) -> Result<ContinuationSignal, SelectionError> {
        let mut candidates = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            if let Some(previous) = source.previous_selection().await? {
                candidates.push(previous);
            }
        }

        let best = self.selector.pick_best(&candidates);
        debug!(
            candidates = candidates.len(),
            best = best.as_ref().map(ToString::to_string),
            "Picked best cached selection"
        );

        let authoritative = self.committer.commit(best, manager).await?;
        Ok(ContinuationSignal::from_commit(authoritative))
    }
}
