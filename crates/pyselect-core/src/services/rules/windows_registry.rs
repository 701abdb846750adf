//! Rule backed by the Windows registry locator.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{AutoSelectionRule, RuleCommitter, select_and_commit};
use crate::domain::{ContinuationSignal, OsFamily, ResourceScope, RuleId};
use crate::ports::{
    BestCandidateSelector, EnvironmentLocator, PlatformProbe, SelectionContext, SelectionError,
};

/// Selects the best interpreter registered in the Windows registry.
///
/// On any other platform the rule passes straight through: the probe is
/// consulted once and nothing else is touched.
pub struct WindowsRegistryRule {
    platform: Arc<dyn PlatformProbe>,
    locator: Arc<dyn EnvironmentLocator>,
    selector: Arc<dyn BestCandidateSelector>,
    committer: Arc<dyn RuleCommitter>,
}

impl WindowsRegistryRule {
    /// Platform family this rule applies to.
    pub const TARGET: OsFamily = OsFamily::Windows;

    pub fn new(
        platform: Arc<dyn PlatformProbe>,
        locator: Arc<dyn EnvironmentLocator>,
        selector: Arc<dyn BestCandidateSelector>,
        committer: Arc<dyn RuleCommitter>,
    ) -> Self {
        Self {
            platform,
            locator,
            selector,
            committer,
        }
    }
}

#[async_trait]
impl AutoSelectionRule for WindowsRegistryRule {
    fn id(&self) -> RuleId {
        RuleId::WindowsRegistry
    }

    async fn evaluate(
        &self,
        resource: Option<&ResourceScope>,
        manager: &dyn SelectionContext,
    ) -> Result<ContinuationSignal, SelectionError> {
        let os = self.platform.os_family();
        if os != Self::TARGET {
            debug!(os = %os, "Registry rule skipped on this platform");
            return Ok(ContinuationSignal::Proceed);
        }

        select_and_commit(
            self.id(),
            self.locator.as_ref(),
            self.selector.as_ref(),
            self.committer.as_ref(),
            resource,
            manager,
        )
        .await
    }
}
