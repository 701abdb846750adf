//! Version-gated committer shared by the discovery rules.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::RuleCommitter;
use crate::domain::{Environment, RuleId};
use crate::ports::{SelectionContext, SelectionError, SelectionStore};
use crate::services::PersistedSelection;

/// Committer that remembers each rule's choice and promotes it to the global
/// selection when it is at least as new as what is already selected.
///
/// A commit is authoritative when the environment has a known version and
/// the global selection is empty, older, or of equal version. Environments
/// without a version never stop the chain.
pub struct PersistingCommitter {
    rule: RuleId,
    slot: PersistedSelection,
}

impl PersistingCommitter {
    pub fn new(rule: RuleId, store: Arc<dyn SelectionStore>) -> Self {
        Self {
            rule,
            slot: PersistedSelection::new(store, rule.cache_key()),
        }
    }

    pub const fn rule(&self) -> RuleId {
        self.rule
    }

    /// Promote `environment` to the global selection when it is at least as
    /// new as what is selected. Does not touch this rule's slot.
    async fn promote(
        &self,
        environment: Option<&Environment>,
        manager: &dyn SelectionContext,
    ) -> Result<bool, SelectionError> {
        let Some(environment) = environment else {
            debug!(rule = %self.rule, "Nothing to commit");
            return Ok(false);
        };
        let Some(version) = environment.version.as_ref() else {
            debug!(rule = %self.rule, path = %environment.path.display(), "Candidate has no version");
            return Ok(false);
        };

        // A selection whose interpreter was removed counts as no selection.
        let current = match manager.global_selection().await? {
            Some(current) => self.still_installed(current).await,
            None => None,
        };
        let ordering = current
            .as_ref()
            .and_then(|c| c.version.as_ref())
            .map_or(Ordering::Greater, |current| version.cmp(current));

        match ordering {
            Ordering::Greater => {
                info!(rule = %self.rule, environment = %environment, "Auto-selected environment");
                manager
                    .register_selection(self.rule, environment.clone())
                    .await?;
                Ok(true)
            }
            Ordering::Equal => {
                debug!(rule = %self.rule, environment = %environment, "Matches current selection");
                Ok(true)
            }
            Ordering::Less => {
                debug!(rule = %self.rule, environment = %environment, "Current selection is newer");
                Ok(false)
            }
        }
    }

    /// `Some(environment)` if its interpreter is still on disk.
    async fn still_installed(&self, environment: Environment) -> Option<Environment> {
        match tokio::fs::try_exists(&environment.path).await {
            Ok(true) => Some(environment),
            Ok(false) => {
                warn!(rule = %self.rule, path = %environment.path.display(), "Selected interpreter no longer exists");
                None
            }
            Err(e) => {
                warn!(rule = %self.rule, path = %environment.path.display(), error = %e, "Cannot check selected interpreter");
                None
            }
        }
    }
}

#[async_trait]
impl RuleCommitter for PersistingCommitter {
    async fn commit(
        &self,
        environment: Option<Environment>,
        manager: &dyn SelectionContext,
    ) -> Result<bool, SelectionError> {
        // Global slot first: a failed promotion leaves this rule's slot as it was.
        let authoritative = self.promote(environment.as_ref(), manager).await?;
        self.slot.write(environment).await?;
        Ok(authoritative)
    }

    async fn previous_selection(&self) -> Result<Option<Environment>, SelectionError> {
        let Some(previous) = self.slot.read().await? else {
            return Ok(None);
        };
        Ok(self.still_installed(previous).await)
    }
}
