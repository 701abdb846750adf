//! Rule that defers to an interpreter the user configured.

use async_trait::async_trait;
use tracing::info;

use super::AutoSelectionRule;
use crate::domain::{ContinuationSignal, ResourceScope, RuleId};
use crate::ports::{SelectionContext, SelectionError};
use crate::settings::AutoSelectionSettings;

/// Stops the chain when the user already picked an interpreter.
///
/// Auto-selection must not override an explicit choice, so this rule never
/// commits anything. It only decides whether the rest of the chain runs.
pub struct UserDefinedRule {
    configured_path: Option<String>,
}

impl UserDefinedRule {
    pub fn new(settings: &AutoSelectionSettings) -> Self {
        Self {
            configured_path: settings.explicit_interpreter_path().map(str::to_string),
        }
    }
}

#[async_trait]
impl AutoSelectionRule for UserDefinedRule {
    fn id(&self) -> RuleId {
        RuleId::UserDefined
    }

    async fn evaluate(
        &self,
        _resource: Option<&ResourceScope>,
        _manager: &dyn SelectionContext,
    ) -> Result<ContinuationSignal, SelectionError> {
        match self.configured_path {
            Some(ref path) => {
                info!(path = %path, "Interpreter configured by user, skipping auto-selection");
                Ok(ContinuationSignal::Stop)
            }
            None => Ok(ContinuationSignal::Proceed),
        }
    }
}
