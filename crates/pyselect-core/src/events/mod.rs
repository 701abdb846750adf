//! Events emitted by the auto-selection manager.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag:
//!
//! ```json
//! { "type": "auto_selected_changed", "environment": { "path": "/usr/bin/python3", "version": "3.11.4", "kind": "current_path" }, "ruleId": "current_path" }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{Environment, ResourceScope, RuleId};

/// Auto-selection events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionEvent {
    /// The global auto-selected environment was replaced.
    AutoSelectedChanged {
        /// Newly selected environment.
        environment: Environment,
        /// Rule that registered it.
        #[serde(rename = "ruleId")]
        rule_id: RuleId,
    },

    /// A pass over the rule chain finished.
    PassCompleted {
        /// Resource the pass ran for (`None` for the global context).
        resource: Option<ResourceScope>,
        /// Rule that stopped the chain, if any.
        #[serde(rename = "stoppedBy")]
        stopped_by: Option<RuleId>,
    },
}

impl SelectionEvent {
    /// Create an auto-selected-changed event.
    pub const fn auto_selected_changed(environment: Environment, rule_id: RuleId) -> Self {
        Self::AutoSelectedChanged {
            environment,
            rule_id,
        }
    }

    /// Create a pass-completed event.
    pub fn pass_completed(resource: Option<&ResourceScope>, stopped_by: Option<RuleId>) -> Self {
        Self::PassCompleted {
            resource: resource.cloned(),
            stopped_by,
        }
    }

    /// Get the event name for logging and transport.
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::AutoSelectedChanged { .. } => "selection:auto-selected-changed",
            Self::PassCompleted { .. } => "selection:pass-completed",
        }
    }
}
