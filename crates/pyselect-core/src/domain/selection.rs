//! Rule chain control values and identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::environment::Environment;

/// Outcome of a single rule evaluation.
///
/// This is chain control only; failures travel through `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContinuationSignal {
    /// Run the next rule in the chain.
    Proceed,
    /// The selection is final for this pass.
    Stop,
}

impl ContinuationSignal {
    /// Map a commit result onto chain control.
    pub const fn from_commit(authoritative: bool) -> Self {
        if authoritative { Self::Stop } else { Self::Proceed }
    }

    pub const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}

/// Identifies a rule in the auto-selection chain.
///
/// The declaration order is the default chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// Honours an interpreter path the user configured explicitly.
    UserDefined,
    /// Reuses what the discovery rules selected in earlier sessions.
    Cached,
    /// Interpreters found on `PATH`.
    CurrentPath,
    /// Interpreters registered in the Windows registry.
    WindowsRegistry,
    /// Every interpreter known on the machine.
    SystemWide,
}

impl RuleId {
    /// Default chain order.
    pub const ALL: [Self; 5] = [
        Self::UserDefined,
        Self::Cached,
        Self::CurrentPath,
        Self::WindowsRegistry,
        Self::SystemWide,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserDefined => "user_defined",
            Self::Cached => "cached",
            Self::CurrentPath => "current_path",
            Self::WindowsRegistry => "windows_registry",
            Self::SystemWide => "system_wide",
        }
    }

    /// Store key holding the last environment this rule committed.
    pub fn cache_key(self) -> String {
        format!("auto_selection.rule.{}", self.as_str())
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one manager pass over the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOutcome {
    /// Rule that returned [`ContinuationSignal::Stop`], if any did.
    pub stopped_by: Option<RuleId>,
    /// Global selection after the pass.
    pub selection: Option<Environment>,
}

impl SelectionOutcome {
    /// Whether some rule made an authoritative decision.
    pub const fn is_decided(&self) -> bool {
        self.stopped_by.is_some()
    }
}
