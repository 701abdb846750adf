//! Auto-selection settings types and validation.
//!
//! These are pure domain types with no infrastructure dependencies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::RuleId;

/// Interpreter path that means "nothing configured".
pub const DEFAULT_INTERPRETER_PATH: &str = "python";

/// Errors raised when validating settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Interpreter path cannot be blank")]
    BlankInterpreterPath,

    #[error("Rule {0} is disabled more than once")]
    DuplicateDisabledRule(RuleId),

    #[error("At least one auto-selection rule must stay enabled")]
    AllRulesDisabled,

    #[error("Invalid settings document: {0}")]
    Parse(String),
}

/// Auto-selection settings.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AutoSelectionSettings {
    /// Interpreter path the user configured explicitly.
    ///
    /// When set to anything other than [`DEFAULT_INTERPRETER_PATH`] the chain
    /// stops at the user-defined rule.
    pub user_interpreter_path: Option<String>,

    /// Rules left out of the chain.
    pub disabled_rules: Option<Vec<RuleId>>,
}

impl AutoSelectionSettings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            user_interpreter_path: None,
            disabled_rules: None,
        }
    }

    /// Parse settings from a JSON document and validate them.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| SettingsError::Parse(e.to_string()))?;
        validate_settings(&settings)?;
        Ok(settings)
    }

    /// The configured interpreter path, if it is an explicit choice.
    pub fn explicit_interpreter_path(&self) -> Option<&str> {
        self.user_interpreter_path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty() && *path != DEFAULT_INTERPRETER_PATH)
    }

    /// Whether `rule` takes part in the chain.
    pub fn is_rule_enabled(&self, rule: RuleId) -> bool {
        self.disabled_rules
            .as_ref()
            .is_none_or(|disabled| !disabled.contains(&rule))
    }

    /// Enabled rules in chain order.
    pub fn enabled_rules(&self) -> Vec<RuleId> {
        RuleId::ALL
            .into_iter()
            .filter(|rule| self.is_rule_enabled(*rule))
            .collect()
    }

    /// Merge an update into these settings, only touching fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(ref path) = other.user_interpreter_path {
            self.user_interpreter_path.clone_from(path);
        }
        if let Some(ref disabled) = other.disabled_rules {
            self.disabled_rules.clone_from(disabled);
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = set field to None/null
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SettingsUpdate {
    pub user_interpreter_path: Option<Option<String>>,
    pub disabled_rules: Option<Option<Vec<RuleId>>>,
}

/// Validate settings values.
pub fn validate_settings(settings: &AutoSelectionSettings) -> Result<(), SettingsError> {
    if let Some(ref path) = settings.user_interpreter_path {
        if path.trim().is_empty() {
            return Err(SettingsError::BlankInterpreterPath);
        }
    }

    if let Some(ref disabled) = settings.disabled_rules {
        for (index, rule) in disabled.iter().enumerate() {
            if disabled[..index].contains(rule) {
                return Err(SettingsError::DuplicateDisabledRule(*rule));
            }
        }
        if RuleId::ALL.iter().all(|rule| disabled.contains(rule)) {
            return Err(SettingsError::AllRulesDisabled);
        }
    }

    Ok(())
}
