//! Wiring of the default rule chain.

use std::sync::Arc;

use tracing::debug;

use super::manager::AutoSelectionManager;
use super::rules::{
    AutoSelectionRule, CachedRule, LocatorRule, PersistingCommitter, RuleCommitter,
    UserDefinedRule, WindowsRegistryRule,
};
use crate::domain::RuleId;
use crate::ports::{
    BestCandidateSelector, EnvironmentLocator, PlatformProbe, SelectionError,
    SelectionEventEmitter, SelectionStore,
};
use crate::settings::{AutoSelectionSettings, validate_settings};

/// One locator per discovery source.
#[derive(Clone)]
pub struct Locators {
    /// Interpreters on `PATH`.
    pub current_path: Arc<dyn EnvironmentLocator>,
    /// Interpreters registered in the Windows registry.
    pub windows_registry: Arc<dyn EnvironmentLocator>,
    /// Every interpreter known on the machine.
    pub system_wide: Arc<dyn EnvironmentLocator>,
}

/// Container for everything the chain consumes.
///
/// # Example
///
/// ```ignore
/// let collaborators = Collaborators {
///     locators,
///     selector: Arc::new(HighestVersion),
///     platform: Arc::new(DefaultPlatformProbe::new()),
///     store: Arc::new(SqliteSelectionStore::new(pool)),
///     emitter: Arc::new(NoopSelectionEmitter::new()),
/// };
/// let manager = build_manager(collaborators, &settings)?;
/// ```
#[derive(Clone)]
pub struct Collaborators {
    pub locators: Locators,
    pub selector: Arc<dyn BestCandidateSelector>,
    pub platform: Arc<dyn PlatformProbe>,
    pub store: Arc<dyn SelectionStore>,
    pub emitter: Arc<dyn SelectionEventEmitter>,
}

/// Build a manager running the default chain, minus disabled rules.
///
/// The cached rule reuses the choices of whichever discovery rules are
/// enabled.
pub fn build_manager(
    collaborators: Collaborators,
    settings: &AutoSelectionSettings,
) -> Result<AutoSelectionManager, SelectionError> {
    validate_settings(settings)?;

    let Collaborators {
        locators,
        selector,
        platform,
        store,
        emitter,
    } = collaborators;

    let committer = |rule: RuleId| -> Arc<dyn RuleCommitter> {
        Arc::new(PersistingCommitter::new(rule, store.clone()))
    };
    let current_path = committer(RuleId::CurrentPath);
    let windows_registry = committer(RuleId::WindowsRegistry);
    let system_wide = committer(RuleId::SystemWide);

    let cache_sources: Vec<Arc<dyn RuleCommitter>> = [
        (RuleId::CurrentPath, &current_path),
        (RuleId::WindowsRegistry, &windows_registry),
        (RuleId::SystemWide, &system_wide),
    ]
    .into_iter()
    .filter(|(rule, _)| settings.is_rule_enabled(*rule))
    .map(|(_, committer)| committer.clone())
    .collect();

    let mut rules: Vec<Arc<dyn AutoSelectionRule>> = Vec::new();
    for rule in settings.enabled_rules() {
        let built: Arc<dyn AutoSelectionRule> = match rule {
            RuleId::UserDefined => Arc::new(UserDefinedRule::new(settings)),
            RuleId::Cached => Arc::new(CachedRule::new(
                cache_sources.clone(),
                selector.clone(),
                committer(RuleId::Cached),
            )),
            RuleId::CurrentPath => Arc::new(LocatorRule::current_path(
                locators.current_path.clone(),
                selector.clone(),
                current_path.clone(),
            )),
            RuleId::WindowsRegistry => Arc::new(WindowsRegistryRule::new(
                platform.clone(),
                locators.windows_registry.clone(),
                selector.clone(),
                windows_registry.clone(),
            )),
            RuleId::SystemWide => Arc::new(LocatorRule::system_wide(
                locators.system_wide.clone(),
                selector.clone(),
                system_wide.clone(),
            )),
        };
        rules.push(built);
    }

    debug!(rules = ?rules.iter().map(|r| r.id()).collect::<Vec<_>>(), "Built auto-selection chain");
    Ok(AutoSelectionManager::new(rules, store, emitter))
}
