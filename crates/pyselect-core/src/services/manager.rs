//! Auto-selection manager - runs the rule chain.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::{debug, info};

use super::PersistedSelection;
use super::rules::AutoSelectionRule;
use crate::domain::{ContinuationSignal, Environment, ResourceScope, RuleId, SelectionOutcome};
use crate::events::SelectionEvent;
use crate::ports::{SelectionContext, SelectionError, SelectionEventEmitter, SelectionStore};

/// Runs an ordered chain of rules for a resource.
///
/// The manager holds no selection logic. It sequences rules, stops at the
/// first [`ContinuationSignal::Stop`] and owns the global selection slot
/// that rules write through [`SelectionContext::register_selection`].
pub struct AutoSelectionManager {
    rules: Vec<Arc<dyn AutoSelectionRule>>,
    global: PersistedSelection,
    emitter: Arc<dyn SelectionEventEmitter>,
}

impl AutoSelectionManager {
    /// Create a manager over `rules`, evaluated in the given order.
    pub fn new(
        rules: Vec<Arc<dyn AutoSelectionRule>>,
        store: Arc<dyn SelectionStore>,
        emitter: Arc<dyn SelectionEventEmitter>,
    ) -> Self {
        Self {
            rules,
            global: PersistedSelection::global(store),
            emitter,
        }
    }

    /// Identifiers of the configured rules, in evaluation order.
    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    /// Run one pass of the chain for `resource`.
    ///
    /// Rules run strictly one after another so each sees the writes of the
    /// rules before it. A rule error aborts the pass and is returned as is.
    pub async fn auto_select(
        &self,
        resource: Option<&ResourceScope>,
    ) -> Result<SelectionOutcome, SelectionError> {
        let pass = SelectionPass::new(&self.global, self.emitter.as_ref());
        let mut stopped_by = None;

        for rule in &self.rules {
            let signal = rule.evaluate(resource, &pass).await?;
            debug!(rule = %rule.id(), signal = ?signal, "Rule evaluated");
            if signal == ContinuationSignal::Stop {
                stopped_by = Some(rule.id());
                break;
            }
        }

        let selection = self.global.read().await?;
        match stopped_by {
            Some(rule) => info!(
                rule = %rule,
                resource = resource.map(ToString::to_string),
                selection = selection.as_ref().map(ToString::to_string),
                "Auto-selection decided"
            ),
            None => debug!(
                resource = resource.map(ToString::to_string),
                "No rule made an authoritative selection"
            ),
        }
        self.emitter
            .emit(SelectionEvent::pass_completed(resource, stopped_by));

        Ok(SelectionOutcome {
            stopped_by,
            selection,
        })
    }

    /// The current global auto-selected environment.
    pub async fn selected_environment(&self) -> Result<Option<Environment>, SelectionError> {
        Ok(self.global.read().await?)
    }
}

/// Per-pass view of the manager handed to rules.
struct SelectionPass<'a> {
    global: &'a PersistedSelection,
    emitter: &'a dyn SelectionEventEmitter,
    committed: AtomicBool,
}

impl<'a> SelectionPass<'a> {
    const fn new(global: &'a PersistedSelection, emitter: &'a dyn SelectionEventEmitter) -> Self {
        Self {
            global,
            emitter,
            committed: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl SelectionContext for SelectionPass<'_> {
    fn has_committed_selection(&self) -> bool {
        self.committed.load(Ordering::SeqCst)
    }

    async fn global_selection(&self) -> Result<Option<Environment>, SelectionError> {
        Ok(self.global.read().await?)
    }

    async fn register_selection(
        &self,
        rule: RuleId,
        environment: Environment,
    ) -> Result<(), SelectionError> {
        self.global.write(Some(environment.clone())).await?;
        self.committed.store(true, Ordering::SeqCst);
        self.emitter
            .emit(SelectionEvent::auto_selected_changed(environment, rule));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{InMemorySelectionStore, LocatorError, NoopSelectionEmitter};
    use crate::services::rules::test_support::env;
    use std::sync::Mutex;

    /// Rule with a scripted behaviour that logs its invocations.
    struct ScriptedRule {
        id: RuleId,
        register: Option<Environment>,
        signal: ContinuationSignal,
        fail: bool,
        log: Arc<Mutex<Vec<(RuleId, bool)>>>,
    }

    impl ScriptedRule {
        fn new(id: RuleId, signal: ContinuationSignal, log: &Arc<Mutex<Vec<(RuleId, bool)>>>) -> Self {
            Self {
                id,
                register: None,
                signal,
                fail: false,
                log: log.clone(),
            }
        }

        fn registering(mut self, environment: Environment) -> Self {
            self.register = Some(environment);
            self
        }

        fn failing(mut self) -> Self {
            self.fail = true;
            self
        }
    }

    #[async_trait]
    impl AutoSelectionRule for ScriptedRule {
        fn id(&self) -> RuleId {
            self.id
        }

        async fn evaluate(
            &self,
            _resource: Option<&ResourceScope>,
            manager: &dyn SelectionContext,
        ) -> Result<ContinuationSignal, SelectionError> {
            self.log
                .lock()
                .unwrap()
                .push((self.id, manager.has_committed_selection()));
            if self.fail {
                return Err(LocatorError::Unavailable("scripted".to_string()).into());
            }
            if let Some(ref environment) = self.register {
                manager
                    .register_selection(self.id, environment.clone())
                    .await?;
            }
            Ok(self.signal)
        }
    }

    #[derive(Default)]
    struct CollectingEmitter {
        events: Mutex<Vec<SelectionEvent>>,
    }

    impl SelectionEventEmitter for CollectingEmitter {
        fn emit(&self, event: SelectionEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn manager(
        rules: Vec<ScriptedRule>,
        emitter: Arc<dyn SelectionEventEmitter>,
    ) -> (AutoSelectionManager, Arc<InMemorySelectionStore>) {
        let store = Arc::new(InMemorySelectionStore::new());
        let rules = rules
            .into_iter()
            .map(|r| Arc::new(r) as Arc<dyn AutoSelectionRule>)
            .collect();
        (AutoSelectionManager::new(rules, store.clone(), emitter), store)
    }

    #[tokio::test]
    async fn test_stops_at_first_stop() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (manager, _store) = manager(
            vec![
                ScriptedRule::new(RuleId::UserDefined, ContinuationSignal::Proceed, &log),
                ScriptedRule::new(RuleId::CurrentPath, ContinuationSignal::Stop, &log)
                    .registering(env(3, 11)),
                ScriptedRule::new(RuleId::SystemWide, ContinuationSignal::Stop, &log),
            ],
            Arc::new(NoopSelectionEmitter::new()),
        );

        let outcome = manager.auto_select(None).await.unwrap();

        assert_eq!(outcome.stopped_by, Some(RuleId::CurrentPath));
        assert_eq!(outcome.selection, Some(env(3, 11)));
        let ran: Vec<RuleId> = log.lock().unwrap().iter().map(|(id, _)| *id).collect();
        assert_eq!(ran, vec![RuleId::UserDefined, RuleId::CurrentPath]);
    }

    #[tokio::test]
    async fn test_exhausts_chain_when_nobody_stops() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (manager, store) = manager(
            vec![
                ScriptedRule::new(RuleId::Cached, ContinuationSignal::Proceed, &log),
                ScriptedRule::new(RuleId::SystemWide, ContinuationSignal::Proceed, &log),
            ],
            Arc::new(NoopSelectionEmitter::new()),
        );

        let outcome = manager.auto_select(None).await.unwrap();

        assert!(!outcome.is_decided());
        assert_eq!(outcome.selection, None);
        assert_eq!(log.lock().unwrap().len(), 2);
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_later_rules_see_earlier_commit() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (manager, _store) = manager(
            vec![
                ScriptedRule::new(RuleId::Cached, ContinuationSignal::Proceed, &log)
                    .registering(env(3, 9)),
                ScriptedRule::new(RuleId::SystemWide, ContinuationSignal::Proceed, &log),
            ],
            Arc::new(NoopSelectionEmitter::new()),
        );

        manager.auto_select(None).await.unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec![(RuleId::Cached, false), (RuleId::SystemWide, true)]
        );
    }

    #[tokio::test]
    async fn test_commit_flag_is_per_pass() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (manager, _store) = manager(
            vec![
                ScriptedRule::new(RuleId::Cached, ContinuationSignal::Proceed, &log)
                    .registering(env(3, 9)),
            ],
            Arc::new(NoopSelectionEmitter::new()),
        );

        manager.auto_select(None).await.unwrap();
        manager.auto_select(None).await.unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec![(RuleId::Cached, false), (RuleId::Cached, false)]
        );
    }

    #[tokio::test]
    async fn test_rule_error_aborts_pass() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (manager, store) = manager(
            vec![
                ScriptedRule::new(RuleId::CurrentPath, ContinuationSignal::Proceed, &log).failing(),
                ScriptedRule::new(RuleId::SystemWide, ContinuationSignal::Stop, &log)
                    .registering(env(3, 12)),
            ],
            Arc::new(NoopSelectionEmitter::new()),
        );

        let err = manager.auto_select(None).await.unwrap_err();

        assert!(matches!(err, SelectionError::Locator(_)));
        assert_eq!(log.lock().unwrap().len(), 1);
        assert_eq!(store.write_count(), 0);
        assert_eq!(manager.selected_environment().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_events_are_emitted() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let emitter = Arc::new(CollectingEmitter::default());
        let (manager, _store) = manager(
            vec![
                ScriptedRule::new(RuleId::WindowsRegistry, ContinuationSignal::Stop, &log)
                    .registering(env(3, 10)),
            ],
            emitter.clone(),
        );

        let scope = ResourceScope::new("/work/app");
        manager.auto_select(Some(&scope)).await.unwrap();

        assert_eq!(
            *emitter.events.lock().unwrap(),
            vec![
                SelectionEvent::auto_selected_changed(env(3, 10), RuleId::WindowsRegistry),
                SelectionEvent::pass_completed(Some(&scope), Some(RuleId::WindowsRegistry)),
            ]
        );
    }

    #[test]
    fn test_rule_ids_keep_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (manager, _store) = manager(
            vec![
                ScriptedRule::new(RuleId::SystemWide, ContinuationSignal::Proceed, &log),
                ScriptedRule::new(RuleId::Cached, ContinuationSignal::Proceed, &log),
            ],
            Arc::new(NoopSelectionEmitter::new()),
        );
        assert_eq!(manager.rule_ids(), vec![RuleId::SystemWide, RuleId::Cached]);
    }
}
