//! Shared fakes for rule tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use semver::Version;

use super::RuleCommitter;
use crate::domain::{Environment, ResourceScope, RuleId};
use crate::ports::{
    EnvironmentLocator, LocatorError, RepositoryError, SelectionContext, SelectionError,
};

pub fn env(major: u64, minor: u64) -> Environment {
    Environment::new(
        format!("/fake/python{major}.{minor}/bin/python"),
        Version::new(major, minor, 0),
    )
}

/// Locator that records every call.
pub struct RecordingLocator {
    result: Mutex<Option<Result<Vec<Environment>, LocatorError>>>,
    answer: Vec<Environment>,
    calls: Mutex<Vec<Option<ResourceScope>>>,
}

impl RecordingLocator {
    pub fn returning(answer: Vec<Environment>) -> Self {
        Self {
            result: Mutex::new(None),
            answer,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails on the first call, then answers with an empty list.
    pub fn failing(error: LocatorError) -> Self {
        Self {
            result: Mutex::new(Some(Err(error))),
            answer: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<Option<ResourceScope>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EnvironmentLocator for RecordingLocator {
    async fn discover(
        &self,
        resource: Option<&ResourceScope>,
    ) -> Result<Vec<Environment>, LocatorError> {
        self.calls.lock().unwrap().push(resource.cloned());
        match self.result.lock().unwrap().take() {
            Some(result) => result,
            None => Ok(self.answer.clone()),
        }
    }
}

/// Committer with a fixed answer that records what it was given.
pub struct RecordingCommitter {
    authoritative: bool,
    previous: Option<Environment>,
    commits: Mutex<Vec<Option<Environment>>>,
    previous_reads: AtomicUsize,
}

impl RecordingCommitter {
    pub fn answering(authoritative: bool) -> Self {
        Self {
            authoritative,
            previous: None,
            commits: Mutex::new(Vec::new()),
            previous_reads: AtomicUsize::new(0),
        }
    }

    pub fn with_previous(mut self, previous: Environment) -> Self {
        self.previous = Some(previous);
        self
    }

    pub fn commits(&self) -> Vec<Option<Environment>> {
        self.commits.lock().unwrap().clone()
    }

    pub fn previous_reads(&self) -> usize {
        self.previous_reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RuleCommitter for RecordingCommitter {
    async fn commit(
        &self,
        environment: Option<Environment>,
        _manager: &dyn SelectionContext,
    ) -> Result<bool, SelectionError> {
        self.commits.lock().unwrap().push(environment);
        Ok(self.authoritative)
    }

    async fn previous_selection(&self) -> Result<Option<Environment>, SelectionError> {
        self.previous_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.previous.clone())
    }
}

/// In-memory stand-in for a manager pass.
#[derive(Default)]
pub struct FakeContext {
    global: Mutex<Option<Environment>>,
    registered: Mutex<Vec<(RuleId, Environment)>>,
    reject_registration: bool,
}

impl FakeContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_global(environment: Environment) -> Self {
        Self {
            global: Mutex::new(Some(environment)),
            registered: Mutex::new(Vec::new()),
            reject_registration: false,
        }
    }

    /// Every `register_selection` fails as if the global write failed.
    pub fn rejecting_registration() -> Self {
        Self {
            reject_registration: true,
            ..Self::default()
        }
    }

    pub fn global(&self) -> Option<Environment> {
        self.global.lock().unwrap().clone()
    }

    pub fn registered(&self) -> Vec<(RuleId, Environment)> {
        self.registered.lock().unwrap().clone()
    }
}

#[async_trait]
impl SelectionContext for FakeContext {
    fn has_committed_selection(&self) -> bool {
        !self.registered.lock().unwrap().is_empty()
    }

    async fn global_selection(&self) -> Result<Option<Environment>, SelectionError> {
        Ok(self.global())
    }

    async fn register_selection(
        &self,
        rule: RuleId,
        environment: Environment,
    ) -> Result<(), SelectionError> {
        if self.reject_registration {
            return Err(RepositoryError::Storage("disk full".to_string()).into());
        }
        *self.global.lock().unwrap() = Some(environment.clone());
        self.registered.lock().unwrap().push((rule, environment));
        Ok(())
    }
}
