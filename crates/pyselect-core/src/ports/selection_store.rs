//! Selection store trait definition.
//!
//! This port defines durable key-value persistence for selected environments.
//! Implementations handle all storage details internally.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::Environment;

/// Repository for persisted environment selections.
///
/// # Design Rules
///
/// - A key that was never written reads as `None`
/// - Writing `None` is a real write: the key then reads as `None`
/// - A write either fully replaces the value or fails without effect
#[async_trait]
pub trait SelectionStore: Send + Sync {
    /// Read the value stored under `key`.
    async fn read(&self, key: &str) -> Result<Option<Environment>, RepositoryError>;

    /// Replace the value stored under `key`.
    async fn write(&self, key: &str, value: Option<&Environment>) -> Result<(), RepositoryError>;
}

/// Process-local store backed by a map.
///
/// Used for tests and for callers that do not need selections to survive a
/// restart.
#[derive(Debug, Default)]
pub struct InMemorySelectionStore {
    values: Mutex<HashMap<String, Option<Environment>>>,
    writes: Mutex<usize>,
}

impl InMemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful writes since creation.
    pub fn write_count(&self) -> usize {
        self.writes.lock().map_or(0, |count| *count)
    }

    /// Whether `key` has ever been written.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values
            .lock()
            .is_ok_and(|values| values.contains_key(key))
    }
}

fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::Storage("selection store lock poisoned".to_string())
}

#[async_trait]
impl SelectionStore for InMemorySelectionStore {
    async fn read(&self, key: &str) -> Result<Option<Environment>, RepositoryError> {
        let values = self.values.lock().map_err(poisoned)?;
        Ok(values.get(key).cloned().flatten())
    }

    async fn write(&self, key: &str, value: Option<&Environment>) -> Result<(), RepositoryError> {
        let mut values = self.values.lock().map_err(poisoned)?;
        values.insert(key.to_string(), value.cloned());
        drop(values);
        *self.writes.lock().map_err(poisoned)? += 1;
        Ok(())
    }
}
