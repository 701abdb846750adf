//! Typed slot over a [`SelectionStore`] key.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::Environment;
use crate::ports::{RepositoryError, SelectionStore};

/// Store key of the global auto-selected environment.
pub const GLOBAL_SELECTION_KEY: &str = "auto_selection.global";

/// One durable slot holding an optional environment.
///
/// The value is loaded from the store on first access and kept in memory
/// afterwards. Writes go to the store first; the in-memory copy only changes
/// once the store acknowledged, so a failed write leaves both untouched.
pub struct PersistedSelection {
    key: String,
    store: Arc<dyn SelectionStore>,
    /// `None` until the first read or write.
    cached: Mutex<Option<Option<Environment>>>,
}

impl PersistedSelection {
    pub fn new(store: Arc<dyn SelectionStore>, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            store,
            cached: Mutex::new(None),
        }
    }

    /// The slot holding the global auto-selected environment.
    pub fn global(store: Arc<dyn SelectionStore>) -> Self {
        Self::new(store, GLOBAL_SELECTION_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current value.
    pub async fn read(&self) -> Result<Option<Environment>, RepositoryError> {
        let mut cached = self.cached.lock().await;
        if let Some(value) = cached.as_ref() {
            return Ok(value.clone());
        }

        let value = self.store.read(&self.key).await?;
        debug!(key = %self.key, present = value.is_some(), "Loaded persisted selection");
        *cached = Some(value.clone());
        Ok(value)
    }

    /// Replace the value.
    pub async fn write(&self, value: Option<Environment>) -> Result<(), RepositoryError> {
        let mut cached = self.cached.lock().await;
        self.store.write(&self.key, value.as_ref()).await?;
        debug!(key = %self.key, present = value.is_some(), "Wrote persisted selection");
        *cached = Some(value);
        Ok(())
    }
}

impl std::fmt::Debug for PersistedSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistedSelection")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
