//! `SQLite` implementation of the `SelectionStore` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::trace;

use pyselect_core::{Environment, RepositoryError, SelectionStore};

/// `SQLite` implementation of the `SelectionStore` trait.
///
/// Each key maps to a JSON encoded `Option<Environment>` in the
/// `selection_kv` table. A cleared slot is stored as JSON `null` so it stays
/// distinguishable from a key that was never written.
pub struct SqliteSelectionStore {
    pool: SqlitePool,
}

impl SqliteSelectionStore {
    /// Create a store over a pool prepared by `setup_database`.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Whether `key` has a row, including a cleared one.
    pub async fn contains_key(&self, key: &str) -> Result<bool, RepositoryError> {
        let row = sqlx::query("SELECT 1 FROM selection_kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(row.is_some())
    }
}

#[async_trait]
impl SelectionStore for SqliteSelectionStore {
    async fn read(&self, key: &str) -> Result<Option<Environment>, RepositoryError> {
        let row = sqlx::query("SELECT value FROM selection_kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        match row {
            Some(r) => {
                let json: String = r.get("value");
                serde_json::from_str(&json)
                    .map_err(|e| RepositoryError::Serialization(format!("{key}: {e}")))
            }
            None => Ok(None),
        }
    }

    async fn write(&self, key: &str, value: Option<&Environment>) -> Result<(), RepositoryError> {
        let json = serde_json::to_string(&value)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let updated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        sqlx::query(
            "INSERT OR REPLACE INTO selection_kv (key, value, updated_at) VALUES (?, ?, ?)",
        )
        .bind(key)
        .bind(&json)
        .bind(&updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        trace!(key, "Selection slot written");
        Ok(())
    }
}
