//! libSQL storage backend — persists the key-value surface to a local file.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use libsql::{Connection, Database, params};
use tracing::info;

use crate::error::StoreError;

use super::Storage;

/// libSQL-backed storage.
///
/// A single `items` table holds every key. The connection is reused for all
/// operations; `libsql::Connection` is `Send + Sync` and safe for concurrent
/// async use.
pub struct LibSqlStorage {
    #[allow(dead_code)]
    db: Arc<Database>,
    conn: Connection,
}

impl LibSqlStorage {
    /// Open (or create) a local database file and initialize the schema.
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Open(format!("Failed to create data directory: {e}")))?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| StoreError::Open(format!("Failed to open database: {e}")))?;

        let conn = db
            .connect()
            .map_err(|e| StoreError::Open(format!("Failed to create connection: {e}")))?;

        let storage = Self {
            db: Arc::new(db),
            conn,
        };
        storage.init_schema().await?;
        info!(path = %path.display(), "Storage opened");
        Ok(storage)
    }

    /// Create an in-memory database (for tests).
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| StoreError::Open(format!("Failed to create in-memory database: {e}")))?;

        let conn = db
            .connect()
            .map_err(|e| StoreError::Open(format!("Failed to create connection: {e}")))?;

        let storage = Self {
            db: Arc::new(db),
            conn,
        };
        storage.init_schema().await?;
        Ok(storage)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS items (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                )",
                params![],
            )
            .await
            .map_err(|e| StoreError::Open(format!("Failed to initialize schema: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl Storage for LibSqlStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut rows = self
            .conn
            .query("SELECT value FROM items WHERE key = ?1", params![key])
            .await
            .map_err(|e| StoreError::Read {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        match rows.next().await {
            Ok(Some(row)) => Ok(row.get::<String>(0).ok()),
            Ok(None) => Ok(None),
            Err(e) => Err(StoreError::Read {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let now = Utc::now().to_rfc3339();
        self.conn
            .execute(
                "INSERT INTO items (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT (key) DO UPDATE SET value = ?2, updated_at = ?3",
                params![key, value, now],
            )
            .await
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM items WHERE key = ?1", params![key])
            .await
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }
}
