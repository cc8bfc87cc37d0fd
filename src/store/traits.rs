//! Backend-agnostic `Storage` trait — a flat string key-value surface.

use async_trait::async_trait;

use crate::error::StoreError;

/// Flat key-value storage with string values, matching the persisted layout:
/// flag keys hold the literal string `"true"`, `userPreferences` holds a JSON
/// blob, `userEmail` a plain string. Absent keys are `None`, never an error.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read the value for `key`, or `None` if the key is absent.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any existing value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is a no-op.
    async fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}
