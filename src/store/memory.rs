//! In-memory storage backend (for tests and ephemeral runs).

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;

use super::Storage;

/// HashMap-backed storage. Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.items.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("isLoggedIn").await.unwrap(), None);

        storage.set_item("isLoggedIn", "true").await.unwrap();
        assert_eq!(
            storage.get_item("isLoggedIn").await.unwrap(),
            Some("true".to_string())
        );

        storage.remove_item("isLoggedIn").await.unwrap();
        assert_eq!(storage.get_item("isLoggedIn").await.unwrap(), None);
    }

    #[tokio::test]
    async fn overwrite_replaces() {
        let storage = MemoryStorage::new();
        storage.set_item("userEmail", "a@example.com").await.unwrap();
        storage.set_item("userEmail", "b@example.com").await.unwrap();
        assert_eq!(
            storage.get_item("userEmail").await.unwrap(),
            Some("b@example.com".to_string())
        );
    }

    #[tokio::test]
    async fn remove_absent_is_noop() {
        let storage = MemoryStorage::new();
        storage.remove_item("missing").await.unwrap();
    }
}
