//! Typed preference store over the raw key-value surface.

use std::sync::Arc;

use tracing::warn;

use crate::error::StoreError;
use crate::store::Storage;

use super::model::PreferenceRecord;

/// Storage keys for the persisted state.
pub mod storage_keys {
    /// Literal string `"true"` when the user is logged in; absent otherwise.
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    /// Literal string `"true"` once onboarding has completed.
    pub const HAS_COMPLETED_ONBOARDING: &str = "hasCompletedOnboarding";
    /// Serialized [`PreferenceRecord`] JSON blob.
    pub const USER_PREFERENCES: &str = "userPreferences";
    /// Plain email string, set at signup.
    pub const USER_EMAIL: &str = "userEmail";
}

/// The two persisted booleans gating navigation.
///
/// Any of the four combinations can occur; the route guard handles all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthFlags {
    pub is_logged_in: bool,
    pub has_completed_onboarding: bool,
}

/// Typed wrapper over [`Storage`] for the preference record, auth flags, and
/// signup email. Reads go to the backend every call; nothing is cached.
#[derive(Clone)]
pub struct PreferenceStore {
    storage: Arc<dyn Storage>,
}

impl PreferenceStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Read the stored preference record.
    ///
    /// A missing key yields `None`. A malformed blob is treated the same way,
    /// so dependent reads fall back to defaults instead of failing.
    pub async fn preferences(&self) -> Result<Option<PreferenceRecord>, StoreError> {
        let Some(raw) = self.storage.get_item(storage_keys::USER_PREFERENCES).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!(error = %e, "Malformed stored preferences, treating as absent");
                Ok(None)
            }
        }
    }

    /// Merge a partial record into the stored one (patch semantics: fields set
    /// in `patch` win, everything else is preserved).
    pub async fn patch(&self, patch: PreferenceRecord) -> Result<(), StoreError> {
        let mut record = self.preferences().await?.unwrap_or_default();
        record.merge(patch);
        let raw = serde_json::to_string(&record)?;
        self.storage
            .set_item(storage_keys::USER_PREFERENCES, &raw)
            .await
    }

    /// Read both auth flags in one call. Flags are read fresh; the guard
    /// re-evaluates them on every navigation.
    pub async fn auth_flags(&self) -> Result<AuthFlags, StoreError> {
        Ok(AuthFlags {
            is_logged_in: self.get_flag(storage_keys::IS_LOGGED_IN).await?,
            has_completed_onboarding: self
                .get_flag(storage_keys::HAS_COMPLETED_ONBOARDING)
                .await?,
        })
    }

    /// A flag is set only when the stored value is exactly `"true"`; absent or
    /// any other value reads as false.
    pub async fn get_flag(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.storage.get_item(key).await?.as_deref() == Some("true"))
    }

    /// Set or clear a flag. Clearing removes the key entirely.
    pub async fn set_flag(&self, key: &str, value: bool) -> Result<(), StoreError> {
        if value {
            self.storage.set_item(key, "true").await
        } else {
            self.storage.remove_item(key).await
        }
    }

    /// The email captured at signup, if any.
    pub async fn user_email(&self) -> Result<Option<String>, StoreError> {
        self.storage.get_item(storage_keys::USER_EMAIL).await
    }

    /// Store the signup email.
    pub async fn set_user_email(&self, email: &str) -> Result<(), StoreError> {
        self.storage.set_item(storage_keys::USER_EMAIL, email).await
    }

    /// Display name derived from the stored record ("User" when absent).
    pub async fn full_name(&self) -> Result<String, StoreError> {
        Ok(self
            .preferences()
            .await?
            .map(|record| record.full_name())
            .unwrap_or_else(|| "User".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::model::HomeType;
    use crate::store::MemoryStorage;

    fn store() -> PreferenceStore {
        PreferenceStore::new(Arc::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn flags_default_false() {
        let store = store();
        let flags = store.auth_flags().await.unwrap();
        assert!(!flags.is_logged_in);
        assert!(!flags.has_completed_onboarding);
    }

    #[tokio::test]
    async fn flag_requires_exact_true_string() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set_item(storage_keys::IS_LOGGED_IN, "yes")
            .await
            .unwrap();
        let store = PreferenceStore::new(storage);
        assert!(!store.get_flag(storage_keys::IS_LOGGED_IN).await.unwrap());

        store
            .set_flag(storage_keys::IS_LOGGED_IN, true)
            .await
            .unwrap();
        assert!(store.get_flag(storage_keys::IS_LOGGED_IN).await.unwrap());
    }

    #[tokio::test]
    async fn clearing_flag_removes_key() {
        let storage = Arc::new(MemoryStorage::new());
        let store = PreferenceStore::new(Arc::clone(&storage) as Arc<dyn Storage>);

        store
            .set_flag(storage_keys::IS_LOGGED_IN, true)
            .await
            .unwrap();
        store
            .set_flag(storage_keys::IS_LOGGED_IN, false)
            .await
            .unwrap();

        assert_eq!(
            storage.get_item(storage_keys::IS_LOGGED_IN).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn patch_merges_into_existing() {
        let store = store();
        store
            .patch(PreferenceRecord {
                first_name: Some("Ana".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        store
            .patch(PreferenceRecord {
                home_type: Some(HomeType::Condo),
                ..Default::default()
            })
            .await
            .unwrap();

        let record = store.preferences().await.unwrap().unwrap();
        assert_eq!(record.first_name.as_deref(), Some("Ana"));
        assert_eq!(record.home_type, Some(HomeType::Condo));
    }

    #[tokio::test]
    async fn malformed_blob_reads_as_absent() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set_item(storage_keys::USER_PREFERENCES, "{not json")
            .await
            .unwrap();
        let store = PreferenceStore::new(storage);

        assert!(store.preferences().await.unwrap().is_none());
        assert_eq!(store.full_name().await.unwrap(), "User");
    }

    #[tokio::test]
    async fn full_name_defaults_to_generic_label() {
        let store = store();
        assert_eq!(store.full_name().await.unwrap(), "User");

        store
            .patch(PreferenceRecord {
                first_name: Some("Ana".to_string()),
                last_name: Some("Lee".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(store.full_name().await.unwrap(), "Ana Lee");
    }
}
