//! # Browser localStorage store for web persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] implementation used on the
//! **web platform**. It writes straight into `window.localStorage`, so values
//! survive reloads but stay private to this browser profile.
//!
//! Keys can be namespaced with a prefix (`"<prefix>:<key>"`), which keeps two
//! builds served from the same origin apart. The default store uses the bare
//! keys.
//!
//! ## Error handling
//!
//! Reads swallow errors (storage disabled, private mode quirks) and report the
//! key as absent. Writes surface them as [`SvenskaError::Storage`], typically a
//! quota error.

use web_sys::Storage;

use crate::error::{Result, SvenskaError};
use crate::profile::KeyValueStore;

#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore {
    prefix: Option<String>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: Some(prefix.to_string()),
        }
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn full_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}:{key}"),
            None => key.to_string(),
        }
    }
}

impl KeyValueStore for LocalStorageStore {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(&self.full_key(key)).ok()?
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage = Self::storage()
            .ok_or_else(|| SvenskaError::Storage("localStorage is not available".into()))?;
        storage
            .set_item(&self.full_key(key), value)
            .map_err(|e| SvenskaError::Storage(format!("{e:?}")))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let storage = Self::storage()
            .ok_or_else(|| SvenskaError::Storage("localStorage is not available".into()))?;
        storage
            .remove_item(&self.full_key(key))
            .map_err(|e| SvenskaError::Storage(format!("{e:?}")))
    }
}
