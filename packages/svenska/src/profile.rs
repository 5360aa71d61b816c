//! # Profile: the learner's durable state on an abstract key/value store
//!
//! [`Profile`] owns every read and write of persisted state: the saved
//! vocabulary set, the preference flags, the generated username and the app
//! config. All access goes through the [`KeyValueStore`] trait, so the same
//! logic runs against browser `localStorage` ([`crate::LocalStorageStore`]),
//! files under the platform data directory ([`crate::FileStore`]) or an
//! in-memory map ([`crate::MemoryStore`]).
//!
//! ## Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `savedVocabulary` | JSON array of [`VocabularyWord`](crate::VocabularyWord) |
//! | `darkMode` | JSON bool |
//! | `username` | plain string |
//! | `soundEnabled` | JSON bool |
//! | `notificationsEnabled` | JSON bool |
//! | `config` | TOML, see [`SvenskaConfig`] |
//!
//! ## Absent and malformed entries
//!
//! There is no schema version. Reads never fail: an entry that is missing or
//! does not parse is treated as absent and the caller gets the default (an
//! empty set, `false`, a freshly generated username...). Writes return
//! [`Result`] so the UI can log a failed write.

use crate::config::SvenskaConfig;
use crate::error::Result;
use crate::preferences::{generate_username, Preferences};
use crate::random::RandomSource;
use crate::vocabulary::SavedVocabulary;

/// Storage keys, one per persisted value.
pub mod keys {
    pub const SAVED_VOCABULARY: &str = "savedVocabulary";
    pub const DARK_MODE: &str = "darkMode";
    pub const USERNAME: &str = "username";
    pub const SOUND_ENABLED: &str = "soundEnabled";
    pub const NOTIFICATIONS_ENABLED: &str = "notificationsEnabled";
    pub const CONFIG: &str = "config";
}

/// Async trait for string key/value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = Result<()>>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<()>>;
}

/// The learner's persisted state, backed by a KeyValueStore.
pub struct Profile<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Profile<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the saved vocabulary set. Absent or malformed = empty.
    pub async fn load_vocabulary(&self) -> SavedVocabulary {
        let Some(raw) = self.store.get(keys::SAVED_VOCABULARY).await else {
            return SavedVocabulary::new();
        };
        match SavedVocabulary::from_json(&raw) {
            Some(saved) => saved,
            None => {
                tracing::warn!("ignoring malformed {} entry", keys::SAVED_VOCABULARY);
                SavedVocabulary::new()
            }
        }
    }

    /// Mirror the whole set to storage.
    pub async fn save_vocabulary(&self, saved: &SavedVocabulary) -> Result<()> {
        let json = saved.to_json()?;
        self.store.set(keys::SAVED_VOCABULARY, &json).await?;
        tracing::debug!("saved {} words", saved.len());
        Ok(())
    }

    /// Forget every saved word. Preferences are kept.
    pub async fn reset_progress(&self) -> Result<()> {
        self.store.remove(keys::SAVED_VOCABULARY).await?;
        tracing::info!("progress reset");
        Ok(())
    }

    pub async fn dark_mode(&self) -> bool {
        self.get_flag(keys::DARK_MODE).await.unwrap_or(false)
    }

    pub async fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        self.set_flag(keys::DARK_MODE, enabled).await
    }

    pub async fn sound_enabled(&self) -> bool {
        self.get_flag(keys::SOUND_ENABLED).await.unwrap_or(true)
    }

    pub async fn set_sound_enabled(&self, enabled: bool) -> Result<()> {
        self.set_flag(keys::SOUND_ENABLED, enabled).await
    }

    pub async fn notifications_enabled(&self) -> bool {
        self.get_flag(keys::NOTIFICATIONS_ENABLED).await.unwrap_or(true)
    }

    pub async fn set_notifications_enabled(&self, enabled: bool) -> Result<()> {
        self.set_flag(keys::NOTIFICATIONS_ENABLED, enabled).await
    }

    /// The stored username, or a newly generated one which is persisted
    /// before returning.
    pub async fn username_or_generate<R: RandomSource>(&self, rng: &mut R) -> String {
        if let Some(name) = self.store.get(keys::USERNAME).await {
            let name = name.trim();
            if !name.is_empty() {
                return name.to_string();
            }
        }
        let name = generate_username(rng);
        if let Err(e) = self.store.set(keys::USERNAME, &name).await {
            tracing::warn!("failed to persist generated username: {e}");
        }
        tracing::info!("generated username {name}");
        name
    }

    /// Read every preference at once, generating the username if needed.
    pub async fn load_preferences<R: RandomSource>(&self, rng: &mut R) -> Preferences {
        Preferences {
            dark_mode: self.dark_mode().await,
            username: self.username_or_generate(rng).await,
            sound_enabled: self.sound_enabled().await,
            notifications_enabled: self.notifications_enabled().await,
        }
    }

    /// Read the config document, falling back to defaults.
    pub async fn get_config(&self) -> SvenskaConfig {
        let Some(raw) = self.store.get(keys::CONFIG).await else {
            return SvenskaConfig::default();
        };
        SvenskaConfig::from_toml(&raw).unwrap_or_else(|e| {
            tracing::warn!("ignoring malformed config: {e}");
            SvenskaConfig::default()
        })
    }

    pub async fn set_config(&self, config: &SvenskaConfig) -> Result<()> {
        let toml = config.to_toml()?;
        self.store.set(keys::CONFIG, &toml).await
    }

    async fn get_flag(&self, key: &str) -> Option<bool> {
        let raw = self.store.get(key).await?;
        let parsed = serde_json::from_str::<bool>(&raw).ok();
        if parsed.is_none() {
            tracing::warn!("ignoring malformed {key} entry");
        }
        parsed
    }

    async fn set_flag(&self, key: &str, value: bool) -> Result<()> {
        let json = serde_json::to_string(&value)?;
        self.store.set(key, &json).await
    }
}
