use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::profile::KeyValueStore;

/// In-memory KeyValueStore for testing and as a last-resort fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::config::SvenskaConfig;
    use crate::profile::{keys, Profile};
    use crate::random::ScriptedRandom;
    use crate::vocabulary::SavedVocabulary;

    #[tokio::test]
    async fn test_vocabulary_round_trip() {
        let store = MemoryStore::new();
        let profile = Profile::new(store.clone());

        // Initially empty
        assert!(profile.load_vocabulary().await.is_empty());

        let saved: SavedVocabulary = catalog::all_words().into_iter().skip(3).take(4).collect();
        profile.save_vocabulary(&saved).await.unwrap();

        // Simulate a restart: a fresh profile over the same backend
        let reloaded = Profile::new(store).load_vocabulary().await;
        assert_eq!(reloaded, saved);
        let ids: Vec<u64> = reloaded.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![4, 5, 6, 7]);
    }

    #[tokio::test]
    async fn test_malformed_vocabulary_is_treated_as_absent() {
        let store = MemoryStore::new();
        store.set(keys::SAVED_VOCABULARY, "{broken").await.unwrap();

        let profile = Profile::new(store);
        assert!(profile.load_vocabulary().await.is_empty());
    }

    #[tokio::test]
    async fn test_dark_mode_defaults_to_light() {
        let store = MemoryStore::new();
        let profile = Profile::new(store.clone());
        assert!(!profile.dark_mode().await);

        profile.set_dark_mode(true).await.unwrap();
        assert!(profile.dark_mode().await);

        // Anything but a JSON bool reads as absent
        store.set(keys::DARK_MODE, "\"yes\"").await.unwrap();
        assert!(!profile.dark_mode().await);
    }

    #[tokio::test]
    async fn test_username_is_generated_once() {
        let store = MemoryStore::new();
        let profile = Profile::new(store.clone());
        let mut rng = ScriptedRandom::new(vec![0, 0, 41]);

        let first = profile.username_or_generate(&mut rng).await;
        assert_eq!(first, "HappyLearner42");
        assert_eq!(store.get(keys::USERNAME).await.as_deref(), Some("HappyLearner42"));

        // A second call reads the stored name instead of generating
        let mut other = ScriptedRandom::new(vec![5, 5, 5]);
        assert_eq!(profile.username_or_generate(&mut other).await, first);
    }

    #[tokio::test]
    async fn test_blank_username_is_regenerated() {
        let store = MemoryStore::new();
        store.set(keys::USERNAME, "   ").await.unwrap();
        let profile = Profile::new(store);

        let mut rng = ScriptedRandom::new(vec![1, 1, 0]);
        assert_eq!(profile.username_or_generate(&mut rng).await, "CleverExplorer1");
    }

    #[tokio::test]
    async fn test_toggles_default_on() {
        let profile = Profile::new(MemoryStore::new());
        assert!(profile.sound_enabled().await);
        assert!(profile.notifications_enabled().await);

        profile.set_sound_enabled(false).await.unwrap();
        profile.set_notifications_enabled(false).await.unwrap();
        assert!(!profile.sound_enabled().await);
        assert!(!profile.notifications_enabled().await);
    }

    #[tokio::test]
    async fn test_load_preferences() {
        let profile = Profile::new(MemoryStore::new());
        profile.set_dark_mode(true).await.unwrap();

        let mut rng = ScriptedRandom::new(vec![2, 3, 99]);
        let prefs = profile.load_preferences(&mut rng).await;
        assert!(prefs.dark_mode);
        assert_eq!(prefs.username, "BrightScholar100");
        assert!(prefs.sound_enabled);
    }

    #[tokio::test]
    async fn test_reset_progress_clears_vocabulary_only() {
        let profile = Profile::new(MemoryStore::new());
        let saved: SavedVocabulary = catalog::all_words().into_iter().take(2).collect();
        profile.save_vocabulary(&saved).await.unwrap();
        profile.set_dark_mode(true).await.unwrap();

        profile.reset_progress().await.unwrap();

        assert!(profile.load_vocabulary().await.is_empty());
        assert!(profile.dark_mode().await);
    }

    #[tokio::test]
    async fn test_config_roundtrip() {
        let profile = Profile::new(MemoryStore::new());

        // Default config when nothing is stored
        assert_eq!(profile.get_config().await, SvenskaConfig::default());

        let config = SvenskaConfig::default().with_recognition_delay(50);
        profile.set_config(&config).await.unwrap();
        assert_eq!(profile.get_config().await.simulation.recognition_delay_ms, 50);
    }

    #[tokio::test]
    async fn test_malformed_config_falls_back_to_default() {
        let store = MemoryStore::new();
        store.set(keys::CONFIG, "[review\nmastery_percent = ").await.unwrap();
        let profile = Profile::new(store);
        assert_eq!(profile.get_config().await, SvenskaConfig::default());
    }
}
