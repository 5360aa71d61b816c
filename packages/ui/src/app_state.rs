//! Application-wide learner state and its mutators.

use dioxus::prelude::*;
use svenska::random::thread_random;
use svenska::{Preferences, SavedVocabulary, SvenskaConfig, VocabularyWord};

use crate::activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};
use crate::make_profile;
use crate::theme::apply_dark_mode;

/// Everything the views share: the saved set, preferences and config.
///
/// Provided as `Signal<AppState>` via context in [`AppStateProvider`]. Views
/// read it with [`use_app_state`] and change it only through [`AppActions`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub saved: SavedVocabulary,
    pub preferences: Preferences,
    pub config: SvenskaConfig,
    /// False until the profile has been read at startup.
    pub loaded: bool,
}

impl AppState {
    /// Read the whole profile from durable storage.
    pub async fn load() -> Self {
        let profile = make_profile();
        let mut rng = thread_random();
        let preferences = profile.load_preferences(&mut rng).await;
        let saved = profile.load_vocabulary().await;
        let config = profile.get_config().await;
        tracing::info!("loaded {} saved words for {}", saved.len(), preferences.username);
        AppState {
            saved,
            preferences,
            config,
            loaded: true,
        }
    }
}

pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Provider component that loads the learner's profile once on mount.
#[component]
pub fn AppStateProvider(children: Element) -> Element {
    let mut state = use_context_provider(|| Signal::new(AppState::default()));

    let _ = use_resource(move || async move {
        let loaded = AppState::load().await;
        apply_dark_mode(loaded.preferences.dark_mode);
        state.set(loaded);
    });

    rsx! { {children} }
}

/// Handle for changing [`AppState`]. Every mutator updates memory first, then
/// persists, and records user-visible events in the activity log.
#[derive(Clone, Copy, PartialEq)]
pub struct AppActions {
    pub state: Signal<AppState>,
    log: Signal<ActivityLog>,
}

pub fn use_app_actions() -> AppActions {
    AppActions {
        state: use_app_state(),
        log: use_activity_log(),
    }
}

impl AppActions {
    async fn persist_vocabulary(mut self) {
        let saved = self.state.read().saved.clone();
        if let Err(e) = make_profile().save_vocabulary(&saved).await {
            tracing::error!("failed to save vocabulary: {e}");
            log_activity(&mut self.log, LogLevel::Error, &format!("Could not save vocabulary: {e}"));
        }
    }

    /// Add `word` to the saved set. Returns false if it was already there.
    pub async fn save_word(mut self, word: VocabularyWord) -> bool {
        let label = word.word.clone();
        let added = self.state.write().saved.add(word);
        if !added {
            return false;
        }
        self.persist_vocabulary().await;
        log_activity(&mut self.log, LogLevel::Success, &format!("Saved \"{label}\""));
        true
    }

    /// Remove the word with `id`. Returns false if it was not saved.
    pub async fn remove_word(mut self, id: u64) -> bool {
        let label = self.state.read().saved.get(id).map(|w| w.word.clone());
        let removed = self.state.write().saved.remove(id);
        if !removed {
            return false;
        }
        self.persist_vocabulary().await;
        if let Some(label) = label {
            log_activity(&mut self.log, LogLevel::Info, &format!("Removed \"{label}\""));
        }
        true
    }

    /// Forget every saved word. Preferences are kept.
    pub async fn reset_progress(mut self) {
        self.state.write().saved.clear();
        match make_profile().reset_progress().await {
            Ok(()) => log_activity(&mut self.log, LogLevel::Warning, "Progress reset"),
            Err(e) => {
                tracing::error!("failed to reset progress: {e}");
                log_activity(&mut self.log, LogLevel::Error, &format!("Could not reset progress: {e}"));
            }
        }
    }

    pub async fn set_dark_mode(mut self, enabled: bool) {
        self.state.write().preferences.dark_mode = enabled;
        apply_dark_mode(enabled);
        if let Err(e) = make_profile().set_dark_mode(enabled).await {
            tracing::warn!("failed to persist dark mode: {e}");
        }
    }

    pub async fn set_sound_enabled(mut self, enabled: bool) {
        self.state.write().preferences.sound_enabled = enabled;
        if let Err(e) = make_profile().set_sound_enabled(enabled).await {
            tracing::warn!("failed to persist sound setting: {e}");
        }
    }

    pub async fn set_notifications_enabled(mut self, enabled: bool) {
        self.state.write().preferences.notifications_enabled = enabled;
        if let Err(e) = make_profile().set_notifications_enabled(enabled).await {
            tracing::warn!("failed to persist notification setting: {e}");
        }
    }

    /// Record an event in the activity log.
    pub fn log(mut self, level: LogLevel, message: &str) {
        log_activity(&mut self.log, level, message);
    }
}
