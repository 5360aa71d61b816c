mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod app_layout;
pub use app_layout::AppLayoutView;

mod explore;
pub use explore::ExploreView;

mod translate;
pub use translate::TranslateView;

mod play;
pub use play::PlayView;

mod review;
pub use review::ReviewView;

mod quiz;
pub use quiz::QuizView;

mod vocabulary;
pub use vocabulary::VocabularyView;

mod settings;
pub use settings::SettingsView;

mod not_found;
pub use not_found::NotFoundView;
