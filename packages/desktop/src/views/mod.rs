mod app_layout;
pub use app_layout::AppLayout;

mod explore;
pub use explore::{Explore, Home};

mod translate;
pub use translate::Translate;

mod play;
pub use play::Play;

mod vocabulary;
pub use vocabulary::Vocabulary;

mod settings;
pub use settings::Settings;

mod not_found;
pub use not_found::NotFound;
