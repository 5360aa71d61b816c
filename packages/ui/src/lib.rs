//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod profile;
pub use profile::make_profile;

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod navbar;
pub use navbar::{NavTab, Navbar};

mod app_state;
pub use app_state::{use_app_actions, use_app_state, AppActions, AppState, AppStateProvider};

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod theme;
pub use theme::apply_dark_mode;

mod speech;
pub use speech::speak_swedish;

mod upload;

mod celebration;
pub use celebration::Celebration;

mod word_picture;
pub use word_picture::{CategoryIcon, WordPicture};
