use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Switch};
use crate::icons::{
    FaBell, FaCircleInfo, FaClockRotateLeft, FaMoon, FaRotateLeft, FaUser, FaVolumeHigh,
};
use crate::{use_activity_log, use_app_actions, use_app_state, Icon};

use super::ModalOverlay;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Learner profile, preference toggles and progress reset.
#[component]
pub fn SettingsView() -> Element {
    let state = use_app_state();
    let actions = use_app_actions();
    let mut log = use_activity_log();
    let mut confirm_reset = use_signal(|| false);

    let preferences = state.read().preferences.clone();
    let saved_count = state.read().saved.len();
    let activity_count = log().entries.len();

    let handle_reset = move |_| {
        confirm_reset.set(false);
        spawn(async move {
            actions.reset_progress().await;
        });
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Settings" }

            div {
                class: "card settings-profile",
                div { class: "game-icon", Icon { icon: FaUser, width: 22, height: 22 } }
                div {
                    h3 {
                        if preferences.username.is_empty() { "..." } else { "{preferences.username}" }
                    }
                    p { class: "view-muted", "Swedish Learner" }
                }
            }

            section {
                class: "view-section",
                h2 { class: "view-section-title", "Preferences" }
                div {
                    class: "card settings-list",
                    SettingRow {
                        title: "Sound",
                        description: "Play pronunciation of Swedish words",
                        icon: rsx! { Icon { icon: FaVolumeHigh, width: 16, height: 16 } },
                        Switch {
                            checked: preferences.sound_enabled,
                            label: "Sound",
                            on_change: move |enabled| {
                                spawn(async move { actions.set_sound_enabled(enabled).await; });
                            },
                        }
                    }
                    SettingRow {
                        title: "Dark Mode",
                        description: "Easier on the eyes at night",
                        icon: rsx! { Icon { icon: FaMoon, width: 16, height: 16 } },
                        Switch {
                            checked: preferences.dark_mode,
                            label: "Dark Mode",
                            on_change: move |enabled| {
                                spawn(async move { actions.set_dark_mode(enabled).await; });
                            },
                        }
                    }
                    SettingRow {
                        title: "Notifications",
                        description: "Daily reminders to practice",
                        icon: rsx! { Icon { icon: FaBell, width: 16, height: 16 } },
                        Switch {
                            checked: preferences.notifications_enabled,
                            label: "Notifications",
                            on_change: move |enabled| {
                                spawn(async move { actions.set_notifications_enabled(enabled).await; });
                            },
                        }
                    }
                }
            }

            section {
                class: "view-section",
                h2 { class: "view-section-title", "Progress" }
                div {
                    class: "card settings-list",
                    SettingRow {
                        title: "Reset Progress",
                        description: "Clear all {saved_count} saved words",
                        icon: rsx! { Icon { icon: FaRotateLeft, width: 16, height: 16 } },
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: move |_| confirm_reset.set(true),
                            "Reset"
                        }
                    }
                }
            }

            section {
                class: "view-section",
                h2 { class: "view-section-title", "About" }
                div {
                    class: "card settings-list",
                    SettingRow {
                        title: "SvenskaLek",
                        description: "Version {APP_VERSION}",
                        icon: rsx! { Icon { icon: FaCircleInfo, width: 16, height: 16 } },
                    }
                }
            }

            section {
                class: "view-section",
                h2 { class: "view-section-title", "Activity" }
                div {
                    class: "card settings-list",
                    SettingRow {
                        title: "Learning activity",
                        description: "{activity_count} events this session",
                        icon: rsx! { Icon { icon: FaClockRotateLeft, width: 16, height: 16 } },
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                let visible = log().visible;
                                log.write().visible = !visible;
                            },
                            if log().visible { "Hide" } else { "Show" }
                        }
                    }
                }
            }
        }

        if confirm_reset() {
            ModalOverlay {
                on_close: move |_| confirm_reset.set(false),
                div {
                    class: "dialog",
                    h2 { class: "dialog-title", "Reset progress?" }
                    p {
                        class: "view-muted",
                        "This removes every saved word. Your preferences are kept."
                    }
                    div {
                        class: "button-row",
                        Button {
                            class: "flex-1",
                            variant: ButtonVariant::Outline,
                            onclick: move |_| confirm_reset.set(false),
                            "Cancel"
                        }
                        Button {
                            class: "flex-1",
                            variant: ButtonVariant::Destructive,
                            onclick: handle_reset,
                            "Reset"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SettingRow(title: String, description: String, icon: Element, #[props(default)] children: Element) -> Element {
    rsx! {
        div {
            class: "setting-row",
            div { class: "setting-icon", {icon} }
            div {
                class: "setting-text",
                p { class: "setting-title", "{title}" }
                p { class: "view-muted", "{description}" }
            }
            div { class: "setting-control", {children} }
        }
    }
}
