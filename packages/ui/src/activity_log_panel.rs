use dioxus::prelude::*;

use crate::activity_log::use_activity_log;
use crate::icons::{FaClockRotateLeft, FaXmark};
use crate::Icon;

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log().visible {
        return rsx! {};
    }

    let entries = log().entries.clone();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        div {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Learning activity" }
                div {
                    class: "activity-log-header-actions",
                    button {
                        onclick: move |_| log.write().entries.clear(),
                        "Clear"
                    }
                    button {
                        title: "Close",
                        onclick: move |_| log.write().visible = false,
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
            div {
                class: "activity-log-entries",
                if entries.is_empty() {
                    p { class: "activity-log-empty", "Nothing yet. Save a word to get started." }
                }
                for entry in entries.iter().rev() {
                    div {
                        class: entry.level.css_class(),
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let count = log().entries.len();
    let has_errors = log().has_errors();

    rsx! {
        button {
            class: if has_errors { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            title: "Learning activity",
            Icon { icon: FaClockRotateLeft, width: 14, height: 14 }
            if count > 0 {
                span { class: "activity-log-count", "{count}" }
            }
        }
    }
}
