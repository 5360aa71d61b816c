use dioxus::prelude::*;

use crate::icons::{FaCompass, FaGamepad, FaGear, FaLanguage};
use crate::Icon;

/// Top-level destinations in the bottom navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTab {
    Explore,
    Translate,
    Play,
    Settings,
}

impl NavTab {
    pub const ALL: [NavTab; 4] = [NavTab::Explore, NavTab::Translate, NavTab::Play, NavTab::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            NavTab::Explore => "Explore",
            NavTab::Translate => "Translate",
            NavTab::Play => "Play",
            NavTab::Settings => "Settings",
        }
    }
}

#[component]
fn NavIcon(tab: NavTab) -> Element {
    match tab {
        NavTab::Explore => rsx! { Icon { icon: FaCompass, width: 20, height: 20 } },
        NavTab::Translate => rsx! { Icon { icon: FaLanguage, width: 20, height: 20 } },
        NavTab::Play => rsx! { Icon { icon: FaGamepad, width: 20, height: 20 } },
        NavTab::Settings => rsx! { Icon { icon: FaGear, width: 20, height: 20 } },
    }
}

#[component]
pub fn Navbar(active: Option<NavTab>, on_navigate: EventHandler<NavTab>) -> Element {
    rsx! {
        nav {
            class: "navbar",
            for tab in NavTab::ALL {
                button {
                    key: "{tab.label()}",
                    class: if active == Some(tab) { "navbar-item active" } else { "navbar-item" },
                    onclick: move |_| on_navigate.call(tab),
                    NavIcon { tab }
                    span { "{tab.label()}" }
                }
            }
        }
    }
}
