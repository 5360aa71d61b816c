use dioxus::prelude::*;

use crate::{ActivityLogPanel, ActivityLogToggle, NavTab, Navbar};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared page frame: title bar, routed content and the bottom navigation.
///
/// Platform packages pass the active tab (derived from their route), a
/// navigation callback and an `Outlet` as children.
#[component]
pub fn AppLayoutView(
    /// Tab to highlight, if the current page is one of them.
    active: Option<NavTab>,
    /// Called when the user picks a tab.
    on_navigate: EventHandler<NavTab>,
    /// The router outlet for child routes.
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "app-shell",
            header {
                class: "app-header",
                span { class: "app-title", "Svenska" span { class: "app-title-accent", "Lek" } }
                ActivityLogToggle {}
            }
            main {
                class: "app-content",
                {children}
            }
            ActivityLogPanel {}
            Navbar { active, on_navigate }
        }
    }
}
