use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

#[component]
pub fn NotFoundView(path: String, on_navigate_home: EventHandler<()>) -> Element {
    use_hook({
        let path = path.clone();
        move || tracing::warn!("no page at {path}")
    });

    rsx! {
        div {
            class: "view-page not-found",
            div { class: "not-found-code", "404" }
            h1 { class: "view-title", "Page not found" }
            p { class: "view-muted", "Oops! This page doesn't exist." }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| on_navigate_home.call(()),
                "Return to Home"
            }
        }
    }
}
