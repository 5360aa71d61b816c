use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::NotFoundView {
            path: format!("/{}", segments.join("/")),
            on_navigate_home: move |_| {
                nav.replace(Route::Home {});
            },
        }
    }
}
