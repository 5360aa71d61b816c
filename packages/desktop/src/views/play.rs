use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn Play() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::PlayView {
            on_navigate_vocabulary: move |_| {
                nav.push(Route::Vocabulary {});
            },
            on_navigate_explore: move |_| {
                nav.push(Route::Explore {});
            },
        }
    }
}
