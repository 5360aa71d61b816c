use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn Vocabulary() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::VocabularyView {
            on_back: move |_| {
                nav.push(Route::Play {});
            },
            on_navigate_explore: move |_| {
                nav.push(Route::Explore {});
            },
        }
    }
}
