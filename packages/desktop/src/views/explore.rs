use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! { ui::views::ExploreView {} }
}

#[component]
pub fn Explore() -> Element {
    rsx! { ui::views::ExploreView {} }
}
