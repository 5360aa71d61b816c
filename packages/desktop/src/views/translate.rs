use dioxus::prelude::*;

#[component]
pub fn Translate() -> Element {
    rsx! { ui::views::TranslateView {} }
}
