use dioxus::prelude::*;

#[component]
pub fn Spinner(#[props(default)] small: bool) -> Element {
    rsx! {
        div { class: if small { "spinner spinner-small" } else { "spinner" } }
    }
}
