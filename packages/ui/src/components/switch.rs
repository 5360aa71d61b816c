use dioxus::prelude::*;

/// An on/off toggle rendered as a sliding switch.
#[component]
pub fn Switch(checked: bool, on_change: EventHandler<bool>, #[props(default)] label: String) -> Element {
    rsx! {
        button {
            class: if checked { "switch switch-on" } else { "switch" },
            role: "switch",
            aria_checked: "{checked}",
            aria_label: "{label}",
            onclick: move |_| on_change.call(!checked),
            span { class: "switch-thumb" }
        }
    }
}
