use dioxus::prelude::*;

/// Toggle the `dark` class on the document element.
pub fn apply_dark_mode(enabled: bool) {
    let js = if enabled {
        "document.documentElement.classList.add('dark');"
    } else {
        "document.documentElement.classList.remove('dark');"
    };
    let _ = document::eval(js);
}
