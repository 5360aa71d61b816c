use std::time::Duration;

use dioxus::prelude::*;
use svenska::{PlatformTimer, Timer};

const PIECES: usize = 60;
const COLORS: [&str; 5] = ["#006aa7", "#fecc02", "#22c55e", "#f97316", "#ec4899"];

/// Falling confetti that removes itself after `seconds`.
#[component]
pub fn Celebration(seconds: u32) -> Element {
    let mut visible = use_signal(|| true);

    use_future(move || async move {
        PlatformTimer.sleep(Duration::from_secs(seconds as u64)).await;
        visible.set(false);
    });

    if !visible() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "celebration",
            aria_hidden: "true",
            {(0..PIECES).map(|i| {
                let style = format!(
                    "left: {}%; background: {}; animation-delay: {}ms; animation-duration: {}ms;",
                    (i * 37) % 100,
                    COLORS[i % COLORS.len()],
                    (i % 10) * 120,
                    2000 + (i % 7) * 250,
                );
                rsx! { span { key: "{i}", class: "confetti", style } }
            })}
        }
    }
}
