//! Pronunciation through the platform's speech synthesis.

use dioxus::prelude::*;

const SWEDISH_LOCALE: &str = "sv-SE";

/// Speak `text` with a Swedish voice. Best effort: nothing happens where
/// speech synthesis is unavailable.
pub fn speak_swedish(text: &str) {
    let Ok(quoted) = serde_json::to_string(text) else {
        return;
    };
    tracing::debug!("pronouncing {text}");
    let js = format!(
        r#"if (window.speechSynthesis) {{
            const u = new SpeechSynthesisUtterance({quoted});
            u.lang = "{SWEDISH_LOCALE}";
            window.speechSynthesis.cancel();
            window.speechSynthesis.speak(u);
        }}"#
    );
    let _ = document::eval(&js);
}
