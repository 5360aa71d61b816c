//! Phrase translation backed by a fixed English/Swedish table.

use std::time::Duration;

use crate::timer::Timer;

pub const NOT_AVAILABLE: &str = "Translation not available";

#[rustfmt::skip]
const TRANSLATIONS: &[(&str, &str)] = &[
    ("hello", "hej"),
    ("good morning", "god morgon"),
    ("how are you", "hur mår du"),
    ("thank you", "tack"),
    ("goodbye", "hej då"),
    ("yes", "ja"),
    ("no", "nej"),
    ("please", "tack"),
    ("excuse me", "ursäkta mig"),
    ("i don't understand", "jag förstår inte"),
    ("help", "hjälp"),
    ("water", "vatten"),
    ("coffee", "kaffe"),
    ("food", "mat"),
    ("restaurant", "restaurang"),
    ("bathroom", "toalett"),
    ("train", "tåg"),
    ("bus", "buss"),
    ("airport", "flygplats"),
    ("hotel", "hotell"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Swedish,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Swedish => "Swedish",
        }
    }

    pub fn other(&self) -> Language {
        match self {
            Language::English => Language::Swedish,
            Language::Swedish => Language::English,
        }
    }
}

/// Look `text` up in the table, case-insensitively and ignoring surrounding
/// whitespace.
///
/// Swedish to English is a reverse lookup; where two English phrases share a
/// Swedish one ("tack") the first in table order wins.
pub fn translate(text: &str, from: Language) -> Option<&'static str> {
    let needle = text.trim().to_lowercase();
    match from {
        Language::English => TRANSLATIONS
            .iter()
            .find(|(en, _)| *en == needle)
            .map(|(_, sv)| *sv),
        Language::Swedish => TRANSLATIONS
            .iter()
            .find(|(_, sv)| sv.to_lowercase() == needle)
            .map(|(en, _)| *en),
    }
}

/// State behind the translate screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslatorState {
    pub from: Language,
    pub input: String,
    pub output: String,
}

impl TranslatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank input cannot be translated.
    pub fn can_translate(&self) -> bool {
        !self.input.trim().is_empty()
    }

    pub fn to(&self) -> Language {
        self.from.other()
    }

    /// Translate the current input into `output`. No-op on blank input.
    pub fn translate(&mut self) {
        if !self.can_translate() {
            return;
        }
        self.output = translate(&self.input, self.from)
            .unwrap_or(NOT_AVAILABLE)
            .to_string();
    }

    /// Same as [`translate`](Self::translate) after a simulated network delay.
    pub async fn translate_delayed(&mut self, timer: &impl Timer, delay: Duration) {
        if !self.can_translate() {
            return;
        }
        timer.sleep(delay).await;
        self.translate();
    }

    /// Flip the direction and exchange input and output.
    pub fn swap(&mut self) {
        self.from = self.from.other();
        std::mem::swap(&mut self.input, &mut self.output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::NoDelay;

    #[test]
    fn test_lookup_both_directions() {
        assert_eq!(translate("hello", Language::English), Some("hej"));
        assert_eq!(translate("  Good Morning ", Language::English), Some("god morgon"));
        assert_eq!(translate("HEJ DÅ", Language::Swedish), Some("goodbye"));
        assert_eq!(translate("banana", Language::English), None);
    }

    #[test]
    fn test_shared_swedish_phrase_maps_to_first_english() {
        assert_eq!(translate("tack", Language::Swedish), Some("thank you"));
        assert_eq!(translate("please", Language::English), Some("tack"));
    }

    #[test]
    fn test_swap_round_trip() {
        let mut state = TranslatorState::new();
        state.input = "hello".into();
        state.translate();
        assert_eq!(state.output, "hej");

        state.swap();
        assert_eq!(state.from, Language::Swedish);
        assert_eq!(state.input, "hej");
        assert_eq!(state.output, "hello");

        state.translate();
        assert_eq!(state.output, "hello");
    }

    #[test]
    fn test_blank_input_is_disallowed() {
        let mut state = TranslatorState::new();
        state.input = "   ".into();
        assert!(!state.can_translate());
        state.translate();
        assert!(state.output.is_empty());
    }

    #[test]
    fn test_unknown_phrase() {
        let mut state = TranslatorState::new();
        state.input = "where is the library".into();
        state.translate();
        assert_eq!(state.output, NOT_AVAILABLE);
    }

    #[tokio::test]
    async fn test_translate_delayed() {
        let mut state = TranslatorState::new();
        state.input = "train".into();
        state.translate_delayed(&NoDelay, Duration::from_millis(500)).await;
        assert_eq!(state.output, "tåg");
    }
}
