//! # App configuration, stored as TOML under the `config` key
//!
//! Tunables for the simulated latencies, the review threshold and the quiz
//! size. The document lives in the same key/value store as the rest of the
//! learner's data (see [`crate::Profile::get_config`]).
//!
//! ## Structure
//!
//! ```toml
//! [simulation]
//! recognition_delay_ms = 2000
//! translation_delay_ms = 500
//! save_delay_ms = 500
//!
//! [review]
//! mastery_percent = 80
//! celebration_secs = 4
//!
//! [quiz]
//! rounds = 5
//! options = 4
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`SvenskaConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`SimulationConfig`] | Artificial delays standing in for network calls. |
//! | [`ReviewConfig`] | Flashcard threshold (percent of words known) and celebration length. |
//! | [`QuizConfig`] | Questions per quiz and choices per question. |
//!
//! Every section is `#[serde(default)]`, so a missing or partial document is
//! equivalent to the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SvenskaConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub review: ReviewConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub recognition_delay_ms: u64,
    pub translation_delay_ms: u64,
    pub save_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            recognition_delay_ms: 2000,
            translation_delay_ms: 500,
            save_delay_ms: 500,
        }
    }
}

impl SimulationConfig {
    pub fn recognition_delay(&self) -> Duration {
        Duration::from_millis(self.recognition_delay_ms)
    }

    pub fn translation_delay(&self) -> Duration {
        Duration::from_millis(self.translation_delay_ms)
    }

    pub fn save_delay(&self) -> Duration {
        Duration::from_millis(self.save_delay_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Share of known words, in percent, that counts as a good review.
    pub mastery_percent: u32,
    pub celebration_secs: u32,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            mastery_percent: 80,
            celebration_secs: 4,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub rounds: usize,
    pub options: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            rounds: 5,
            options: 4,
        }
    }
}

impl SvenskaConfig {
    pub fn with_recognition_delay(mut self, ms: u64) -> Self {
        self.simulation.recognition_delay_ms = ms;
        self
    }

    pub fn with_translation_delay(mut self, ms: u64) -> Self {
        self.simulation.translation_delay_ms = ms;
        self
    }

    /// Builder method to set the review threshold. Clamped to 0..=100.
    pub fn with_mastery_percent(mut self, percent: u32) -> Self {
        self.review.mastery_percent = percent.min(100);
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(SvenskaConfig::from_toml("").unwrap(), SvenskaConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = SvenskaConfig::from_toml("[simulation]\ntranslation_delay_ms = 10\n").unwrap();
        assert_eq!(config.simulation.translation_delay_ms, 10);
        assert_eq!(config.simulation.recognition_delay_ms, 2000);
        assert_eq!(config.review.mastery_percent, 80);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SvenskaConfig::default()
            .with_recognition_delay(0)
            .with_mastery_percent(250);
        assert_eq!(config.review.mastery_percent, 100);

        let text = config.to_toml().unwrap();
        assert!(text.contains("[simulation]"));
        assert_eq!(SvenskaConfig::from_toml(&text).unwrap(), config);
    }
}
