//! # Domain models for vocabulary
//!
//! Plain records shared by every view. They are `Serialize + Deserialize` so the
//! saved vocabulary set can be mirrored to durable storage as JSON.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`VocabularyWord`] | A single learnable word: client-generated numeric `id`, the Swedish `word`, its English `translation`, an optional [`ExampleSentence`], a `glyph` that always works as an image, an optional `image_url` (uploaded photo preview) and the catalog [`Category`] it came from, if any. |
//! | [`ExampleSentence`] | A Swedish sentence using the word together with its English translation. |
//! | [`Category`] | One of the fixed explore categories. `id()` is the stable string form, `label()` the display title. |
//!
//! ## Identifiers
//!
//! Catalog words use small fixed identifiers. Words produced by the mock
//! recognition pipeline use [`current_timestamp_millis`], so they never collide
//! with the catalog.

use serde::{Deserialize, Serialize};

/// Explore categories, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Food,
    Animals,
    Transport,
    Nature,
    Objects,
    Clothing,
    Places,
    Entertainment,
    People,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Animals,
        Category::Transport,
        Category::Nature,
        Category::Objects,
        Category::Clothing,
        Category::Places,
        Category::Entertainment,
        Category::People,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Animals => "animals",
            Category::Transport => "transport",
            Category::Nature => "nature",
            Category::Objects => "objects",
            Category::Clothing => "clothing",
            Category::Places => "places",
            Category::Entertainment => "entertainment",
            Category::People => "people",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food & Drinks",
            Category::Animals => "Animals",
            Category::Transport => "Transportation",
            Category::Nature => "Nature",
            Category::Objects => "Objects",
            Category::Clothing => "Clothing",
            Category::Places => "Places",
            Category::Entertainment => "Entertainment",
            Category::People => "People & Abstract",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

/// A Swedish example sentence and its English translation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSentence {
    pub swedish: String,
    pub english: String,
}

impl ExampleSentence {
    pub fn new(swedish: &str, english: &str) -> Self {
        Self {
            swedish: swedish.to_string(),
            english: english.to_string(),
        }
    }
}

/// A single vocabulary item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyWord {
    /// Unique within the saved set.
    pub id: u64,
    /// Swedish word: "hund"
    pub word: String,
    /// English translation: "dog"
    pub translation: String,
    #[serde(default)]
    pub example: Option<ExampleSentence>,
    /// Emoji shown when there is no picture.
    pub glyph: String,
    /// Picture of the word, e.g. the preview of an uploaded photo.
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
}

impl VocabularyWord {
    /// Copy suitable for durable storage.
    ///
    /// `blob:` URLs only live as long as the page that created them, so they are
    /// dropped and the reloaded word falls back to its glyph.
    pub fn for_storage(&self) -> Self {
        let image_url = self
            .image_url
            .as_ref()
            .filter(|url| !url.starts_with("blob:"))
            .cloned();
        Self {
            image_url,
            ..self.clone()
        }
    }
}

/// Milliseconds since the Unix epoch.
pub fn current_timestamp_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_with_url(url: &str) -> VocabularyWord {
        VocabularyWord {
            id: 7,
            word: "katt".into(),
            translation: "cat".into(),
            example: Some(ExampleSentence::new("Katten sover.", "The cat is sleeping.")),
            glyph: "🐈".into(),
            image_url: Some(url.into()),
            category: None,
        }
    }

    #[test]
    fn test_category_ids_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
        }
        assert_eq!(Category::from_id("weather"), None);
    }

    #[test]
    fn test_for_storage_drops_blob_urls() {
        let stored = word_with_url("blob:http://localhost/1234").for_storage();
        assert!(stored.image_url.is_none());
        assert_eq!(stored.word, "katt");
    }

    #[test]
    fn test_for_storage_keeps_regular_urls() {
        let stored = word_with_url("https://example.org/cat.png").for_storage();
        assert_eq!(stored.image_url.as_deref(), Some("https://example.org/cat.png"));
    }

    #[test]
    fn test_word_without_optional_fields_deserializes() {
        let json = r#"{"id":1,"word":"hej","translation":"hello","glyph":"👋"}"#;
        let word: VocabularyWord = serde_json::from_str(json).unwrap();
        assert!(word.example.is_none());
        assert!(word.category.is_none());
    }
}
