//! # Mock image recognition
//!
//! Turns an uploaded photo into a [`VocabularyWord`] without looking at it:
//! after an artificial delay one entry of a small fixed table is chosen through
//! the [`RandomSource`]. The content of the image is ignored, so the result is a
//! placeholder for a real vision and translation backend.
//!
//! ## Pipeline
//!
//! | Stage | Status line |
//! |-------|-------------|
//! | [`ProcessingStage::Processing`] | "Processing image..." |
//! | [`ProcessingStage::Recognizing`] | "Recognizing objects..." (the delay happens here) |
//! | [`ProcessingStage::Translating`] | "Translating to Swedish..." |
//!
//! [`Recognizer::process`] reports each stage through a callback before it
//! starts. Any failure is shown as [`crate::error::PROCESSING_FAILED`]; there is
//! no retry.

use std::time::Duration;

use crate::error::{Result, SvenskaError};
use crate::models::{current_timestamp_millis, ExampleSentence, VocabularyWord};
use crate::random::RandomSource;
use crate::timer::Timer;

struct Recognition {
    object: &'static str,
    word: &'static str,
    translation: &'static str,
    example: (&'static str, &'static str),
    glyph: &'static str,
}

#[rustfmt::skip]
const RECOGNITION_TABLE: &[Recognition] = &[
    Recognition { object: "apple", word: "äpple", translation: "apple", example: ("Jag äter ett äpple.", "I eat an apple."), glyph: "🍎" },
    Recognition { object: "dog", word: "hund", translation: "dog", example: ("Min hund är snäll.", "My dog is kind."), glyph: "🐕" },
    Recognition { object: "cat", word: "katt", translation: "cat", example: ("Katten sover.", "The cat is sleeping."), glyph: "🐈" },
    Recognition { object: "car", word: "bil", translation: "car", example: ("Jag kör bil.", "I drive a car."), glyph: "🚗" },
    Recognition { object: "coffee", word: "kaffe", translation: "coffee", example: ("Jag dricker kaffe.", "I drink coffee."), glyph: "☕" },
    Recognition { object: "book", word: "bok", translation: "book", example: ("Jag läser en bok.", "I read a book."), glyph: "📖" },
    Recognition { object: "flower", word: "blomma", translation: "flower", example: ("Blomman är vacker.", "The flower is beautiful."), glyph: "🌸" },
    Recognition { object: "tree", word: "träd", translation: "tree", example: ("Trädet är högt.", "The tree is tall."), glyph: "🌳" },
    Recognition { object: "house", word: "hus", translation: "house", example: ("Mitt hus är stort.", "My house is big."), glyph: "🏠" },
    Recognition { object: "water", word: "vatten", translation: "water", example: ("Jag dricker vatten.", "I drink water."), glyph: "💧" },
];

/// Object names the recognizer can "see", in table order.
pub fn known_objects() -> impl Iterator<Item = &'static str> {
    RECOGNITION_TABLE.iter().map(|r| r.object)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessingStage {
    Processing,
    Recognizing,
    Translating,
}

impl ProcessingStage {
    pub fn status(&self) -> &'static str {
        match self {
            ProcessingStage::Processing => "Processing image...",
            ProcessingStage::Recognizing => "Recognizing objects...",
            ProcessingStage::Translating => "Translating to Swedish...",
        }
    }
}

/// MIME type for an image file name, judged by extension.
pub fn image_mime(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "avif" => "image/avif",
        _ => return None,
    };
    Some(mime)
}

/// A user-selected image. Only used for display, never decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    pub name: String,
    pub mime: &'static str,
    /// URL the view can show, e.g. a `blob:` object URL.
    pub preview_url: Option<String>,
}

impl ImageUpload {
    /// Accept `name` if it looks like an image file.
    pub fn new(name: &str, preview_url: Option<String>) -> Result<Self> {
        let mime = image_mime(name).ok_or_else(|| SvenskaError::NotAnImage(name.to_string()))?;
        Ok(Self {
            name: name.to_string(),
            mime,
            preview_url,
        })
    }
}

pub struct Recognizer<R: RandomSource, T: Timer> {
    rng: R,
    timer: T,
    delay: Duration,
}

impl<R: RandomSource, T: Timer> Recognizer<R, T> {
    pub fn new(rng: R, timer: T, delay: Duration) -> Self {
        Self { rng, timer, delay }
    }

    /// Run the mock pipeline for `upload`.
    ///
    /// The returned word has a fresh timestamp id, the upload's preview as its
    /// picture and no category.
    pub async fn process(
        &mut self,
        upload: &ImageUpload,
        mut on_stage: impl FnMut(ProcessingStage),
    ) -> Result<VocabularyWord> {
        on_stage(ProcessingStage::Processing);
        tracing::debug!("processing {} ({})", upload.name, upload.mime);

        on_stage(ProcessingStage::Recognizing);
        self.timer.sleep(self.delay).await;
        if RECOGNITION_TABLE.is_empty() {
            return Err(SvenskaError::EmptyRecognitionTable);
        }
        let hit = &RECOGNITION_TABLE[self.rng.index(RECOGNITION_TABLE.len())];
        tracing::info!("recognized {} in {}", hit.object, upload.name);

        on_stage(ProcessingStage::Translating);
        Ok(VocabularyWord {
            id: current_timestamp_millis(),
            word: hit.word.to_string(),
            translation: hit.translation.to_string(),
            example: Some(ExampleSentence::new(hit.example.0, hit.example.1)),
            glyph: hit.glyph.to_string(),
            image_url: upload.preview_url.clone(),
            category: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use crate::timer::{NoDelay, PlatformTimer};

    fn upload() -> ImageUpload {
        ImageUpload::new("IMG_0042.JPG", Some("blob:http://localhost/abc".into())).unwrap()
    }

    #[test]
    fn test_image_mime_by_extension() {
        assert_eq!(image_mime("cat.png"), Some("image/png"));
        assert_eq!(image_mime("Photo.JPEG"), Some("image/jpeg"));
        assert_eq!(image_mime("notes.txt"), None);
        assert_eq!(image_mime("no_extension"), None);
    }

    #[test]
    fn test_upload_rejects_non_images() {
        let err = ImageUpload::new("report.pdf", None).unwrap_err();
        assert!(matches!(err, SvenskaError::NotAnImage(name) if name == "report.pdf"));
    }

    #[tokio::test]
    async fn test_process_reports_stages_in_order() {
        let mut recognizer = Recognizer::new(ScriptedRandom::new(vec![1]), NoDelay, Duration::ZERO);
        let mut stages = Vec::new();

        let word = recognizer.process(&upload(), |s| stages.push(s)).await.unwrap();

        assert_eq!(
            stages,
            vec![
                ProcessingStage::Processing,
                ProcessingStage::Recognizing,
                ProcessingStage::Translating,
            ]
        );
        assert_eq!(word.word, "hund");
        assert_eq!(word.translation, "dog");
        assert_eq!(word.example.unwrap().swedish, "Min hund är snäll.");
        assert_eq!(word.image_url.as_deref(), Some("blob:http://localhost/abc"));
        assert!(word.category.is_none());
    }

    #[tokio::test]
    async fn test_selection_follows_random_source() {
        let mut recognizer = Recognizer::new(ScriptedRandom::new(vec![9, 0]), NoDelay, Duration::ZERO);
        let first = recognizer.process(&upload(), |_| {}).await.unwrap();
        let second = recognizer.process(&upload(), |_| {}).await.unwrap();
        assert_eq!(first.word, "vatten");
        assert_eq!(second.word, "äpple");
    }

    #[tokio::test]
    async fn test_process_waits_for_delay() {
        let mut recognizer = Recognizer::new(
            ScriptedRandom::new(vec![0]),
            PlatformTimer,
            Duration::from_millis(30),
        );
        let start = std::time::Instant::now();
        recognizer.process(&upload(), |_| {}).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_known_objects() {
        let objects: Vec<_> = known_objects().collect();
        assert_eq!(objects.len(), 10);
        assert!(objects.contains(&"coffee"));
    }
}
