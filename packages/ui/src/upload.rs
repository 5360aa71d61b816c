//! Turning a file-input event into an [`ImageUpload`].

use dioxus::prelude::*;
use svenska::recognition::{image_mime, ImageUpload, ProcessingStage};
use svenska::{SavedVocabulary, VocabularyWord};

/// Mark the pipeline busy unless it already is. Returns whether a new upload
/// may start.
pub fn try_begin(stage: &mut Option<ProcessingStage>) -> bool {
    if stage.is_some() {
        return false;
    }
    *stage = Some(ProcessingStage::Processing);
    true
}

/// The preview URL of `word` that can be freed once it leaves the screen.
/// A saved word keeps showing its picture, so its URL stays alive.
pub fn releasable_preview<'a>(word: &'a VocabularyWord, saved: &SavedVocabulary) -> Option<&'a str> {
    if saved.contains(word.id) {
        return None;
    }
    word.image_url.as_deref()
}

/// The first file of a file-input change, if any. Non-image files come back
/// as `Err(NotAnImage)`.
pub async fn image_from_event(evt: &FormEvent) -> Option<svenska::Result<ImageUpload>> {
    let engine = evt.files()?;
    let path = engine.files().into_iter().next()?;
    let name = std::path::Path::new(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path.as_str())
        .to_string();

    let Some(mime) = image_mime(&name) else {
        return Some(ImageUpload::new(&name, None));
    };
    let preview = match engine.read_file(&path).await {
        Some(bytes) => preview_url(&bytes, mime),
        None => {
            tracing::warn!("could not read {name}");
            None
        }
    };
    Some(ImageUpload::new(&name, preview))
}

/// A `blob:` URL the page can display. Only the browser has one.
#[cfg(target_arch = "wasm32")]
fn preview_url(bytes: &[u8], mime: &str) -> Option<String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
    web_sys::Url::create_object_url_with_blob(&blob).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn preview_url(_bytes: &[u8], _mime: &str) -> Option<String> {
    None
}

/// Free a URL made by [`image_from_event`].
pub fn release_preview(url: &str) {
    #[cfg(target_arch = "wasm32")]
    if url.starts_with("blob:") {
        let _ = web_sys::Url::revoke_object_url(url);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = url;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploaded_word(id: u64) -> VocabularyWord {
        VocabularyWord {
            id,
            word: "hund".into(),
            translation: "dog".into(),
            example: None,
            glyph: "🐕".into(),
            image_url: Some("blob:http://localhost/42".into()),
            category: None,
        }
    }

    #[test]
    fn test_second_upload_is_refused_while_busy() {
        let mut stage = None;
        assert!(try_begin(&mut stage));
        assert_eq!(stage, Some(ProcessingStage::Processing));

        assert!(!try_begin(&mut stage));

        stage = Some(ProcessingStage::Recognizing);
        assert!(!try_begin(&mut stage));
        assert_eq!(stage, Some(ProcessingStage::Recognizing));
    }

    #[test]
    fn test_upload_may_start_again_after_finishing() {
        let mut stage = None;
        assert!(try_begin(&mut stage));
        stage = None;
        assert!(try_begin(&mut stage));
    }

    #[test]
    fn test_unsaved_preview_is_released() {
        let word = uploaded_word(1_700_000_000_000);
        let saved = SavedVocabulary::new();
        assert_eq!(releasable_preview(&word, &saved), Some("blob:http://localhost/42"));
    }

    #[test]
    fn test_saved_preview_is_kept() {
        let word = uploaded_word(1_700_000_000_000);
        let mut saved = SavedVocabulary::new();
        saved.add(word.clone());
        assert_eq!(releasable_preview(&word, &saved), None);
    }

    #[test]
    fn test_word_without_picture_has_nothing_to_release() {
        let mut word = uploaded_word(3);
        word.image_url = None;
        assert_eq!(releasable_preview(&word, &SavedVocabulary::new()), None);
    }
}
