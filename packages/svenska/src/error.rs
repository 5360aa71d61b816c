//! Error type shared by every fallible operation in the crate.
//!
//! Reads from durable storage do not use this type: an absent or
//! malformed entry is reported as `None` and the caller regenerates a default.
//! Only writes, config (de)serialisation and the recognition pipeline return
//! [`SvenskaError`].

use thiserror::Error;

/// Static message shown when the mock recognition pipeline fails.
pub const PROCESSING_FAILED: &str = "Error processing image. Please try again.";

#[derive(Debug, Error)]
pub enum SvenskaError {
    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to write config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("{0} is not an image file")]
    NotAnImage(String),

    #[error("recognition table is empty")]
    EmptyRecognitionTable,
}

impl SvenskaError {
    /// The message a view should display for this error.
    ///
    /// Pipeline failures collapse into [`PROCESSING_FAILED`]; there is nothing
    /// the user can act on beyond trying again.
    pub fn user_message(&self) -> String {
        match self {
            SvenskaError::NotAnImage(name) => format!("{name} is not an image. Please choose a photo."),
            SvenskaError::EmptyRecognitionTable => PROCESSING_FAILED.to_string(),
            other => {
                tracing::debug!("collapsing error into generic message: {other}");
                PROCESSING_FAILED.to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SvenskaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_errors_use_static_message() {
        assert_eq!(SvenskaError::EmptyRecognitionTable.user_message(), PROCESSING_FAILED);
        assert_eq!(
            SvenskaError::Storage("quota".into()).user_message(),
            PROCESSING_FAILED
        );
    }

    #[test]
    fn test_not_an_image_names_the_file() {
        let msg = SvenskaError::NotAnImage("notes.txt".into()).user_message();
        assert!(msg.contains("notes.txt"));
    }
}
