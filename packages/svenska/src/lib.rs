pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod phrases;
pub mod preferences;
pub mod profile;
pub mod quiz;
pub mod random;
pub mod recognition;
pub mod review;
pub mod timer;
pub mod translate;
pub mod vocabulary;

mod file_store;
mod memory;
pub use file_store::FileStore;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::SvenskaConfig;
pub use error::{Result, SvenskaError, PROCESSING_FAILED};
pub use models::{Category, ExampleSentence, VocabularyWord};
pub use preferences::Preferences;
pub use profile::{KeyValueStore, Profile};
pub use random::{RandomSource, ScriptedRandom};
pub use timer::{NoDelay, PlatformTimer, Timer};
pub use vocabulary::SavedVocabulary;
