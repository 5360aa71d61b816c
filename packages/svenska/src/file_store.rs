//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists each key
//! as a small file. It is used on desktop to retain the learner's words and
//! settings across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── savedVocabulary     # JSON array
//! ├── darkMode            # "true" / "false"
//! ├── username
//! └── config              # TOML
//! ```
//!
//! ## Platform data directories
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/svenskalek/` |
//! | Linux | `~/.local/share/svenskalek/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\svenskalek\` |

use std::path::PathBuf;

use crate::error::Result;
use crate::profile::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::profile::Profile;
    use crate::vocabulary::SavedVocabulary;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("svenskalek_{name}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = temp_dir("roundtrip");

        let profile = Profile::new(FileStore::new(dir.clone()));
        let saved: SavedVocabulary = catalog::all_words().into_iter().take(3).collect();
        profile.save_vocabulary(&saved).await.unwrap();
        profile.set_dark_mode(true).await.unwrap();

        // Re-open from same directory
        let profile2 = Profile::new(FileStore::new(dir.clone()));
        assert_eq!(profile2.load_vocabulary().await, saved);
        assert!(profile2.dark_mode().await);

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_ok() {
        let dir = temp_dir("remove");
        let store = FileStore::new(dir.clone());

        assert!(store.remove("nothing-here").await.is_ok());
        assert!(store.get("nothing-here").await.is_none());

        store.set("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        assert!(store.get("k").await.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
