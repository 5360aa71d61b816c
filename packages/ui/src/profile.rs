//! Shared profile constructor for all platforms.
//!
//! Returns a [`svenska::Profile`] backed by the appropriate [`svenska::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser localStorage via [`svenska::LocalStorageStore`]
//! - **Desktop** (native): one file per key via [`svenska::FileStore`]

/// Create a platform-appropriate profile.
pub fn make_profile() -> svenska::Profile<impl svenska::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        svenska::Profile::new(svenska::LocalStorageStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("svenskalek");
        svenska::Profile::new(svenska::FileStore::new(base))
    }
}
