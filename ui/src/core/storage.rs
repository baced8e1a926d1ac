//! Persistence for the visitor's preferred language.

use std::sync::Mutex;

use thiserror::Error;

use crate::i18n::Language;

/// Key under which the preferred language id is stored.
pub const PREFERRED_LANGUAGE_KEY: &str = "bsp_preferred_language";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A single-slot string store.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str) -> Result<(), StorageError>;
}

/// Stored language, or the default when absent or unrecognised.
pub fn preferred_language(store: &dyn PreferenceStore) -> Language {
    match store.load() {
        Some(raw) => raw.parse().unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring stored language preference");
            Language::default()
        }),
        None => Language::default(),
    }
}

/// Persist the language id; failures are logged and otherwise ignored.
pub fn remember_language(store: &dyn PreferenceStore, language: Language) {
    if let Err(err) = store.save(language.id()) {
        tracing::warn!(%err, language = language.id(), "could not persist language preference");
    }
}

/// In-memory store used by tests and as a last resort.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.lock().ok().and_then(|v| v.clone())
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        let mut slot = self
            .value
            .lock()
            .map_err(|err| StorageError::Rejected(err.to_string()))?;
        *slot = Some(value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorageStore;

#[cfg(target_arch = "wasm32")]
mod local {
    use super::{PreferenceStore, StorageError, PREFERRED_LANGUAGE_KEY};

    /// `window.localStorage` backed store.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorageStore;

    impl LocalStorageStore {
        fn storage() -> Option<web_sys::Storage> {
            web_sys::window()?.local_storage().ok().flatten()
        }
    }

    impl PreferenceStore for LocalStorageStore {
        fn load(&self) -> Option<String> {
            Self::storage()?.get_item(PREFERRED_LANGUAGE_KEY).ok().flatten()
        }

        fn save(&self, value: &str) -> Result<(), StorageError> {
            let storage = Self::storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(PREFERRED_LANGUAGE_KEY, value)
                .map_err(|err| StorageError::Rejected(format!("{err:?}")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::fs;
    use std::path::{Path, PathBuf};

    use directories::ProjectDirs;

    use super::{PreferenceStore, StorageError, PREFERRED_LANGUAGE_KEY};

    /// Plain-text file under the platform config directory.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn at(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<config dir>/bsp-site/bsp_preferred_language`, when the platform has one.
        pub fn in_config_dir() -> Option<Self> {
            let dirs = ProjectDirs::from("org", "bsp", "bsp-site")?;
            Some(Self::at(dirs.config_dir().join(PREFERRED_LANGUAGE_KEY)))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl PreferenceStore for FileStore {
        fn load(&self) -> Option<String> {
            let raw = fs::read_to_string(&self.path).ok()?;
            let trimmed = raw.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }

        fn save(&self, value: &str) -> Result<(), StorageError> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, value)?;
            Ok(())
        }
    }
}

/// The store appropriate for the running platform.
pub fn default_store() -> Box<dyn PreferenceStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(LocalStorageStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStore::in_config_dir() {
            Some(store) => Box::new(store),
            None => Box::new(MemoryStore::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_preference_means_default_language() {
        let store = MemoryStore::default();
        assert_eq!(preferred_language(&store), Language::English);
    }

    #[test]
    fn unparseable_preference_means_default_language() {
        let store = MemoryStore::with_value("klingon");
        assert_eq!(preferred_language(&store), Language::English);
    }

    #[test]
    fn remembered_language_round_trips() {
        let store = MemoryStore::default();
        remember_language(&store, Language::Tamil);
        assert_eq!(store.load().as_deref(), Some("tamil"));
        assert_eq!(preferred_language(&store), Language::Tamil);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::at(dir.path().join("nested").join("pref"));
        assert_eq!(store.load(), None);
        store.save("hindi").expect("save");
        assert_eq!(store.load().as_deref(), Some("hindi"));
        assert_eq!(preferred_language(&store), Language::Hindi);
    }
}
