//! Persisted language preference

use std::path::PathBuf;
use std::sync::{
    Mutex,
    PoisonError,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::PreferenceError;

/// Stores the user's chosen language code.
pub trait PreferenceStore: Send + Sync + std::fmt::Debug {
    /// Saved language code, if any.
    fn load(&self) -> Option<String>;

    /// Records `code` as the preferred language.
    fn save(&self, code: &str) -> Result<(), PreferenceError>;
}

/// Keeps the preference in memory only.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    preferred_language: Mutex<Option<String>>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn with_language(code: &str) -> Self {
        Self { preferred_language: Mutex::new(Some(code.to_string())) }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self) -> Option<String> {
        self.preferred_language.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, code: &str) -> Result<(), PreferenceError> {
        *self.preferred_language.lock().unwrap_or_else(PoisonError::into_inner) =
            Some(code.to_string());
        Ok(())
    }
}

/// On-disk shape of the preference file.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct PreferenceFile {
    preferred_language: Option<String>,
}

/// Keeps the preference in a small JSON file.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for FilePreferences {
    fn load(&self) -> Option<String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), "No saved language preference: {e}");
                return None;
            }
        };

        match serde_json::from_str::<PreferenceFile>(&content) {
            Ok(file) => file.preferred_language,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Ignoring unreadable preference file: {e}");
                None
            }
        }
    }

    fn save(&self, code: &str) -> Result<(), PreferenceError> {
        let file = PreferenceFile { preferred_language: Some(code.to_string()) };
        std::fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        tracing::debug!(path = %self.path.display(), language = code, "Saved language preference");
        Ok(())
    }
}
