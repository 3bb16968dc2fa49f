//! Current language state
//!
//! The session owns the active language and catalog. The only way to change
//! them is `change_language`, which tags every load with a request number and
//! drops results that were overtaken by a newer request.

use std::sync::Arc;
use std::sync::atomic::{
    AtomicU64,
    Ordering,
};

use tokio::sync::RwLock;

use super::LoadError;
use super::language::select_initial_language;
use super::loader::Loader;
use super::preference::PreferenceStore;
use super::resolver::Translator;
use crate::catalog::Catalog;

/// How a language change ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The loaded catalog is now displayed.
    Applied,
    /// A newer change was requested before this load finished.
    Superseded,
}

/// Active language and its catalog.
#[derive(Debug)]
struct Current {
    language: String,
    catalog: Arc<Catalog>,
}

/// Owned language state shared by everything that renders text.
///
/// # Ordering
///
/// Requests are numbered in the order `change_language` is called. A load
/// result is installed only while its request is still the newest one, so
/// the last requested language always ends up displayed.
#[derive(Debug, Clone)]
pub struct LanguageSession {
    loader: Arc<Loader>,
    preferences: Arc<dyn PreferenceStore>,
    current: Arc<RwLock<Current>>,
    latest_request: Arc<AtomicU64>,
}

impl LanguageSession {
    /// Starts a session in the best initial language.
    ///
    /// The language comes from `requested`, then the saved preference, then
    /// `preferred` (browser languages), then English.
    ///
    /// # Errors
    /// `LoadError::NoTranslations` when no catalog exists for the chosen
    /// language nor for English.
    pub async fn start(
        loader: Loader,
        preferences: Arc<dyn PreferenceStore>,
        requested: Option<&str>,
        preferred: &[String],
    ) -> Result<Self, LoadError> {
        let saved = preferences.load();
        let language = select_initial_language(requested, saved.as_deref(), preferred);
        tracing::info!(language, "Initializing i18n");

        let catalog = loader.load(language).await?;

        Ok(Self {
            loader: Arc::new(loader),
            preferences,
            current: Arc::new(RwLock::new(Current { language: language.to_string(), catalog })),
            latest_request: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Code of the displayed language.
    pub async fn language(&self) -> String {
        self.current.read().await.language.clone()
    }

    /// Snapshot of the displayed catalog with the English fallback.
    pub async fn translator(&self) -> Translator {
        let current = self.current.read().await;
        Translator::new(
            current.language.clone(),
            Arc::clone(&current.catalog),
            self.loader.store().fallback(),
        )
    }

    #[must_use]
    pub fn loader(&self) -> &Loader {
        &self.loader
    }

    /// Switches the displayed language.
    ///
    /// The built-in catalog is shown right away; the loaded one replaces it
    /// when the load finishes, unless a newer switch was requested meanwhile.
    /// The preference is saved only for switches that were applied.
    ///
    /// # Errors
    /// `LoadError::NoTranslations` when nothing can be displayed for `code`.
    pub async fn change_language(&self, code: &str) -> Result<SwitchOutcome, LoadError> {
        let request = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(language = code, request, "Changing language");

        if let Some(builtin) = self.loader.store().builtin(code) {
            self.install(request, code, builtin).await;
        }

        let catalog = match self.loader.load(code).await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(language = code, "Failed to change language: {e}");
                return Err(e);
            }
        };

        if !self.install(request, code, catalog).await {
            tracing::debug!(language = code, request, "Discarding superseded translations");
            return Ok(SwitchOutcome::Superseded);
        }

        if let Err(e) = self.preferences.save(code) {
            tracing::warn!(language = code, "Failed to save language preference: {e}");
        }
        tracing::info!(language = code, "Language changed");
        Ok(SwitchOutcome::Applied)
    }

    /// Installs `catalog` if `request` is still the newest request.
    async fn install(&self, request: u64, code: &str, catalog: Arc<Catalog>) -> bool {
        let mut current = self.current.write().await;
        if self.latest_request.load(Ordering::SeqCst) != request {
            return false;
        }
        *current = Current { language: code.to_string(), catalog };
        true
    }
}
