//! Translation loading with overlays
//!
//! A load always starts from the built-in catalog. When an overlay source is
//! configured the language file is fetched and merged over the built-in
//! catalog for that language. Failures never reach the caller unless no
//! catalog exists at all.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use futures::future::BoxFuture;

use super::LoadError;
use super::language::{
    LANGUAGES,
    Language,
};
use crate::catalog::{
    Catalog,
    Node,
    TranslationStore,
};

/// Source of per-language overlay documents.
pub trait OverlaySource: Send + Sync + std::fmt::Debug {
    /// Fetches the raw text of the overlay file `file`.
    fn fetch<'a>(&'a self, file: &'a str) -> BoxFuture<'a, std::io::Result<String>>;
}

/// Reads overlay files from a directory (the site's `lang/` folder).
///
/// A missing `*.yaml` file is retried with a `.json` extension.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl OverlaySource for DirectorySource {
    fn fetch<'a>(&'a self, file: &'a str) -> BoxFuture<'a, std::io::Result<String>> {
        Box::pin(async move {
            let path = self.root.join(file);
            tracing::debug!(path = %path.display(), "Attempting to load language file");
            match tokio::fs::read_to_string(&path).await {
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    let json_path = path.with_extension("json");
                    if json_path == path {
                        return Err(e);
                    }
                    tracing::debug!(path = %json_path.display(), "Retrying with JSON language file");
                    tokio::fs::read_to_string(&json_path).await
                }
                result => result,
            }
        })
    }
}

/// Parses an overlay document.
///
/// YAML is a superset of JSON, so both formats go through the YAML parser.
/// An empty document is an empty overlay. The document is read entry by
/// entry, so a section of the wrong shape only drops that section.
pub fn parse_overlay(file: &str, text: &str) -> Result<Catalog, LoadError> {
    if text.trim().is_empty() {
        return Ok(Catalog::default());
    }
    let entries: BTreeMap<String, Node> = serde_yaml::from_str(text)
        .map_err(|source| LoadError::Parse { file: file.to_string(), source })?;
    Ok(Catalog::from_entries(entries))
}

/// Loads catalogs for languages.
#[derive(Debug, Clone)]
pub struct Loader {
    store: TranslationStore,
    source: Option<Arc<dyn OverlaySource>>,
}

impl Loader {
    /// Loader that never fetches overlays.
    #[must_use]
    pub const fn builtin_only(store: TranslationStore) -> Self {
        Self { store, source: None }
    }

    #[must_use]
    pub fn with_source(store: TranslationStore, source: Arc<dyn OverlaySource>) -> Self {
        Self { store, source: Some(source) }
    }

    #[must_use]
    pub const fn store(&self) -> &TranslationStore {
        &self.store
    }

    /// Loads the catalog to display for `code`.
    ///
    /// # Errors
    /// `LoadError::NoTranslations` when neither `code` nor English has a
    /// built-in catalog and no overlay could be merged.
    pub async fn load(&self, code: &str) -> Result<Arc<Catalog>, LoadError> {
        tracing::debug!(language = code, "Loading translations");

        let own = self.store.builtin(code);
        let base = own.clone().or_else(|| {
            tracing::debug!(language = code, "No built-in translations, using English");
            self.store.fallback()
        });
        let no_translations = || LoadError::NoTranslations(code.to_string());

        let (Some(source), Some(language)) = (&self.source, Language::find(code)) else {
            return base.ok_or_else(no_translations);
        };

        match Self::fetch_overlay(source.as_ref(), language).await {
            Ok(overlay) => {
                tracing::debug!(language = code, "Successfully loaded and parsed language file");
                let mut merged = own.map(Arc::unwrap_or_clone).unwrap_or_default();
                merged.merge_overlay(overlay);
                Ok(Arc::new(merged))
            }
            Err(e) => {
                tracing::warn!(language = code, "{e}; using built-in translations");
                base.ok_or_else(no_translations)
            }
        }
    }

    async fn fetch_overlay(
        source: &dyn OverlaySource,
        language: &Language,
    ) -> Result<Catalog, LoadError> {
        let text = source
            .fetch(language.file)
            .await
            .map_err(|source| LoadError::Fetch { file: language.file.to_string(), source })?;
        parse_overlay(language.file, &text)
    }

    /// Loads every registered language concurrently.
    pub async fn load_all(&self) -> Vec<(&'static str, Result<Arc<Catalog>, LoadError>)> {
        let loads = LANGUAGES.iter().map(|language| async move {
            (language.code, self.load(language.code).await)
        });
        futures::future::join_all(loads).await
    }
}
