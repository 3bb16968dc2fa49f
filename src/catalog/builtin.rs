//! Built-in fallback catalogs

use std::collections::HashMap;
use std::sync::{
    Arc,
    LazyLock,
};

use super::Catalog;

/// Language code of the fixed fallback catalog.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Catalog sources compiled into the binary.
const EMBEDDED: [(&str, &str); 6] = [
    ("en", include_str!("../../locales/en.json")),
    ("fr", include_str!("../../locales/fr.json")),
    ("de", include_str!("../../locales/de.json")),
    ("nl", include_str!("../../locales/nl.json")),
    ("es", include_str!("../../locales/es.json")),
    ("it", include_str!("../../locales/it.json")),
];

/// Parsed embedded catalogs, shared by every store built with `embedded()`.
static EMBEDDED_CATALOGS: LazyLock<HashMap<String, Arc<Catalog>>> = LazyLock::new(|| {
    EMBEDDED
        .iter()
        .filter_map(|(code, source)| match serde_json::from_str::<Catalog>(source) {
            Ok(catalog) => Some(((*code).to_string(), Arc::new(catalog))),
            Err(e) => {
                tracing::error!(language = code, "Failed to parse built-in catalog: {e}");
                None
            }
        })
        .collect()
});

/// Built-in catalogs keyed by language code.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    catalogs: HashMap<String, Arc<Catalog>>,
}

impl TranslationStore {
    /// Store backed by the catalogs compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self { catalogs: EMBEDDED_CATALOGS.clone() }
    }

    /// Store backed by the given catalogs.
    pub fn from_catalogs<I, S>(catalogs: I) -> Self
    where
        I: IntoIterator<Item = (S, Catalog)>,
        S: Into<String>,
    {
        Self {
            catalogs: catalogs
                .into_iter()
                .map(|(code, catalog)| (code.into(), Arc::new(catalog)))
                .collect(),
        }
    }

    /// Built-in catalog for exactly this language.
    #[must_use]
    pub fn builtin(&self, code: &str) -> Option<Arc<Catalog>> {
        self.catalogs.get(code).cloned()
    }

    /// The fixed English fallback catalog.
    #[must_use]
    pub fn fallback(&self) -> Option<Arc<Catalog>> {
        self.builtin(FALLBACK_LANGUAGE)
    }

    /// Built-in catalog for the language, or the English one.
    #[must_use]
    pub fn builtin_or_fallback(&self, code: &str) -> Option<Arc<Catalog>> {
        self.builtin(code).or_else(|| self.fallback())
    }

    /// Language codes with a built-in catalog, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.catalogs.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
