//! Two-tier translation resolution

use std::sync::Arc;

use crate::catalog::{
    Catalog,
    Lookup,
};

/// Resolves a dotted key against `active`, then against `fallback`.
///
/// The fallback is only consulted when the active catalog misses, so a
/// partial translation degrades to English and never to the raw key.
#[must_use]
pub fn resolve<'a>(active: &'a Catalog, fallback: Option<&'a Catalog>, key: &str) -> Lookup<'a> {
    active
        .lookup(key)
        .or_else(|| fallback.map_or(Lookup::Missing, |fallback| fallback.lookup(key)))
}

/// Snapshot of the active catalog plus the English fallback.
///
/// Cheap to clone; rendering code receives one of these instead of reading
/// shared state.
#[derive(Debug, Clone)]
pub struct Translator {
    language: String,
    active: Arc<Catalog>,
    fallback: Option<Arc<Catalog>>,
}

impl Translator {
    #[must_use]
    pub fn new(
        language: impl Into<String>,
        active: Arc<Catalog>,
        fallback: Option<Arc<Catalog>>,
    ) -> Self {
        Self { language: language.into(), active, fallback }
    }

    /// Code of the language this translator was built for.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.active
    }

    /// Looks up `key`, falling back to English.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        let lookup = resolve(&self.active, self.fallback.as_deref(), key);
        if !lookup.is_found() {
            tracing::warn!(key, language = %self.language, "Translation not found");
        }
        lookup
    }

    #[must_use]
    pub fn translate(&self, key: &str) -> Option<&str> {
        self.lookup(key).into_option()
    }

    /// Looks up `key`, returning the caller's literal when English lacks it too.
    #[must_use]
    pub fn translate_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(default)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::catalog::{
        FALLBACK_LANGUAGE,
        TranslationStore,
    };
    use crate::test_utils::catalog_from_json;

    fn translator(language: &str) -> Translator {
        let store = TranslationStore::embedded();
        Translator::new(language, store.builtin(language).unwrap(), store.fallback())
    }

    #[rstest]
    #[case("de", "app.tagline", "Open-Source-Unternehmen für die Regierung")]
    #[case("de", "form.validation.invalid_email", "Please enter a valid email address.")]
    #[case("de", "navigation.skip_to_form", "Skip to submission form")]
    #[case("fr", "form.validation.error_heading", "Erreur de formulaire:")]
    #[case("it", "footer.report_issues", "Report accessibility issues")]
    fn resolve_prefers_active_then_english(
        #[case] language: &str,
        #[case] key: &str,
        #[case] expected: &str,
    ) {
        assert_that!(translator(language).translate(key), some(eq(expected)));
    }

    #[googletest::test]
    fn resolve_reports_missing_when_english_lacks_key() {
        let translator = translator("nl");

        expect_that!(translator.lookup("form.validation.unknown"), eq(Lookup::Missing));
        expect_that!(translator.translate_or("form.validation.unknown", "Literal"), eq("Literal"));
    }

    #[googletest::test]
    fn resolve_never_returns_intermediate_objects() {
        let translator = translator("es");

        expect_that!(translator.translate("form.validation"), none());
        expect_that!(translator.translate("form"), none());
        expect_that!(translator.translate(""), none());
    }

    #[googletest::test]
    fn resolve_without_fallback() {
        let active = catalog_from_json(r#"{"nav": {"home": "Inicio"}}"#);

        expect_that!(resolve(&active, None, "nav.home"), eq(Lookup::Found("Inicio")));
        expect_that!(resolve(&active, None, "nav.companies"), eq(Lookup::Missing));
    }

    /// Every English key resolves in every language to that language's value
    /// or to the English one.
    #[googletest::test]
    fn every_english_key_resolves_in_every_language() {
        let store = TranslationStore::embedded();
        let english = store.fallback().unwrap();

        for language in store.languages() {
            let translator = translator(language);
            let active = store.builtin(language).unwrap();
            for (key, english_value) in english.flatten() {
                let resolved = translator.translate(&key);
                let own = active.lookup(&key).into_option();
                expect_that!(resolved, some(eq(own.unwrap_or(english_value.as_str()))));
                expect_that!(resolved, not(some(eq(key.as_str()))));
            }
        }

        expect_that!(english.lookup("app.title"), eq(Lookup::Found("FOSS4Gov")));
        expect_that!(translator(FALLBACK_LANGUAGE).language(), eq("en"));
    }
}
