//! Submission form checks

use thiserror::Error;
use url::Url;

use super::{
    IssueFields,
    present,
};
use crate::i18n::Translator;

/// Why a submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Required fields are missing: {}", .0.join(", "))]
    RequiredFields(Vec<&'static str>),
    #[error("Invalid URL in {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

impl FormError {
    /// Translation key of the user-facing message.
    #[must_use]
    pub const fn translation_key(&self) -> &'static str {
        match self {
            Self::RequiredFields(_) => "form.validation.required_fields",
            Self::InvalidUrl { .. } => "form.validation.invalid_url",
            Self::InvalidEmail(_) => "form.validation.invalid_email",
        }
    }

    /// User-facing message in the translator's language.
    #[must_use]
    pub fn message<'a>(&self, translator: &'a Translator) -> &'a str {
        let default = match self {
            Self::RequiredFields(_) => "Please fill in all required fields.",
            Self::InvalidUrl { .. } => "Please enter a valid URL.",
            Self::InvalidEmail(_) => "Please enter a valid email address.",
        };
        translator.translate_or(self.translation_key(), default)
    }
}

/// Accepts absolute `http`/`https` URLs with a host.
fn is_web_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
    })
}

/// `local@domain.tld` without whitespace.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Checks the form before an issue link or CSV row is built.
///
/// Required fields are checked first, then URLs in form order, then the
/// email address.
///
/// # Errors
/// The first problem found.
pub fn validate(fields: &IssueFields) -> Result<(), FormError> {
    let missing: Vec<&'static str> = [("name", &fields.name), ("website", &fields.website)]
        .into_iter()
        .filter(|(_, value)| present(value).is_none())
        .map(|(field, _)| field)
        .collect();
    if !missing.is_empty() {
        return Err(FormError::RequiredFields(missing));
    }

    let urls = [
        ("website", &fields.website),
        ("linkedin", &fields.linkedin),
        ("github", &fields.github),
        ("otherRepo", &fields.other_repo),
    ];
    let invalid_url = urls
        .into_iter()
        .filter_map(|(field, value)| present(value).map(|value| (field, value)))
        .find(|(_, value)| !is_web_url(value));
    if let Some((field, value)) = invalid_url {
        return Err(FormError::InvalidUrl { field, value: value.to_string() });
    }

    if let Some(email) = present(&fields.email).filter(|email| !is_email(email)) {
        return Err(FormError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::test_utils::builtin_translator;

    fn valid() -> IssueFields {
        IssueFields::new("Acme", "https://acme.test")
    }

    #[googletest::test]
    fn minimal_form_is_valid() {
        expect_that!(validate(&valid()), ok(anything()));
    }

    #[googletest::test]
    fn missing_required_fields_are_listed() {
        let result = validate(&IssueFields::new("  ", ""));

        expect_that!(result, err(eq(&FormError::RequiredFields(vec!["name", "website"]))));
    }

    #[rstest]
    #[case::no_scheme("acme.test")]
    #[case::ftp("ftp://acme.test")]
    #[case::mailto("mailto:info@acme.test")]
    #[case::garbage("not a url")]
    fn bad_website_is_rejected(#[case] website: &str) {
        let result = validate(&IssueFields::new("Acme", website));

        assert!(matches!(result, Err(FormError::InvalidUrl { field: "website", .. })));
    }

    #[googletest::test]
    fn optional_urls_are_checked_when_present() {
        let fields = IssueFields { other_repo: "git@acme.test:repo".to_string(), ..valid() };

        let result = validate(&fields);

        expect_that!(
            result,
            err(eq(&FormError::InvalidUrl {
                field: "otherRepo",
                value: "git@acme.test:repo".to_string()
            }))
        );
    }

    #[rstest]
    #[case::valid("info@acme.test", true)]
    #[case::subdomain("a.b@mail.acme.test", true)]
    #[case::no_at("info.acme.test", false)]
    #[case::no_domain_dot("info@acme", false)]
    #[case::two_ats("a@b@acme.test", false)]
    #[case::space("in fo@acme.test", false)]
    #[case::empty_local("@acme.test", false)]
    fn email_syntax(#[case] email: &str, #[case] accepted: bool) {
        let fields = IssueFields { email: email.to_string(), ..valid() };

        assert_eq!(validate(&fields).is_ok(), accepted);
    }

    #[googletest::test]
    fn messages_are_translated() {
        let missing = FormError::RequiredFields(vec!["name"]);
        let url = FormError::InvalidUrl { field: "website", value: "x".to_string() };
        let french = builtin_translator("fr");
        let english = builtin_translator("en");

        expect_that!(missing.message(&french), eq("Veuillez remplir tous les champs obligatoires."));
        expect_that!(url.message(&english), eq("Please enter a valid URL."));
    }

    #[googletest::test]
    fn messages_missing_in_language_fall_back_to_english() {
        let error = FormError::InvalidEmail("x".to_string());
        let german = builtin_translator("de");

        expect_that!(error.message(&german), eq("Please enter a valid email address."));
    }
}
