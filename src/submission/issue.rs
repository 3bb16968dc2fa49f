//! Prefilled GitHub issue links

use url::form_urlencoded;

use super::{
    IssueFields,
    present,
};
use crate::i18n::Translator;

/// Title and body of a new issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuePayload {
    pub title: String,
    pub body: String,
}

impl IssuePayload {
    /// Encodes the payload as `title=…&body=…` form parameters.
    #[must_use]
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("title", &self.title)
            .append_pair("body", &self.body)
            .finish()
    }
}

/// Builds the issue title and body in the translator's language.
#[must_use]
pub fn build_payload(fields: &IssueFields, translator: &Translator) -> IssuePayload {
    let title = translator
        .translate_or("issue.title", "Add {name} to FOSS4Gov")
        .replacen("{name}", &fields.name, 1);

    let optional = |label: &str, value: &str| present(value).map(|value| format!("- {label}: {value}"));

    let lines = [
        Some(translator.translate_or("issue.company_details", "Company Details:").to_string()),
        Some(format!("- Name: {}", fields.name)),
        optional("English alternative", &fields.english),
        Some(format!("- Website: {}", fields.website)),
        optional("Info email", &fields.email),
        optional("LinkedIn", &fields.linkedin),
        optional("GitHub", &fields.github),
        optional("Other public Git repo", &fields.other_repo),
        Some(format!("\n{}", translator.translate_or("issue.confirmation", "Confirmation:"))),
        Some(
            translator
                .translate_or(
                    "issue.confirmation_text",
                    "I confirm this company meets the requirements for inclusion.",
                )
                .to_string(),
        ),
    ];

    let body = lines.into_iter().flatten().collect::<Vec<_>>().join("\n");
    IssuePayload { title, body }
}

/// Query string for the new-issue page.
#[must_use]
pub fn encode_issue(fields: &IssueFields, translator: &Translator) -> String {
    build_payload(fields, translator).to_query()
}

/// Full new-issue URL for `repository` (`owner/name`).
#[must_use]
pub fn issue_url(repository: &str, fields: &IssueFields, translator: &Translator) -> String {
    format!(
        "https://github.com/{}/issues/new?{}",
        repository.trim_matches('/'),
        encode_issue(fields, translator)
    )
}
