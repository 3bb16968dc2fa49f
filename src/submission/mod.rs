//! Submission form: issue link, CSV row and validation
/// GitHub issue encoding
mod issue;
/// CSV row for a pull request
mod row;
/// Form validation
mod validate;

use serde::Deserialize;

pub use issue::{
    IssuePayload,
    build_payload,
    encode_issue,
    issue_url,
};
pub use row::csv_row;
pub use validate::{
    FormError,
    validate,
};

/// Values entered in the submission form.
///
/// Blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueFields {
    pub name: String,
    pub english: String,
    pub website: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub other_repo: String,
}

impl IssueFields {
    /// Fields holding only the two required values.
    #[must_use]
    pub fn new(name: impl Into<String>, website: impl Into<String>) -> Self {
        Self { name: name.into(), website: website.into(), ..Self::default() }
    }

    /// Copy with surrounding whitespace removed from every value.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            english: self.english.trim().to_string(),
            website: self.website.trim().to_string(),
            email: self.email.trim().to_string(),
            linkedin: self.linkedin.trim().to_string(),
            github: self.github.trim().to_string(),
            other_repo: self.other_repo.trim().to_string(),
        }
    }

    /// Values in CSV column order.
    #[must_use]
    pub fn columns(&self) -> [&str; 7] {
        [
            &self.name,
            &self.english,
            &self.website,
            &self.email,
            &self.linkedin,
            &self.github,
            &self.other_repo,
        ]
    }
}

/// `Some` when the value is not blank.
fn present(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}
