use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::i18n::Language;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "repository")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Contents of `.foss4gov.json`. Paths are relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    /// Directory holding `english.yaml`, `french.yaml`, ...
    pub lang_dir: String,
    pub companies_file: String,

    /// GitHub repository receiving issues, as `owner/name`.
    pub repository: String,

    /// Used when neither a request, a saved preference nor the preferred
    /// languages name a supported language.
    pub default_language: String,

    pub preference_file: String,
    pub output_file: String,

    /// When false only the embedded translations are used.
    pub overlays: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            lang_dir: "lang".to_string(),
            companies_file: "companies.csv".to_string(),
            repository: "foss4gov/foss4gov".to_string(),
            default_language: "en".to_string(),
            preference_file: ".foss4gov-preference.json".to_string(),
            output_file: "index.html".to_string(),
            overlays: true,
        }
    }
}

/// `owner/name`, each part made of ASCII alphanumerics, `-`, `_` or `.`.
fn is_repository(value: &str) -> bool {
    let is_part = |part: &str| {
        !part.is_empty()
            && part.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    };
    value.split_once('/').is_some_and(|(owner, name)| is_part(owner) && is_part(name))
}

impl SiteSettings {
    /// # Errors
    /// - Required path is empty
    /// - Repository is not `owner/name`
    /// - Default language is not supported
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let paths = [
            ("langDir", &self.lang_dir),
            ("companiesFile", &self.companies_file),
            ("preferenceFile", &self.preference_file),
            ("outputFile", &self.output_file),
        ];
        for (field_path, value) in paths {
            if value.trim().is_empty() {
                errors.push(ValidationError::new(
                    field_path,
                    "The path cannot be empty. Please specify a path relative to the site root",
                ));
            }
        }

        if !is_repository(&self.repository) {
            errors.push(ValidationError::new(
                "repository",
                format!(
                    "Invalid repository '{}'. Expected \"owner/name\", for example: \"foss4gov/foss4gov\"",
                    self.repository
                ),
            ));
        }

        if Language::find(&self.default_language).is_none() {
            errors.push(ValidationError::new(
                "defaultLanguage",
                format!("Unsupported language '{}'", self.default_language),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
