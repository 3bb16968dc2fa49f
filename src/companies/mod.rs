//! Company directory: CSV parsing and card rendering
/// Card markup
mod card;
/// CSV parsing
mod parser;
/// Company record
mod record;

use std::path::Path;

pub use card::render_card;
pub use parser::{
    data_rows,
    parse_companies,
    parse_row,
};
pub use record::Company;

use crate::i18n::Translator;

/// Sample listing shown when the real CSV cannot be read.
pub const SAMPLE_CSV: &str = r#"name,english_name,website,info_email,linkedin,github,other_repo
"Example Company","Example Inc.","https://example.org","info@example.org","https://www.linkedin.com/company/example","https://github.com/example",""
"Example Company 2","Example Inc. 2","https://example.com","info@example.com","https://www.linkedin.com/company/example","https://github.com/example","""#;

/// Outcome of reading the company CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyListing {
    /// Records parsed from the CSV.
    Loaded(Vec<Company>),
    /// The CSV could not be read; the sample records stand in.
    Failed { error: String, sample: Vec<Company> },
}

impl CompanyListing {
    /// Listing for a CSV read failure.
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed { error: error.into(), sample: parse_companies(SAMPLE_CSV) }
    }

    /// Records to display.
    #[must_use]
    pub fn companies(&self) -> &[Company] {
        match self {
            Self::Loaded(companies) => companies,
            Self::Failed { sample, .. } => sample,
        }
    }
}

/// Reads and parses the company CSV at `path`.
pub async fn load_companies(path: &Path) -> CompanyListing {
    tracing::debug!(path = %path.display(), "Loading companies");
    match tokio::fs::read_to_string(path).await {
        Ok(text) => {
            let companies = parse_companies(&text);
            tracing::debug!(count = companies.len(), "Parsed companies");
            CompanyListing::Loaded(companies)
        }
        Err(e) => {
            tracing::error!(path = %path.display(), "Error loading companies: {e}");
            CompanyListing::failed(e.to_string())
        }
    }
}

/// Renders the inner markup of the company list container.
#[must_use]
pub fn render_listing(listing: &CompanyListing, translator: &Translator) -> String {
    match listing {
        CompanyListing::Loaded(companies) if companies.is_empty() => {
            let message = translator.translate_or("companies.empty", "No companies found");
            format!("<p>{}</p>\n", crate::html::escape(message))
        }
        CompanyListing::Loaded(companies) => companies.iter().map(render_card).collect(),
        CompanyListing::Failed { error, sample } => {
            let template =
                translator.translate_or("companies.error", "Error loading companies: {error}");
            let mut markup =
                format!("<p>{}</p>\n", crate::html::escape(&template.replace("{error}", error)));
            markup.push_str("<p><strong>Using fallback sample data (CSV fetch failed)</strong></p>\n");
            markup.extend(sample.iter().map(render_card));
            markup
        }
    }
}
