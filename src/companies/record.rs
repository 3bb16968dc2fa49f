use serde::Serialize;

/// One listed company, built from a single CSV data row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Company {
    pub name: String,
    pub english_name: String,
    pub website: String,
    pub info_email: String,
    pub linkedin: String,
    pub github: String,
    pub other_repo: String,
}

impl Company {
    /// Builds a record from positional fields.
    ///
    /// Order: name, english-alt, website, email, linkedin, github, other-repo.
    /// Missing trailing fields are empty. Returns `None` when the name or the
    /// website is empty.
    #[must_use]
    pub fn from_fields(fields: Vec<String>) -> Option<Self> {
        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default();

        let company = Self {
            name: next(),
            english_name: next(),
            website: next(),
            info_email: next(),
            linkedin: next(),
            github: next(),
            other_repo: next(),
        };

        (!company.name.is_empty() && !company.website.is_empty()).then_some(company)
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[googletest::test]
    fn from_fields_is_positional() {
        let company = Company::from_fields(fields(&[
            "Acme",
            "Acme Ltd",
            "https://acme.test",
            "info@acme.test",
            "https://linkedin.com/company/acme",
            "https://github.com/acme",
            "https://git.acme.test",
        ]));

        expect_that!(
            company,
            some(all![
                field!(Company.name, eq("Acme")),
                field!(Company.english_name, eq("Acme Ltd")),
                field!(Company.website, eq("https://acme.test")),
                field!(Company.info_email, eq("info@acme.test")),
                field!(Company.linkedin, eq("https://linkedin.com/company/acme")),
                field!(Company.github, eq("https://github.com/acme")),
                field!(Company.other_repo, eq("https://git.acme.test"))
            ])
        );
    }

    #[googletest::test]
    fn from_fields_pads_missing_columns() {
        let company = Company::from_fields(fields(&["Acme", "", "https://acme.test"]));

        expect_that!(company, some(field!(Company.other_repo, eq(""))));
    }

    #[googletest::test]
    fn from_fields_requires_name_and_website() {
        expect_that!(Company::from_fields(fields(&["Acme", "Alt"])), none());
        expect_that!(Company::from_fields(fields(&["", "Alt", "https://a.test"])), none());
        expect_that!(Company::from_fields(Vec::new()), none());
    }
}
