//! Quote-aware CSV row parsing
//!
//! Rows are split per line before parsing, so an unbalanced quote only ever
//! affects its own line.

use csv::{
    ReaderBuilder,
    StringRecord,
};

use super::Company;

/// Splits one CSV line into fields.
///
/// Commas inside double-quoted fields are kept, and `""` inside a quoted
/// field is a literal quote. Field content is kept as written, whitespace
/// included. A line that cannot be read yields no fields.
#[must_use]
pub fn parse_row(raw_line: &str) -> Vec<String> {
    let mut reader =
        ReaderBuilder::new().has_headers(false).flexible(true).from_reader(raw_line.as_bytes());

    let mut record = StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => record.iter().map(unquote_padded).collect(),
        Ok(false) => Vec::new(),
        Err(e) => {
            tracing::debug!("Failed to parse CSV row: {e}");
            Vec::new()
        }
    }
}

/// `, "Acme"`: the reader only honours a quote at the very start of a field,
/// so a quoted value padded with whitespace arrives with its quotes.
fn unquote_padded(field: &str) -> String {
    let trimmed = field.trim();
    match trimmed.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        Some(inner) if trimmed.len() != field.len() => inner.replace("\"\"", "\""),
        _ => field.to_string(),
    }
}

/// Non-header, non-empty lines of a CSV blob.
///
/// The first line is always treated as the header and skipped, whatever it
/// contains.
pub fn data_rows(csv_text: &str) -> impl Iterator<Item = &str> {
    csv_text
        .trim()
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
}

/// Parses a CSV blob into company records.
///
/// Rows missing a name or website are dropped silently.
#[must_use]
pub fn parse_companies(csv_text: &str) -> Vec<Company> {
    data_rows(csv_text)
        .filter_map(|line| {
            let company = Company::from_fields(parse_row(line));
            if company.is_none() {
                tracing::debug!(row = line, "Skipping invalid company row");
            }
            company
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain("a,b,c", &["a", "b", "c"])]
    #[case::quoted_comma(r#""Acme, Inc","Acme""#, &["Acme, Inc", "Acme"])]
    #[case::doubled_quote(r#""Say ""hi""",x"#, &["Say \"hi\"", "x"])]
    #[case::empty_fields("a,,,d", &["a", "", "", "d"])]
    #[case::trailing_empty("a,", &["a", ""])]
    #[case::unquoted_kept_as_written(" a , b ", &[" a ", " b "])]
    #[case::quoted_whitespace_kept(r#""  Acme  ",x"#, &["  Acme  ", "x"])]
    #[case::space_before_quote(r#"a, "b ""c""" "#, &["a", "b \"c\""])]
    fn test_parse_row(#[case] line: &str, #[case] expected: &[&str]) {
        assert_that!(parse_row(line), eq(expected));
    }

    #[googletest::test]
    fn parse_row_keeps_positions_of_empty_fields() {
        let fields = parse_row(r#""Acme, Inc","Acme","https://acme.test",,,,""#);

        expect_that!(fields.len(), eq(7));
        expect_that!(fields.first().map(String::as_str), some(eq("Acme, Inc")));
        expect_that!(fields.get(2).map(String::as_str), some(eq("https://acme.test")));
    }

    #[googletest::test]
    fn acme_row_with_unbalanced_quote_parses_to_one_record() {
        let csv = "name,english_name,website,info_email,linkedin,github,other_repo\n\
                   \"Acme, Inc\",\"Acme\",\"https://acme.test\",,,,\"";

        let companies = parse_companies(csv);

        expect_that!(companies.len(), eq(1));
        expect_that!(companies.first().map(|c| c.name.as_str()), some(eq("Acme, Inc")));
        expect_that!(companies.first().map(|c| c.website.as_str()), some(eq("https://acme.test")));
    }

    #[googletest::test]
    fn row_without_website_is_dropped() {
        let csv = "header\n\"X\",,,,,,";

        expect_that!(parse_companies(csv), is_empty());
    }

    #[googletest::test]
    fn row_without_name_is_dropped() {
        let csv = "header\n,Alt,https://example.org,,,,";

        expect_that!(parse_companies(csv), is_empty());
    }

    #[rstest]
    #[case::real_header("name,english_name,website\nA,,https://a.test")]
    #[case::data_looking_header("B,,https://b.test\nA,,https://a.test")]
    #[case::blank_lines("\n\nB,,https://b.test\n\nA,,https://a.test\n\n")]
    #[case::crlf("name,x,website\r\nA,,https://a.test\r\n")]
    fn first_line_is_always_skipped(#[case] csv: &str) {
        let companies = parse_companies(csv);

        assert_that!(
            companies.iter().map(|c| c.name.clone()).collect::<Vec<_>>(),
            elements_are![eq("A")]
        );
    }

    #[googletest::test]
    fn header_only_has_no_data_rows() {
        expect_that!(data_rows("name,website\n   \n").count(), eq(0));
        expect_that!(data_rows("").count(), eq(0));
    }
}
