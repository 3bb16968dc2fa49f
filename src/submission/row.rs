use csv::{
    QuoteStyle,
    Terminator,
    WriterBuilder,
};

use super::IssueFields;

/// Renders the fields as one fully quoted `companies.csv` line.
///
/// # Errors
/// Only when the CSV writer fails to flush its in-memory buffer.
pub fn csv_row(fields: &IssueFields) -> Result<String, csv::Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(fields.columns())?;

    let bytes = writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).trim_end_matches('\n').to_string())
}
