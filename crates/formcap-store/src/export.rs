use csv::{QuoteStyle, WriterBuilder};

use crate::error::{Error, Result};
use formcap_types::SubmittedRecord;

/// Fixed export header. The value columns are the field ids of the stock
/// feedback form; records from other forms fill what they have and leave
/// the rest empty.
pub const CSV_COLUMNS: [&str; 6] = ["Date", "Name", "Email", "Message", "Rating", "Features"];

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Serialize records to delimited text: comma-separated, every field
/// double-quoted, one row per record, multi-values joined with `", "`.
pub fn records_to_csv(records: &[SubmittedRecord]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(CSV_COLUMNS)?;

    for record in records {
        let name = match record.display_value("name") {
            name if name.is_empty() => "Anonymous".to_string(),
            name => name,
        };
        writer.write_record([
            record.timestamp.format(DATE_FORMAT).to_string(),
            name,
            record.display_value("email"),
            record.display_value("message"),
            record.display_value("rating"),
            record.display_value("features"),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| Error::Storage(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| Error::Storage(err.to_string()))
}
