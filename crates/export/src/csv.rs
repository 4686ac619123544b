//! CSV table encoder.
//!
//! Callers describe the table as an ordered column layout; every row is
//! rendered from that same layout, so a header/row field-count mismatch
//! cannot happen by construction.

use crate::exporter::ExportError;

/// One column of the output table: the header title and how to render the
/// field from a row.
pub struct Column<R> {
    pub title: &'static str,
    pub value: fn(&R) -> String,
}

/// Encode `rows` as a CSV document: one comma-joined header line, then one
/// line per row in column order, every line `\n`-terminated. Values
/// containing the delimiter, quotes, or line breaks are quoted per standard
/// CSV rules.
pub fn encode<R>(columns: &[Column<R>], rows: &[R]) -> Result<String, ExportError> {
    let mut buf = Vec::new();

    {
        let mut writer = csv::WriterBuilder::new().from_writer(&mut buf);

        writer.write_record(columns.iter().map(|c| c.title))?;
        for row in rows {
            writer.write_record(columns.iter().map(|c| (c.value)(row)))?;
        }
        writer.flush()?;
    }

    Ok(String::from_utf8(buf)?)
}
