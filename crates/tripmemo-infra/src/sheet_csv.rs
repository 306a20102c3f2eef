//! CSV exchange for the flat sheets
//!
//! Sheets move in and out of the tool as plain CSV so the office can edit
//! them in a spreadsheet. Rows are free-form text; no typing is applied
//! on the way in.

use std::path::Path;

use tripmemo_domain::model::SheetRow;
use tripmemo_types::Result;

/// Write a sheet to CSV, header first when present.
pub fn write_sheet_csv(
    path: &Path,
    header: Option<&SheetRow>,
    rows: &[SheetRow],
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    if let Some(header) = header {
        writer.write_record(header)?;
    }
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a sheet from CSV. When `has_header` is set the first record is
/// returned separately as the header.
pub fn read_sheet_csv(path: &Path, has_header: bool) -> Result<(Option<SheetRow>, Vec<SheetRow>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows: Vec<SheetRow> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    if has_header && !rows.is_empty() {
        let header = rows.remove(0);
        Ok((Some(header), rows))
    } else {
        Ok((None, rows))
    }
}
