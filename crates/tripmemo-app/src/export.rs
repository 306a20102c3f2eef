//! Excel export functionality

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use tripmemo_domain::model::TripMemo;
use tripmemo_domain::service::parse_or_zero;
use tripmemo_types::{Error, Result};

/// Export the memo register to an Excel file.
pub fn export_memo_register(memos: &[TripMemo], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    write_register_sheet(sheet, memos)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_register_sheet(sheet: &mut Worksheet, memos: &[TripMemo]) -> Result<()> {
    sheet
        .set_name("Memo Register")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    let headers = [
        "Memo No",
        "Date",
        "Customer",
        "Vehicle No",
        "Total Hours",
        "Total KM",
        "Total Amount",
        "Balance",
        "Status",
    ];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, memo) in memos.iter().enumerate() {
        let row = (row_idx + 1) as u32;

        sheet
            .write_string(row, 0, &memo.memo_no)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, &memo.operated_date)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 2, &memo.customer_name)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 3, &memo.vehicle_no)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 4, parse_or_zero(&memo.total_hours))
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 5, parse_or_zero(&memo.total_km))
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 6, parse_or_zero(&memo.total_amount))
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 7, parse_or_zero(&memo.balance))
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 8, &memo.status.to_string())
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(0, 12)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 12)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(2, 28)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(3, 14)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}
