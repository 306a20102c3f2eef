//! Repository trait definitions for the record stores
//!
//! Each store follows the same transaction discipline: issue one
//! operation, await its completion, then refresh any in-memory view by
//! listing again. Index-addressed operations fail when the index is out
//! of bounds; they never clamp.

use crate::model::{Customer, Invoice, SheetRow, TripMemo};
use tripmemo_types::Error;

/// Store for trip memos, keyed by business memo number
pub trait MemoRepository {
    /// All memos in storage order
    fn find_all(&self) -> Result<Vec<TripMemo>, Error>;

    /// Find a memo by its memo number
    fn find_by_memo_no(&self, memo_no: &str) -> Result<Option<TripMemo>, Error>;

    /// Insert or overwrite the memo carrying this memo number. Records are
    /// persisted whole, never partially.
    fn save(&self, memo: &TripMemo) -> Result<(), Error>;

    /// Delete by memo number; false when no such memo existed
    fn delete_by_memo_no(&self, memo_no: &str) -> Result<bool, Error>;

    /// A customer's memos still awaiting invoicing
    fn find_pending_by_customer(&self, customer_name: &str) -> Result<Vec<TripMemo>, Error>;

    /// Mark memos as billed after their invoice is saved
    fn mark_completed(&self, memo_nos: &[String]) -> Result<(), Error>;

    /// Issue the next memo number for the given prefix
    fn next_memo_no(&self, prefix: &str) -> Result<String, Error>;
}

/// Store for saved invoices
pub trait InvoiceRepository {
    fn find_all(&self) -> Result<Vec<Invoice>, Error>;

    fn find_by_id(&self, id: u64) -> Result<Option<Invoice>, Error>;

    /// Persist a new invoice, returning its assigned storage id
    fn save(&self, invoice: &Invoice) -> Result<u64, Error>;

    /// Delete by id; false when no such invoice existed
    fn delete_by_id(&self, id: u64) -> Result<bool, Error>;

    /// Issue the next invoice number for the given prefix
    fn next_invoice_no(&self, prefix: &str) -> Result<String, Error>;
}

/// Store for the customer directory
pub trait CustomerRepository {
    fn find_all(&self) -> Result<Vec<Customer>, Error>;

    /// Case-insensitive substring match on the customer name
    fn search_by_name(&self, name: &str) -> Result<Vec<Customer>, Error>;

    fn insert(&self, customer: &Customer) -> Result<(), Error>;

    fn update_at(&self, index: usize, customer: &Customer) -> Result<(), Error>;

    fn delete_at(&self, index: usize) -> Result<(), Error>;
}

/// Store for one flat auxiliary sheet (areas, rate table, lookup)
///
/// Sheets with a header row keep it at stored position 0; `list` and the
/// index-addressed operations work over the body rows only.
pub trait SheetRepository {
    /// Header row, if this sheet carries one
    fn header(&self) -> Result<Option<SheetRow>, Error>;

    /// Body rows in storage order, header excluded
    fn list(&self) -> Result<Vec<SheetRow>, Error>;

    fn insert(&self, row: &SheetRow) -> Result<(), Error>;

    fn update_at(&self, index: usize, row: &SheetRow) -> Result<(), Error>;

    fn delete_at(&self, index: usize) -> Result<(), Error>;
}

/// Next number in a `PREFIX-NNN` sequence over the numbers already issued.
///
/// The running integer is the maximum parseable suffix plus one,
/// zero-padded to three digits; numbers that do not match the scheme are
/// skipped rather than rejected.
pub fn next_sequence_number<'a>(existing: impl Iterator<Item = &'a str>, prefix: &str) -> String {
    let max = existing
        .filter_map(|no| no.rsplit_once('-'))
        .filter_map(|(_, suffix)| suffix.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{}-{:03}", prefix, max + 1)
}
