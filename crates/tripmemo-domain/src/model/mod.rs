//! Domain models

mod customer;
mod invoice;
mod memo;

pub use customer::Customer;
pub use invoice::Invoice;
pub use memo::{MemoSummary, TripMemo};

/// A row of one of the flat auxiliary sheets (areas, rate table, lookup).
///
/// Rows carry no stable id of their own; a row is addressed solely by its
/// position in the backing sheet.
pub type SheetRow = Vec<String>;
