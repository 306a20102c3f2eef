//! Pure billing services

pub mod amount_words;
pub mod charge_calculator;
pub mod invoice_totals;
pub mod row_resolver;

pub use amount_words::amount_in_words;
pub use charge_calculator::{parse_or_zero, recompute, shift_hours};
pub use invoice_totals::{aggregate, recompute_invoice, InvoiceTotals};
pub use row_resolver::resolve_index;
