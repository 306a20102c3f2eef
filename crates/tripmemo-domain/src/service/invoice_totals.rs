//! Invoice aggregation
//!
//! Sums a selection of memo summaries into invoice totals. The memo
//! sequence is taken as given: display numbering is the 1-based input
//! position and the aggregator never reorders it.

use crate::model::{Invoice, MemoSummary};
use crate::service::amount_words::amount_in_words;
use crate::service::charge_calculator::parse_or_zero;

/// Derived totals of an invoice
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceTotals {
    pub total_amount: String,
    pub balance: String,
    pub total_in_words: String,
}

/// Compute invoice totals over an ordered memo selection.
pub fn aggregate(memos: &[MemoSummary], less_advance: &str) -> InvoiceTotals {
    // Folding from +0.0 keeps an empty selection at "0.00"; summing an
    // empty f64 iterator gives -0.0, which would render as "-0.00".
    let total = memos
        .iter()
        .fold(0.0, |acc, m| acc + parse_or_zero(&m.total_amount));
    let balance = total - parse_or_zero(less_advance);
    InvoiceTotals {
        total_amount: format!("{:.2}", total),
        balance: format!("{:.2}", balance),
        total_in_words: amount_in_words(total.round().max(0.0) as u64),
    }
}

/// Recompute an invoice's derived fields in place, after its memo set or
/// less-advance changed.
pub fn recompute_invoice(invoice: &mut Invoice) {
    let totals = aggregate(&invoice.memos, &invoice.less_advance);
    invoice.total_amount = totals.total_amount;
    invoice.balance = totals.balance;
    invoice.total_in_words = totals.total_in_words;
}
