use serde::{Deserialize, Serialize};

use super::MemoSummary;

/// Aggregation of one customer's memos into one billing document.
///
/// Memo lines keep the order in which they were selected; the aggregator
/// never re-sorts them. A persisted invoice is read/print-only — there is
/// no in-place edit path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Storage id assigned on save, None until persisted
    #[serde(default)]
    pub id: Option<u64>,
    pub invoice_no: String,
    pub invoice_date: String,
    pub customer_name: String,
    pub customer_address1: String,
    pub customer_address2: String,
    pub memos: Vec<MemoSummary>,
    pub less_advance: String,
    pub remark: String,

    // Derived
    pub total_amount: String,
    pub balance: String,
    pub total_in_words: String,
}

impl Default for Invoice {
    fn default() -> Self {
        Self {
            id: None,
            invoice_no: String::new(),
            invoice_date: String::new(),
            customer_name: String::new(),
            customer_address1: String::new(),
            customer_address2: String::new(),
            memos: Vec::new(),
            less_advance: "0".to_string(),
            remark: String::new(),
            total_amount: "0".to_string(),
            balance: "0".to_string(),
            total_in_words: String::new(),
        }
    }
}
