//! Invoice use cases
//!
//! An invoice is built from a selection of memo numbers: the first memo
//! contributes the customer block, each memo contributes a summary line,
//! and the totals are aggregated over those lines. Saving the invoice
//! marks the included memos completed.

use chrono::Local;

use tripmemo_domain::model::Invoice;
use tripmemo_domain::repository::{InvoiceRepository, MemoRepository};
use tripmemo_domain::service::recompute_invoice;
use tripmemo_types::{Error, Result};

/// Assemble a draft invoice from the given memo numbers. Unknown numbers
/// are skipped; an empty result set is an error.
pub fn build_invoice(
    memos: &impl MemoRepository,
    invoices: &impl InvoiceRepository,
    memo_nos: &[String],
    prefix: &str,
) -> Result<Invoice> {
    let mut selected = Vec::new();
    for memo_no in memo_nos {
        if let Some(memo) = memos.find_by_memo_no(memo_no)? {
            selected.push(memo);
        }
    }
    if selected.is_empty() {
        return Err(Error::NoMemosSelected);
    }

    let mut invoice = Invoice::default();
    invoice.invoice_no = invoices.next_invoice_no(prefix)?;
    invoice.invoice_date = Local::now().date_naive().to_string();
    invoice.customer_name = selected[0].customer_name.clone();
    invoice.customer_address1 = selected[0].customer_address1.clone();
    invoice.customer_address2 = selected[0].customer_address2.clone();
    invoice.memos = selected.iter().map(|m| m.summary()).collect();
    recompute_invoice(&mut invoice);
    Ok(invoice)
}

/// Recompute and persist an invoice, then mark its memos completed.
/// Returns the invoice as stored, id assigned.
pub fn save_invoice(
    memos: &impl MemoRepository,
    invoices: &impl InvoiceRepository,
    invoice: &Invoice,
) -> Result<Invoice> {
    let mut computed = invoice.clone();
    recompute_invoice(&mut computed);
    let id = invoices.save(&computed)?;
    computed.id = Some(id);
    let memo_nos: Vec<String> = computed.memos.iter().map(|m| m.memo_no.clone()).collect();
    memos.mark_completed(&memo_nos)?;
    Ok(computed)
}

/// Load an invoice by id.
pub fn load_invoice(invoices: &impl InvoiceRepository, id: u64) -> Result<Invoice> {
    invoices
        .find_by_id(id)?
        .ok_or(Error::InvoiceNotFound(id))
}

/// Delete an invoice by id. The memos it covered stay completed.
pub fn delete_invoice(invoices: &impl InvoiceRepository, id: u64) -> Result<()> {
    if invoices.delete_by_id(id)? {
        Ok(())
    } else {
        Err(Error::InvoiceNotFound(id))
    }
}
