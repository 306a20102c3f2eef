//! End-to-end billing flow over a fresh store
//!
//! Drives the app layer the way the CLI does: open the stores in a
//! temporary directory, book memos against the seeded catalogue, roll
//! them into an invoice, and check every derived figure on the way.

use tempfile::tempdir;

use tripmemo_app::repository::{open_areas_sheet_at, open_lookup_sheet_at, open_rates_sheet_at};
use tripmemo_app::service::{build_catalogue, invoice_service, memo_service};
use tripmemo_domain::repository::{InvoiceRepository, MemoRepository, SheetRepository};
use tripmemo_infra::persistence::{
    FileCustomerRepository, FileInvoiceRepository, FileMemoRepository,
};
use tripmemo_infra::seed;
use tripmemo_types::MemoStatus;

#[test]
fn books_two_trips_and_invoices_them() {
    let dir = tempdir().unwrap();
    let store = dir.path().to_path_buf();

    let memos = FileMemoRepository::open(store.clone()).unwrap();
    let invoices = FileInvoiceRepository::open(store.clone()).unwrap();
    let customers = FileCustomerRepository::open(store.clone(), &seed::customers_seed()).unwrap();

    let areas = open_areas_sheet_at(store.clone()).unwrap();
    let rates = open_rates_sheet_at(store.clone()).unwrap();
    let catalogue = build_catalogue(&areas.list().unwrap(), &rates.list().unwrap());
    assert!(!catalogue.is_empty());

    // First trip: seeded customer, first catalogue service, a 6-hour shift
    let service_key = catalogue[0].key.clone();
    let mut memo = memo_service::new_memo(&memos, "SVS").unwrap();
    assert_eq!(memo.memo_no, "SVS-001");

    memo_service::apply_customer(&customers, &mut memo, "John Doe").unwrap();
    assert_eq!(memo.customer_address1, "123 Main St");

    memo_service::apply_service_primary(&mut memo, &catalogue, &service_key);
    assert!(!memo.vehicle_type.is_empty());
    assert_ne!(memo.minimum_charges1, "0");

    memo.vehicle_no = "TN 01 AB 1234".to_string();
    memo.starting_time1 = "09:00".to_string();
    memo.closing_time1 = "15:00".to_string();
    memo.starting_km1 = "1000".to_string();
    memo.closing_km1 = "1050".to_string();

    let first = memo_service::save_memo(&memos, &memo).unwrap();
    assert_eq!(first.total_hours, "6.00");
    assert_eq!(first.total_km, "50");
    assert_eq!(first.status, MemoStatus::Pending);

    // Second trip for the same customer, charges only
    let mut second = memo_service::new_memo(&memos, "SVS").unwrap();
    assert_eq!(second.memo_no, "SVS-002");
    memo_service::apply_customer(&customers, &mut second, "John Doe").unwrap();
    second.minimum_charges1 = "750".to_string();
    let second = memo_service::save_memo(&memos, &second).unwrap();
    assert_eq!(second.total_amount, "750.00");

    let pending = memos.find_pending_by_customer("John Doe").unwrap();
    assert_eq!(pending.len(), 2);

    // Roll both into an invoice
    let nos = vec![first.memo_no.clone(), second.memo_no.clone()];
    let draft = invoice_service::build_invoice(&memos, &invoices, &nos, "INV").unwrap();
    assert_eq!(draft.invoice_no, "INV-001");
    assert_eq!(draft.customer_name, "John Doe");
    assert_eq!(draft.memos.len(), 2);

    let stored = invoice_service::save_invoice(&memos, &invoices, &draft).unwrap();
    assert_eq!(stored.id, Some(1));

    // Both memos are now billed
    assert!(memos.find_pending_by_customer("John Doe").unwrap().is_empty());
    let first_again = memos.find_by_memo_no("SVS-001").unwrap().unwrap();
    assert_eq!(first_again.status, MemoStatus::Completed);

    // Everything survives a reopen
    drop(memos);
    drop(invoices);
    let memos = FileMemoRepository::open(store.clone()).unwrap();
    let invoices = FileInvoiceRepository::open(store.clone()).unwrap();
    assert_eq!(memos.find_all().unwrap().len(), 2);
    let reloaded = invoice_service::load_invoice(&invoices, 1).unwrap();
    assert_eq!(reloaded.memos.len(), 2);
    assert_eq!(reloaded.total_amount, stored.total_amount);

    // The next numbers carry on from what was issued
    assert_eq!(memos.next_memo_no("SVS").unwrap(), "SVS-003");
    assert_eq!(invoices.next_invoice_no("INV").unwrap(), "INV-002");

    // Lookup sheet seeds independently of the billing stores
    let lookup = open_lookup_sheet_at(store).unwrap();
    assert!(lookup.header().unwrap().is_some());
}
