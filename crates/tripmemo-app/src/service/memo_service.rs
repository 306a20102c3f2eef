//! Memo use cases
//!
//! The memo workflow: issue a fresh memo with a new number, fill raw
//! fields (customer and service selections copy reference data in), and
//! save. Every save recomputes the full derived-field set first, so a
//! persisted memo is always internally consistent.

use chrono::Local;

use tripmemo_domain::model::TripMemo;
use tripmemo_domain::repository::{CustomerRepository, MemoRepository};
use tripmemo_domain::service::recompute;
use tripmemo_types::{Error, Result};

use crate::service::catalogue::{find_service, ServiceEntry};

/// Issue a new memo: fresh number, dated today, defaulted raw fields.
pub fn new_memo(memos: &impl MemoRepository, prefix: &str) -> Result<TripMemo> {
    let mut memo = TripMemo::default();
    memo.memo_no = memos.next_memo_no(prefix)?;
    memo.operated_date = Local::now().date_naive().to_string();
    Ok(recompute(&memo))
}

/// Fill the memo's customer block. An unknown name leaves the address
/// lines empty rather than failing.
pub fn apply_customer(
    customers: &impl CustomerRepository,
    memo: &mut TripMemo,
    name: &str,
) -> Result<()> {
    memo.customer_name = name.to_string();
    match customers.search_by_name(name)?.into_iter().next() {
        Some(customer) => {
            memo.customer_address1 = customer.address1;
            memo.customer_address2 = customer.address2;
        }
        None => {
            memo.customer_address1 = String::new();
            memo.customer_address2 = String::new();
        }
    }
    Ok(())
}

/// Select a service into slot 1: fills vehicle type, minimum hours and
/// charges, additional-hour rate and driver-bata rate. An unknown key
/// resets the slot to zero defaults.
pub fn apply_service_primary(memo: &mut TripMemo, catalogue: &[ServiceEntry], key: &str) {
    match find_service(catalogue, key) {
        Some(service) => {
            memo.service_item1 = key.to_string();
            memo.vehicle_type = service.vehicle_type.clone();
            memo.minimum_hours1 = service.minimum_hours.clone();
            memo.minimum_charges1 = service.minimum_charges.clone();
            memo.additional_hour_rate = service.additional_hour_rate.clone();
            memo.driver_bata_rate = if service.driver_bata.is_empty() {
                "0".to_string()
            } else {
                service.driver_bata.clone()
            };
        }
        None => {
            memo.service_item1 = String::new();
            memo.vehicle_type = String::new();
            memo.minimum_hours1 = "0".to_string();
            memo.minimum_charges1 = "0".to_string();
            memo.additional_hour_rate = "0".to_string();
            memo.driver_bata_rate = "0".to_string();
        }
    }
}

/// Select a service into slot 2: fills only that slot's minimum hours and
/// charges.
pub fn apply_service_secondary(memo: &mut TripMemo, catalogue: &[ServiceEntry], key: &str) {
    match find_service(catalogue, key) {
        Some(service) => {
            memo.service_item2 = key.to_string();
            memo.minimum_hours2 = service.minimum_hours.clone();
            memo.minimum_charges2 = service.minimum_charges.clone();
        }
        None => {
            memo.service_item2 = String::new();
            memo.minimum_hours2 = "0".to_string();
            memo.minimum_charges2 = "0".to_string();
        }
    }
}

/// Recompute and persist a memo, returning the record as stored.
pub fn save_memo(memos: &impl MemoRepository, memo: &TripMemo) -> Result<TripMemo> {
    let computed = recompute(memo);
    memos.save(&computed)?;
    Ok(computed)
}

/// Load a memo by number.
pub fn load_memo(memos: &impl MemoRepository, memo_no: &str) -> Result<TripMemo> {
    memos
        .find_by_memo_no(memo_no)?
        .ok_or_else(|| Error::MemoNotFound(memo_no.to_string()))
}

/// Delete a memo by number.
pub fn delete_memo(memos: &impl MemoRepository, memo_no: &str) -> Result<()> {
    if memos.delete_by_memo_no(memo_no)? {
        Ok(())
    } else {
        Err(Error::MemoNotFound(memo_no.to_string()))
    }
}
