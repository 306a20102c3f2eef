use serde::{Deserialize, Serialize};
use tripmemo_types::MemoStatus;

/// One billable trip.
///
/// Raw fields come straight from the memo form and stay as text: the
/// billing rules treat anything unparseable as zero rather than rejecting
/// the record, and the printed document needs field-specific decimal
/// rendering. Derived fields are overwritten wholesale by
/// [`recompute`](crate::service::recompute) and are never hand-edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripMemo {
    pub memo_no: String,
    pub operated_date: String,
    pub operated_upto_date: String,
    pub vehicle_no: String,
    pub vehicle_type: String,
    pub customer_name: String,
    pub customer_address1: String,
    pub customer_address2: String,

    // Two independent shift windows (clock time + odometer pair each)
    pub starting_time1: String,
    pub closing_time1: String,
    pub starting_time2: String,
    pub closing_time2: String,
    pub starting_km1: String,
    pub closing_km1: String,
    pub starting_km2: String,
    pub closing_km2: String,

    // Up to two selected service items
    pub service_item1: String,
    pub minimum_hours1: String,
    pub minimum_charges1: String,
    pub service_item2: String,
    pub minimum_hours2: String,
    pub minimum_charges2: String,

    pub additional_hour_rate: String,
    pub fixed_amount_desc: String,
    pub fixed_amount: String,
    pub km_rate: String,
    pub discount_percent: String,
    pub driver_bata_rate: String,
    pub toll_amount: String,
    pub permit_amount: String,
    pub night_halt_amount: String,
    pub other_charges_desc: String,
    pub other_charges_amount: String,
    pub less_advance: String,
    pub remark: String,

    pub status: MemoStatus,

    // Derived fields, recomputed from the raw fields above
    pub total_hours: String,
    pub driver_bata_qty: String,
    pub total_km: String,
    pub extra_hours: String,
    pub extra_hour_amount: String,
    pub km_amount: String,
    pub driver_bata_amount: String,
    pub discount_amount: String,
    pub total_amount: String,
    pub balance: String,
    pub total_in_words: String,
}

impl Default for TripMemo {
    fn default() -> Self {
        Self {
            memo_no: String::new(),
            operated_date: String::new(),
            operated_upto_date: String::new(),
            vehicle_no: String::new(),
            vehicle_type: String::new(),
            customer_name: String::new(),
            customer_address1: String::new(),
            customer_address2: String::new(),
            starting_time1: String::new(),
            closing_time1: String::new(),
            starting_time2: String::new(),
            closing_time2: String::new(),
            starting_km1: "0".to_string(),
            closing_km1: "0".to_string(),
            starting_km2: "0".to_string(),
            closing_km2: "0".to_string(),
            service_item1: String::new(),
            minimum_hours1: "0".to_string(),
            minimum_charges1: "0".to_string(),
            service_item2: String::new(),
            minimum_hours2: "0".to_string(),
            minimum_charges2: "0".to_string(),
            additional_hour_rate: "0".to_string(),
            fixed_amount_desc: "Fixed Amount".to_string(),
            fixed_amount: "0".to_string(),
            km_rate: "0".to_string(),
            discount_percent: "0".to_string(),
            driver_bata_rate: "0".to_string(),
            toll_amount: "0".to_string(),
            permit_amount: "0".to_string(),
            night_halt_amount: "0".to_string(),
            other_charges_desc: "Other Charges".to_string(),
            other_charges_amount: "0".to_string(),
            less_advance: "0".to_string(),
            remark: String::new(),
            status: MemoStatus::Pending,
            total_hours: "0".to_string(),
            driver_bata_qty: "0".to_string(),
            total_km: "0".to_string(),
            extra_hours: "0".to_string(),
            extra_hour_amount: "0".to_string(),
            km_amount: "0".to_string(),
            driver_bata_amount: "0".to_string(),
            discount_amount: "0".to_string(),
            total_amount: "0".to_string(),
            balance: "0".to_string(),
            total_in_words: String::new(),
        }
    }
}

impl TripMemo {
    /// The slice of a memo an invoice carries per line.
    pub fn summary(&self) -> MemoSummary {
        MemoSummary {
            memo_no: self.memo_no.clone(),
            operated_date: self.operated_date.clone(),
            vehicle_no: self.vehicle_no.clone(),
            total_amount: self.total_amount.clone(),
        }
    }
}

/// Per-memo line of an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoSummary {
    pub memo_no: String,
    pub operated_date: String,
    pub vehicle_no: String,
    pub total_amount: String,
}
