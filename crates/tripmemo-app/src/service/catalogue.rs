//! Service catalogue generation
//!
//! The bookable services are not stored anywhere: they are the join of
//! the areas sheet (location, category) with the rate table, one entry
//! per vehicle type whose rate row `"{vehicle}_{category}"` exists. The
//! entry key encodes category, location and vehicle so a memo records
//! exactly which combination priced it.

use serde::Serialize;
use tripmemo_domain::model::SheetRow;

use crate::constants::VEHICLE_TYPES;

/// One bookable service, carrying the rate fields a memo copies in when
/// the service is selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceEntry {
    pub location: String,
    pub category: String,
    pub vehicle_type: String,
    /// `"{category}_{location}_{vehicle}"` with spaces replaced by `_`
    pub key: String,
    pub minimum_hours: String,
    pub minimum_km: String,
    pub minimum_charges: String,
    pub additional_hour_rate: String,
    pub running_hours: String,
    pub driver_bata: String,
}

impl ServiceEntry {
    /// Display label used by the memo form's service picker
    pub fn label(&self) -> String {
        format!("{} ({}) - {}", self.location, self.category, self.vehicle_type)
    }
}

/// Build the catalogue from the areas sheet and the rate table body rows
/// (header already excluded). Areas whose category has no rate row for a
/// vehicle type simply contribute no entry for it.
pub fn build_catalogue(areas: &[SheetRow], rates: &[SheetRow]) -> Vec<ServiceEntry> {
    let cell = |row: &SheetRow, i: usize| row.get(i).cloned().unwrap_or_default();

    let mut entries = Vec::new();
    for area in areas {
        let location = cell(area, 0);
        let category = cell(area, 1);
        for vehicle in VEHICLE_TYPES {
            let rate_key = format!("{}_{}", vehicle, category);
            let Some(rate) = rates.iter().find(|r| r.first() == Some(&rate_key)) else {
                continue;
            };
            let key = format!("{}_{}_{}", category, location, vehicle).replace(' ', "_");
            entries.push(ServiceEntry {
                location: location.clone(),
                category: category.clone(),
                vehicle_type: vehicle.to_string(),
                key,
                minimum_hours: cell(rate, 1),
                minimum_km: cell(rate, 2),
                minimum_charges: cell(rate, 3),
                additional_hour_rate: cell(rate, 4),
                running_hours: cell(rate, 5),
                driver_bata: cell(rate, 6),
            });
        }
    }
    entries
}

/// Look a catalogue entry up by its key
pub fn find_service<'a>(catalogue: &'a [ServiceEntry], key: &str) -> Option<&'a ServiceEntry> {
    catalogue.iter().find(|entry| entry.key == key)
}
