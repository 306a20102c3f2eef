//! Standing reference lists for the billing forms

/// Vehicle types the rate table is keyed by
pub const VEHICLE_TYPES: [&str; 6] = [
    "TATA ACE",
    "DOST",
    "407",
    "DCM Toyota",
    "17 Feet",
    "20 Feet",
];

/// Location categories used by the areas sheet
pub const LOCATION_CATEGORIES: [&str; 9] = [
    "Area 1", "Area 2", "Area 3", "Area 4", "Area 5", "Area 6", "Area 7", "Area 8", "Area 9",
];
