//! Infrastructure layer - file-backed stores, CSV exchange, seed data

pub mod persistence;
pub mod seed;
pub mod sheet_csv;
