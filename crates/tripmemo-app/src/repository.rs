//! Store wiring for the persistence layer

use std::path::PathBuf;

use tripmemo_infra::persistence::{
    FileCustomerRepository, FileInvoiceRepository, FileMemoRepository, FileSheetRepository,
};
use tripmemo_infra::seed;
use tripmemo_types::Result;

use crate::config::Config;

/// Open the memo store
pub fn open_memo_repo(config: &Config) -> Result<FileMemoRepository> {
    FileMemoRepository::open(config.store_dir()?)
}

/// Open the invoice store
pub fn open_invoice_repo(config: &Config) -> Result<FileInvoiceRepository> {
    FileInvoiceRepository::open(config.store_dir()?)
}

/// Open the customer directory
pub fn open_customer_repo(config: &Config) -> Result<FileCustomerRepository> {
    FileCustomerRepository::open(config.store_dir()?, &seed::customers_seed())
}

/// Open the areas sheet (no header row)
pub fn open_areas_sheet(config: &Config) -> Result<FileSheetRepository> {
    open_areas_sheet_at(config.store_dir()?)
}

/// Open the rate table sheet (header row at position 0)
pub fn open_rates_sheet(config: &Config) -> Result<FileSheetRepository> {
    open_rates_sheet_at(config.store_dir()?)
}

/// Open the lookup sheet (header row at position 0)
pub fn open_lookup_sheet(config: &Config) -> Result<FileSheetRepository> {
    open_lookup_sheet_at(config.store_dir()?)
}

/// Open the areas sheet at a custom directory
pub fn open_areas_sheet_at(store_dir: PathBuf) -> Result<FileSheetRepository> {
    FileSheetRepository::open(store_dir, "areas", false, &seed::areas_seed())
}

/// Open the rate table at a custom directory
pub fn open_rates_sheet_at(store_dir: PathBuf) -> Result<FileSheetRepository> {
    FileSheetRepository::open(store_dir, "rates", true, &seed::rates_seed())
}

/// Open the lookup sheet at a custom directory
pub fn open_lookup_sheet_at(store_dir: PathBuf) -> Result<FileSheetRepository> {
    FileSheetRepository::open(store_dir, "lookup", true, &seed::lookup_seed())
}
