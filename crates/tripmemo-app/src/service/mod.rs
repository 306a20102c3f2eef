pub mod catalogue;
pub mod invoice_service;
pub mod memo_service;
pub mod table_service;

pub use catalogue::{build_catalogue, find_service, ServiceEntry};
