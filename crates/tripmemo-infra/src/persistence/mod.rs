//! File-backed record stores

mod file_customer_repo;
mod file_invoice_repo;
mod file_memo_repo;
mod file_sheet_repo;

pub use file_customer_repo::FileCustomerRepository;
pub use file_invoice_repo::FileInvoiceRepository;
pub use file_memo_repo::FileMemoRepository;
pub use file_sheet_repo::FileSheetRepository;
