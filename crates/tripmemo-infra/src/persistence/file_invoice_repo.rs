//! File-based implementation of InvoiceRepository

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use tripmemo_domain::model::Invoice;
use tripmemo_domain::repository::{next_sequence_number, InvoiceRepository};
use tripmemo_types::{Error, Result, StoreError};

/// Invoice store backed by a single JSON file
pub struct FileInvoiceRepository {
    store_path: PathBuf,
    invoices: RefCell<Vec<Invoice>>,
}

impl FileInvoiceRepository {
    /// Create or load the invoice store under `store_dir`
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("invoices.json");

        let invoices = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader)
                .map_err(|e| StoreError::Corrupted(format!("{}: {}", store_path.display(), e)))?
        } else {
            Vec::new()
        };

        Ok(Self {
            store_path,
            invoices: RefCell::new(invoices),
        })
    }

    fn persist(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &*self.invoices.borrow())?;
        Ok(())
    }
}

impl InvoiceRepository for FileInvoiceRepository {
    fn find_all(&self) -> std::result::Result<Vec<Invoice>, Error> {
        Ok(self.invoices.borrow().clone())
    }

    fn find_by_id(&self, id: u64) -> std::result::Result<Option<Invoice>, Error> {
        Ok(self
            .invoices
            .borrow()
            .iter()
            .find(|i| i.id == Some(id))
            .cloned())
    }

    fn save(&self, invoice: &Invoice) -> std::result::Result<u64, Error> {
        let id = {
            let mut invoices = self.invoices.borrow_mut();
            let id = invoices.iter().filter_map(|i| i.id).max().unwrap_or(0) + 1;
            let mut stored = invoice.clone();
            stored.id = Some(id);
            invoices.push(stored);
            id
        };
        self.persist()?;
        Ok(id)
    }

    fn delete_by_id(&self, id: u64) -> std::result::Result<bool, Error> {
        let removed = {
            let mut invoices = self.invoices.borrow_mut();
            let before = invoices.len();
            invoices.retain(|i| i.id != Some(id));
            invoices.len() < before
        };
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    fn next_invoice_no(&self, prefix: &str) -> std::result::Result<String, Error> {
        let invoices = self.invoices.borrow();
        Ok(next_sequence_number(
            invoices.iter().map(|i| i.invoice_no.as_str()),
            prefix,
        ))
    }
}
