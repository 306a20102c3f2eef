//! File-based implementation of CustomerRepository

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use tripmemo_domain::model::Customer;
use tripmemo_domain::repository::CustomerRepository;
use tripmemo_types::{Error, Result, StoreError};

/// Customer directory backed by a single JSON file.
///
/// Like the flat sheets, customers are addressed by position; callers
/// resolve a row picked from a filtered view before updating or deleting.
pub struct FileCustomerRepository {
    store_path: PathBuf,
    customers: RefCell<Vec<Customer>>,
}

impl FileCustomerRepository {
    /// Create or load the customer store under `store_dir`, seeding it
    /// when no file exists yet
    pub fn open(store_dir: PathBuf, seed: &[Customer]) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("customers.json");

        let customers = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader)
                .map_err(|e| StoreError::Corrupted(format!("{}: {}", store_path.display(), e)))?
        } else {
            seed.to_vec()
        };

        Ok(Self {
            store_path,
            customers: RefCell::new(customers),
        })
    }

    fn persist(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &*self.customers.borrow())?;
        Ok(())
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        let len = self.customers.borrow().len();
        if index >= len {
            return Err(StoreError::IndexOutOfBounds { index, len }.into());
        }
        Ok(())
    }
}

impl CustomerRepository for FileCustomerRepository {
    fn find_all(&self) -> std::result::Result<Vec<Customer>, Error> {
        Ok(self.customers.borrow().clone())
    }

    fn search_by_name(&self, name: &str) -> std::result::Result<Vec<Customer>, Error> {
        let needle = name.to_lowercase();
        Ok(self
            .customers
            .borrow()
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    fn insert(&self, customer: &Customer) -> std::result::Result<(), Error> {
        self.customers.borrow_mut().push(customer.clone());
        self.persist()
    }

    fn update_at(&self, index: usize, customer: &Customer) -> std::result::Result<(), Error> {
        self.check_bounds(index)?;
        self.customers.borrow_mut()[index] = customer.clone();
        self.persist()
    }

    fn delete_at(&self, index: usize) -> std::result::Result<(), Error> {
        self.check_bounds(index)?;
        self.customers.borrow_mut().remove(index);
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn customer(name: &str) -> Customer {
        Customer {
            name: name.to_string(),
            address1: "123 Main St".to_string(),
            address2: "Anytown".to_string(),
        }
    }

    #[test]
    fn test_seed_applies_only_to_fresh_store() {
        let dir = tempdir().unwrap();
        let seed = vec![customer("John Doe")];
        {
            let repo = FileCustomerRepository::open(dir.path().to_path_buf(), &seed).unwrap();
            assert_eq!(repo.find_all().unwrap().len(), 1);
            repo.insert(&customer("Jane Smith")).unwrap();
        }
        // Reopening with a different seed must not re-seed
        let repo = FileCustomerRepository::open(dir.path().to_path_buf(), &[]).unwrap();
        assert_eq!(repo.find_all().unwrap().len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let dir = tempdir().unwrap();
        let repo = FileCustomerRepository::open(dir.path().to_path_buf(), &[]).unwrap();
        repo.insert(&customer("John Doe")).unwrap();
        repo.insert(&customer("Jane Smith")).unwrap();

        let hits = repo.search_by_name("john").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "John Doe");
        assert!(repo.search_by_name("nobody").unwrap().is_empty());
    }

    #[test]
    fn test_index_ops_fail_out_of_bounds() {
        let dir = tempdir().unwrap();
        let repo = FileCustomerRepository::open(dir.path().to_path_buf(), &[]).unwrap();
        repo.insert(&customer("John Doe")).unwrap();

        assert!(repo.update_at(1, &customer("X")).is_err());
        assert!(repo.delete_at(5).is_err());
        repo.update_at(0, &customer("Johnny Doe")).unwrap();
        assert_eq!(repo.find_all().unwrap()[0].name, "Johnny Doe");
        repo.delete_at(0).unwrap();
        assert!(repo.find_all().unwrap().is_empty());
    }
}
