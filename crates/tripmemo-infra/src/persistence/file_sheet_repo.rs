//! File-based implementation of SheetRepository
//!
//! One implementation serves all three flat sheets (areas, rate table,
//! lookup). A sheet that carries a header keeps it at stored position 0;
//! the repository's indices are body-relative, so the header can never be
//! updated or deleted through the CRUD operations.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use tripmemo_domain::model::SheetRow;
use tripmemo_domain::repository::SheetRepository;
use tripmemo_types::{Error, Result, StoreError};

pub struct FileSheetRepository {
    store_path: PathBuf,
    has_header: bool,
    rows: RefCell<Vec<SheetRow>>,
}

impl FileSheetRepository {
    /// Create or load the sheet `name` under `store_dir`. A fresh store
    /// starts from `seed` (header included when the sheet has one).
    pub fn open(store_dir: PathBuf, name: &str, has_header: bool, seed: &[SheetRow]) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join(format!("{}.json", name));

        let rows = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader)
                .map_err(|e| StoreError::Corrupted(format!("{}: {}", store_path.display(), e)))?
        } else {
            seed.to_vec()
        };

        // Row 0 of a header sheet is the header; with no rows at all the
        // next insert would silently become one. Only reachable through a
        // hand-edited store file.
        if has_header && rows.is_empty() {
            return Err(StoreError::Corrupted(format!(
                "{}: header sheet has no header row",
                store_path.display()
            ))
            .into());
        }

        Ok(Self {
            store_path,
            has_header,
            rows: RefCell::new(rows),
        })
    }

    fn persist(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &*self.rows.borrow())?;
        Ok(())
    }

    /// Stored offset of body row 0
    fn body_offset(&self) -> usize {
        usize::from(self.has_header && !self.rows.borrow().is_empty())
    }

    fn stored_index(&self, index: usize) -> Result<usize> {
        let offset = self.body_offset();
        let len = self.rows.borrow().len() - offset;
        if index >= len {
            return Err(StoreError::IndexOutOfBounds { index, len }.into());
        }
        Ok(index + offset)
    }
}

impl SheetRepository for FileSheetRepository {
    fn header(&self) -> std::result::Result<Option<SheetRow>, Error> {
        if self.body_offset() == 0 {
            return Ok(None);
        }
        Ok(self.rows.borrow().first().cloned())
    }

    fn list(&self) -> std::result::Result<Vec<SheetRow>, Error> {
        Ok(self.rows.borrow()[self.body_offset()..].to_vec())
    }

    fn insert(&self, row: &SheetRow) -> std::result::Result<(), Error> {
        self.rows.borrow_mut().push(row.clone());
        self.persist()
    }

    fn update_at(&self, index: usize, row: &SheetRow) -> std::result::Result<(), Error> {
        let stored = self.stored_index(index)?;
        self.rows.borrow_mut()[stored] = row.clone();
        self.persist()
    }

    fn delete_at(&self, index: usize) -> std::result::Result<(), Error> {
        let stored = self.stored_index(index)?;
        self.rows.borrow_mut().remove(stored);
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn row(cells: &[&str]) -> SheetRow {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn header_seed() -> Vec<SheetRow> {
        vec![
            row(&["driver_name", "license_number", "phone"]),
            row(&["Ramesh", "TN-01-A-1234", "9876543210"]),
            row(&["Kumar", "TN-02-B-5678", "9876543211"]),
        ]
    }

    #[test]
    fn test_headerless_sheet_lists_everything() {
        let dir = tempdir().unwrap();
        let seed = vec![row(&["Guindy", "Area 1"]), row(&["Avadi", "Area 3"])];
        let repo = FileSheetRepository::open(dir.path().to_path_buf(), "areas", false, &seed).unwrap();
        assert!(repo.header().unwrap().is_none());
        assert_eq!(repo.list().unwrap().len(), 2);
    }

    #[test]
    fn test_header_excluded_from_body_indices() {
        let dir = tempdir().unwrap();
        let repo =
            FileSheetRepository::open(dir.path().to_path_buf(), "lookup", true, &header_seed())
                .unwrap();

        assert_eq!(repo.header().unwrap().unwrap()[0], "driver_name");
        let body = repo.list().unwrap();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0][0], "Ramesh");

        // Body index 0 updates the row after the header
        repo.update_at(0, &row(&["Ramesh", "TN-01-A-1234", "9000000000"]))
            .unwrap();
        assert_eq!(repo.header().unwrap().unwrap()[0], "driver_name");
        assert_eq!(repo.list().unwrap()[0][2], "9000000000");

        // Deleting body index 0 never removes the header
        repo.delete_at(0).unwrap();
        assert_eq!(repo.header().unwrap().unwrap()[0], "driver_name");
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_out_of_bounds_index_fails() {
        let dir = tempdir().unwrap();
        let repo =
            FileSheetRepository::open(dir.path().to_path_buf(), "lookup", true, &header_seed())
                .unwrap();
        assert!(repo.update_at(2, &row(&["x", "y", "z"])).is_err());
        assert!(repo.delete_at(2).is_err());
    }

    #[test]
    fn test_header_sheet_with_no_rows_is_corrupt() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("lookup.json"), "[]").unwrap();
        let result =
            FileSheetRepository::open(dir.path().to_path_buf(), "lookup", true, &header_seed());
        assert!(result.is_err());

        // A fresh header sheet needs its header in the seed too
        assert!(
            FileSheetRepository::open(dir.path().to_path_buf(), "rates", true, &[]).is_err()
        );
    }

    #[test]
    fn test_reopen_round_trip() {
        let dir = tempdir().unwrap();
        {
            let repo =
                FileSheetRepository::open(dir.path().to_path_buf(), "areas", false, &[]).unwrap();
            repo.insert(&row(&["Guindy", "Area 1"])).unwrap();
        }
        let repo =
            FileSheetRepository::open(dir.path().to_path_buf(), "areas", false, &[]).unwrap();
        assert_eq!(repo.list().unwrap(), vec![row(&["Guindy", "Area 1"])]);
    }
}
