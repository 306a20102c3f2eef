//! File-based implementation of MemoRepository

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use tripmemo_domain::model::TripMemo;
use tripmemo_domain::repository::{next_sequence_number, MemoRepository};
use tripmemo_types::{Error, MemoStatus, Result, StoreError};

/// Memo store backed by a single JSON file.
///
/// Rows are held in memory and the whole file is rewritten after every
/// mutation, so a save either fully lands on disk or fails as one unit.
pub struct FileMemoRepository {
    store_path: PathBuf,
    memos: RefCell<Vec<TripMemo>>,
}

impl FileMemoRepository {
    /// Create or load the memo store under `store_dir`
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("memos.json");

        let memos = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader)
                .map_err(|e| StoreError::Corrupted(format!("{}: {}", store_path.display(), e)))?
        } else {
            Vec::new()
        };

        Ok(Self {
            store_path,
            memos: RefCell::new(memos),
        })
    }

    fn persist(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &*self.memos.borrow())?;
        Ok(())
    }
}

impl MemoRepository for FileMemoRepository {
    fn find_all(&self) -> std::result::Result<Vec<TripMemo>, Error> {
        Ok(self.memos.borrow().clone())
    }

    fn find_by_memo_no(&self, memo_no: &str) -> std::result::Result<Option<TripMemo>, Error> {
        Ok(self
            .memos
            .borrow()
            .iter()
            .find(|m| m.memo_no == memo_no)
            .cloned())
    }

    fn save(&self, memo: &TripMemo) -> std::result::Result<(), Error> {
        {
            let mut memos = self.memos.borrow_mut();
            match memos.iter_mut().find(|m| m.memo_no == memo.memo_no) {
                Some(existing) => *existing = memo.clone(),
                None => memos.push(memo.clone()),
            }
        }
        self.persist()
    }

    fn delete_by_memo_no(&self, memo_no: &str) -> std::result::Result<bool, Error> {
        let removed = {
            let mut memos = self.memos.borrow_mut();
            let before = memos.len();
            memos.retain(|m| m.memo_no != memo_no);
            memos.len() < before
        };
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    fn find_pending_by_customer(
        &self,
        customer_name: &str,
    ) -> std::result::Result<Vec<TripMemo>, Error> {
        Ok(self
            .memos
            .borrow()
            .iter()
            .filter(|m| m.status == MemoStatus::Pending && m.customer_name == customer_name)
            .cloned()
            .collect())
    }

    fn mark_completed(&self, memo_nos: &[String]) -> std::result::Result<(), Error> {
        {
            let mut memos = self.memos.borrow_mut();
            for memo in memos.iter_mut() {
                if memo_nos.contains(&memo.memo_no) {
                    memo.status = MemoStatus::Completed;
                }
            }
        }
        self.persist()
    }

    fn next_memo_no(&self, prefix: &str) -> std::result::Result<String, Error> {
        let memos = self.memos.borrow();
        Ok(next_sequence_number(
            memos.iter().map(|m| m.memo_no.as_str()),
            prefix,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn memo(no: &str, customer: &str) -> TripMemo {
        TripMemo {
            memo_no: no.to_string(),
            customer_name: customer.to_string(),
            ..TripMemo::default()
        }
    }

    #[test]
    fn test_save_is_upsert_by_memo_no() {
        let dir = tempdir().unwrap();
        let repo = FileMemoRepository::open(dir.path().to_path_buf()).unwrap();

        let mut m = memo("SVS-001", "John Doe");
        repo.save(&m).unwrap();
        m.vehicle_no = "TN01AB1234".to_string();
        repo.save(&m).unwrap();

        let all = repo.find_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].vehicle_no, "TN01AB1234");
    }

    #[test]
    fn test_reopen_round_trip() {
        let dir = tempdir().unwrap();
        {
            let repo = FileMemoRepository::open(dir.path().to_path_buf()).unwrap();
            repo.save(&memo("SVS-001", "John Doe")).unwrap();
            repo.save(&memo("SVS-002", "Jane Smith")).unwrap();
        }
        let repo = FileMemoRepository::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(repo.find_all().unwrap().len(), 2);
        assert!(repo.find_by_memo_no("SVS-002").unwrap().is_some());
    }

    #[test]
    fn test_pending_query_and_completion() {
        let dir = tempdir().unwrap();
        let repo = FileMemoRepository::open(dir.path().to_path_buf()).unwrap();
        repo.save(&memo("SVS-001", "John Doe")).unwrap();
        repo.save(&memo("SVS-002", "John Doe")).unwrap();
        repo.save(&memo("SVS-003", "Jane Smith")).unwrap();

        assert_eq!(repo.find_pending_by_customer("John Doe").unwrap().len(), 2);

        repo.mark_completed(&["SVS-001".to_string()]).unwrap();
        let pending = repo.find_pending_by_customer("John Doe").unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].memo_no, "SVS-002");
    }

    #[test]
    fn test_next_memo_no() {
        let dir = tempdir().unwrap();
        let repo = FileMemoRepository::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(repo.next_memo_no("SVS").unwrap(), "SVS-001");
        repo.save(&memo("SVS-007", "John Doe")).unwrap();
        assert_eq!(repo.next_memo_no("SVS").unwrap(), "SVS-008");
    }

    #[test]
    fn test_delete() {
        let dir = tempdir().unwrap();
        let repo = FileMemoRepository::open(dir.path().to_path_buf()).unwrap();
        repo.save(&memo("SVS-001", "John Doe")).unwrap();
        assert!(repo.delete_by_memo_no("SVS-001").unwrap());
        assert!(!repo.delete_by_memo_no("SVS-001").unwrap());
        assert!(repo.find_all().unwrap().is_empty());
    }
}
