//! Reference-table use cases
//!
//! The areas, rates and lookup sheets are edited by value: the caller
//! names the row it saw, and the row's current position is resolved at
//! mutation time. A row that no longer exists is reported rather than
//! guessed at.

use tripmemo_domain::model::SheetRow;
use tripmemo_domain::repository::SheetRepository;
use tripmemo_domain::service::resolve_index;
use tripmemo_types::{Error, Result};

/// Case-insensitive substring search over every cell. An empty term
/// returns the whole sheet.
pub fn search_rows(sheet: &impl SheetRepository, term: &str) -> Result<Vec<SheetRow>> {
    let rows = sheet.list()?;
    if term.trim().is_empty() {
        return Ok(rows);
    }
    let needle = term.to_lowercase();
    Ok(rows
        .into_iter()
        .filter(|row| row.iter().any(|cell| cell.to_lowercase().contains(&needle)))
        .collect())
}

/// Replace `selected` with `replacement`, resolving the row's position
/// first. Returns the index that was updated.
pub fn update_row(
    sheet: &impl SheetRepository,
    selected: &SheetRow,
    replacement: &SheetRow,
) -> Result<usize> {
    let rows = sheet.list()?;
    let index = resolve_index(&rows, selected).ok_or(Error::RowNotFound)?;
    sheet.update_at(index, replacement)?;
    Ok(index)
}

/// Delete `selected`, resolving its position first. Returns the index
/// that was removed.
pub fn delete_row(sheet: &impl SheetRepository, selected: &SheetRow) -> Result<usize> {
    let rows = sheet.list()?;
    let index = resolve_index(&rows, selected).ok_or(Error::RowNotFound)?;
    sheet.delete_at(index)?;
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tripmemo_infra::persistence::FileSheetRepository;

    fn row(cells: &[&str]) -> SheetRow {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn area_sheet(dir: &std::path::Path) -> FileSheetRepository {
        let seed = vec![
            row(&["Guindy", "Area 1"]),
            row(&["Tambaram", "Area 2"]),
            row(&["Guindy", "Area 1"]),
        ];
        FileSheetRepository::open(dir.to_path_buf(), "areas", false, &seed).unwrap()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let dir = tempdir().unwrap();
        let sheet = area_sheet(dir.path());
        let hits = search_rows(&sheet, "guin").unwrap();
        assert_eq!(hits.len(), 2);
        let all = search_rows(&sheet, "  ").unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_update_resolves_first_duplicate() {
        let dir = tempdir().unwrap();
        let sheet = area_sheet(dir.path());
        let index = update_row(
            &sheet,
            &row(&["Guindy", "Area 1"]),
            &row(&["Guindy West", "Area 1"]),
        )
        .unwrap();
        assert_eq!(index, 0);
        let rows = sheet.list().unwrap();
        assert_eq!(rows[0], row(&["Guindy West", "Area 1"]));
        // The later duplicate keeps its value
        assert_eq!(rows[2], row(&["Guindy", "Area 1"]));
    }

    #[test]
    fn test_delete_unknown_row_is_reported() {
        let dir = tempdir().unwrap();
        let sheet = area_sheet(dir.path());
        assert!(matches!(
            delete_row(&sheet, &row(&["Nowhere", "Area 9"])),
            Err(Error::RowNotFound)
        ));
        assert_eq!(sheet.list().unwrap().len(), 3);
    }

    #[test]
    fn test_delete_removes_resolved_row_only() {
        let dir = tempdir().unwrap();
        let sheet = area_sheet(dir.path());
        let index = delete_row(&sheet, &row(&["Tambaram", "Area 2"])).unwrap();
        assert_eq!(index, 1);
        assert_eq!(sheet.list().unwrap().len(), 2);
    }
}
