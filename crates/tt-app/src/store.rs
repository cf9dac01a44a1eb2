//! Record store accessors.
//!
//! Each fetch returns the whole table. `Ok(None)` means the store answered
//! with no data; callers treat it as an empty collection.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;
use tt_core::{Container, Ship, Unit};

use crate::error::{AppError, AppResult};

pub const SHIPS_TABLE: &str = "ships";
pub const CONTAINERS_TABLE: &str = "containers";
pub const UNITS_TABLE: &str = "units";

pub trait RecordStore: Sync {
    fn fetch_ships(&self) -> AppResult<Option<Vec<Ship>>>;
    fn fetch_containers(&self) -> AppResult<Option<Vec<Container>>>;
    fn fetch_units(&self) -> AppResult<Option<Vec<Unit>>>;
}

/// Tables stored as `<table>.json` files in one directory.
///
/// A file holding `null` is an empty answer. A missing or malformed file is a
/// fetch failure.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root_dir: PathBuf,
}

impl DirectoryStore {
    pub fn new(root_dir: PathBuf) -> Self {
        Self { root_dir }
    }

    fn table_path(&self, table: &str) -> PathBuf {
        self.root_dir.join(format!("{}.json", table))
    }

    fn read_table<T: DeserializeOwned>(&self, table: &'static str) -> AppResult<Option<Vec<T>>> {
        let path = self.table_path(table);
        let content = fs::read_to_string(&path).map_err(|e| AppError::Fetch {
            table,
            message: format!("{}: {}", path.display(), e),
        })?;
        serde_json::from_str(&content).map_err(|e| AppError::Fetch {
            table,
            message: format!("{}: {}", path.display(), e),
        })
    }
}

impl RecordStore for DirectoryStore {
    fn fetch_ships(&self) -> AppResult<Option<Vec<Ship>>> {
        self.read_table(SHIPS_TABLE)
    }

    fn fetch_containers(&self) -> AppResult<Option<Vec<Container>>> {
        self.read_table(CONTAINERS_TABLE)
    }

    fn fetch_units(&self) -> AppResult<Option<Vec<Unit>>> {
        self.read_table(UNITS_TABLE)
    }
}

/// Collections held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub ships: Option<Vec<Ship>>,
    pub containers: Option<Vec<Container>>,
    pub units: Option<Vec<Unit>>,
}

impl MemoryStore {
    pub fn new(ships: Vec<Ship>, containers: Vec<Container>, units: Vec<Unit>) -> Self {
        Self {
            ships: Some(ships),
            containers: Some(containers),
            units: Some(units),
        }
    }
}

impl RecordStore for MemoryStore {
    fn fetch_ships(&self) -> AppResult<Option<Vec<Ship>>> {
        Ok(self.ships.clone())
    }

    fn fetch_containers(&self) -> AppResult<Option<Vec<Container>>> {
        Ok(self.containers.clone())
    }

    fn fetch_units(&self) -> AppResult<Option<Vec<Unit>>> {
        Ok(self.units.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> DirectoryStore {
        let dir = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        DirectoryStore::new(dir)
    }

    #[test]
    fn null_table_is_none() {
        let store = temp_store("tt_store_null_table");
        fs::write(store.table_path(SHIPS_TABLE), "null").unwrap();
        assert!(store.fetch_ships().unwrap().is_none());
    }

    #[test]
    fn reads_records() {
        let store = temp_store("tt_store_reads");
        fs::write(
            store.table_path(UNITS_TABLE),
            r#"[{"id":"U1","floor":2,"facade":"A","qty":4,"status":"complete","progress":100}]"#,
        )
        .unwrap();
        let units = store.fetch_units().unwrap().unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].quantity(), 4);
    }

    #[test]
    fn rows_with_null_fields_still_load() {
        let store = temp_store("tt_store_null_fields");
        fs::write(
            store.table_path(CONTAINERS_TABLE),
            r#"[{"id":"C1","ship":"Aurora","status":null}]"#,
        )
        .unwrap();
        fs::write(
            store.table_path(UNITS_TABLE),
            r#"[{"id":"U1","floor":2,"facade":"A","qty":3},
                {"id":"U2","floor":3,"facade":"A","qty":1,"status":"production","progress":null}]"#,
        )
        .unwrap();

        let containers = store.fetch_containers().unwrap().unwrap();
        assert_eq!(containers[0].status.category(), tt_core::Category::Neutral);

        let units = store.fetch_units().unwrap().unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].status.category(), tt_core::Category::Neutral);
        assert_eq!(units[1].progress, 0);
    }

    #[test]
    fn missing_table_is_fetch_error() {
        let store = temp_store("tt_store_missing");
        let err = store.fetch_containers().unwrap_err();
        assert!(matches!(err, AppError::Fetch { table: "containers", .. }));
    }

    #[test]
    fn malformed_table_is_fetch_error() {
        let store = temp_store("tt_store_malformed");
        fs::write(store.table_path(SHIPS_TABLE), "{not json").unwrap();
        assert!(matches!(
            store.fetch_ships(),
            Err(AppError::Fetch { table: "ships", .. })
        ));
    }
}
