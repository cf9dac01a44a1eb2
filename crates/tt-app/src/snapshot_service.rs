//! Snapshot fetching.

use std::path::Path;
use std::time::Instant;
use tt_core::Snapshot;
use tt_project::{DashboardConfig, SourceDef};

use crate::error::{AppError, AppResult};
use crate::store::{
    CONTAINERS_TABLE, DirectoryStore, MemoryStore, RecordStore, SHIPS_TABLE, UNITS_TABLE,
};

/// Fetch all three tables concurrently and combine them into one snapshot.
///
/// Nothing is returned until every fetch has finished. If any fetch fails the
/// whole snapshot fails; the first failing table in ships, containers, units
/// order is reported.
pub fn fetch_snapshot<S: RecordStore + ?Sized>(store: &S) -> AppResult<Snapshot> {
    let started = Instant::now();

    let (ships, (containers, units)) = rayon::join(
        || store.fetch_ships(),
        || rayon::join(|| store.fetch_containers(), || store.fetch_units()),
    );

    let ships = ships.inspect_err(|e| log_failure(SHIPS_TABLE, e))?;
    let containers = containers.inspect_err(|e| log_failure(CONTAINERS_TABLE, e))?;
    let units = units.inspect_err(|e| log_failure(UNITS_TABLE, e))?;

    let mut snapshot = Snapshot::new(
        ships.unwrap_or_default(),
        containers.unwrap_or_default(),
        units.unwrap_or_default(),
    );
    snapshot.taken_at = Some(chrono::Utc::now().to_rfc3339());

    tracing::info!(
        ships = snapshot.ships.len(),
        containers = snapshot.containers.len(),
        units = snapshot.units.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "snapshot fetched"
    );

    Ok(snapshot)
}

fn log_failure(table: &str, err: &AppError) {
    tracing::error!(table, error = %err, "snapshot fetch failed");
}

/// Build the store named by the config source.
///
/// Directory paths are resolved against the directory holding the config file.
pub fn open_store(config: &DashboardConfig, config_path: &Path) -> Box<dyn RecordStore> {
    match &config.source {
        SourceDef::Directory { path } => {
            let path = Path::new(path);
            let root = if path.is_absolute() {
                path.to_path_buf()
            } else {
                config_path
                    .parent()
                    .map(|dir| dir.join(path))
                    .unwrap_or_else(|| path.to_path_buf())
            };
            tracing::debug!(root = %root.display(), "using directory store");
            Box::new(DirectoryStore::new(root))
        }
        SourceDef::Inline {
            ships,
            containers,
            units,
        } => Box::new(MemoryStore::new(
            ships.clone(),
            containers.clone(),
            units.clone(),
        )),
    }
}
