//! Config loading and snapshot validation for frontends.

use std::path::Path;
use tt_core::Snapshot;
use tt_project::DashboardConfig;

use crate::error::{AppError, AppResult};

/// Load a dashboard config from YAML or JSON (by extension).
pub fn load_config(path: &Path) -> AppResult<DashboardConfig> {
    if !path.exists() {
        return Err(AppError::ConfigFileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        });
    }
    let config = tt_project::load(path)?;
    tracing::debug!(name = %config.name, path = %path.display(), "config loaded");
    Ok(config)
}

/// Check the soft invariants of a fetched snapshot.
pub fn validate_snapshot(snapshot: &Snapshot) -> AppResult<()> {
    tt_project::validate_snapshot(snapshot)?;
    Ok(())
}
