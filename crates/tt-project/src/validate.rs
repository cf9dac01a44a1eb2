//! Config and snapshot validation.
//!
//! Snapshot checks cover soft invariants the record store does not enforce.
//! Derived views tolerate every one of these violations; validation exists to
//! surface them, not to gate the dashboard.

use crate::schema::{DashboardConfig, SourceDef};
use std::collections::HashSet;
use tt_core::{Snapshot, duplicate_placements};

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Duplicate placement: floor {floor}, facade {facade} has more than one unit")]
    DuplicatePlacement { floor: i32, facade: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_config(config: &DashboardConfig) -> Result<(), ValidationError> {
    if config.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        });
    }

    if config.grid.floors.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "grid floors".to_string(),
            value: "[]".to_string(),
            reason: "at least one floor is required".to_string(),
        });
    }
    let mut floors = HashSet::new();
    for floor in &config.grid.floors {
        if !floors.insert(floor) {
            return Err(ValidationError::DuplicateId {
                id: floor.to_string(),
                context: "grid floors".to_string(),
            });
        }
    }

    if config.grid.facades.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "grid facades".to_string(),
            value: "[]".to_string(),
            reason: "at least one facade is required".to_string(),
        });
    }
    let mut facades = HashSet::new();
    for facade in &config.grid.facades {
        if facade.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "grid facades".to_string(),
                value: format!("{:?}", facade),
                reason: "facade label must not be blank".to_string(),
            });
        }
        if !facades.insert(facade) {
            return Err(ValidationError::DuplicateId {
                id: facade.clone(),
                context: "grid facades".to_string(),
            });
        }
    }

    if let SourceDef::Directory { path } = &config.source
        && path.trim().is_empty()
    {
        return Err(ValidationError::InvalidValue {
            field: "source path".to_string(),
            value: format!("{:?}", path),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(())
}

pub fn validate_snapshot(snapshot: &Snapshot) -> Result<(), ValidationError> {
    let mut container_ids = HashSet::new();
    for container in &snapshot.containers {
        if !container_ids.insert(&container.id) {
            return Err(ValidationError::DuplicateId {
                id: container.id.clone(),
                context: "containers".to_string(),
            });
        }
    }

    let mut unit_ids = HashSet::new();
    for unit in &snapshot.units {
        if !unit_ids.insert(&unit.id) {
            return Err(ValidationError::DuplicateId {
                id: unit.id.clone(),
                context: "units".to_string(),
            });
        }
        if unit.progress > 100 {
            return Err(ValidationError::InvalidValue {
                field: format!("unit '{}' progress", unit.id),
                value: unit.progress.to_string(),
                reason: "must be in [0, 100]".to_string(),
            });
        }
    }

    if let Some((floor, facade)) = duplicate_placements(&snapshot.units).into_iter().next() {
        return Err(ValidationError::DuplicatePlacement { floor, facade });
    }

    for (idx, ship) in snapshot.ships.iter().enumerate() {
        let label = ship.label(idx);
        for (field, value) in [("lat", ship.lat), ("lng", ship.lng)] {
            if !value.is_finite() {
                return Err(ValidationError::InvalidValue {
                    field: format!("ship '{}' {}", label, field),
                    value: value.to_string(),
                    reason: "must be finite".to_string(),
                });
            }
        }
    }

    Ok(())
}
