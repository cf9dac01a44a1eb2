//! Dashboard view model handed to frontends.
//!
//! Everything here is recomputed from a snapshot; nothing is cached between
//! builds.

use serde::Serialize;
use std::path::Path;
use tt_core::{
    Category, CellTone, GridAxes, GridCell, ProjectMetrics, Snapshot, Unit, duplicate_placements,
    map_units, unplaced_units,
};
use tt_project::DashboardConfig;

use crate::error::AppResult;
use crate::logistics::{ShipManifest, containers_by_ship};
use crate::project_service::load_config;
use crate::snapshot_service::{fetch_snapshot, open_store};

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taken_at: Option<String>,
    pub metrics: ProjectMetrics,
    /// Ships currently on the map.
    pub ship_count: usize,
    pub ships: Vec<ShipMarker>,
    pub containers: Vec<ContainerRow>,
    pub manifests: Vec<ShipManifest>,
    pub units: Vec<UnitRow>,
    pub grid: GridView,
    /// IDs of units whose floor or facade is not on the grid axes.
    pub unplaced: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShipMarker {
    pub label: String,
    /// Percent from the top of the map canvas.
    pub top_pct: f64,
    /// Percent from the right edge of the map canvas.
    pub right_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContainerRow {
    pub id: String,
    pub ship: String,
    pub status: String,
    pub category: Category,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitRow {
    pub id: String,
    pub floor: i32,
    pub facade: String,
    pub qty: u64,
    pub status: String,
    pub category: Category,
    /// Progress clamped to [0, 100] for bar widths.
    pub progress: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridView {
    pub facades: Vec<String>,
    pub rows: Vec<GridRowView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridRowView {
    pub floor: i32,
    pub cells: Vec<Option<GridUnitView>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridUnitView {
    pub id: String,
    pub qty: u64,
    pub tone: CellTone,
}

impl UnitRow {
    fn from_unit(unit: &Unit) -> Self {
        Self {
            id: unit.id.clone(),
            floor: unit.floor,
            facade: unit.facade.clone(),
            qty: unit.quantity(),
            status: unit.status.label().to_string(),
            category: unit.status.category(),
            progress: unit.progress.min(100),
        }
    }
}

pub fn build_grid_view(axes: &GridAxes, units: &[Unit]) -> GridView {
    let grid = map_units(axes, units);
    GridView {
        facades: grid.facades.clone(),
        rows: grid
            .rows
            .iter()
            .map(|row| GridRowView {
                floor: row.floor,
                cells: row
                    .cells
                    .iter()
                    .map(|cell| match cell {
                        GridCell::Occupied(unit) => Some(GridUnitView {
                            id: unit.id.clone(),
                            qty: unit.quantity(),
                            tone: unit.status.cell_tone(),
                        }),
                        GridCell::Empty => None,
                    })
                    .collect(),
            })
            .collect(),
    }
}

pub fn build_dashboard(config: &DashboardConfig, snapshot: &Snapshot) -> Dashboard {
    let axes = GridAxes::from(&config.grid);

    let unplaced: Vec<String> = unplaced_units(&axes, &snapshot.units)
        .into_iter()
        .map(|u| u.id.clone())
        .collect();
    if !unplaced.is_empty() {
        tracing::warn!(
            units = ?unplaced,
            "units outside the grid axes are not shown on the project map"
        );
    }
    for (floor, facade) in duplicate_placements(&snapshot.units) {
        tracing::warn!(
            floor,
            facade = %facade,
            "more than one unit at this position; showing the first"
        );
    }

    Dashboard {
        name: config.name.clone(),
        taken_at: snapshot.taken_at.clone(),
        metrics: ProjectMetrics::from_units(&snapshot.units),
        ship_count: snapshot.ships.len(),
        ships: snapshot
            .ships
            .iter()
            .enumerate()
            .map(|(idx, ship)| ShipMarker {
                label: ship.label(idx),
                top_pct: ship.lat,
                right_pct: ship.lng,
            })
            .collect(),
        containers: snapshot
            .containers
            .iter()
            .map(|c| ContainerRow {
                id: c.id.clone(),
                ship: c.ship.clone(),
                status: c.status.label().to_string(),
                category: c.status.category(),
            })
            .collect(),
        manifests: containers_by_ship(snapshot),
        units: snapshot.units.iter().map(UnitRow::from_unit).collect(),
        grid: build_grid_view(&axes, &snapshot.units),
        unplaced,
    }
}

/// Load config, fetch a snapshot and build the dashboard.
///
/// Any fetch failure is returned as an error; no partial dashboard is built.
pub fn load_dashboard(config_path: &Path) -> AppResult<Dashboard> {
    let config = load_config(config_path)?;
    let store = open_store(&config, config_path);
    let snapshot = fetch_snapshot(store.as_ref())?;
    Ok(build_dashboard(&config, &snapshot))
}
