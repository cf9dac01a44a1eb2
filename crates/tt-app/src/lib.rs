//! Shared application service layer for the tower tracker.
//!
//! Frontends go through this crate to load the dashboard config, fetch a
//! record snapshot and build the derived views.

pub mod dashboard;
pub mod error;
pub mod logistics;
pub mod project_service;
pub mod snapshot_service;
pub mod store;

pub use dashboard::{
    ContainerRow, Dashboard, GridRowView, GridUnitView, GridView, ShipMarker, UnitRow,
    build_dashboard, build_grid_view, load_dashboard,
};
pub use error::{AppError, AppResult};
pub use logistics::{ShipManifest, category_counts, containers_by_ship};
pub use project_service::{load_config, validate_snapshot};
pub use snapshot_service::{fetch_snapshot, open_store};
pub use store::{DirectoryStore, MemoryStore, RecordStore};
