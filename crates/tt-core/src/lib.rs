//! tt-core: records and derived views for the tower production tracker.
//!
//! Contains:
//! - records (ships, containers, units and the immutable snapshot)
//! - status (bilingual status vocabulary + display categories)
//! - metrics (project-level unit aggregates)
//! - grid (floor x facade occupancy matrix)

pub mod grid;
pub mod metrics;
pub mod records;
pub mod status;

pub use grid::*;
pub use metrics::*;
pub use records::*;
pub use status::*;
