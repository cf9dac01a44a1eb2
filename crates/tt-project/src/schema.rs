//! Dashboard configuration schema.

use serde::{Deserialize, Serialize};
use tt_core::{Container, GridAxes, Ship, Unit};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub grid: GridAxesDef,
    pub source: SourceDef,
}

/// Project grid axes. Defaults to floors 5..2 and facades A, B, C.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridAxesDef {
    #[serde(default = "default_floors")]
    pub floors: Vec<i32>,
    #[serde(default = "default_facades")]
    pub facades: Vec<String>,
}

impl Default for GridAxesDef {
    fn default() -> Self {
        Self {
            floors: default_floors(),
            facades: default_facades(),
        }
    }
}

impl From<&GridAxesDef> for GridAxes {
    fn from(def: &GridAxesDef) -> Self {
        GridAxes::new(def.floors.clone(), def.facades.clone())
    }
}

fn default_floors() -> Vec<i32> {
    GridAxes::default().floors
}

fn default_facades() -> Vec<String> {
    GridAxes::default().facades
}

/// Where the record collections come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum SourceDef {
    /// `ships.json`, `containers.json` and `units.json` in a directory.
    /// Relative paths resolve against the config file's directory.
    Directory { path: String },
    /// Records embedded in the config itself.
    Inline {
        #[serde(default)]
        ships: Vec<Ship>,
        #[serde(default)]
        containers: Vec<Container>,
        #[serde(default)]
        units: Vec<Unit>,
    },
}
