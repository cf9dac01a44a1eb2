//! Record definitions as returned by the record store.

use serde::{Deserialize, Deserializer, Serialize};

use crate::status::Status;

/// A ship carrying containers. Purely positional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ship {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Vertical offset on the normalized map canvas, percent.
    pub lat: f64,
    /// Horizontal offset on the normalized map canvas, percent.
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Container {
    pub id: String,
    /// Display label of the carrying ship. Not checked against the ship table.
    pub ship: String,
    #[serde(default)]
    pub status: Status,
}

/// Production record for `qty` identical sub-units at one floor/facade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Unit {
    pub id: String,
    pub floor: i32,
    pub facade: String,
    #[serde(default)]
    pub qty: Option<u32>,
    #[serde(default)]
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub progress: u8,
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    Ok(Option::<u8>::deserialize(deserializer)?.unwrap_or(0))
}

impl Ship {
    /// Label shown for the ship: name, then id, then 1-based list position.
    pub fn label(&self, index: usize) -> String {
        self.name
            .clone()
            .or_else(|| self.id.clone())
            .unwrap_or_else(|| format!("#{}", index + 1))
    }
}

impl Unit {
    /// Quantity with a missing value counted as zero.
    pub fn quantity(&self) -> u64 {
        u64::from(self.qty.unwrap_or(0))
    }

    pub fn is_at(&self, floor: i32, facade: &str) -> bool {
        self.floor == floor && self.facade == facade
    }
}

/// All three collections fetched at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Snapshot {
    #[serde(default)]
    pub ships: Vec<Ship>,
    #[serde(default)]
    pub containers: Vec<Container>,
    #[serde(default)]
    pub units: Vec<Unit>,
    /// RFC 3339 time the snapshot was taken, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taken_at: Option<String>,
}

impl Snapshot {
    pub fn new(ships: Vec<Ship>, containers: Vec<Container>, units: Vec<Unit>) -> Self {
        Self {
            ships,
            containers,
            units,
            taken_at: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty() && self.containers.is_empty() && self.units.is_empty()
    }
}
