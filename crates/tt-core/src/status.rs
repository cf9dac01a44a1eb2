//! Status vocabulary and display classification.
//!
//! Units report English labels, containers report Hebrew ones. Both share one
//! closed vocabulary; anything else is kept verbatim as [`Status::Unknown`].

use core::fmt;
use serde::{Deserialize, Serialize};

/// A record status parsed from its raw label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Status {
    /// `waiting`: blocked on materials.
    Waiting,
    /// `customs`
    Customs,
    /// `ready-cut`: materials on site, cutting not started.
    ReadyCut,
    /// `production`
    Production,
    /// `complete`
    Complete,
    /// `בדרך`: container on a ship.
    EnRoute,
    /// `במכס`: container held at customs.
    InCustoms,
    /// `במחסן`: container unloaded into the warehouse.
    InWarehouse,
    /// Any other label. A missing label is kept as the empty string.
    Unknown(String),
}

impl Default for Status {
    fn default() -> Self {
        Status::Unknown(String::new())
    }
}

/// Display category used for coloring and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Danger,
    Warning,
    Info,
    InProgress,
    Success,
    Neutral,
}

/// Tint of an occupied cell on the project grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellTone {
    Done,
    Active,
    Attention,
}

impl Status {
    pub fn parse(label: &str) -> Self {
        match label {
            "waiting" => Status::Waiting,
            "customs" => Status::Customs,
            "ready-cut" => Status::ReadyCut,
            "production" => Status::Production,
            "complete" => Status::Complete,
            "בדרך" => Status::EnRoute,
            "במכס" => Status::InCustoms,
            "במחסן" => Status::InWarehouse,
            other => Status::Unknown(other.to_string()),
        }
    }

    /// The label as it appears in the source records.
    pub fn label(&self) -> &str {
        match self {
            Status::Waiting => "waiting",
            Status::Customs => "customs",
            Status::ReadyCut => "ready-cut",
            Status::Production => "production",
            Status::Complete => "complete",
            Status::EnRoute => "בדרך",
            Status::InCustoms => "במכס",
            Status::InWarehouse => "במחסן",
            Status::Unknown(label) => label,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Status::Waiting => Category::Danger,
            Status::Customs | Status::InCustoms => Category::Warning,
            Status::ReadyCut | Status::EnRoute => Category::Info,
            Status::Production => Category::InProgress,
            Status::Complete | Status::InWarehouse => Category::Success,
            Status::Unknown(_) => Category::Neutral,
        }
    }

    /// Grid cells only distinguish finished, in-production and everything else.
    pub fn cell_tone(&self) -> CellTone {
        match self {
            Status::Complete => CellTone::Done,
            Status::Production => CellTone::Active,
            _ => CellTone::Attention,
        }
    }
}

/// Classify a raw status label. Total: unrecognized labels are [`Category::Neutral`].
pub fn classify(label: &str) -> Category {
    Status::parse(label).category()
}

impl From<String> for Status {
    fn from(label: String) -> Self {
        match Status::parse(&label) {
            Status::Unknown(_) => Status::Unknown(label),
            known => known,
        }
    }
}

impl From<Option<String>> for Status {
    fn from(label: Option<String>) -> Self {
        label.map(Status::from).unwrap_or_default()
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Unknown(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Category {
    pub fn token(self) -> &'static str {
        match self {
            Category::Danger => "danger",
            Category::Warning => "warning",
            Category::Info => "info",
            Category::InProgress => "in-progress",
            Category::Success => "success",
            Category::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
