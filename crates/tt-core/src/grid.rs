//! Floor x facade occupancy grid.
//!
//! The axes are display configuration and are never inferred from the data.
//! Units whose floor or facade is not on an axis do not appear in the grid;
//! use [`unplaced_units`] to report them.

use serde::{Deserialize, Serialize};

use crate::records::Unit;

/// Row and column order of the project grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridAxes {
    /// Rows, top to bottom.
    pub floors: Vec<i32>,
    /// Columns, left to right.
    pub facades: Vec<String>,
}

impl Default for GridAxes {
    fn default() -> Self {
        Self {
            floors: vec![5, 4, 3, 2],
            facades: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        }
    }
}

impl GridAxes {
    pub fn new(floors: Vec<i32>, facades: Vec<String>) -> Self {
        Self { floors, facades }
    }

    pub fn contains(&self, floor: i32, facade: &str) -> bool {
        self.floors.contains(&floor) && self.facades.iter().any(|f| f == facade)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridCell<'a> {
    Occupied(&'a Unit),
    Empty,
}

impl<'a> GridCell<'a> {
    pub fn unit(&self) -> Option<&'a Unit> {
        match self {
            GridCell::Occupied(unit) => Some(unit),
            GridCell::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GridCell::Empty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridRow<'a> {
    pub floor: i32,
    /// One cell per facade, in axis order.
    pub cells: Vec<GridCell<'a>>,
}

/// Row-major grid borrowing from the unit collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectGrid<'a> {
    pub facades: Vec<String>,
    pub rows: Vec<GridRow<'a>>,
}

impl<'a> ProjectGrid<'a> {
    pub fn cell(&self, floor: i32, facade: &str) -> Option<&GridCell<'a>> {
        let col = self.facades.iter().position(|f| f == facade)?;
        let row = self.rows.iter().find(|r| r.floor == floor)?;
        row.cells.get(col)
    }

    pub fn floors(&self) -> impl Iterator<Item = i32> + '_ {
        self.rows.iter().map(|r| r.floor)
    }

    pub fn occupied_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter(|c| !c.is_empty())
            .count()
    }
}

/// Place units onto the configured axes.
///
/// Each cell holds the first unit in collection order whose `(floor, facade)`
/// matches exactly. Later duplicates are not shown; see [`duplicate_placements`].
pub fn map_units<'a>(axes: &GridAxes, units: &'a [Unit]) -> ProjectGrid<'a> {
    let rows = axes
        .floors
        .iter()
        .map(|&floor| GridRow {
            floor,
            cells: axes
                .facades
                .iter()
                .map(|facade| {
                    units
                        .iter()
                        .find(|u| u.is_at(floor, facade))
                        .map_or(GridCell::Empty, GridCell::Occupied)
                })
                .collect(),
        })
        .collect();

    ProjectGrid {
        facades: axes.facades.clone(),
        rows,
    }
}

/// Units that fall outside the configured axes.
pub fn unplaced_units<'a>(axes: &GridAxes, units: &'a [Unit]) -> Vec<&'a Unit> {
    units
        .iter()
        .filter(|u| !axes.contains(u.floor, &u.facade))
        .collect()
}

/// `(floor, facade)` pairs claimed by more than one unit, in first-seen order.
pub fn duplicate_placements(units: &[Unit]) -> Vec<(i32, String)> {
    let mut seen: Vec<(i32, &str)> = Vec::new();
    let mut dups: Vec<(i32, String)> = Vec::new();
    for unit in units {
        let key = (unit.floor, unit.facade.as_str());
        if seen.contains(&key) {
            if !dups.iter().any(|(f, fa)| *f == key.0 && fa == key.1) {
                dups.push((unit.floor, unit.facade.clone()));
            }
        } else {
            seen.push(key);
        }
    }
    dups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;

    fn unit(id: &str, floor: i32, facade: &str, qty: u32) -> Unit {
        Unit {
            id: id.to_string(),
            floor,
            facade: facade.to_string(),
            qty: Some(qty),
            status: Status::Production,
            progress: 50,
        }
    }

    #[test]
    fn places_unit_at_its_cell_only() {
        let units = vec![unit("U-3B", 3, "B", 12)];
        let grid = map_units(&GridAxes::default(), &units);

        assert_eq!(grid.floors().collect::<Vec<_>>(), vec![5, 4, 3, 2]);
        assert_eq!(grid.rows.len(), 4);
        assert!(grid.rows.iter().all(|r| r.cells.len() == 3));

        let cell = grid.cell(3, "B").unwrap();
        assert_eq!(cell.unit().map(|u| u.id.as_str()), Some("U-3B"));
        assert_eq!(cell.unit().and_then(|u| u.qty), Some(12));

        for floor in [5, 4, 3, 2] {
            for facade in ["A", "B", "C"] {
                if (floor, facade) != (3, "B") {
                    assert!(grid.cell(floor, facade).unwrap().is_empty());
                }
            }
        }
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn out_of_axis_unit_is_excluded_and_reported() {
        let units = vec![unit("U-1A", 1, "A", 4), unit("U-2D", 2, "D", 4)];
        let axes = GridAxes::default();
        let grid = map_units(&axes, &units);

        assert_eq!(grid.occupied_count(), 0);
        assert!(grid.cell(1, "A").is_none());

        let unplaced: Vec<&str> = unplaced_units(&axes, &units)
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        assert_eq!(unplaced, vec!["U-1A", "U-2D"]);
    }

    #[test]
    fn first_match_wins_on_duplicates() {
        let units = vec![unit("first", 4, "C", 1), unit("second", 4, "C", 2)];
        let grid = map_units(&GridAxes::default(), &units);
        assert_eq!(
            grid.cell(4, "C").and_then(|c| c.unit()).map(|u| u.id.as_str()),
            Some("first")
        );
        assert_eq!(duplicate_placements(&units), vec![(4, "C".to_string())]);
    }

    #[test]
    fn zero_quantity_unit_is_still_occupied() {
        let units = vec![unit("U-empty", 5, "A", 0)];
        let grid = map_units(&GridAxes::default(), &units);
        let cell = grid.cell(5, "A").unwrap();
        assert!(!cell.is_empty());
    }

    #[test]
    fn facade_match_is_exact() {
        let units = vec![unit("lower", 2, "a", 3)];
        let grid = map_units(&GridAxes::default(), &units);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn custom_axes_keep_configured_order() {
        let axes = GridAxes::new(vec![2, 3], vec!["C".to_string(), "A".to_string()]);
        let units = vec![unit("U-3A", 3, "A", 1)];
        let grid = map_units(&axes, &units);
        assert_eq!(grid.rows[1].floor, 3);
        assert!(grid.rows[1].cells[0].is_empty());
        assert!(!grid.rows[1].cells[1].is_empty());
    }

    #[test]
    fn empty_units_give_empty_grid() {
        let grid = map_units(&GridAxes::default(), &[]);
        assert_eq!(grid.rows.len(), 4);
        assert_eq!(grid.occupied_count(), 0);
        assert!(duplicate_placements(&[]).is_empty());
    }
}
