use proptest::prelude::*;
use tt_core::*;

fn arb_unit() -> impl Strategy<Value = (i32, usize, u32)> {
    (0i32..8, 0usize..5, 0u32..50)
}

const FACADES: [&str; 5] = ["A", "B", "C", "D", "a"];

fn build(specs: Vec<(i32, usize, u32)>) -> Vec<Unit> {
    specs
        .into_iter()
        .enumerate()
        .map(|(i, (floor, facade, qty))| Unit {
            id: format!("U{i}"),
            floor,
            facade: FACADES[facade].to_string(),
            qty: Some(qty),
            status: Status::Waiting,
            progress: 0,
        })
        .collect()
}

proptest! {
    #[test]
    fn occupied_cells_hold_matching_units(specs in prop::collection::vec(arb_unit(), 0..30)) {
        let units = build(specs);
        let axes = GridAxes::default();
        let grid = map_units(&axes, &units);

        prop_assert_eq!(grid.rows.len(), axes.floors.len());
        for row in &grid.rows {
            prop_assert_eq!(row.cells.len(), axes.facades.len());
            for (facade, cell) in axes.facades.iter().zip(&row.cells) {
                match cell {
                    GridCell::Occupied(unit) => {
                        prop_assert!(unit.is_at(row.floor, facade));
                    }
                    GridCell::Empty => {
                        prop_assert!(!units.iter().any(|u| u.is_at(row.floor, facade)));
                    }
                }
            }
        }
    }

    #[test]
    fn every_unit_is_either_placed_or_reported(specs in prop::collection::vec(arb_unit(), 0..30)) {
        let units = build(specs);
        let axes = GridAxes::default();
        let grid = map_units(&axes, &units);
        let unplaced = unplaced_units(&axes, &units);

        for unit in &units {
            let in_grid = grid.cell(unit.floor, &unit.facade).is_some();
            let reported = unplaced.iter().any(|u| u.id == unit.id);
            prop_assert!(in_grid != reported);
        }
    }
}

#[test]
fn grid_is_independent_of_metrics() {
    let units = build(vec![(3, 1, 12), (1, 0, 5)]);
    let grid = map_units(&GridAxes::default(), &units);
    let metrics = ProjectMetrics::from_units(&units);

    // The floor-1 unit is off-grid but still part of the project totals.
    assert_eq!(grid.occupied_count(), 1);
    assert_eq!(metrics.total_units, 17);
}
