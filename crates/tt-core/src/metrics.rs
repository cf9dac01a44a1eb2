//! Project-level unit aggregates.
//!
//! Every sum is over `qty`, never over record counts. A unit with no quantity
//! contributes zero.

use serde::{Deserialize, Serialize};

use crate::records::Unit;
use crate::status::Status;

/// Scalar metrics shown on the overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProjectMetrics {
    /// Sum of `qty` over all units
    pub total_units: u64,
    /// Sum of `qty` over units with status `complete`
    pub completed_units: u64,
    /// Completed share of the total, percent, rounded half up
    pub overall_progress: u8,
    /// Sum of `qty` over units in `production` or `ready-cut`
    pub in_production_units: u64,
    /// Sum of `qty` over units still `waiting` for materials
    pub waiting_units: u64,
    /// Units not yet complete
    pub remaining_units: u64,
}

impl ProjectMetrics {
    pub fn from_units(units: &[Unit]) -> Self {
        let total = total_units(units);
        let completed = completed_units(units);
        Self {
            total_units: total,
            completed_units: completed,
            overall_progress: progress_percent(completed, total),
            in_production_units: in_production_units(units),
            waiting_units: waiting_units(units),
            remaining_units: total - completed,
        }
    }
}

fn sum_qty_where(units: &[Unit], pred: impl Fn(&Status) -> bool) -> u64 {
    units
        .iter()
        .filter(|u| pred(&u.status))
        .map(Unit::quantity)
        .sum()
}

pub fn total_units(units: &[Unit]) -> u64 {
    units.iter().map(Unit::quantity).sum()
}

pub fn completed_units(units: &[Unit]) -> u64 {
    sum_qty_where(units, |s| *s == Status::Complete)
}

pub fn in_production_units(units: &[Unit]) -> u64 {
    sum_qty_where(units, |s| matches!(s, Status::Production | Status::ReadyCut))
}

pub fn waiting_units(units: &[Unit]) -> u64 {
    sum_qty_where(units, |s| *s == Status::Waiting)
}

pub fn remaining_units(units: &[Unit]) -> u64 {
    total_units(units) - completed_units(units)
}

pub fn overall_progress(units: &[Unit]) -> u8 {
    progress_percent(completed_units(units), total_units(units))
}

/// `round(100 * part / whole)` with halves rounded up, 0 when `whole` is 0.
///
/// Integer arithmetic only, so `x.5` boundaries are exact.
pub fn progress_percent(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = u128::from(part.min(whole));
    let whole = u128::from(whole);
    let pct = (200 * part + whole) / (2 * whole);
    pct as u8
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const LABELS: [&str; 6] = ["waiting", "customs", "ready-cut", "production", "complete", "??"];

    fn arb_units() -> impl Strategy<Value = Vec<Unit>> {
        prop::collection::vec(
            (0usize..LABELS.len(), prop::option::of(0u32..10_000)),
            0..40,
        )
        .prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (label, qty))| Unit {
                    id: format!("U{i}"),
                    floor: 2,
                    facade: "A".to_string(),
                    qty,
                    status: Status::parse(LABELS[label]),
                    progress: 0,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn completed_never_exceeds_total(units in arb_units()) {
            let m = ProjectMetrics::from_units(&units);
            prop_assert!(m.completed_units <= m.total_units);
            prop_assert!(m.overall_progress <= 100);
            prop_assert_eq!(m.remaining_units, m.total_units - m.completed_units);
            let classified = m.in_production_units + m.waiting_units + m.completed_units;
            prop_assert!(classified <= m.total_units);
        }

        #[test]
        fn total_ignores_record_order(units in arb_units()) {
            let mut reversed = units.clone();
            reversed.reverse();
            prop_assert_eq!(
                ProjectMetrics::from_units(&units),
                ProjectMetrics::from_units(&reversed)
            );
        }

        #[test]
        fn total_is_sum_of_qty(units in arb_units()) {
            let expected: u64 = units.iter().map(|u| u64::from(u.qty.unwrap_or(0))).sum();
            prop_assert_eq!(total_units(&units), expected);
        }
    }
}
