//! Single-row scans over a set of sensors
//!
//! Every scan builds a fresh [`IntervalSet`] for the row and throws it away
//! once the count or gap query is answered.

use std::collections::BTreeSet;

use crate::interval::{Interval, IntervalSet};
use crate::sensor::{Position, Sensor};

/// Union of every sensor's exclusion interval on `row`
pub fn exclusion_set_for_row(sensors: &[Sensor], row: i64) -> IntervalSet {
    sensors
        .iter()
        .filter_map(|sensor| sensor.exclusion_interval_for_row(row))
        .collect()
}

/// Find the uncovered position on `row` inside `window`, if any.
///
/// With no sensors the whole row is a gap, so the answer is `window.min()`.
pub fn scan_row(sensors: &[Sensor], row: i64, window: Interval) -> Option<Position> {
    exclusion_set_for_row(sensors, row)
        .first_gap(window)
        .map(|x| Position::new(x, row))
}

/// Count positions on `row` where no undetected beacon can be.
///
/// When `exclude_beacons` is set, cells holding a known beacon are not
/// counted.
pub fn count_excluded_at_row(sensors: &[Sensor], row: i64, exclude_beacons: bool) -> u64 {
    let mut excluded = exclusion_set_for_row(sensors, row);

    if exclude_beacons {
        let beacons: BTreeSet<i64> = sensors
            .iter()
            .filter_map(|sensor| sensor.beacon_on_row(row))
            .collect();
        for x in beacons {
            excluded.remove(Interval::point(x));
        }
    }

    excluded.size()
}
