//! Sensors and the rows they rule out
//!
//! A sensor reports the closest beacon by Manhattan distance, so no other
//! beacon can sit within that distance (its reach). On any row the excluded
//! cells form a single contiguous run centred on the sensor's column.

use crate::interval::Interval;
use std::fmt;

/// Errors raised when constructing sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SensorError {
    /// The reach or the area it covers does not fit in `i64` coordinates
    #[error("coordinates out of range: sensor {sensor}, beacon {beacon}")]
    OutOfRange { sensor: Position, beacon: Position },
}

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// `|dx| + |dy|`, or `None` if it does not fit in an `i64`
    pub fn manhattan_distance(&self, other: &Position) -> Option<i64> {
        let distance = self
            .x
            .abs_diff(other.x)
            .checked_add(self.y.abs_diff(other.y))?;
        i64::try_from(distance).ok()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A sensor and its nearest beacon, with the derived reach and row span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensor {
    position: Position,
    beacon: Position,
    reach: i64,
    row_span: Interval,
    column_span: Interval,
}

impl Sensor {
    /// Create a sensor, rejecting reports whose covered area would leave
    /// the `i64` coordinate range.
    pub fn new(x: i64, y: i64, beacon_x: i64, beacon_y: i64) -> Result<Self, SensorError> {
        let position = Position::new(x, y);
        let beacon = Position::new(beacon_x, beacon_y);
        let out_of_range = || SensorError::OutOfRange {
            sensor: position,
            beacon,
        };

        let reach = position.manhattan_distance(&beacon).ok_or_else(out_of_range)?;
        let span = |center: i64| -> Result<Interval, SensorError> {
            match (center.checked_sub(reach), center.checked_add(reach)) {
                (Some(min), Some(max)) => Interval::new(min, max).map_err(|_| out_of_range()),
                _ => Err(out_of_range()),
            }
        };
        let row_span = span(y)?;
        let column_span = span(x)?;

        Ok(Self {
            position,
            beacon,
            reach,
            row_span,
            column_span,
        })
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn beacon(&self) -> Position {
        self.beacon
    }

    /// Manhattan distance to the reported beacon
    pub fn reach(&self) -> i64 {
        self.reach
    }

    /// Rows within reach: `[y - reach, y + reach]`
    pub fn row_span(&self) -> Interval {
        self.row_span
    }

    /// Columns within reach on the sensor's own row: `[x - reach, x + reach]`
    pub fn column_span(&self) -> Interval {
        self.column_span
    }

    pub fn affects_row(&self, row: i64) -> bool {
        self.row_span.contains(row)
    }

    /// Columns on `row` that cannot hold an undetected beacon, or `None`
    /// when the row is out of reach.
    pub fn exclusion_interval_for_row(&self, row: i64) -> Option<Interval> {
        if !self.affects_row(row) {
            return None;
        }
        // Both bounds stay inside column_span
        let spread = self.reach - self.position.y.abs_diff(row) as i64;
        Interval::new(self.position.x - spread, self.position.x + spread).ok()
    }

    /// Column of the reported beacon if it lies on `row`
    pub fn beacon_on_row(&self, row: i64) -> Option<i64> {
        (self.beacon.y == row).then_some(self.beacon.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_reach() {
        let sensor = Sensor::new(8, 7, 2, 10).unwrap();
        assert_eq!(sensor.reach(), 9);
        assert_eq!(sensor.row_span(), Interval::new(-2, 16).unwrap());
        assert!(sensor.affects_row(-2));
        assert!(sensor.affects_row(16));
        assert!(!sensor.affects_row(17));
    }

    #[test]
    fn test_exclusion_interval_on_sensor_row() {
        let sensor = Sensor::new(8, 7, 2, 10).unwrap();
        assert_eq!(
            sensor.exclusion_interval_for_row(7),
            Some(Interval::new(-1, 17).unwrap())
        );
    }

    #[test]
    fn test_exclusion_interval_narrows_with_distance() {
        let sensor = Sensor::new(8, 7, 2, 10).unwrap();
        assert_eq!(
            sensor.exclusion_interval_for_row(10),
            Some(Interval::new(2, 14).unwrap())
        );
        assert_eq!(
            sensor.exclusion_interval_for_row(16),
            Some(Interval::point(8))
        );
        assert_eq!(sensor.exclusion_interval_for_row(17), None);
        assert_eq!(sensor.exclusion_interval_for_row(-3), None);
    }

    #[test]
    fn test_beacon_on_row() {
        let sensor = Sensor::new(0, 11, 2, 10).unwrap();
        assert_eq!(sensor.beacon_on_row(10), Some(2));
        assert_eq!(sensor.beacon_on_row(11), None);
    }

    #[test]
    fn test_sensor_on_its_beacon() {
        let sensor = Sensor::new(3, -4, 3, -4).unwrap();
        assert_eq!(sensor.reach(), 0);
        assert_eq!(
            sensor.exclusion_interval_for_row(-4),
            Some(Interval::point(3))
        );
        assert_eq!(sensor.exclusion_interval_for_row(-3), None);
    }

    #[test]
    fn test_manhattan_distance() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.manhattan_distance(&Position::new(-3, 4)), Some(7));
        assert_eq!(
            Position::new(i64::MAX, 0).manhattan_distance(&Position::new(i64::MIN, 0)),
            None
        );
        assert_eq!(
            Position::new(i64::MAX, 0).manhattan_distance(&Position::new(0, 0)),
            Some(i64::MAX)
        );
    }

    #[test]
    fn test_sensor_rejects_reach_overflow() {
        let err = Sensor::new(i64::MAX, 0, i64::MIN, 0).unwrap_err();
        assert_eq!(
            err,
            SensorError::OutOfRange {
                sensor: Position::new(i64::MAX, 0),
                beacon: Position::new(i64::MIN, 0),
            }
        );
    }

    #[test]
    fn test_sensor_rejects_span_overflow() {
        // Reach fits, but the covered rows or columns would not
        assert!(Sensor::new(0, i64::MAX, 0, i64::MAX - 1).is_err());
        assert!(Sensor::new(i64::MIN, 0, i64::MIN + 1, 0).is_err());
        assert!(Sensor::new(0, i64::MAX - 1, 0, i64::MAX).is_ok());
    }

    #[test]
    fn test_column_span() {
        let sensor = Sensor::new(8, 7, 2, 10).unwrap();
        assert_eq!(sensor.column_span(), Interval::new(-1, 17).unwrap());
        assert_eq!(
            sensor.exclusion_interval_for_row(7),
            Some(sensor.column_span())
        );
    }
}
