//! Exclusion-zone solver for sensor/beacon reports
//!
//! Each sensor rules out every cell within the Manhattan distance of its
//! closest beacon. This crate answers two questions about those zones:
//!
//! - how many cells on a given row are ruled out ([`count_excluded_at_row`])
//! - which single cell inside `[0, range_max]²` is not ruled out by any
//!   sensor ([`find_unique_gap`]), searched in parallel across row partitions

pub mod interval;
pub mod logging;
pub mod parser;
pub mod scan;
pub mod search;
pub mod sensor;

pub use interval::{Interval, IntervalError, IntervalSet};
pub use parser::{LoadError, ParseError, parse_file, parse_sensor_reports};
pub use scan::{count_excluded_at_row, exclusion_set_for_row, scan_row};
pub use search::{
    ParallelConfig, ParallelResult, SearchError, find_unique_gap, run_parallel_search,
};
pub use sensor::{Position, Sensor, SensorError};
