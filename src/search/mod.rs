//! Gap search across the full row range
//!
//! The row range is split into contiguous partitions, each scanned by its own
//! worker thread. The first worker to find the gap publishes it and the rest
//! stop at their next row boundary.

pub mod parallel;
pub mod result;

pub use parallel::{
    ParallelConfig, ParallelResult, find_unique_gap, partition_rows, run_parallel_search,
};
pub use result::{SearchError, SearchStatistics, WorkerReport, WorkerState};
