//! Parallel gap search across row partitions.
//!
//! # Architecture
//!
//! The parallel search system consists of:
//! - A **partitioner** that splits `[0, range_max]` into contiguous row chunks
//! - One **worker** thread per chunk, scanning its rows in increasing order
//! - A write-once **result slot** shared by all workers; the first publish
//!   wins and workers poll it between rows to stop early
//! - A **report channel** carrying each worker's final state to the
//!   coordinator
//!
//! # Example
//!
//! ```ignore
//! use beacon_scan::search::parallel::{ParallelConfig, run_parallel_search};
//!
//! let config = ParallelConfig::default().with_workers(4);
//! let result = run_parallel_search(&sensors, 4_000_000, &config)?;
//! println!("{}", result.position);
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;
pub mod partition;

pub use config::ParallelConfig;
pub use coordinator::{ParallelResult, find_unique_gap, run_parallel_search};
pub use partition::partition_rows;
