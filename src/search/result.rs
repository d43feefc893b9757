//! Search outcome types and statistics

use crate::interval::Interval;
use std::fmt;
use std::time::Duration;

/// Errors surfaced by the gap search
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Every partition was scanned without finding a gap
    #[error("no gap found in rows and columns [0, {range_max}]")]
    NoGapFound { range_max: i64 },
    /// The search range does not form a valid window
    #[error("invalid search range: range max {range_max} is negative")]
    InvalidRange { range_max: i64 },
    /// A worker thread panicked before reporting
    ///
    /// Only reachable when panics unwind. The release profile sets
    /// `panic = "abort"`, so there a worker panic ends the process instead.
    #[error("worker {worker_id} panicked")]
    WorkerPanicked { worker_id: usize },
}

/// Lifecycle of a single worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkerState {
    /// Still scanning its partition
    #[default]
    Running,
    /// Found the gap and won the publish
    Found,
    /// Scanned every row of its partition without finding a gap
    Exhausted,
    /// Saw another worker's result and stopped early
    Cancelled,
}

impl WorkerState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WorkerState::Running)
    }
}

impl fmt::Display for WorkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerState::Running => write!(f, "running"),
            WorkerState::Found => write!(f, "found"),
            WorkerState::Exhausted => write!(f, "exhausted"),
            WorkerState::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Final report sent by a worker before it terminates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker_id: usize,
    /// Rows assigned to this worker
    pub rows: Interval,
    /// Rows actually scanned before stopping
    pub rows_scanned: u64,
    pub state: WorkerState,
}

/// Statistics aggregated over all workers
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Number of workers spawned
    pub workers: usize,
    /// Wall-clock time from spawn to the last join
    pub elapsed_time: Duration,
    /// Rows scanned across all workers
    pub rows_scanned: u64,
    /// Writes to the result slot discarded because it was already filled
    pub rejected_writes: u64,
}

impl SearchStatistics {
    /// Rows scanned per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.rows_scanned as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Workers: {}\n", self.workers));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Rows scanned: {}\n", self.rows_scanned));
        s.push_str(&format!("Throughput: {:.0} rows/sec\n", self.throughput()));
        if self.rejected_writes > 0 {
            s.push_str(&format!("Rejected writes: {}\n", self.rejected_writes));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_state_terminal() {
        assert!(!WorkerState::Running.is_terminal());
        assert!(WorkerState::Found.is_terminal());
        assert!(WorkerState::Exhausted.is_terminal());
        assert!(WorkerState::Cancelled.is_terminal());
        assert_eq!(WorkerState::default(), WorkerState::Running);
    }

    #[test]
    fn test_throughput() {
        let stats = SearchStatistics {
            workers: 2,
            elapsed_time: Duration::from_secs(2),
            rows_scanned: 100,
            rejected_writes: 0,
        };
        assert_eq!(stats.throughput(), 50.0);
        assert_eq!(SearchStatistics::default().throughput(), 0.0);
    }

    #[test]
    fn test_format_summary() {
        let stats = SearchStatistics {
            workers: 4,
            elapsed_time: Duration::from_millis(10),
            rows_scanned: 21,
            rejected_writes: 1,
        };
        let summary = stats.format_summary();
        assert!(summary.contains("Workers: 4"));
        assert!(summary.contains("Rows scanned: 21"));
        assert!(summary.contains("Rejected writes: 1"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SearchError::NoGapFound { range_max: 20 }.to_string(),
            "no gap found in rows and columns [0, 20]"
        );
        assert_eq!(
            SearchError::WorkerPanicked { worker_id: 3 }.to_string(),
            "worker 3 panicked"
        );
    }
}
