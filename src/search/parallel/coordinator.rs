//! Parallel search coordinator that manages worker threads.

use crate::interval::Interval;
use crate::scan::scan_row;
use crate::search::parallel::channel::{CoordinatorChannels, WorkerChannels, create_channels};
use crate::search::parallel::config::ParallelConfig;
use crate::search::parallel::partition::partition_rows;
use crate::search::result::{SearchError, SearchStatistics, WorkerReport, WorkerState};
use crate::sensor::{Position, Sensor};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, trace};

/// Result from parallel search execution.
#[derive(Debug, Clone)]
pub struct ParallelResult {
    /// The gap position published by the winning worker.
    pub position: Position,
    /// Statistics aggregated from all workers.
    pub statistics: SearchStatistics,
    /// Per-worker reports, ordered by worker id.
    pub worker_reports: Vec<WorkerReport>,
}

/// Find the single uncovered position in `[0, range_max]²` using
/// `worker_count` threads.
pub fn find_unique_gap(
    sensors: &[Sensor],
    range_max: i64,
    worker_count: usize,
) -> Result<Position, SearchError> {
    let config = ParallelConfig::default().with_workers(worker_count);
    run_parallel_search(sensors, range_max, &config).map(|result| result.position)
}

/// Run the parallel gap search with the given configuration.
///
/// Waits for every worker to terminate before reading the result slot, even
/// when one of them found the gap early.
pub fn run_parallel_search(
    sensors: &[Sensor],
    range_max: i64,
    config: &ParallelConfig,
) -> Result<ParallelResult, SearchError> {
    run_with_scanner(sensors, range_max, config, scan_row)
}

/// Row scanner used by the workers: sensors, row, window.
trait RowScan: Fn(&[Sensor], i64, Interval) -> Option<Position> + Send + Sync + 'static {}

impl<F> RowScan for F where F: Fn(&[Sensor], i64, Interval) -> Option<Position> + Send + Sync + 'static
{}

fn run_with_scanner<F: RowScan>(
    sensors: &[Sensor],
    range_max: i64,
    config: &ParallelConfig,
    scanner: F,
) -> Result<ParallelResult, SearchError> {
    let window =
        Interval::new(0, range_max).map_err(|_| SearchError::InvalidRange { range_max })?;
    let start_time = Instant::now();

    let partitions = partition_rows(range_max, config.num_workers);
    debug!(
        workers = partitions.len(),
        range_max, "partitioned rows for parallel search"
    );

    let (coordinator_channels, worker_channels) = create_channels(partitions.len());

    // Sensors are read-only for the whole search
    let sensors: Arc<[Sensor]> = Arc::from(sensors);
    let scanner = Arc::new(scanner);

    let worker_handles: Vec<_> = worker_channels
        .into_iter()
        .zip(partitions)
        .enumerate()
        .map(|(worker_id, (channels, rows))| {
            let sensors = Arc::clone(&sensors);
            let scanner = Arc::clone(&scanner);
            std::thread::spawn(move || {
                run_worker(worker_id, &sensors, rows, window, channels, &*scanner)
            })
        })
        .collect();

    let num_workers = worker_handles.len();
    // Join everything before reporting a panic so no worker outlives the call
    let mut panicked = None;
    for (worker_id, handle) in worker_handles.into_iter().enumerate() {
        if handle.join().is_err() && panicked.is_none() {
            panicked = Some(worker_id);
        }
    }
    if let Some(worker_id) = panicked {
        return Err(SearchError::WorkerPanicked { worker_id });
    }

    collect_result(coordinator_channels, num_workers, range_max, start_time)
}

/// Drain worker reports and the result slot once every worker has joined.
fn collect_result(
    channels: CoordinatorChannels,
    num_workers: usize,
    range_max: i64,
    start_time: Instant,
) -> Result<ParallelResult, SearchError> {
    let mut worker_reports: Vec<WorkerReport> = channels.from_workers.try_iter().collect();
    worker_reports.sort_by_key(|report| report.worker_id);

    let statistics = SearchStatistics {
        workers: num_workers,
        elapsed_time: start_time.elapsed(),
        rows_scanned: worker_reports.iter().map(|r| r.rows_scanned).sum(),
        rejected_writes: channels.slot.rejected_writes(),
    };

    match channels.slot.get() {
        Some(position) => {
            info!(%position, rows_scanned = statistics.rows_scanned, "gap found");
            Ok(ParallelResult {
                position,
                statistics,
                worker_reports,
            })
        }
        None => Err(SearchError::NoGapFound { range_max }),
    }
}

/// Scan `rows` in increasing order until a gap is found, the partition is
/// exhausted, or another worker has already published.
fn run_worker<F: RowScan>(
    worker_id: usize,
    sensors: &[Sensor],
    rows: Interval,
    window: Interval,
    channels: WorkerChannels,
    scanner: &F,
) {
    debug!(worker_id, %rows, "worker started");

    let mut state = WorkerState::Running;
    let mut rows_scanned = 0u64;

    for row in rows.values() {
        if channels.slot.is_filled() {
            state = WorkerState::Cancelled;
            break;
        }

        rows_scanned += 1;
        if let Some(position) = scanner(sensors, row, window) {
            state = if channels.slot.try_publish(position) {
                WorkerState::Found
            } else {
                trace!(worker_id, %position, "lost publish race");
                WorkerState::Cancelled
            };
            break;
        }
    }

    if state == WorkerState::Running {
        state = WorkerState::Exhausted;
    }

    debug!(worker_id, %state, rows_scanned, "worker finished");

    // The coordinator holds the receiver until every worker has joined
    let sent = channels.to_coordinator.send(WorkerReport {
        worker_id,
        rows,
        rows_scanned,
        state,
    });
    debug_assert!(sent.is_ok(), "report receiver dropped before worker {} joined", worker_id);
}
