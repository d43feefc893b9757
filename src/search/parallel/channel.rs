//! Shared result slot and report channel for parallel search workers.

use crate::search::result::WorkerReport;
use crate::sensor::Position;
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// Write-once register holding the first position published by any worker.
#[derive(Debug, Default)]
pub struct ResultSlot {
    found: OnceLock<Position>,
    /// Publishes that lost the race.
    rejected: AtomicU64,
}

impl ResultSlot {
    /// Try to publish a position. Returns true if this write won.
    pub fn try_publish(&self, position: Position) -> bool {
        match self.found.set(position) {
            Ok(()) => true,
            Err(_) => {
                self.rejected.fetch_add(1, Ordering::SeqCst);
                false
            }
        }
    }

    /// Non-blocking check used by workers between rows.
    pub fn is_filled(&self) -> bool {
        self.found.get().is_some()
    }

    /// The winning position, if any.
    pub fn get(&self) -> Option<Position> {
        self.found.get().copied()
    }

    /// Number of publishes discarded because the slot was already filled.
    pub fn rejected_writes(&self) -> u64 {
        self.rejected.load(Ordering::SeqCst)
    }
}

/// Channel endpoints for a worker.
pub struct WorkerChannels {
    /// Send the final report to the coordinator.
    pub to_coordinator: Sender<WorkerReport>,
    /// Shared result slot.
    pub slot: Arc<ResultSlot>,
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Receive reports from workers.
    pub from_workers: Receiver<WorkerReport>,
    /// Shared result slot.
    pub slot: Arc<ResultSlot>,
}

/// Create channels for parallel search with the given number of workers.
pub fn create_channels(num_workers: usize) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    let slot = Arc::new(ResultSlot::default());

    // Unbounded so a finishing worker never blocks on the coordinator
    let (worker_tx, coordinator_rx) = unbounded();

    let worker_channels = (0..num_workers)
        .map(|_| WorkerChannels {
            to_coordinator: worker_tx.clone(),
            slot: Arc::clone(&slot),
        })
        .collect();

    let coordinator = CoordinatorChannels {
        from_workers: coordinator_rx,
        slot,
    };

    (coordinator, worker_channels)
}
