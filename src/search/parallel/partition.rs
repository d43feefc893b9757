//! Splitting the row range into contiguous worker partitions.

use crate::interval::Interval;

/// Split rows `[0, range_max]` into `worker_count` contiguous chunks.
///
/// Every chunk holds `total / worker_count` rows and the last one absorbs the
/// remainder. `worker_count` is clamped to `[1, range_max + 1]` so no chunk is
/// empty. Returns no partitions for a negative `range_max`.
pub fn partition_rows(range_max: i64, worker_count: usize) -> Vec<Interval> {
    if range_max < 0 {
        return Vec::new();
    }

    let total = range_max as u64 + 1;
    let count = (worker_count as u64).clamp(1, total);
    let chunk = total / count;

    (0..count)
        .map(|i| {
            let start = (i * chunk) as i64;
            let end = if i == count - 1 {
                range_max
            } else {
                ((i + 1) * chunk) as i64 - 1
            };
            Interval::from_ordered(start, end)
        })
        .collect()
}
