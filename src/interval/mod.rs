//! Inclusive integer intervals and maximally merged interval sets
//!
//! An [`IntervalSet`] keeps its intervals sorted by lower bound with at least
//! one uncovered integer between any two neighbours, so every covered run of
//! integers is represented by exactly one [`Interval`].

use std::fmt;
use std::ops::RangeInclusive;

/// Errors raised when constructing intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntervalError {
    /// Lower bound is greater than upper bound
    #[error("malformed interval: min {min} is greater than max {max}")]
    Malformed { min: i64, max: i64 },
}

/// Inclusive integer interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    min: i64,
    max: i64,
}

impl Interval {
    /// Create a new interval, rejecting `min > max`
    pub fn new(min: i64, max: i64) -> Result<Self, IntervalError> {
        if min > max {
            return Err(IntervalError::Malformed { min, max });
        }
        Ok(Self { min, max })
    }

    /// Build an interval from bounds the caller already knows are ordered
    pub(crate) fn from_ordered(min: i64, max: i64) -> Self {
        debug_assert!(min <= max, "unordered bounds [{}, {}]", min, max);
        Self { min, max }
    }

    /// Single-point interval `[value, value]`
    pub fn point(value: i64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Number of integers covered, saturating at `u64::MAX`
    ///
    /// Only `[i64::MIN, i64::MAX]` saturates: it holds `u64::MAX + 1` values.
    pub fn size(&self) -> u64 {
        self.max.abs_diff(self.min).saturating_add(1)
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Whether the two intervals share at least one integer
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Whether `self` ends strictly before `other` with at least one
    /// uncovered integer in between
    fn is_separated_before(&self, other: &Interval) -> bool {
        self.max.checked_add(1).is_some_and(|next| next < other.min)
    }

    /// Smallest interval covering both
    fn hull(&self, other: &Interval) -> Interval {
        Interval {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Iterate over every covered integer in increasing order
    pub fn values(&self) -> RangeInclusive<i64> {
        self.min..=self.max
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl From<Interval> for RangeInclusive<i64> {
    fn from(interval: Interval) -> Self {
        interval.values()
    }
}

/// Sorted set of disjoint, non-adjacent inclusive intervals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an interval, merging it with every stored interval it
    /// overlaps or touches.
    pub fn add(&mut self, interval: Interval) {
        let mut merged = interval;
        let mut intervals = Vec::with_capacity(self.intervals.len() + 1);
        let mut stored = std::mem::take(&mut self.intervals).into_iter();

        while let Some(current) = stored.next() {
            if current.is_separated_before(&merged) {
                intervals.push(current);
            } else if merged.is_separated_before(&current) {
                // Everything from here on lies strictly after the merge
                intervals.push(merged);
                intervals.push(current);
                intervals.extend(stored);
                self.intervals = intervals;
                return;
            } else {
                merged = merged.hull(&current);
            }
        }

        intervals.push(merged);
        self.intervals = intervals;
    }

    /// Subtract an interval, splitting stored intervals where needed.
    pub fn remove(&mut self, interval: Interval) {
        let mut intervals = Vec::with_capacity(self.intervals.len() + 1);

        for current in std::mem::take(&mut self.intervals) {
            if !current.overlaps(&interval) {
                intervals.push(current);
                continue;
            }
            if current.min < interval.min {
                intervals.push(Interval {
                    min: current.min,
                    max: interval.min - 1,
                });
            }
            if interval.max < current.max {
                intervals.push(Interval {
                    min: interval.max + 1,
                    max: current.max,
                });
            }
        }

        self.intervals = intervals;
    }

    /// Find the uncovered integer in `window`, probing from `window.min()`.
    ///
    /// Only `window.min()` and the integer right after the interval covering
    /// it are considered, so the answer is exact only when the window holds
    /// at most one gap. Returns `None` when the probe is covered all the way
    /// to the end of the window.
    pub fn first_gap(&self, window: Interval) -> Option<i64> {
        let start = window.min;

        match self.intervals.iter().find(|interval| interval.max >= start) {
            None => Some(start),
            Some(interval) if start < interval.min => Some(start),
            Some(interval) => interval
                .max
                .checked_add(1)
                .filter(|&candidate| window.contains(candidate)),
        }
    }

    /// Total number of covered integers, saturating at `u64::MAX`
    pub fn size(&self) -> u64 {
        self.intervals
            .iter()
            .fold(0u64, |total, interval| total.saturating_add(interval.size()))
    }

    pub fn contains(&self, value: i64) -> bool {
        self.intervals
            .iter()
            .any(|interval| interval.contains(value))
    }

    /// Number of stored (maximally merged) intervals
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        let mut set = IntervalSet::new();
        for interval in iter {
            set.add(interval);
        }
        set
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
