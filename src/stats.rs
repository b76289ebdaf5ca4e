//! Complexity counters threaded through the search and sort routines.
//!
//! Every algorithm takes an `Option<&mut Stats>`. Passing `None` turns the
//! counting off and changes nothing else.

use std::cmp::Ordering;
use std::fmt;

/// Counters of a single algorithm call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stats {
    /// Number of comparator invocations.
    pub comparisons: u64,
    /// Number of element swaps.
    pub swaps: u64,
    /// Length of the range, captured once at entry.
    pub element_count: usize,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} elements, {} comparisons, {} swaps",
            self.element_count, self.comparisons, self.swaps
        )
    }
}

/// Internal handle over the optional stats record.
pub(crate) struct Tally<'s> {
    stats: Option<&'s mut Stats>,
}

impl<'s> Tally<'s> {
    pub(crate) fn new(stats: Option<&'s mut Stats>) -> Self {
        Self { stats }
    }

    /// Record the range length. `count` is only evaluated when counting is on,
    /// since measuring a node range walks it.
    pub(crate) fn record_len(&mut self, count: impl FnOnce() -> usize) {
        if let Some(stats) = self.stats.as_deref_mut() {
            stats.element_count = count();
        }
    }

    pub(crate) fn compare<T, F>(&mut self, compare: &mut F, a: &T, b: &T) -> Ordering
    where
        T: ?Sized,
        F: FnMut(&T, &T) -> Ordering,
    {
        if let Some(stats) = self.stats.as_deref_mut() {
            stats.comparisons += 1;
        }
        compare(a, b)
    }

    pub(crate) fn swapped(&mut self) {
        if let Some(stats) = self.stats.as_deref_mut() {
            stats.swaps += 1;
        }
    }

    pub(crate) fn snapshot(&self) -> Option<Stats> {
        self.stats.as_deref().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::{Stats, Tally};

    #[test]
    fn tally_counts_when_enabled() {
        let mut stats = Stats::new();
        let mut tally = Tally::new(Some(&mut stats));
        let mut cmp = |a: &i32, b: &i32| a.cmp(b);
        tally.record_len(|| 7);
        tally.compare(&mut cmp, &1, &2);
        tally.compare(&mut cmp, &2, &1);
        tally.swapped();
        assert_eq!(
            stats,
            Stats {
                comparisons: 2,
                swaps: 1,
                element_count: 7
            }
        );
        assert_eq!(stats.to_string(), "7 elements, 2 comparisons, 1 swaps");
    }

    #[test]
    fn tally_is_transparent_when_disabled() {
        let mut tally = Tally::new(None);
        let mut called = false;
        tally.record_len(|| {
            called = true;
            3
        });
        assert!(!called);
        let mut cmp = |a: &i32, b: &i32| a.cmp(b);
        assert_eq!(tally.compare(&mut cmp, &1, &2), std::cmp::Ordering::Less);
        tally.swapped();
        assert_eq!(tally.snapshot(), None);
    }

    #[test]
    fn reset_clears_counters() {
        let mut stats = Stats {
            comparisons: 4,
            swaps: 2,
            element_count: 9,
        };
        stats.reset();
        assert_eq!(stats, Stats::default());
    }
}
