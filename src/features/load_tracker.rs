//! Row-based load tracking over a fixed universe of items
//!
//! Items `0..item_count` are grouped into rows of `items_per_row`. Loading is
//! monotonic: indices are only ever added, except by [`LoadTracker::reset_all`].
//!
//! Loading is split in two halves so the UI thread never awaits:
//! [`LoadTracker::begin`] builds a [`LoadRequest`] and records the rows as in
//! flight, the request is awaited elsewhere (see `data_source::fetch`), and
//! [`LoadTracker::complete`] merges the finished range back in.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Fixed item/row geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Universe {
    item_count: usize,
    items_per_row: usize,
}

impl Universe {
    /// Both values are raised to at least one
    pub fn new(item_count: usize, items_per_row: usize) -> Self {
        Self {
            item_count: item_count.max(1),
            items_per_row: items_per_row.max(1),
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn items_per_row(&self) -> usize {
        self.items_per_row
    }

    /// `ceil(item_count / items_per_row)`
    pub fn row_count(&self) -> usize {
        self.item_count.div_ceil(self.items_per_row)
    }

    pub fn last_row(&self) -> usize {
        self.row_count() - 1
    }

    /// Item indices covered by rows `start_row..=stop_row`, clamped to the universe
    pub fn items_for_rows(&self, start_row: usize, stop_row: usize) -> RangeInclusive<usize> {
        let last_item = self.item_count - 1;
        let first = (start_row * self.items_per_row).min(last_item);
        let last = (stop_row * self.items_per_row + self.items_per_row - 1).min(last_item);
        first..=last.max(first)
    }

    /// Item indices of a single row
    pub fn items_in_row(&self, row: usize) -> RangeInclusive<usize> {
        self.items_for_rows(row, row)
    }

    pub fn row_of(&self, item: usize) -> usize {
        item / self.items_per_row
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new(100, 2)
    }
}

/// An issued `load_rows` call, carried through the async fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub rows: RangeInclusive<usize>,
    pub items: RangeInclusive<usize>,
    /// Tracker generation when the request was issued
    pub generation: u64,
    /// Mount of the list that issued the request
    pub mount: u64,
}

/// Outcome of merging a finished [`LoadRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// Issued before the last reset; applied anyway
    AppliedAfterReset,
    /// Issued by an earlier mount of the list; nothing changed
    Discarded,
}

/// Which items have been loaded, plus which rows are in flight
#[derive(Debug, Clone)]
pub struct LoadTracker {
    universe: Universe,
    loaded: BTreeSet<usize>,
    pending_rows: BTreeSet<usize>,
    generation: u64,
    mount: u64,
}

impl LoadTracker {
    pub fn new(universe: Universe) -> Self {
        Self {
            universe,
            loaded: BTreeSet::new(),
            pending_rows: BTreeSet::new(),
            generation: 0,
            mount: 0,
        }
    }

    /// Tag every request this tracker issues with `mount`
    pub fn with_mount(mut self, mount: u64) -> Self {
        self.mount = mount;
        self
    }

    pub fn mount(&self) -> u64 {
        self.mount
    }

    pub fn universe(&self) -> Universe {
        self.universe
    }

    /// True iff every item of `row` is loaded
    pub fn is_row_loaded(&self, row: usize) -> bool {
        if row >= self.universe.row_count() {
            return false;
        }
        self.universe
            .items_in_row(row)
            .all(|item| self.loaded.contains(&item))
    }

    pub fn is_item_loaded(&self, item: usize) -> bool {
        self.loaded.contains(&item)
    }

    /// Whether a load covering `row` has been issued and not completed
    pub fn is_row_pending(&self, row: usize) -> bool {
        self.pending_rows.contains(&row)
    }

    /// Number of distinct loaded items
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_fully_loaded(&self) -> bool {
        self.loaded.len() == self.universe.item_count()
    }

    /// Start a `load_rows(start_row, stop_row)` call.
    ///
    /// Rows are clamped to the universe; `None` when the range is empty.
    pub fn begin(&mut self, start_row: usize, stop_row: usize) -> Option<LoadRequest> {
        let last_row = self.universe.last_row();
        if start_row > last_row || start_row > stop_row {
            return None;
        }
        let stop_row = stop_row.min(last_row);

        self.pending_rows.extend(start_row..=stop_row);
        Some(LoadRequest {
            rows: start_row..=stop_row,
            items: self.universe.items_for_rows(start_row, stop_row),
            generation: self.generation,
            mount: self.mount,
        })
    }

    /// Merge a finished request into the loaded set.
    ///
    /// Completions from before the last reset are still applied. Requests
    /// issued under another mount belong to a list that no longer exists and
    /// are dropped.
    pub fn complete(&mut self, request: &LoadRequest) -> Completion {
        if request.mount != self.mount {
            return Completion::Discarded;
        }
        self.loaded.extend(request.items.clone());
        for row in request.rows.clone() {
            self.pending_rows.remove(&row);
        }
        if self.is_stale(request) {
            Completion::AppliedAfterReset
        } else {
            Completion::Applied
        }
    }

    /// Whether `request` was issued before the most recent reset
    pub fn is_stale(&self, request: &LoadRequest) -> bool {
        request.generation != self.generation
    }

    /// Forget every loaded item and every in-flight row
    pub fn reset_all(&mut self) {
        self.loaded.clear();
        self.pending_rows.clear();
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universe_geometry() {
        let universe = Universe::default();
        assert_eq!(universe.row_count(), 50);
        assert_eq!(universe.items_in_row(3), 6..=7);
        assert_eq!(universe.items_for_rows(0, 4), 0..=9);
        assert_eq!(universe.row_of(7), 3);
    }

    #[test]
    fn odd_universe_clamps_last_row() {
        let universe = Universe::new(5, 2);
        assert_eq!(universe.row_count(), 3);
        assert_eq!(universe.items_in_row(2), 4..=4);
        assert_eq!(universe.items_for_rows(1, 9), 2..=4);
    }

    #[test]
    fn row_not_loaded_until_completed() {
        let mut tracker = LoadTracker::new(Universe::default());
        let request = tracker.begin(2, 3).unwrap();
        assert!(!tracker.is_row_loaded(2));
        assert!(tracker.is_row_pending(2));

        tracker.complete(&request);
        assert!(tracker.is_row_loaded(2));
        assert!(tracker.is_row_loaded(3));
        assert!(!tracker.is_row_loaded(4));
        assert!(!tracker.is_row_pending(2));
        assert!(tracker.is_item_loaded(4) && tracker.is_item_loaded(7));
        assert!(!tracker.is_item_loaded(8));
    }

    #[test]
    fn loaded_count_after_prefix_loads() {
        for k in [0usize, 4, 10, 49, 60] {
            let mut tracker = LoadTracker::new(Universe::default());
            let request = tracker.begin(0, k).unwrap();
            tracker.complete(&request);
            assert_eq!(tracker.loaded_count(), ((k + 1) * 2).min(100), "k = {k}");
        }
    }

    #[test]
    fn overlapping_completions_merge() {
        let mut tracker = LoadTracker::new(Universe::default());
        let a = tracker.begin(0, 5).unwrap();
        let b = tracker.begin(3, 9).unwrap();

        // Completion order must not matter
        tracker.complete(&b);
        tracker.complete(&a);
        assert_eq!(tracker.loaded_count(), 20);
        assert!((0..=9).all(|row| tracker.is_row_loaded(row)));
    }

    #[test]
    fn reset_all_unloads_everything() {
        let mut tracker = LoadTracker::new(Universe::default());
        let request = tracker.begin(0, 49).unwrap();
        tracker.complete(&request);
        assert!(tracker.is_fully_loaded());

        tracker.reset_all();
        assert_eq!(tracker.loaded_count(), 0);
        assert!(!tracker.is_row_loaded(0));
    }

    #[test]
    fn completion_after_reset_is_stale_but_applied() {
        let mut tracker = LoadTracker::new(Universe::default());
        let request = tracker.begin(0, 1).unwrap();
        tracker.reset_all();

        assert!(tracker.is_stale(&request));
        assert_eq!(tracker.complete(&request), Completion::AppliedAfterReset);
        assert_eq!(tracker.loaded_count(), 4);
    }

    #[test]
    fn requests_from_another_mount_are_discarded() {
        let mut old = LoadTracker::new(Universe::default()).with_mount(1);
        let request = old.begin(0, 49).unwrap();
        assert_eq!(request.mount, 1);

        let mut current = LoadTracker::new(Universe::default()).with_mount(2);
        assert_eq!(current.complete(&request), Completion::Discarded);
        assert_eq!(current.loaded_count(), 0);

        let own = current.begin(0, 0).unwrap();
        assert_eq!(current.complete(&own), Completion::Applied);
    }

    #[test]
    fn begin_rejects_out_of_range() {
        let mut tracker = LoadTracker::new(Universe::default());
        assert!(tracker.begin(50, 60).is_none());
        assert!(tracker.begin(5, 4).is_none());
        assert_eq!(tracker.begin(48, 70).map(|r| r.rows), Some(48..=49));
    }

    #[test]
    fn rows_past_the_end_are_never_loaded() {
        let tracker = LoadTracker::new(Universe::default());
        assert!(!tracker.is_row_loaded(50));
    }
}
