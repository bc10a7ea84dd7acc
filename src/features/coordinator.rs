//! Windowed list coordinator
//!
//! Joins the [`LoadTracker`] with the list [`Viewport`]: whenever the window
//! moves it works out which rows are about to be shown (plus a lookahead) and
//! issues loads for the ones that are neither loaded nor in flight.

use std::ops::RangeInclusive;

use super::load_tracker::{Completion, LoadRequest, LoadTracker, Universe};
use super::viewport::Viewport;

/// Default number of rows loaded ahead of the visible window
pub const DEFAULT_LOOKAHEAD_ROWS: usize = 5;

/// What the list shows in a row slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSlot {
    /// Real widgets for these item indices
    Loaded(RangeInclusive<usize>),
    /// Same-height stand-in while the row loads
    Placeholder,
}

#[derive(Debug, Clone)]
pub struct ListCoordinator {
    tracker: LoadTracker,
    viewport: Viewport,
    lookahead: usize,
}

impl ListCoordinator {
    pub fn new(universe: Universe, row_height: f32, viewport_height: f32, lookahead: usize) -> Self {
        Self {
            tracker: LoadTracker::new(universe),
            viewport: Viewport::new(universe.row_count(), row_height, viewport_height),
            lookahead,
        }
    }

    /// Stamp this list's requests with `mount` so a later list can tell them apart
    pub fn with_mount(mut self, mount: u64) -> Self {
        self.tracker = self.tracker.with_mount(mount);
        self
    }

    pub fn tracker(&self) -> &LoadTracker {
        &self.tracker
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn universe(&self) -> Universe {
        self.tracker.universe()
    }

    pub fn row_count(&self) -> usize {
        self.universe().row_count()
    }

    pub fn loaded_count(&self) -> usize {
        self.tracker.loaded_count()
    }

    /// Rows that should be loaded for the current window
    pub fn wanted_rows(&self) -> RangeInclusive<usize> {
        let first = self.viewport.first_visible_row();
        let last = (first + self.viewport.visible_row_count() + self.lookahead)
            .min(self.tracker.universe().last_row());
        first..=last
    }

    /// Issue loads for unloaded, not-yet-requested rows in the window.
    ///
    /// Each contiguous run of missing rows becomes one request.
    pub fn plan_loads(&mut self) -> Vec<LoadRequest> {
        let mut requests = Vec::new();
        let mut run: Option<(usize, usize)> = None;

        for row in self.wanted_rows() {
            let missing = !self.tracker.is_row_loaded(row) && !self.tracker.is_row_pending(row);
            run = match (run, missing) {
                (None, true) => Some((row, row)),
                (Some((start, _)), true) => Some((start, row)),
                (Some((start, stop)), false) => {
                    requests.extend(self.tracker.begin(start, stop));
                    None
                }
                (None, false) => None,
            };
        }
        if let Some((start, stop)) = run {
            requests.extend(self.tracker.begin(start, stop));
        }

        requests
    }

    /// Issue `load_rows(start_row, stop_row)` regardless of the window
    pub fn load_rows(&mut self, start_row: usize, stop_row: usize) -> Option<LoadRequest> {
        self.tracker.begin(start_row, stop_row)
    }

    /// Record a scroll event and return the loads it triggers
    pub fn on_scroll(&mut self, offset: f32, viewport_height: f32) -> Vec<LoadRequest> {
        self.viewport.on_scroll(offset, viewport_height);
        self.plan_loads()
    }

    /// Merge a finished load into the tracker
    pub fn complete(&mut self, request: &LoadRequest) -> Completion {
        self.tracker.complete(request)
    }

    pub fn scroll_to_top(&mut self) {
        self.viewport.scroll_to_top();
    }

    /// First half of scroll-to-bottom: load every row
    pub fn begin_scroll_to_bottom(&mut self) -> Option<LoadRequest> {
        self.tracker.begin(0, self.tracker.universe().last_row())
    }

    /// Second half of scroll-to-bottom, once the full load resolved.
    ///
    /// The viewport only jumps when the load belongs to this list.
    pub fn finish_scroll_to_bottom(&mut self, request: &LoadRequest) -> Completion {
        let completion = self.complete(request);
        if completion != Completion::Discarded {
            self.viewport.scroll_to_bottom();
        }
        completion
    }

    pub fn reset_all(&mut self) {
        self.tracker.reset_all();
    }

    /// How row `row` should render right now
    pub fn slot(&self, row: usize) -> RowSlot {
        if self.tracker.is_row_loaded(row) {
            RowSlot::Loaded(self.tracker.universe().items_in_row(row))
        } else {
            RowSlot::Placeholder
        }
    }
}
