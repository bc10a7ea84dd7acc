//! Rating session - the container behind the rating page
//!
//! Owns the authoritative [`RatingBook`], the mounted list's
//! [`ListCoordinator`], and the list's reset registration. Every rating
//! change and load completion passes through here, and progress is always
//! derived from the book on demand.

use super::book::RatingBook;
use super::coordinator::{DEFAULT_LOOKAHEAD_ROWS, ListCoordinator, RowSlot};
use super::load_tracker::{Completion, LoadRequest, Universe};
use super::progress::Progress;
use super::rating::{ItemId, Rating, RatingAction, RatingEvent, RatingState, RatingWidget};
use super::reset::{ResetHandle, ResetRegistration};

/// Geometry the session hands to its list
#[derive(Debug, Clone, Copy)]
pub struct ListConfig {
    pub universe: Universe,
    pub row_height: f32,
    /// Height assumed until the list reports its real size
    pub viewport_height: f32,
    pub lookahead_rows: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            universe: Universe::default(),
            row_height: 150.0,
            viewport_height: 600.0,
            lookahead_rows: DEFAULT_LOOKAHEAD_ROWS,
        }
    }
}

/// The rating list while it is on screen
#[derive(Debug)]
struct MountedList {
    coordinator: ListCoordinator,
    _registration: ResetRegistration,
}

#[derive(Debug)]
pub struct RatingSession {
    config: ListConfig,
    book: RatingBook,
    list: Option<MountedList>,
    /// Mounts so far; stamps each list's requests
    mounts: u64,
    reset: ResetHandle,
}

impl RatingSession {
    pub fn new(config: ListConfig, reset: ResetHandle) -> Self {
        Self {
            config,
            book: RatingBook::new(),
            list: None,
            mounts: 0,
            reset,
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn total(&self) -> usize {
        self.config.universe.item_count()
    }

    // ============ List lifecycle ============

    /// Put the list on screen and return its initial loads
    pub fn mount(&mut self) -> Vec<LoadRequest> {
        if self.list.is_some() {
            return Vec::new();
        }
        self.mounts += 1;
        let mut coordinator = ListCoordinator::new(
            self.config.universe,
            self.config.row_height,
            self.config.viewport_height,
            self.config.lookahead_rows,
        )
        .with_mount(self.mounts);
        let requests = coordinator.plan_loads();
        self.list = Some(MountedList {
            coordinator,
            _registration: self.reset.register(),
        });
        tracing::info!("Rating list mounted ({})", self.mounts);
        requests
    }

    /// Take the list off screen; its load state and reset registration go with it
    pub fn unmount(&mut self) {
        if self.list.take().is_some() {
            tracing::info!("Rating list unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.list.is_some()
    }

    pub fn coordinator(&self) -> Option<&ListCoordinator> {
        self.list.as_ref().map(|l| &l.coordinator)
    }

    fn coordinator_mut(&mut self) -> Option<&mut ListCoordinator> {
        self.list.as_mut().map(|l| &mut l.coordinator)
    }

    // ============ Ratings ============

    pub fn ratings(&self) -> &RatingBook {
        &self.book
    }

    pub fn rating(&self, id: ItemId) -> RatingState {
        self.book.get(id)
    }

    /// Controlled widget for `id`, fed from the book
    pub fn widget(&self, id: ItemId) -> RatingWidget {
        RatingWidget::controlled(id, self.book.get(id))
    }

    /// Run a widget interaction and apply whatever it reports
    pub fn interact(&mut self, id: ItemId, action: RatingAction) -> Option<RatingEvent> {
        let event = self.widget(id).interact(action)?;
        tracing::debug!("{} -> {:?}", id, event);
        self.book.apply(event);
        Some(event)
    }

    pub fn on_rating_change(&mut self, id: ItemId, rating: Rating) {
        self.book.on_rating_change(id, rating);
    }

    pub fn on_submit(&mut self, id: ItemId, rating: Rating) {
        self.book.on_submit(id, rating);
    }

    pub fn on_reset(&mut self, id: ItemId) {
        self.book.on_reset(id);
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.book, self.total())
    }

    // ============ Loading ============

    pub fn loaded_count(&self) -> usize {
        self.coordinator().map_or(0, ListCoordinator::loaded_count)
    }

    pub fn slot(&self, row: usize) -> RowSlot {
        self.coordinator()
            .map_or(RowSlot::Placeholder, |c| c.slot(row))
    }

    /// Issue an explicit `load_rows` on the mounted list
    pub fn load_rows(&mut self, start_row: usize, stop_row: usize) -> Option<LoadRequest> {
        self.coordinator_mut()?.load_rows(start_row, stop_row)
    }

    pub fn on_scroll(&mut self, offset: f32, viewport_height: f32) -> Vec<LoadRequest> {
        self.coordinator_mut()
            .map(|c| c.on_scroll(offset, viewport_height))
            .unwrap_or_default()
    }

    /// Merge a finished load into the mounted list
    pub fn rows_loaded(&mut self, request: &LoadRequest) -> Completion {
        let Some(coordinator) = self.coordinator_mut() else {
            tracing::debug!("Rows {:?} finished loading after unmount", request.rows);
            return Completion::Discarded;
        };
        let completion = coordinator.complete(request);
        log_completion(request, completion);
        completion
    }

    pub fn scroll_to_top(&mut self) {
        if let Some(coordinator) = self.coordinator_mut() {
            coordinator.scroll_to_top();
        }
    }

    pub fn begin_scroll_to_bottom(&mut self) -> Option<LoadRequest> {
        self.coordinator_mut()?.begin_scroll_to_bottom()
    }

    /// `true` when the current list took the load and jumped to its bottom
    pub fn finish_scroll_to_bottom(&mut self, request: &LoadRequest) -> bool {
        let Some(coordinator) = self.coordinator_mut() else {
            tracing::debug!("Full load finished after unmount");
            return false;
        };
        let completion = coordinator.finish_scroll_to_bottom(request);
        log_completion(request, completion);
        completion != Completion::Discarded
    }

    // ============ Reset ============

    /// Entry point for triggers outside the list; `true` when a reset flow may start
    pub fn request_external_reset(&self) -> bool {
        self.reset.trigger()
    }

    /// Clear every rating and un-load every row (call only after confirmation).
    ///
    /// Returns the loads needed to refill the current window.
    pub fn reset_all(&mut self) -> Vec<LoadRequest> {
        tracing::info!("Resetting {} rating entries", self.book.len());
        self.book.clear();
        let Some(coordinator) = self.coordinator_mut() else {
            return Vec::new();
        };
        coordinator.reset_all();
        coordinator.plan_loads()
    }
}

fn log_completion(request: &LoadRequest, completion: Completion) {
    match completion {
        Completion::Applied => tracing::debug!("Rows {:?} loaded", request.rows),
        Completion::AppliedAfterReset => tracing::warn!(
            "Rows {:?} finished loading after a reset and are marked loaded again",
            request.rows
        ),
        Completion::Discarded => tracing::warn!(
            "Dropping rows {:?} loaded for an earlier mount ({})",
            request.rows,
            request.mount
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::ops::RangeInclusive;
    use std::sync::{Arc, Mutex};

    use futures_util::future::BoxFuture;
    use tokio::sync::Notify;

    use super::*;
    use crate::features::data_source::{DataSource, SimulatedSource, fetch};

    /// Source whose loads resolve only when the test opens their gate,
    /// keyed by the first item of the range
    #[derive(Debug, Default)]
    struct GatedSource {
        gates: Mutex<HashMap<usize, Arc<Notify>>>,
    }

    impl GatedSource {
        fn gate(&self, first_item: usize) -> Arc<Notify> {
            self.gates
                .lock()
                .unwrap()
                .entry(first_item)
                .or_default()
                .clone()
        }

        fn open(&self, first_item: usize) {
            self.gate(first_item).notify_one();
        }
    }

    impl DataSource for GatedSource {
        fn load(&self, items: RangeInclusive<usize>) -> BoxFuture<'static, ()> {
            let gate = self.gate(*items.start());
            Box::pin(async move { gate.notified().await })
        }
    }

    fn session() -> RatingSession {
        RatingSession::new(ListConfig::default(), ResetHandle::new())
    }

    fn r(stars: u8) -> Rating {
        Rating::new(stars).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn end_to_end_rating_flow() {
        let source: Arc<dyn DataSource> = Arc::new(SimulatedSource::default());
        let mut session = session();
        session.mount();
        assert_eq!(session.loaded_count(), 0);
        assert_eq!(session.progress().percent(), 0);

        let request = session.load_rows(0, 4).unwrap();
        let request = fetch(source, request).await;
        session.rows_loaded(&request);
        assert_eq!(session.loaded_count(), 10);

        session.interact(ItemId(3), RatingAction::Star(4));
        session.interact(ItemId(3), RatingAction::Submit);
        assert_eq!(session.progress().percent(), 1);

        assert!(session.request_external_reset());
        session.reset_all();
        assert_eq!(session.loaded_count(), 0);
        assert_eq!(session.progress().percent(), 0);
        assert!(session.ratings().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn scroll_to_bottom_loads_all_rows() {
        let source: Arc<dyn DataSource> = Arc::new(SimulatedSource::default());
        let mut session = session();
        session.mount();

        let request = session.begin_scroll_to_bottom().unwrap();
        assert_eq!(request.rows, 0..=49);
        let request = fetch(source, request).await;
        session.finish_scroll_to_bottom(&request);

        let viewport = session.coordinator().unwrap().viewport();
        assert_eq!(session.loaded_count(), 100);
        assert!(viewport.at_bottom());
        assert!(!viewport.at_top());
    }

    #[test]
    fn interact_goes_through_widget_guards() {
        let mut session = session();
        assert_eq!(session.interact(ItemId(1), RatingAction::Submit), None);

        session.interact(ItemId(1), RatingAction::Star(2));
        session.interact(ItemId(1), RatingAction::Submit);
        assert_eq!(session.interact(ItemId(1), RatingAction::Star(5)), None);
        assert_eq!(session.rating(ItemId(1)), RatingState::submitted(r(2)));

        assert_eq!(
            session.interact(ItemId(1), RatingAction::Reset),
            Some(RatingEvent::Reset { id: ItemId(1) })
        );
        assert!(!session.ratings().contains(ItemId(1)));
    }

    #[test]
    fn resubmitting_leaves_entry_unchanged() {
        let mut session = session();
        session.on_submit(ItemId(5), r(3));
        session.on_submit(ItemId(5), r(3));
        assert_eq!(session.rating(ItemId(5)), RatingState::submitted(r(3)));
    }

    #[test]
    fn external_reset_only_while_mounted() {
        let mut session = session();
        assert!(!session.request_external_reset());

        session.mount();
        assert!(session.request_external_reset());

        session.unmount();
        assert!(!session.request_external_reset());
    }

    #[test]
    fn mount_requests_initial_window_once() {
        let mut session = session();
        let requests = session.mount();
        assert_eq!(requests.len(), 1);
        assert!(session.mount().is_empty());
    }

    #[test]
    fn completion_after_reset_still_marks_rows() {
        let mut session = session();
        let requests = session.mount();
        session.reset_all();

        for request in &requests {
            session.rows_loaded(request);
        }
        assert!(session.loaded_count() > 0);
    }

    #[test]
    fn unmounted_session_ignores_loads() {
        let mut session = session();
        let requests = session.mount();
        session.unmount();
        for request in &requests {
            session.rows_loaded(request);
        }
        assert_eq!(session.loaded_count(), 0);
        assert_eq!(session.slot(0), RowSlot::Placeholder);
    }

    #[test]
    fn ratings_survive_unmount() {
        let mut session = session();
        session.mount();
        session.on_submit(ItemId(0), r(5));
        session.unmount();
        session.mount();
        assert_eq!(session.progress().submitted, 1);
    }

    #[tokio::test]
    async fn overlapping_loads_merge_in_reverse_order() {
        let gated = Arc::new(GatedSource::default());
        let source: Arc<dyn DataSource> = gated.clone();
        let mut session = session();
        session.mount();

        // Rows 12..=20 are items 24..=41, rows 16..=25 are items 32..=51
        let early = session.load_rows(12, 20).unwrap();
        let late = session.load_rows(16, 25).unwrap();
        let early = tokio::spawn(fetch(source.clone(), early));
        let late = tokio::spawn(fetch(source, late));

        gated.open(32);
        let late = late.await.unwrap();
        assert_eq!(session.rows_loaded(&late), Completion::Applied);
        assert_eq!(session.loaded_count(), 20);
        assert!(!early.is_finished());

        gated.open(24);
        let early = early.await.unwrap();
        assert_eq!(session.rows_loaded(&early), Completion::Applied);
        assert_eq!(session.loaded_count(), 28);
        assert!((12..=25).all(|row| matches!(session.slot(row), RowSlot::Loaded(_))));
    }

    #[tokio::test]
    async fn reset_during_load_keeps_late_rows() {
        let gated = Arc::new(GatedSource::default());
        let source: Arc<dyn DataSource> = gated.clone();
        let mut session = session();
        let initial = session.mount().remove(0);
        assert_eq!(initial.items, 0..=21);
        let in_flight = tokio::spawn(fetch(source, initial));

        session.on_submit(ItemId(4), r(3));
        session.reset_all();
        assert_eq!(session.loaded_count(), 0);
        assert!(session.ratings().is_empty());

        gated.open(0);
        let done = in_flight.await.unwrap();
        assert!(session.coordinator().unwrap().tracker().is_stale(&done));
        assert_eq!(session.rows_loaded(&done), Completion::AppliedAfterReset);
        assert_eq!(session.loaded_count(), 22);
        assert!(session.ratings().is_empty());
    }

    #[test]
    fn bottom_load_from_previous_mount_does_not_move_new_list() {
        let mut session = session();
        session.mount();
        let request = session.begin_scroll_to_bottom().unwrap();

        session.unmount();
        session.mount();
        assert!(!session.finish_scroll_to_bottom(&request));

        let viewport = session.coordinator().unwrap().viewport();
        assert_eq!(session.loaded_count(), 0);
        assert!(viewport.at_top());
        assert_eq!(viewport.offset(), 0.0);
        assert_eq!(session.rows_loaded(&request), Completion::Discarded);
    }
}
