//! Authoritative store of rating state, keyed by item id

use std::collections::HashMap;

use super::rating::{ItemId, Rating, RatingEvent, RatingState};

/// Map from item id to its rating state.
///
/// Absent entries read as `RatingState::default()`.
#[derive(Debug, Clone, Default)]
pub struct RatingBook {
    entries: HashMap<ItemId, RatingState>,
}

impl RatingBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for `id`, defaulting when the item was never touched
    pub fn get(&self, id: ItemId) -> RatingState {
        self.entries.get(&id).copied().unwrap_or_default()
    }

    /// Whether an explicit entry exists for `id`
    pub fn contains(&self, id: ItemId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Upsert the rating, keeping the current submitted flag
    pub fn on_rating_change(&mut self, id: ItemId, rating: Rating) {
        let next = self.get(id).with_rating(rating);
        self.entries.insert(id, next);
    }

    /// Upsert a finalized rating; applying it twice is harmless
    pub fn on_submit(&mut self, id: ItemId, rating: Rating) {
        self.entries.insert(id, RatingState::submitted(rating));
    }

    /// Drop the entry, returning the item to its default state
    pub fn on_reset(&mut self, id: ItemId) {
        self.entries.remove(&id);
    }

    /// Route a widget event to the matching handler
    pub fn apply(&mut self, event: RatingEvent) {
        match event {
            RatingEvent::RatingChanged { id, rating } => self.on_rating_change(id, rating),
            RatingEvent::Submitted { id, rating } => self.on_submit(id, rating),
            RatingEvent::Reset { id } => self.on_reset(id),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries with a submitted rating
    pub fn submitted_count(&self) -> usize {
        self.entries.values().filter(|s| s.is_submitted()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(stars: u8) -> Rating {
        Rating::new(stars).unwrap()
    }

    #[test]
    fn absent_entries_default() {
        let book = RatingBook::new();
        assert_eq!(book.get(ItemId(42)), RatingState::default());
        assert!(!book.contains(ItemId(42)));
    }

    #[test]
    fn rating_change_preserves_submitted_flag() {
        let mut book = RatingBook::new();
        book.on_rating_change(ItemId(1), r(2));
        assert_eq!(book.get(ItemId(1)), RatingState::rated(r(2)));

        book.on_submit(ItemId(1), r(2));
        book.on_rating_change(ItemId(1), r(5));
        let state = book.get(ItemId(1));
        assert!(state.is_submitted());
        assert_eq!(state.rating(), Some(r(5)));
    }

    #[test]
    fn submit_is_idempotent() {
        let mut book = RatingBook::new();
        book.on_submit(ItemId(3), r(4));
        book.on_submit(ItemId(3), r(4));
        assert_eq!(book.get(ItemId(3)), RatingState::submitted(r(4)));
        assert_eq!(book.len(), 1);
        assert_eq!(book.submitted_count(), 1);
    }

    #[test]
    fn reset_removes_entry() {
        let mut book = RatingBook::new();
        book.apply(RatingEvent::Submitted {
            id: ItemId(8),
            rating: r(1),
        });
        book.apply(RatingEvent::Reset { id: ItemId(8) });
        assert!(!book.contains(ItemId(8)));
        assert!(book.is_empty());
    }

    #[test]
    fn submitted_count_ignores_pending_ratings() {
        let mut book = RatingBook::new();
        book.on_rating_change(ItemId(0), r(3));
        book.on_submit(ItemId(1), r(3));
        book.on_submit(ItemId(2), r(5));
        assert_eq!(book.submitted_count(), 2);

        book.clear();
        assert_eq!(book.submitted_count(), 0);
    }
}
