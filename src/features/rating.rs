//! Per-item rating state and the rating widget state machine
//!
//! A [`RatingWidget`] is either controlled (its state is owned by a parent and
//! every interaction is reported back as a [`RatingEvent`]) or uncontrolled
//! (it keeps its own transient [`RatingState`]). The two modes are explicit
//! variants of [`RatingMode`].

use std::fmt;

/// Number of stars shown by every rating widget
pub const MAX_STARS: u8 = 5;

/// Stable identifier of a rating target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

impl ItemId {
    /// Zero-based index of the item in the universe
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// A star rating in `1..=MAX_STARS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    /// Returns `None` when `stars` is outside `1..=MAX_STARS`
    pub fn new(stars: u8) -> Option<Self> {
        (1..=MAX_STARS).contains(&stars).then_some(Self(stars))
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_STARS)
    }
}

/// Rating value of a single item.
///
/// Fields are private so that `submitted` can never be set without a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingState {
    rating: Option<Rating>,
    submitted: bool,
}

impl RatingState {
    /// A pending (not yet submitted) rating
    pub fn rated(rating: Rating) -> Self {
        Self {
            rating: Some(rating),
            submitted: false,
        }
    }

    /// A finalized rating
    pub fn submitted(rating: Rating) -> Self {
        Self {
            rating: Some(rating),
            submitted: true,
        }
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Number of filled stars (absent rating counts as zero)
    pub fn filled_stars(&self) -> u8 {
        self.rating.map(Rating::stars).unwrap_or(0)
    }

    /// Whether star `k` (1-based) renders filled
    pub fn is_star_filled(&self, k: u8) -> bool {
        k <= self.filled_stars()
    }

    /// Stars accept clicks only until the rating is submitted
    pub fn stars_enabled(&self) -> bool {
        !self.submitted
    }

    /// Submit is possible with a rating that has not been submitted yet
    pub fn can_submit(&self) -> bool {
        self.rating.is_some() && !self.submitted
    }

    /// Returns a copy with the rating replaced, keeping the submitted flag
    pub fn with_rating(self, rating: Rating) -> Self {
        Self {
            rating: Some(rating),
            ..self
        }
    }
}

/// User interaction on a rating widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingAction {
    /// Star `k` clicked (1-based)
    Star(u8),
    Submit,
    Reset,
}

/// Change reported by a controlled widget to its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingEvent {
    RatingChanged { id: ItemId, rating: Rating },
    Submitted { id: ItemId, rating: Rating },
    Reset { id: ItemId },
}

impl RatingEvent {
    pub fn id(&self) -> ItemId {
        match self {
            Self::RatingChanged { id, .. } | Self::Submitted { id, .. } | Self::Reset { id } => *id,
        }
    }
}

/// Who owns the widget's rating state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingMode {
    /// State supplied by a parent; the widget never writes it
    Controlled(RatingState),
    /// State owned by the widget itself
    Uncontrolled(RatingState),
}

/// State machine behind a single star-rating widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingWidget {
    id: ItemId,
    mode: RatingMode,
}

impl RatingWidget {
    /// Widget that reflects `state` and reports every change as an event
    pub fn controlled(id: ItemId, state: RatingState) -> Self {
        Self {
            id,
            mode: RatingMode::Controlled(state),
        }
    }

    /// Widget that keeps its own state, starting empty
    pub fn uncontrolled(id: ItemId) -> Self {
        Self {
            id,
            mode: RatingMode::Uncontrolled(RatingState::default()),
        }
    }

    /// Picks the mode from whether external state was supplied
    pub fn from_external(id: ItemId, external: Option<RatingState>) -> Self {
        match external {
            Some(state) => Self::controlled(id, state),
            None => Self::uncontrolled(id),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.mode, RatingMode::Controlled(_))
    }

    /// State currently displayed by the widget
    pub fn state(&self) -> RatingState {
        match self.mode {
            RatingMode::Controlled(state) | RatingMode::Uncontrolled(state) => state,
        }
    }

    /// Apply a user interaction.
    ///
    /// Controlled widgets return the event their owner must apply and leave
    /// their displayed state untouched. Uncontrolled widgets update their own
    /// state and return `None`. Invalid transitions are ignored in both modes.
    pub fn interact(&mut self, action: RatingAction) -> Option<RatingEvent> {
        let current = self.state();
        let next = match action {
            RatingAction::Star(k) => {
                if current.is_submitted() {
                    return None;
                }
                let rating = Rating::new(k)?;
                (
                    current.with_rating(rating),
                    RatingEvent::RatingChanged {
                        id: self.id,
                        rating,
                    },
                )
            }
            RatingAction::Submit => {
                if !current.can_submit() {
                    return None;
                }
                let rating = current.rating()?;
                (
                    RatingState::submitted(rating),
                    RatingEvent::Submitted {
                        id: self.id,
                        rating,
                    },
                )
            }
            RatingAction::Reset => (RatingState::default(), RatingEvent::Reset { id: self.id }),
        };

        match &mut self.mode {
            RatingMode::Controlled(_) => Some(next.1),
            RatingMode::Uncontrolled(local) => {
                *local = next.0;
                None
            }
        }
    }

    /// Replace the externally supplied state (no effect when uncontrolled)
    pub fn sync(&mut self, external: RatingState) {
        if let RatingMode::Controlled(state) = &mut self.mode {
            *state = external;
        }
    }
}
