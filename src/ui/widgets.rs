//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//! They should not contain any business logic or depend on `crate::app` directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Widgets must not import from `crate::app::Message`
//! - **Generic callbacks**: Use generic Message types or callback functions
//! - **Composable**: Build on primitives and iced's built-in widgets
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Low-level Widget trait implementations
//! - **Widgets** (this module): Composable UI patterns
//! - **Components** (`crate::ui::components`): Business-specific UI with Message handling

pub mod placeholder_card;
pub mod star_rating;

pub use crate::ui::primitives::{
    ProgressRing, ScrollPosition, VirtualList, VirtualListState, view_progress_ring_styled,
};
