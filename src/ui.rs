//! UI module for the rating grid
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Primitives** (`primitives`): Low-level Widget trait implementations
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling

pub mod components;
pub mod primitives;
pub mod theme;
pub mod widgets;
