//! UI Components module - business-specific composite components
//!
//! Components combine widgets and primitives with application logic.
//! They are the only layer that should import from `crate::app`.
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Low-level Widget trait implementations
//! - **Widgets** (`crate::ui::widgets`): Composable UI patterns (no business logic)
//! - **Components** (this module): Business-specific UI with Message handling

pub mod footer;
pub mod header;
pub mod progress_panel;
pub mod rating_list;
pub mod reset_dialog;
