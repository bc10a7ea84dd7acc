//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod book;
pub mod coordinator;
pub mod data_source;
pub mod load_tracker;
pub mod progress;
pub mod rating;
pub mod reset;
pub mod session;
pub mod settings;
pub mod viewport;

pub use coordinator::RowSlot;
pub use data_source::{DataSource, SimulatedSource};
pub use load_tracker::LoadRequest;
pub use rating::{ItemId, MAX_STARS, RatingAction, RatingState, RatingWidget};
pub use reset::ResetHandle;
pub use session::RatingSession;
pub use settings::Settings;
