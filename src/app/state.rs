// src/app/state.rs
//! Application state definitions

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::features::session::ListConfig;
use crate::features::{DataSource, ItemId, RatingSession, RatingWidget, ResetHandle, Settings};
use crate::i18n::Locale;
use crate::ui::widgets::VirtualListState;

/// Identifier of the footer's standalone widget
pub const SANDBOX_ID: ItemId = ItemId(0);

/// Main application state
pub struct App {
    /// Settings, locale and the loading backend
    pub core: CoreState,
    /// Ratings and the mounted list
    pub session: RatingSession,
    /// UI state (scroll position, dialogs, sandbox widget)
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    /// Backend behind every `load_rows`
    pub source: Arc<dyn DataSource>,
    /// External reset entry point, shared with the session
    pub reset: ResetHandle,
}

impl CoreState {
    pub fn new(
        settings: Settings,
        locale: Locale,
        source: Arc<dyn DataSource>,
        reset: ResetHandle,
    ) -> Self {
        Self {
            settings,
            locale,
            source,
            reset,
        }
    }
}

/// UI State
pub struct UiState {
    /// Scroll state shared with the virtual list widget
    pub list_state: Rc<RefCell<VirtualListState>>,
    pub reset_dialog_open: bool,
    /// Uncontrolled widget shown in the footer
    pub sandbox: RatingWidget,
}

impl UiState {
    pub fn new(config: &ListConfig) -> Self {
        Self {
            list_state: Rc::new(RefCell::new(VirtualListState::new(
                config.universe.row_count(),
                config.row_height,
            ))),
            reset_dialog_open: false,
            sandbox: RatingWidget::from_external(SANDBOX_ID, None),
        }
    }
}
