//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::features::{ItemId, LoadRequest, RatingAction};
use crate::ui::widgets::ScrollPosition;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Ratings ============
    /// Interaction on a list item's controlled widget
    ItemAction(ItemId, RatingAction),
    /// Interaction on the footer's uncontrolled widget
    SandboxAction(RatingAction),

    // ============ List ============
    /// Virtual list moved or was resized
    ListScrolled(ScrollPosition),
    /// A `load_rows` call finished
    RowsLoaded(LoadRequest),
    ScrollToTop,
    ScrollToBottom,
    /// Full-range load behind scroll-to-bottom finished
    ScrolledToBottom(LoadRequest),
    /// Mount or unmount the rating list
    ToggleList,

    // ============ Reset ============
    /// Reset requested from outside the list (header button, shortcut)
    ExternalReset,
    /// Show the confirmation prompt (also the list's own reset button)
    RequestResetAll,
    ConfirmResetAll,
    CancelResetAll,

    // ============ Settings ============
    ToggleDarkMode,
    ToggleLanguage,

    // ============ Keyboard & Window ============
    KeyPressed(Key, Modifiers),
    RequestClose,
}
