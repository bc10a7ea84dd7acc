//! Message update handlers - thin dispatcher delegating to submodules

mod keyboard;
mod list;
mod ratings;
mod settings;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_ratings(&message) {
            return task;
        }
        if let Some(task) = self.handle_list(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }
        if let Some(task) = self.handle_keyboard(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use iced::keyboard::{Key, Modifiers, key};

    use super::*;
    use crate::features::{ItemId, RatingAction, RatingState, Settings};

    fn app() -> App {
        App::with_settings(Settings::default()).0
    }

    #[test]
    fn item_actions_reach_the_session() {
        let mut app = app();
        app.update(Message::ItemAction(ItemId(3), RatingAction::Star(4)));
        app.update(Message::ItemAction(ItemId(3), RatingAction::Submit));

        assert!(app.session.rating(ItemId(3)).is_submitted());
        assert_eq!(app.session.progress().percent(), 1);
    }

    #[test]
    fn sandbox_keeps_its_own_state() {
        let mut app = app();
        app.update(Message::SandboxAction(RatingAction::Star(2)));

        assert_eq!(app.ui.sandbox.state().filled_stars(), 2);
        assert!(app.session.ratings().is_empty());
    }

    #[test]
    fn loaded_rows_show_up_in_counter() {
        let mut app = app();
        let request = app.session.load_rows(0, 4).unwrap();
        app.update(Message::RowsLoaded(request));
        assert_eq!(app.session.loaded_count(), 10);
    }

    #[test]
    fn external_reset_asks_before_clearing() {
        let mut app = app();
        app.update(Message::ItemAction(ItemId(1), RatingAction::Star(5)));

        app.update(Message::ExternalReset);
        assert!(app.ui.reset_dialog_open);
        assert!(!app.session.ratings().is_empty());

        app.update(Message::CancelResetAll);
        assert!(!app.ui.reset_dialog_open);
        assert_eq!(
            app.session.rating(ItemId(1)).filled_stars(),
            5,
            "cancel must leave ratings alone"
        );

        app.update(Message::ExternalReset);
        app.update(Message::ConfirmResetAll);
        assert!(!app.ui.reset_dialog_open);
        assert_eq!(app.session.rating(ItemId(1)), RatingState::default());
        assert_eq!(app.session.loaded_count(), 0);
    }

    #[test]
    fn external_reset_is_ignored_while_list_hidden() {
        let mut app = app();
        app.update(Message::ToggleList);
        assert!(!app.session.is_mounted());

        app.update(Message::ExternalReset);
        assert!(!app.ui.reset_dialog_open);

        app.update(Message::ToggleList);
        app.update(Message::ExternalReset);
        assert!(app.ui.reset_dialog_open);
    }

    #[test]
    fn scroll_to_bottom_completion_lands_at_bottom() {
        let mut app = app();
        let request = app.session.begin_scroll_to_bottom().unwrap();
        app.update(Message::ScrolledToBottom(request));

        let viewport = app.session.coordinator().unwrap().viewport();
        assert_eq!(app.session.loaded_count(), 100);
        assert!(viewport.at_bottom());

        app.update(Message::ScrollToTop);
        let viewport = app.session.coordinator().unwrap().viewport();
        assert!(viewport.at_top());
        assert_eq!(app.ui.list_state.borrow().position().offset, 0.0);
    }

    #[test]
    fn remounted_list_stays_at_top_when_old_bottom_load_lands() {
        let mut app = app();
        let request = app.session.begin_scroll_to_bottom().unwrap();

        app.update(Message::ToggleList);
        app.update(Message::ToggleList);
        app.update(Message::ScrolledToBottom(request));

        assert_eq!(app.ui.list_state.borrow().position().offset, 0.0);
        assert_eq!(app.session.loaded_count(), 0);
        assert!(app.session.coordinator().unwrap().viewport().at_top());
    }

    #[test]
    fn list_reset_button_opens_dialog_directly() {
        let mut app = app();
        app.update(Message::RequestResetAll);
        assert!(app.ui.reset_dialog_open);
    }

    #[test]
    fn escape_closes_dialog_and_ctrl_r_opens_it() {
        let mut app = app();
        app.update(Message::KeyPressed(
            Key::Character("r".into()),
            Modifiers::COMMAND,
        ));
        assert!(app.ui.reset_dialog_open);

        app.update(Message::KeyPressed(
            Key::Named(key::Named::Escape),
            Modifiers::empty(),
        ));
        assert!(!app.ui.reset_dialog_open);
    }
}
