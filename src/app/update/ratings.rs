// src/app/update/ratings.rs
//! Rating widget and reset-all message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle rating-related messages
    pub fn handle_ratings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ItemAction(id, action) => {
                self.session.interact(*id, *action);
                Some(Task::none())
            }

            Message::SandboxAction(action) => {
                // Uncontrolled: the widget applies the change itself
                self.ui.sandbox.interact(*action);
                Some(Task::none())
            }

            Message::ExternalReset => {
                if self.session.request_external_reset() {
                    return Some(self.update(Message::RequestResetAll));
                }
                Some(Task::none())
            }

            Message::RequestResetAll => {
                self.ui.reset_dialog_open = true;
                Some(Task::none())
            }

            Message::ConfirmResetAll => {
                self.ui.reset_dialog_open = false;
                let requests = self.session.reset_all();
                Some(self.load_rows_task(requests))
            }

            Message::CancelResetAll => {
                self.ui.reset_dialog_open = false;
                Some(Task::none())
            }

            _ => None,
        }
    }
}
