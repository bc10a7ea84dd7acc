// src/app/update/keyboard.rs
//! Keyboard shortcut handlers

use iced::Task;
use iced::keyboard::{Key, key};

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                let action = match key.as_ref() {
                    Key::Named(key::Named::Escape) if self.ui.reset_dialog_open => {
                        Some(Message::CancelResetAll)
                    }
                    // Only Escape reaches the page while the prompt is up
                    _ if self.ui.reset_dialog_open => None,
                    Key::Named(key::Named::Home) => Some(Message::ScrollToTop),
                    Key::Named(key::Named::End) => Some(Message::ScrollToBottom),
                    Key::Character("r") if modifiers.command() => Some(Message::ExternalReset),
                    _ => None,
                };

                match action {
                    Some(action) => Some(self.update(action)),
                    None => Some(Task::none()),
                }
            }

            _ => None,
        }
    }
}
