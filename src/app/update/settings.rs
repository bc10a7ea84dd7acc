//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::Locale;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleDarkMode => {
                self.core.settings.display.dark_mode = !self.core.settings.display.dark_mode;
                self.save_settings();
                Some(Task::none())
            }

            Message::ToggleLanguage => {
                let language = self.core.locale.language.toggled();
                self.core.locale = Locale::new(language);
                self.core.settings.display.language = language.code().to_string();
                self.save_settings();
                Some(Task::none())
            }

            _ => None,
        }
    }

    fn save_settings(&self) {
        if let Err(e) = self.core.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}
