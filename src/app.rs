//! Main application module

mod message;
mod state;
mod update;
mod view;

use std::sync::Arc;

use iced::{Task, Theme};

use crate::features::{DataSource, RatingSession, ResetHandle, Settings, SimulatedSource};
use crate::i18n::{Language, Locale};
pub use message::Message;
pub use state::{App, CoreState, UiState};

/// List height assumed until the first layout reports the real one
const INITIAL_VIEWPORT_HEIGHT: f32 = 600.0;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        Self::with_settings(Settings::load())
    }

    /// Build the application around already-loaded settings
    pub fn with_settings(settings: Settings) -> (Self, Task<Message>) {
        // 1. Locale and loading backend from settings
        let locale = Locale::new(Language::from_code(&settings.display.language));
        let source: Arc<dyn DataSource> =
            Arc::new(SimulatedSource::new(settings.list.load_latency()));
        let reset = ResetHandle::new();

        // 2. Initialize sub-states
        let mut session = RatingSession::new(
            settings.list.to_config(INITIAL_VIEWPORT_HEIGHT),
            reset.clone(),
        );
        let ui = UiState::new(session.config());
        tracing::info!(
            "Rating {} items in rows of {}",
            session.total(),
            session.config().universe.items_per_row()
        );

        // 3. Mount the list so its first window starts loading right away
        let initial_loads = session.mount();

        let core = CoreState::new(settings, locale, source, reset);
        let app = Self { core, session, ui };

        // 4. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(1100.0, 800.0),
            exit_on_close_request: false,
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        let init_task = Task::batch([open_window.discard(), app.load_rows_task(initial_loads)]);

        (app, init_task)
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title with the live progress percentage
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        format!("Stargrid - {}%", self.session.progress().percent())
    }

    /// Subscriptions for keyboard shortcuts and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        iced::Subscription::batch([keyboard_sub, close_request_sub])
    }
}
