// src/app/update/list.rs
//! Windowed list loading and scrolling handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::LoadRequest;
use crate::features::data_source;

impl App {
    /// Handle list-related messages
    pub fn handle_list(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ListScrolled(position) => {
                let requests = self
                    .session
                    .on_scroll(position.offset, position.viewport_height);
                Some(self.load_rows_task(requests))
            }

            Message::RowsLoaded(request) => {
                self.session.rows_loaded(request);
                Some(Task::none())
            }

            Message::ScrollToTop => {
                self.session.scroll_to_top();
                self.ui.list_state.borrow_mut().scroll_to(0.0);
                Some(Task::none())
            }

            Message::ScrollToBottom => {
                let Some(request) = self.session.begin_scroll_to_bottom() else {
                    return Some(Task::none());
                };
                tracing::debug!("Loading rows {:?} before jumping to bottom", request.rows);
                Some(Task::perform(
                    data_source::fetch(self.core.source.clone(), request),
                    Message::ScrolledToBottom,
                ))
            }

            Message::ScrolledToBottom(request) => {
                if !self.session.finish_scroll_to_bottom(request) {
                    return Some(Task::none());
                }
                let mut list_state = self.ui.list_state.borrow_mut();
                let max_scroll = list_state.max_scroll();
                list_state.scroll_to(max_scroll);
                Some(Task::none())
            }

            Message::ToggleList => {
                if self.session.is_mounted() {
                    self.session.unmount();
                    return Some(Task::none());
                }
                self.ui.list_state.borrow_mut().scroll_to(0.0);
                let requests = self.session.mount();
                Some(self.load_rows_task(requests))
            }

            _ => None,
        }
    }

    /// Run every request against the data source, reporting each completion
    pub(crate) fn load_rows_task(&self, requests: Vec<LoadRequest>) -> Task<Message> {
        Task::batch(requests.into_iter().map(|request| {
            tracing::debug!("Loading rows {:?}", request.rows);
            Task::perform(
                data_source::fetch(self.core.source.clone(), request),
                Message::RowsLoaded,
            )
        }))
    }
}
