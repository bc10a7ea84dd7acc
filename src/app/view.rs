// src/app/view.rs
//! Application view rendering

use iced::widget::{column, container, stack, text};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::i18n::Key;
use crate::ui::components::{footer, header, rating_list, reset_dialog};
use crate::ui::theme;

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let locale = self.core.locale;
        let dark_mode = self.core.settings.display.dark_mode;

        let body: Element<'_, Message> = if self.session.is_mounted() {
            rating_list::view(
                &self.session,
                self.ui.list_state.clone(),
                locale,
                dark_mode,
            )
        } else {
            container(
                text(locale.get(Key::ListHidden))
                    .size(14)
                    .style(|theme| text::Style {
                        color: Some(theme::text_muted(theme)),
                    }),
            )
            .center_x(Fill)
            .center_y(Fill)
            .into()
        };

        let page = container(column![
            header::view(&self.session, locale, dark_mode),
            container(body).width(Fill).height(Fill),
            footer::view(&self.ui.sandbox, locale),
        ])
        .width(Fill)
        .height(Fill)
        .style(theme::main_content);

        if self.ui.reset_dialog_open {
            stack![page, reset_dialog::view(locale)].into()
        } else {
            page.into()
        }
    }
}
