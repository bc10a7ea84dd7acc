//! Header bar - title, scroll shortcuts, reset and display toggles

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::RatingSession;
use crate::i18n::{Key, Locale};
use crate::ui::components::progress_panel;
use crate::ui::theme;

pub const HEADER_HEIGHT: f32 = 88.0;

pub fn view<'a>(session: &RatingSession, locale: Locale, dark_mode: bool) -> Element<'a, Message> {
    let title = column![
        text(locale.get(Key::AppName))
            .size(22)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            }),
        text(locale.get(Key::AppTagline))
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
    ]
    .spacing(2);

    let (at_top, at_bottom) = session
        .coordinator()
        .map_or((true, true), |c| (c.viewport().at_top(), c.viewport().at_bottom()));

    let top_btn = button(text(locale.get(Key::ScrollToTop)).size(13))
        .padding([6, 12])
        .style(theme::secondary_button)
        .on_press_maybe((!at_top).then_some(Message::ScrollToTop));

    let bottom_btn = button(text(locale.get(Key::ScrollToBottom)).size(13))
        .padding([6, 12])
        .style(theme::secondary_button)
        .on_press_maybe((!at_bottom).then_some(Message::ScrollToBottom));

    let reset_btn = button(text(locale.get(Key::ResetAll)).size(13))
        .padding([6, 12])
        .style(theme::primary_button)
        .on_press(Message::ExternalReset);

    let list_key = if session.is_mounted() {
        Key::HideList
    } else {
        Key::ShowList
    };
    let list_btn = button(text(locale.get(list_key)).size(13))
        .padding([6, 12])
        .style(theme::text_button)
        .on_press(Message::ToggleList);

    let theme_key = if dark_mode { Key::LightMode } else { Key::DarkMode };
    let theme_btn = button(text(locale.get(theme_key)).size(13))
        .padding([6, 12])
        .style(theme::text_button)
        .on_press(Message::ToggleDarkMode);

    let language_btn = button(text(locale.language.toggled().display_name()).size(13))
        .padding([6, 12])
        .style(theme::text_button)
        .on_press(Message::ToggleLanguage);

    let toolbar = row![
        top_btn,
        bottom_btn,
        reset_btn,
        Space::new().width(8),
        list_btn,
        theme_btn,
        language_btn,
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    container(
        row![
            title,
            Space::new().width(24),
            progress_panel::view(session, locale),
            toolbar,
        ]
        .align_y(Alignment::Center),
    )
    .width(Fill)
    .height(HEADER_HEIGHT)
    .padding([12, 20])
    .center_y(HEADER_HEIGHT)
    .style(theme::bar)
    .into()
}
