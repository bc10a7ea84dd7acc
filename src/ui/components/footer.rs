//! Footer bar - informational note and a standalone rating widget

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::RatingWidget;
use crate::i18n::{Key, Locale};
use crate::ui::theme;
use crate::ui::widgets::star_rating;

/// `sandbox` keeps its own state; its actions go to `Message::SandboxAction`
pub fn view<'a>(sandbox: &RatingWidget, locale: Locale) -> Element<'a, Message> {
    let note = text(locale.get(Key::FooterNote))
        .size(12)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let sandbox = container(star_rating::view(
        locale.get(Key::SandboxTitle).to_string(),
        sandbox.state(),
        locale,
        Message::SandboxAction,
    ))
    .padding(12)
    .width(280)
    .style(|theme| theme::card(theme, false));

    container(
        row![note, Space::new().width(Fill), sandbox]
            .spacing(16)
            .align_y(Alignment::Center),
    )
    .width(Fill)
    .padding([10, 20])
    .style(theme::bar)
    .into()
}
