//! Reset-all confirmation dialog component

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Background, Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Build the reset confirmation dialog, drawn over the whole window
pub fn view<'a>(locale: Locale) -> Element<'a, Message> {
    let title = text(locale.get(Key::ResetDialogTitle))
        .size(18)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

    let message = text(locale.get(Key::ResetDialogMessage))
        .size(14)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let cancel_btn = button(text(locale.get(Key::Cancel)).size(14))
        .padding([10, 16])
        .style(theme::text_button)
        .on_press(Message::CancelResetAll);

    let confirm_btn = button(text(locale.get(Key::ResetDialogConfirm)).size(14))
        .padding([10, 24])
        .style(theme::danger_button)
        .on_press(Message::ConfirmResetAll);

    let buttons = row![cancel_btn, Space::new().width(Fill), confirm_btn].align_y(Alignment::Center);

    let dialog_content = column![
        title,
        Space::new().height(8),
        message,
        Space::new().height(20),
        buttons,
    ]
    .width(380)
    .padding(24);

    let dialog_box = container(dialog_content).style(theme::dialog);

    let backdrop_content = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(|theme| container::Style {
            background: Some(Background::Color(theme::overlay_backdrop(theme, 0.5))),
            ..Default::default()
        });

    // Clicking the backdrop cancels; opaque keeps clicks off the list underneath
    let event_blocker = mouse_area(backdrop_content)
        .interaction(Interaction::Idle)
        .on_press(Message::CancelResetAll);

    opaque(event_blocker).into()
}
