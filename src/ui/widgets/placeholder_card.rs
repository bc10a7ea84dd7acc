//! Placeholder shown in place of a row that has not loaded yet

use iced::widget::{container, text};
use iced::{Element, Fill};

use crate::ui::theme;

pub fn view<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(13))
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(theme::placeholder_card)
        .into()
}
