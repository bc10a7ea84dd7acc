//! Star rating widget
//!
//! Renders a [`RatingState`] as a row of star buttons plus submit/reset
//! controls. Every interaction is handed to `on_action`; the caller decides
//! whether the widget is controlled or keeps its own state.

use iced::widget::{Space, button, column, row, text};
use iced::{Alignment, Element, Fill};

use crate::features::{MAX_STARS, RatingAction, RatingState};
use crate::i18n::{Key, Locale};
use crate::ui::theme;

const STAR_SIZE: f32 = 24.0;

/// Build a star rating element
///
/// # Arguments
/// * `title` - Label shown above the stars
/// * `state` - Rating currently displayed
/// * `on_action` - Maps a user interaction to a message
pub fn view<'a, Message: Clone + 'a>(
    title: String,
    state: RatingState,
    locale: Locale,
    on_action: impl Fn(RatingAction) -> Message + 'a,
) -> Element<'a, Message> {
    let status = match state.rating() {
        Some(rating) if state.is_submitted() => {
            format!("{} · {}", locale.get(Key::Submitted), rating)
        }
        Some(rating) => rating.to_string(),
        None => locale.get(Key::NotRated).to_string(),
    };

    let header = row![
        text(title).size(15).style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        }),
        Space::new().width(Fill),
        text(status).size(12).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }),
    ]
    .align_y(Alignment::Center);

    let stars = (1..=MAX_STARS).fold(row![].spacing(2), |stars, k| {
        let filled = state.is_star_filled(k);
        let glyph = if filled { "★" } else { "☆" };
        stars.push(
            button(text(glyph).size(STAR_SIZE))
                .padding([0, 2])
                .style(move |theme, status| theme::star_button(theme, status, filled))
                .on_press_maybe(state.stars_enabled().then(|| on_action(RatingAction::Star(k)))),
        )
    });

    let submit = button(text(locale.get(Key::Submit)).size(13))
        .padding([6, 14])
        .style(theme::primary_button)
        .on_press_maybe(state.can_submit().then(|| on_action(RatingAction::Submit)));

    let reset = button(text(locale.get(Key::Reset)).size(13))
        .padding([6, 14])
        .style(theme::secondary_button)
        .on_press(on_action(RatingAction::Reset));

    column![
        header,
        stars,
        row![submit, reset].spacing(8).align_y(Alignment::Center),
    ]
    .spacing(8)
    .into()
}
