//! Progress panel - submitted percentage ring and the loaded counter

use iced::widget::{Space, column, container, row, stack, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::RatingSession;
use crate::i18n::Locale;
use crate::ui::theme;
use crate::ui::widgets::{ProgressRing, view_progress_ring_styled};

const RING_SIZE: f32 = 56.0;

pub fn view<'a>(session: &RatingSession, locale: Locale) -> Element<'a, Message> {
    let progress = session.progress();
    let total = session.total();

    let ring = stack![
        view_progress_ring_styled(
            ProgressRing::new(progress.fraction()).stroke_width(5.0),
            RING_SIZE
        ),
        container(text(format!("{}%", progress.percent())).size(13))
            .width(RING_SIZE)
            .height(RING_SIZE)
            .center_x(RING_SIZE)
            .center_y(RING_SIZE),
    ];

    let counters = column![
        text(locale.items_loaded(session.loaded_count(), total))
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
        text(locale.items_submitted(progress.submitted, total))
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
    ]
    .spacing(2);

    row![ring, Space::new().width(12), counters, Space::new().width(Fill)]
        .align_y(Alignment::Center)
        .into()
}
