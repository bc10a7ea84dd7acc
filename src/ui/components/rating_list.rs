//! Windowed rating list
//!
//! One virtual row per universe row. Loaded rows show a rating card for each
//! of their items; rows that have not finished loading show a placeholder of
//! the same height so the scroll geometry never shifts. A toolbar above the
//! rows carries the list's own reset control.

use std::cell::RefCell;
use std::rc::Rc;

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Color, Element, Fill};

use crate::app::Message;
use crate::features::{ItemId, RatingSession, RowSlot};
use crate::i18n::{Key, Locale};
use crate::ui::theme;
use crate::ui::widgets::{VirtualList, VirtualListState, placeholder_card, star_rating};

const CARD_SPACING: f32 = 12.0;
const ROW_PADDING: [u16; 2] = [6, 16];

pub fn view<'a>(
    session: &'a RatingSession,
    list_state: Rc<RefCell<VirtualListState>>,
    locale: Locale,
    dark_mode: bool,
) -> Element<'a, Message> {
    let config = session.config();
    let universe = config.universe;
    let row_height = config.row_height;

    let item_builder = move |row_index: usize| -> Element<'a, Message> {
        let content: Element<'a, Message> = match session.slot(row_index) {
            RowSlot::Loaded(items) => {
                let filled = items.clone().count();
                let cards = items.fold(row![].spacing(CARD_SPACING), |cards, index| {
                    cards.push(rating_card(session, ItemId(index), locale))
                });
                // Keep card widths stable on a short last row
                (filled..universe.items_per_row())
                    .fold(cards, |cards, _| cards.push(Space::new().width(Fill)))
                    .into()
            }
            RowSlot::Placeholder => placeholder_card::view(locale.get(Key::LoadingRow)),
        };

        container(content)
            .padding(ROW_PADDING)
            .width(Fill)
            .height(row_height)
            .into()
    };

    let scrollbar_color = if dark_mode {
        Color::WHITE
    } else {
        Color::BLACK
    };

    let rows = VirtualList::new(universe.row_count(), row_height, item_builder)
        .state(list_state)
        .width(Fill)
        .height(Fill)
        .scrollbar_color(scrollbar_color)
        .on_scroll(Message::ListScrolled);

    column![toolbar(locale), rows].into()
}

/// Reset control owned by the list; it skips the external trigger
fn toolbar<'a>(locale: Locale) -> Element<'a, Message> {
    let clear = button(text(locale.get(Key::ClearRatings)).size(13))
        .padding([4, 12])
        .style(theme::text_button)
        .on_press(Message::RequestResetAll);

    container(row![Space::new().width(Fill), clear].align_y(Alignment::Center))
        .width(Fill)
        .padding([4, 16])
        .into()
}

fn rating_card<'a>(session: &RatingSession, id: ItemId, locale: Locale) -> Element<'a, Message> {
    let state = session.rating(id);
    let submitted = state.is_submitted();

    container(star_rating::view(
        id.to_string(),
        state,
        locale,
        move |action| Message::ItemAction(id, action),
    ))
    .padding(12)
    .width(Fill)
    .height(Fill)
    .style(move |theme| theme::card(theme, submitted))
    .into()
}
