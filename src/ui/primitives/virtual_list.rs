//! Virtual list primitive
//!
//! Fixed-height rows over a shared [`VirtualListState`]. Only the rows inside
//! the viewport, plus [`OVERSCAN_ROWS`] on each side, are built, laid out and
//! drawn. Every change of offset or viewport height is published through
//! [`VirtualList::on_scroll`] so the owner can decide what to load next.
//!
//! Generic over Message, Theme and Renderer; nothing here knows about ratings.

use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::mouse::{self, Cursor};
use iced::{Border, Color, Element, Event, Length, Point, Rectangle, Shadow, Size, window};

/// Rows built beyond each edge of the viewport
const OVERSCAN_ROWS: usize = 3;
/// Pixels scrolled per wheel line
const LINE_HEIGHT: f32 = 50.0;

const THUMB_WIDTH: f32 = 6.0;
const THUMB_MIN_HEIGHT: f32 = 30.0;
const THUMB_INSET: f32 = 2.0;

/// Scroll state shared between the widget and its owner
#[derive(Debug, Clone)]
pub struct VirtualListState {
    pub scroll_offset: f32,
    /// Height of the last layout; zero until the list is first laid out
    pub viewport_height: f32,
    pub row_count: usize,
    pub row_height: f32,
}

impl Default for VirtualListState {
    fn default() -> Self {
        Self::new(0, 150.0)
    }
}

impl VirtualListState {
    pub fn new(row_count: usize, row_height: f32) -> Self {
        Self {
            scroll_offset: 0.0,
            viewport_height: 0.0,
            row_count,
            row_height,
        }
    }

    pub fn total_height(&self) -> f32 {
        self.row_count as f32 * self.row_height
    }

    pub fn max_scroll(&self) -> f32 {
        (self.total_height() - self.viewport_height).max(0.0)
    }

    /// Rows to build: the visible ones plus overscan
    pub fn visible_range(&self) -> Range<usize> {
        if self.row_count == 0 || self.viewport_height <= 0.0 {
            return 0..0;
        }
        let first = (self.scroll_offset / self.row_height) as usize;
        let shown = (self.viewport_height / self.row_height).ceil() as usize + 1;
        first.saturating_sub(OVERSCAN_ROWS)..(first + shown + OVERSCAN_ROWS).min(self.row_count)
    }

    /// Adopt new geometry and pull the offset back into range
    pub fn resize(&mut self, row_count: usize, row_height: f32, viewport_height: f32) {
        self.row_count = row_count;
        self.row_height = row_height;
        self.viewport_height = viewport_height;
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }

    /// Jump to an absolute offset (clamped on the next layout)
    pub fn scroll_to(&mut self, offset: f32) {
        self.scroll_offset = offset.max(0.0);
    }

    pub fn position(&self) -> ScrollPosition {
        ScrollPosition {
            offset: self.scroll_offset,
            viewport_height: self.viewport_height,
        }
    }

    /// Move by `delta` pixels; `true` when the offset changed
    fn scroll_by(&mut self, delta: f32) -> bool {
        let next = (self.scroll_offset + delta).clamp(0.0, self.max_scroll());
        let moved = (next - self.scroll_offset).abs() > 0.01;
        self.scroll_offset = next;
        moved
    }

    /// Row under `y`, measured from the top of the list bounds
    fn row_at(&self, y: f32) -> usize {
        ((y + self.scroll_offset) / self.row_height) as usize
    }

    /// Scrollbar thumb inside `bounds`; `None` when every row fits
    fn thumb(&self, bounds: Rectangle) -> Option<Rectangle> {
        let max = self.max_scroll();
        if max <= 0.0 {
            return None;
        }
        let height = (bounds.height * bounds.height / self.total_height()).max(THUMB_MIN_HEIGHT);
        let travel = bounds.height - height;
        Some(Rectangle {
            x: bounds.x + bounds.width - THUMB_WIDTH - THUMB_INSET,
            y: bounds.y + travel * self.scroll_offset / max,
            width: THUMB_WIDTH,
            height,
        })
    }

    /// Offset that puts the thumb's top edge at `thumb_top` along the track
    fn offset_for_thumb(&self, bounds: Rectangle, thumb_top: f32) -> f32 {
        let Some(thumb) = self.thumb(bounds) else {
            return 0.0;
        };
        let travel = bounds.height - thumb.height;
        if travel <= 0.0 {
            return self.scroll_offset;
        }
        (thumb_top / travel).clamp(0.0, 1.0) * self.max_scroll()
    }
}

/// Scroll offset and viewport height, published by [`VirtualList::on_scroll`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    pub offset: f32,
    pub viewport_height: f32,
}

/// List of `row_count` rows of equal height, built on demand by `build_row`
pub struct VirtualList<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    row_count: usize,
    row_height: f32,
    build_row: Box<dyn Fn(usize) -> Element<'a, Message, Theme, Renderer> + 'a>,
    state: Rc<RefCell<VirtualListState>>,
    width: Length,
    height: Length,
    thumb_color: Color,
    on_scroll: Option<Box<dyn Fn(ScrollPosition) -> Message + 'a>>,
}

impl<'a, Message, Theme, Renderer> VirtualList<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    pub fn new(
        row_count: usize,
        row_height: f32,
        build_row: impl Fn(usize) -> Element<'a, Message, Theme, Renderer> + 'a,
    ) -> Self {
        Self {
            row_count,
            row_height,
            build_row: Box::new(build_row),
            state: Rc::new(RefCell::new(VirtualListState::new(row_count, row_height))),
            width: Length::Fill,
            height: Length::Fill,
            thumb_color: Color::WHITE,
            on_scroll: None,
        }
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Share scroll state with the owner so it survives view rebuilds
    pub fn state(mut self, state: Rc<RefCell<VirtualListState>>) -> Self {
        self.state = state;
        self
    }

    /// Scrollbar thumb color; alpha follows hover and drag
    pub fn scrollbar_color(mut self, color: Color) -> Self {
        self.thumb_color = color;
        self
    }

    /// Publish a message whenever the offset or viewport height changes
    pub fn on_scroll(mut self, f: impl Fn(ScrollPosition) -> Message + 'a) -> Self {
        self.on_scroll = Some(Box::new(f));
        self
    }
}

/// Per-instance widget state kept in the iced tree
#[derive(Default)]
struct Internal {
    /// Rows built by the last layout
    rows: Range<usize>,
    /// Widget trees of those rows, in the same order
    trees: Vec<Tree>,
    thumb_hovered: bool,
    /// Grab point inside the thumb while it is being dragged
    drag_anchor: Option<f32>,
    last_reported: Option<ScrollPosition>,
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for VirtualList<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<Internal>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(Internal::default())
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits
            .width(self.width)
            .height(self.height)
            .resolve(self.width, self.height, Size::ZERO);

        let (rows, offset) = {
            let mut state = self.state.borrow_mut();
            state.resize(self.row_count, self.row_height, size.height);
            (state.visible_range(), state.scroll_offset)
        };

        let internal = tree.state.downcast_mut::<Internal>();
        internal.trees.resize_with(rows.len(), Tree::empty);
        internal.rows = rows.clone();

        let row_limits = layout::Limits::new(Size::ZERO, Size::new(size.width, self.row_height));
        let children = rows
            .zip(internal.trees.iter_mut())
            .map(|(row, row_tree)| {
                let mut element = (self.build_row)(row);
                row_tree.diff(&element);
                element
                    .as_widget_mut()
                    .layout(row_tree, renderer, &row_limits)
                    .move_to(Point::new(0.0, row as f32 * self.row_height - offset))
            })
            .collect();

        layout::Node::with_children(size, children)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let internal = tree.state.downcast_ref::<Internal>();

        renderer.with_layer(bounds, |renderer| {
            let built = internal.rows.clone().zip(&internal.trees);
            for ((row, row_tree), row_layout) in built.zip(layout.children()) {
                // Overscan rows stay laid out but are not drawn
                if !row_layout.bounds().intersects(&bounds) {
                    continue;
                }
                (self.build_row)(row).as_widget().draw(
                    row_tree, renderer, theme, style, row_layout, cursor, viewport,
                );
            }
        });

        if let Some(thumb) = self.state.borrow().thumb(bounds) {
            let alpha = match (internal.drag_anchor, internal.thumb_hovered) {
                (Some(_), _) => 0.6,
                (None, true) => 0.5,
                (None, false) => 0.3,
            };
            renderer.fill_quad(
                renderer::Quad {
                    bounds: thumb,
                    border: Border {
                        radius: (THUMB_WIDTH / 2.0).into(),
                        ..Border::default()
                    },
                    shadow: Shadow::default(),
                    snap: true,
                },
                Color {
                    a: alpha,
                    ..self.thumb_color
                },
            );
        }
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let internal = tree.state.downcast_mut::<Internal>();

        // Layout has run by now, so the shared state holds the real viewport height
        if let Some(on_scroll) = &self.on_scroll {
            let position = self.state.borrow().position();
            if internal.last_reported != Some(position) {
                internal.last_reported = Some(position);
                shell.publish(on_scroll(position));
            }
        }

        if self.update_thumb(internal, event, bounds, cursor, shell)
            || internal.drag_anchor.is_some()
        {
            return;
        }

        match event {
            Event::Mouse(mouse::Event::WheelScrolled { delta }) if cursor.is_over(bounds) => {
                let dy = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => y * LINE_HEIGHT,
                    mouse::ScrollDelta::Pixels { y, .. } => *y,
                };
                if self.state.borrow_mut().scroll_by(-dy) {
                    shell.invalidate_layout();
                }
                shell.capture_event();
            }
            Event::Mouse(_) | Event::Touch(_) => {
                // Pointer input only reaches the row under the cursor
                let Some(position) = cursor.position_over(bounds) else {
                    return;
                };
                let target = self.state.borrow().row_at(position.y - bounds.y);
                self.forward(
                    internal,
                    Some(target),
                    event,
                    layout,
                    cursor,
                    renderer,
                    clipboard,
                    shell,
                    viewport,
                );
            }
            Event::Keyboard(_) | Event::Window(window::Event::RedrawRequested(_)) => {
                self.forward(
                    internal, None, event, layout, cursor, renderer, clipboard, shell, viewport,
                );
            }
            _ => {}
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let bounds = layout.bounds();
        let internal = tree.state.downcast_ref::<Internal>();

        if internal.drag_anchor.is_some() {
            return mouse::Interaction::Grabbing;
        }
        let Some(position) = cursor.position_over(bounds) else {
            return mouse::Interaction::default();
        };

        let target = {
            let state = self.state.borrow();
            if state.thumb(bounds).is_some_and(|thumb| thumb.contains(position)) {
                return mouse::Interaction::Grab;
            }
            state.row_at(position.y - bounds.y)
        };

        internal
            .rows
            .clone()
            .zip(&internal.trees)
            .zip(layout.children())
            .find(|((row, _), _)| *row == target)
            .map(|((row, row_tree), row_layout)| {
                (self.build_row)(row).as_widget().mouse_interaction(
                    row_tree, row_layout, cursor, viewport, renderer,
                )
            })
            .unwrap_or_default()
    }
}

impl<'a, Message, Theme, Renderer> VirtualList<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    /// Thumb hover and drag; `true` when the event was consumed
    fn update_thumb(
        &self,
        internal: &mut Internal,
        event: &Event,
        bounds: Rectangle,
        cursor: Cursor,
        shell: &mut Shell<'_, Message>,
    ) -> bool {
        let thumb = self.state.borrow().thumb(bounds);

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let Some((thumb, position)) = thumb.zip(cursor.position()) else {
                    return false;
                };
                if !thumb.contains(position) {
                    return false;
                }
                internal.drag_anchor = Some(position.y - thumb.y);
                shell.capture_event();
                true
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if internal.drag_anchor.is_some() =>
            {
                internal.drag_anchor = None;
                shell.capture_event();
                true
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                let hovered = thumb.is_some_and(|thumb| thumb.contains(*position));
                if hovered != internal.thumb_hovered {
                    internal.thumb_hovered = hovered;
                    shell.request_redraw();
                }

                let Some(anchor) = internal.drag_anchor else {
                    return false;
                };
                let mut state = self.state.borrow_mut();
                let target = state.offset_for_thumb(bounds, position.y - bounds.y - anchor);
                if (target - state.scroll_offset).abs() > 0.01 {
                    state.scroll_offset = target;
                    shell.invalidate_layout();
                }
                shell.capture_event();
                true
            }
            _ => false,
        }
    }

    /// Hand `event` to the built rows, or only to row `only`
    #[allow(clippy::too_many_arguments)]
    fn forward(
        &self,
        internal: &mut Internal,
        only: Option<usize>,
        event: &Event,
        layout: Layout<'_>,
        cursor: Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let built = internal.rows.clone().zip(internal.trees.iter_mut());
        for ((row, row_tree), row_layout) in built.zip(layout.children()) {
            if only.is_some_and(|target| target != row) {
                continue;
            }
            (self.build_row)(row).as_widget_mut().update(
                row_tree, event, row_layout, cursor, renderer, clipboard, shell, viewport,
            );
        }
    }
}

impl<'a, Message, Theme, Renderer> From<VirtualList<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(list: VirtualList<'a, Message, Theme, Renderer>) -> Self {
        Element::new(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out(offset: f32) -> VirtualListState {
        let mut state = VirtualListState::new(50, 150.0);
        state.scroll_to(offset);
        state.resize(50, 150.0, 600.0);
        state
    }

    #[test]
    fn visible_range_includes_overscan() {
        assert_eq!(laid_out(0.0).visible_range(), 0..5 + OVERSCAN_ROWS);
        assert_eq!(
            laid_out(1500.0).visible_range(),
            10 - OVERSCAN_ROWS..15 + OVERSCAN_ROWS
        );
    }

    #[test]
    fn resize_clamps_offset() {
        let state = laid_out(1.0e6);
        assert_eq!(state.scroll_offset, state.max_scroll());
        assert_eq!(state.position().offset, 6900.0);
    }

    #[test]
    fn nothing_built_before_first_layout() {
        assert_eq!(VirtualListState::default().visible_range(), 0..0);
        assert_eq!(VirtualListState::new(50, 150.0).visible_range(), 0..0);
    }

    #[test]
    fn wheel_scroll_stops_at_edges() {
        let mut state = laid_out(0.0);
        assert!(!state.scroll_by(-40.0));
        assert!(state.scroll_by(1.0e6));
        assert_eq!(state.scroll_offset, 6900.0);
        assert!(!state.scroll_by(10.0));
    }

    #[test]
    fn row_under_cursor_accounts_for_offset() {
        let state = laid_out(1500.0);
        assert_eq!(state.row_at(0.0), 10);
        assert_eq!(state.row_at(149.0), 10);
        assert_eq!(state.row_at(150.0), 11);
    }

    #[test]
    fn thumb_tracks_offset() {
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(400.0, 600.0));
        let top = laid_out(0.0).thumb(bounds).unwrap();
        let bottom = laid_out(1.0e6).thumb(bounds).unwrap();

        assert_eq!(top.y, 0.0);
        assert_eq!(top.height, THUMB_MIN_HEIGHT.max(600.0 * 600.0 / 7500.0));
        assert!((bottom.y + bottom.height - 600.0).abs() < 0.01);

        let state = laid_out(0.0);
        let travel = 600.0 - top.height;
        assert_eq!(state.offset_for_thumb(bounds, travel), state.max_scroll());
        assert_eq!(state.offset_for_thumb(bounds, -20.0), 0.0);
    }

    #[test]
    fn short_list_has_no_thumb() {
        let mut state = VirtualListState::new(2, 150.0);
        state.resize(2, 150.0, 600.0);
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(400.0, 600.0));
        assert!(state.thumb(bounds).is_none());
    }
}
