//! Completion ring drawn on a canvas
//!
//! A track circle in the divider color with an arc swept clockwise from twelve
//! o'clock. The arc turns to the success color once the fraction reaches one.

use std::f32::consts::{FRAC_PI_2, TAU};

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke, path::Arc};
use iced::{Element, Point, Radians, Rectangle, Renderer, Theme, mouse};

use crate::ui::theme;

#[derive(Debug, Clone, Copy)]
pub struct ProgressRing {
    fraction: f32,
    stroke_width: f32,
}

impl ProgressRing {
    /// `fraction` is clamped to `0.0..=1.0`
    pub fn new(fraction: f32) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
            stroke_width: 4.0,
        }
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    fn is_complete(&self) -> bool {
        self.fraction >= 1.0
    }
}

impl<Message> Program<Message> for ProgressRing {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = bounds.width.min(bounds.height) / 2.0 - self.stroke_width / 2.0 - 1.0;
        let stroke = Stroke::default().with_width(self.stroke_width);

        frame.stroke(
            &Path::circle(center, radius),
            stroke.with_color(theme::divider(theme)),
        );

        if self.fraction > 0.0 {
            let arc_color = if self.is_complete() {
                theme::success(theme)
            } else {
                theme::ACCENT_PINK
            };
            frame.stroke(&arc(center, radius, self.fraction), stroke.with_color(arc_color));
        }

        vec![frame.into_geometry()]
    }
}

fn arc(center: Point, radius: f32, fraction: f32) -> Path {
    let start = -FRAC_PI_2;
    Path::new(|builder| {
        builder.arc(Arc {
            center,
            radius,
            start_angle: Radians(start),
            end_angle: Radians(start + fraction * TAU),
        });
    })
}

/// Square canvas of `size` pixels showing `ring`
pub fn view_progress_ring_styled<'a, Message: 'a>(
    ring: ProgressRing,
    size: f32,
) -> Element<'a, Message> {
    Canvas::new(ring).width(size).height(size).into()
}
