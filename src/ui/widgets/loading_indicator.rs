// SPDX-License-Identifier: MPL-2.0
//! Rotating arc shown while the frames download.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Side of the indicator, in logical pixels.
const SIZE: f32 = 48.0;

/// Delay between two animation ticks (about 60 FPS).
pub const FRAME_MS: u64 = 16;

/// Angle added on every animation tick (one full turn per second at 60 FPS).
pub const ROTATION_STEP: f32 = TAU / 60.0;

/// Line segments used to approximate the half-circle arc.
const ARC_SEGMENTS: u16 = 30;

/// Advances `rotation` by one tick, staying inside `[0, 2π)`.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + ROTATION_STEP).rem_euclid(TAU)
}

/// Half-circle arc drawn at `rotation` radians over a faint full circle.
pub struct LoadingIndicator {
    cache: Cache,
    rotation: f32,
    color: Color,
}

impl LoadingIndicator {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(SIZE))
            .height(Length::Fixed(SIZE))
            .into()
    }

    fn arc(&self, center: Point, radius: f32) -> Path {
        // -90° so the arc starts at the top.
        let start = self.rotation - PI / 2.0;
        let point_at = |angle: f32| {
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        };

        let mut builder = canvas::path::Builder::new();
        builder.move_to(point_at(start));
        for i in 1..=ARC_SEGMENTS {
            let t = f32::from(i) / f32::from(ARC_SEGMENTS);
            builder.line_to(point_at(start + PI * t));
        }
        builder.build()
    }
}

impl<Message> canvas::Program<Message> for LoadingIndicator {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(3.0).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );
                frame.stroke(
                    &self.arc(center, radius),
                    Stroke::default()
                        .with_width(3.0)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
