// SPDX-License-Identifier: MPL-2.0
//! Transparent canvas that turns native mouse and touch events into
//! [`DragInput`]s for the spinner.
//!
//! iced reports absolute cursor positions, so the per-event movement delta
//! is computed here from the previous cursor position.

use crate::config::DragCapture;
use crate::spinner::DragInput;
use iced::widget::canvas::{self, Geometry};
use iced::widget::Action;
use iced::{mouse, touch, Event, Point, Rectangle, Renderer, Theme};

/// Canvas program laid over the surface.
#[derive(Debug, Clone, Copy)]
pub struct InputLayer {
    capture: DragCapture,
}

impl InputLayer {
    #[must_use]
    pub fn new(capture: DragCapture) -> Self {
        Self { capture }
    }
}

/// Per-widget input tracking kept by iced between events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerTracker {
    last_cursor_x: Option<f32>,
    button_down: bool,
    finger: Option<touch::Finger>,
}

impl PointerTracker {
    /// Translates one native event.
    ///
    /// `bounds` and `cursor` are in window coordinates. Drags only start
    /// inside `bounds`; releases are honoured anywhere. With
    /// [`DragCapture::Surface`], motion outside `bounds` is ignored.
    pub fn translate(
        &mut self,
        event: &Event,
        bounds: Rectangle,
        cursor: Option<Point>,
        capture: DragCapture,
    ) -> Option<DragInput> {
        let tracks = |position: Point| match capture {
            DragCapture::Window => true,
            DragCapture::Surface => bounds.contains(position),
        };

        match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                let previous = self.last_cursor_x.replace(position.x);
                if !self.button_down || !tracks(*position) {
                    return None;
                }
                let delta_x = position.x - previous?;
                (delta_x != 0.0).then_some(DragInput::PointerMoved { delta_x })
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                self.last_cursor_x = None;
                None
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor?;
                if !bounds.contains(position) {
                    return None;
                }
                self.button_down = true;
                self.last_cursor_x = Some(position.x);
                Some(DragInput::Press)
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if !self.button_down {
                    return None;
                }
                self.button_down = false;
                Some(DragInput::Release)
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if self.finger.is_some() || !bounds.contains(*position) {
                    return None;
                }
                self.finger = Some(*id);
                Some(DragInput::TouchStart { x: position.x })
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if self.finger != Some(*id) || !tracks(*position) {
                    return None;
                }
                Some(DragInput::TouchMove { x: position.x })
            }
            Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => {
                if self.finger != Some(*id) {
                    return None;
                }
                self.finger = None;
                Some(DragInput::TouchEnd)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_grabbing(&self) -> bool {
        self.button_down || self.finger.is_some()
    }
}

impl canvas::Program<DragInput> for InputLayer {
    type State = PointerTracker;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<DragInput>> {
        let input = state.translate(event, bounds, cursor.position(), self.capture)?;
        let action = Action::publish(input);

        Some(match input {
            DragInput::Press | DragInput::TouchStart { .. } | DragInput::TouchMove { .. } => {
                action.and_capture()
            }
            _ => action,
        })
    }

    fn draw(
        &self,
        _state: &Self::State,
        _renderer: &Renderer,
        _theme: &Theme,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        Vec::new()
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.is_grabbing() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
