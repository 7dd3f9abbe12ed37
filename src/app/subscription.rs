// SPDX-License-Identifier: MPL-2.0
//! Timers and keyboard routing for the application.

use super::Message;
use crate::domain::{DemoInterval, Direction};
use crate::ui::widgets::loading_indicator;
use iced::keyboard::{self, key, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Fires [`Message::DemoTick`] every `interval` while the demo runs.
pub fn create_demo_subscription(running: bool, interval: DemoInterval) -> Subscription<Message> {
    if running {
        time::every(interval.as_duration()).map(|_| Message::DemoTick)
    } else {
        Subscription::none()
    }
}

/// Drives the loading indicator animation while frames are loading.
pub fn create_loading_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(Duration::from_millis(loading_indicator::FRAME_MS)).map(|_| Message::LoadingTick)
    } else {
        Subscription::none()
    }
}

/// Arrow keys step one frame, Home/End jump to the ends.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => map_key(&key),
            _ => None,
        }
    })
}

fn map_key(key: &Key) -> Option<Message> {
    match key {
        Key::Named(key::Named::ArrowLeft) => Some(Message::Step(Direction::Backward)),
        Key::Named(key::Named::ArrowRight) => Some(Message::Step(Direction::Forward)),
        Key::Named(key::Named::Home) => Some(Message::JumpToFirst),
        Key::Named(key::Named::End) => Some(Message::JumpToLast),
        _ => None,
    }
}
