// SPDX-License-Identifier: MPL-2.0
//! Application root: hosts one [`Spinner`] on a [`CanvasSurface`].
//!
//! The `App` struct starts the frame load on boot, shows a loading indicator
//! until it completes and then forwards drag, keyboard and timer messages to
//! the spinner.

mod message;
mod subscription;

pub use message::{Flags, Message, Overrides};

use crate::config::DragCapture;
use crate::domain::Direction;
use crate::error::Error;
use crate::media::HttpFetcher;
use crate::spinner::Spinner;
use crate::ui::widgets::{loading_indicator, LoadingIndicator};
use crate::ui::CanvasSurface;
use iced::widget::{container, text};
use iced::{window, Color, Element, Length, Subscription, Task, Theme};
use std::fmt;

const APP_TITLE: &str = "IcedSpin";

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;

const INDICATOR_COLOR: Color = Color::from_rgb(0.85, 0.85, 0.85);

/// Root Iced application state.
pub struct App {
    spinner: Spinner<CanvasSurface>,
    drag_capture: DragCapture,
    /// Set when the load failed; the spinner then stays not-loaded for good.
    load_error: Option<Error>,
    loading_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("sources", &self.spinner.sources().len())
            .field("loaded", &self.spinner.is_loaded())
            .field("current_frame", &self.spinner.current_frame())
            .field("load_error", &self.load_error)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Creates the spinner and kicks off the asynchronous frame load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let app = App {
            spinner: Spinner::new(
                flags.sources.clone(),
                CanvasSurface::new(),
                flags.spinner_options(),
            ),
            drag_capture: flags.drag_capture,
            load_error: None,
            loading_rotation: 0.0,
        };

        let task = match HttpFetcher::new(&flags.user_agent) {
            Ok(fetcher) => Task::perform(
                app.spinner.load(fetcher, flags.retry),
                Message::FramesLoaded,
            ),
            Err(err) => Task::done(Message::FramesLoaded(Err(err))),
        };

        (app, task)
    }

    fn title(&self) -> String {
        if self.spinner.is_loaded() {
            format!(
                "{APP_TITLE} - {}/{}",
                self.spinner.current_frame() + 1,
                self.spinner.total_frames()
            )
        } else {
            APP_TITLE.to_string()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn is_loading(&self) -> bool {
        !self.spinner.is_loaded() && self.load_error.is_none()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_demo_subscription(
                self.spinner.is_demo_running(),
                self.spinner.options().demo_interval,
            ),
            subscription::create_loading_subscription(self.is_loading()),
            subscription::create_keyboard_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FramesLoaded(Ok(frames)) => {
                let count = frames.len();
                if self.spinner.on_frames_loaded(frames) {
                    log::debug!("Demo rotation over {count} frames");
                }
            }
            Message::FramesLoaded(Err(err)) => {
                log::error!("Failed to load frames: {err}");
                self.load_error = Some(err);
            }
            Message::Input(input) => self.spinner.handle_input(input),
            Message::DemoTick => {
                self.spinner.demo_tick();
            }
            Message::LoadingTick => {
                self.loading_rotation = loading_indicator::advance(self.loading_rotation);
            }
            Message::Step(direction) => self.spinner.update(direction),
            Message::JumpToFirst => self.jump_to(0),
            Message::JumpToLast => {
                if let Some(last) = self.spinner.total_frames().checked_sub(1) {
                    self.jump_to(last);
                }
            }
        }
        Task::none()
    }

    fn jump_to(&mut self, index: usize) {
        if let Err(err) = self.spinner.set_frame(index) {
            log::warn!("{err}");
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = if let Some(err) = &self.load_error {
            text(err.to_string()).into()
        } else if self.spinner.is_loaded() {
            self.spinner
                .surface()
                .view(self.drag_capture)
                .map(Message::Input)
        } else {
            LoadingIndicator::new(INDICATOR_COLOR, self.loading_rotation).into_element()
        };

        container(content).center(Length::Fill).into()
    }
}
