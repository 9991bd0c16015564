// SPDX-License-Identifier: MPL-2.0
//! Demo application: a text field, an "Animated" switch and a button that
//! shows a toast.
//!
//! The `App` owns the window's [`Stage`] (the toasts' host) and an
//! [`InteractionLog`] registered as every toast's delegate. Scheduled
//! lifecycle steps come back through `Message::Toast` and are routed to the
//! stage.

mod delegate;
mod message;
pub mod paths;
mod stage;
mod subscription;
mod view;

pub use delegate::{Interaction, InteractionLog};
pub use message::{Flags, Message};
pub use stage::Stage;

use crate::config::{self, Config, ToastConfig, DEFAULT_DEMO_MESSAGE};
use crate::ui::toast::{self, Host, ShowOptions, TaskScheduler, Toast};
use iced::{window, Element, Subscription, Task};
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 420.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;

/// Root Iced application state.
pub struct App {
    message: String,
    animated: bool,
    toast_config: ToastConfig,
    stage: Stage,
    interactions: Rc<InteractionLog>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("message", &self.message)
            .field("animated", &self.animated)
            .field(
                "toasts",
                &self.stage.container().map_or(0, toast::Container::len),
            )
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(Config::default(), Flags::default())
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        if let Some(warning) = warning {
            tracing::warn!(%warning, "using default settings");
        }
        (Self::from_config(config, flags), Task::none())
    }

    /// Builds the initial state from settings, with CLI flags taking precedence.
    #[must_use]
    pub fn from_config(config: Config, flags: Flags) -> Self {
        let animated = !flags.no_animation && config.toast.show_options().animated;
        let message = flags
            .message
            .or(config.demo.message)
            .unwrap_or_else(|| DEFAULT_DEMO_MESSAGE.to_string());

        Self {
            message,
            animated,
            toast_config: config.toast,
            stage: Stage::open(WINDOW_DEFAULT_WIDTH),
            interactions: Rc::new(InteractionLog::new()),
        }
    }

    fn title(&self) -> String {
        "Simple Toast".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::MessageChanged(text) => {
                self.message = text;
                Task::none()
            }
            Message::AnimatedToggled(animated) => {
                self.animated = animated;
                Task::none()
            }
            Message::ShowToast => self.show_toast(Instant::now()),
            Message::Toast(toast::Message::Step(step)) => {
                self.stage.run_step(step, Instant::now());
                Task::none()
            }
            Message::Toast(toast::Message::Pointer(id, event)) => {
                if let Some(container) = self.stage.foreground_container() {
                    container.pointer(id, event);
                }
                Task::none()
            }
            Message::Tick(now) => {
                if let Some(container) = self.stage.foreground_container() {
                    container.settle(now);
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                self.stage.resize(size.width);
                Task::none()
            }
            Message::WindowClosed => {
                self.stage.close();
                Task::none()
            }
        }
    }

    fn show_toast(&mut self, now: Instant) -> Task<Message> {
        let options = ShowOptions {
            animated: self.animated,
            ..self.toast_config.show_options()
        };
        let mut scheduler = TaskScheduler::new();

        Toast::new(self.message.clone())
            .with_text_color(self.toast_config.text_color())
            .with_background_color(self.toast_config.background_color())
            .with_delegate(&self.interactions)
            .with_payload(Rc::new(self.message.clone()))
            .show(&mut self.stage, &mut scheduler, options, now);

        scheduler.into_task().map(Message::Toast)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            message: &self.message,
            animated: self.animated,
            last_interaction: self.interactions.last(),
            interactions: self.interactions.len(),
            container: self.stage.container(),
            now: Instant::now(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        let animating = self
            .stage
            .container()
            .is_some_and(|container| container.is_animating(Instant::now()));

        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_tick_subscription(animating),
        ])
    }

    /// Number of toasts currently attached to the window.
    #[must_use]
    pub fn visible_toasts(&self) -> usize {
        self.stage.container().map_or(0, toast::Container::len)
    }

    #[must_use]
    pub fn interactions(&self) -> &InteractionLog {
        &self.interactions
    }
}
