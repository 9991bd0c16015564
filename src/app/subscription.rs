// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo.

use super::Message;
use crate::config::ANIMATION_FRAME;
use iced::{event, time, window, Subscription};

/// Routes window resize and close events.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::Closed) => Some(Message::WindowClosed),
        _ => None,
    })
}

/// Creates a frame tick while any toast is fading.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(ANIMATION_FRAME).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
