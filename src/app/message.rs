// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo.

use crate::ui::toast;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The text field changed.
    MessageChanged(String),
    /// The "Animated" switch flipped.
    AnimatedToggled(bool),
    /// Show a toast with the current text.
    ShowToast,
    Toast(toast::Message),
    /// Redraw tick while a toast is fading.
    Tick(Instant),
    WindowResized(Size),
    WindowClosed,
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SIMPLE_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Start with the "Animated" switch off.
    pub no_animation: bool,
    /// Prefill the text field.
    pub message: Option<String>,
}
