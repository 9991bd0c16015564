// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Show**: Defaults for `Toast::show` (animation, height, duration)
//! - **Lifecycle**: Fixed fade and removal timings
//! - **Gesture**: Swipe recognition threshold
//! - **Colors**: Default label and banner colors

use std::time::Duration;

// ==========================================================================
// Show Defaults
// ==========================================================================

/// Whether `show` fades the toast in and out by default.
pub const DEFAULT_ANIMATED: bool = true;

/// Default banner height in logical pixels.
pub const DEFAULT_TARGET_HEIGHT: f32 = 50.0;

/// Minimum banner height accepted from the settings file.
pub const MIN_TARGET_HEIGHT: f32 = 20.0;

/// Maximum banner height accepted from the settings file.
pub const MAX_TARGET_HEIGHT: f32 = 200.0;

/// Default time a toast stays up before the dismiss sequence starts (seconds).
pub const DEFAULT_DURATION_SECS: f64 = 3.0;

/// Minimum display duration accepted from the settings file (seconds).
pub const MIN_DURATION_SECS: f64 = 0.5;

/// Maximum display duration accepted from the settings file (seconds).
pub const MAX_DURATION_SECS: f64 = 60.0;

// ==========================================================================
// Lifecycle Timings
// ==========================================================================

/// Length of both the fade-in and the fade-out.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Delay between the start of the dismiss sequence and the unconditional
/// removal from the container. Not tied to `FADE_DURATION`.
pub const REMOVAL_DELAY: Duration = Duration::from_secs(2);

/// Redraw interval while a fade is running.
pub const ANIMATION_FRAME: Duration = Duration::from_millis(16);

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum pointer travel (logical pixels) for a press/release to count as a swipe.
pub const SWIPE_MIN_DISTANCE: f32 = 30.0;

// ==========================================================================
// Color Defaults
// ==========================================================================

/// Default label color, as written in `settings.toml`.
pub const DEFAULT_TEXT_COLOR_HEX: &str = "#ffffff";

/// Default banner color, as written in `settings.toml`.
pub const DEFAULT_BACKGROUND_COLOR_HEX: &str = "#ff0000";

// ==========================================================================
// Demo Defaults
// ==========================================================================

/// Message prefilled in the demo text field.
pub const DEFAULT_DEMO_MESSAGE: &str = "Hello, toast!";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TARGET_HEIGHT > 0.0);
    assert!(MAX_TARGET_HEIGHT >= MIN_TARGET_HEIGHT);
    assert!(DEFAULT_TARGET_HEIGHT >= MIN_TARGET_HEIGHT);
    assert!(DEFAULT_TARGET_HEIGHT <= MAX_TARGET_HEIGHT);

    assert!(MIN_DURATION_SECS > 0.0);
    assert!(MAX_DURATION_SECS >= MIN_DURATION_SECS);
    assert!(DEFAULT_DURATION_SECS >= MIN_DURATION_SECS);
    assert!(DEFAULT_DURATION_SECS <= MAX_DURATION_SECS);

    assert!(SWIPE_MIN_DISTANCE > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_defaults_are_valid() {
        assert!(DEFAULT_ANIMATED);
        assert_eq!(DEFAULT_TARGET_HEIGHT, 50.0);
        assert_eq!(DEFAULT_DURATION_SECS, 3.0);
    }

    #[test]
    fn fade_is_shorter_than_removal_delay() {
        assert_eq!(FADE_DURATION, Duration::from_millis(300));
        assert_eq!(REMOVAL_DELAY, Duration::from_secs(2));
        assert!(FADE_DURATION < REMOVAL_DELAY);
    }

    #[test]
    fn default_colors_parse() {
        assert!(DEFAULT_TEXT_COLOR_HEX.parse::<iced::Color>().is_ok());
        assert!(DEFAULT_BACKGROUND_COLOR_HEX.parse::<iced::Color>().is_ok());
    }
}
