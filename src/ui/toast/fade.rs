// SPDX-License-Identifier: MPL-2.0
//! Time-based opacity for the toast fade in/out.

use std::time::{Duration, Instant};

/// Opacity of a toast, either settled or interpolating between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Opacity {
    Settled(f32),
    Fading {
        from: f32,
        to: f32,
        started_at: Instant,
        length: Duration,
    },
}

impl Opacity {
    /// Fully visible.
    pub const OPAQUE: Self = Self::Settled(1.0);

    /// Starts a linear fade from `from` to `to`.
    #[must_use]
    pub fn fade(from: f32, to: f32, started_at: Instant, length: Duration) -> Self {
        if length.is_zero() {
            return Self::Settled(to);
        }
        Self::Fading {
            from,
            to,
            started_at,
            length,
        }
    }

    /// Returns the opacity at `now`, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let value = match *self {
            Self::Settled(value) => value,
            Self::Fading {
                from,
                to,
                started_at,
                length,
            } => {
                let elapsed = now.saturating_duration_since(started_at);
                let progress = (elapsed.as_secs_f32() / length.as_secs_f32()).min(1.0);
                from + (to - from) * progress
            }
        };
        value.clamp(0.0, 1.0)
    }

    /// Returns true while the fade has not reached its target.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        match *self {
            Self::Settled(_) => false,
            Self::Fading {
                started_at, length, ..
            } => now.saturating_duration_since(started_at) < length,
        }
    }

    /// Collapses a finished fade into `Settled`.
    #[must_use]
    pub fn settle(self, now: Instant) -> Self {
        if self.is_animating(now) {
            self
        } else {
            Self::Settled(self.value_at(now))
        }
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}
