// SPDX-License-Identifier: MPL-2.0
//! Access to the foreground container.
//!
//! The host environment decides which container is currently in front
//! (which window, which screen). Toasts only ever ask for "the current one".

use super::container::Container;
use super::schedule::Step;
use std::time::Instant;

/// Provides the top-level container of the active screen.
pub trait Host {
    /// Returns the container toasts should attach to, if any screen is active.
    fn foreground_container(&mut self) -> Option<&mut Container>;

    /// Routes a scheduled step to the current foreground container.
    ///
    /// Returns `false` when there is no container or the toast is gone.
    fn run_step(&mut self, step: Step, now: Instant) -> bool {
        self.foreground_container()
            .is_some_and(|container| container.apply(step, now))
    }
}

impl Host for Container {
    fn foreground_container(&mut self) -> Option<&mut Container> {
        Some(self)
    }
}

impl Host for Option<Container> {
    fn foreground_container(&mut self) -> Option<&mut Container> {
        self.as_mut()
    }
}
