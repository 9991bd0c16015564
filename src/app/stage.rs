// SPDX-License-Identifier: MPL-2.0
//! The demo window as seen by toasts.

use crate::ui::toast::{Container, Host};

/// Tracks the window's top-level container.
///
/// The container exists while the window is open; once the window closes,
/// toasts shown afterwards are silently skipped.
#[derive(Debug, Default)]
pub struct Stage {
    container: Option<Container>,
}

impl Stage {
    /// Creates a stage with an open window of the given width.
    #[must_use]
    pub fn open(width: f32) -> Self {
        Self {
            container: Some(Container::new(width)),
        }
    }

    #[must_use]
    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    pub fn resize(&mut self, width: f32) {
        match self.container.as_mut() {
            Some(container) => container.resize(width),
            None => self.container = Some(Container::new(width)),
        }
    }

    /// Drops the container along with every toast attached to it.
    pub fn close(&mut self) {
        if let Some(container) = self.container.take() {
            tracing::debug!(toasts = container.len(), "window container closed");
        }
    }
}

impl Host for Stage {
    fn foreground_container(&mut self) -> Option<&mut Container> {
        self.container.as_mut()
    }
}
