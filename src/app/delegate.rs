// SPDX-License-Identifier: MPL-2.0
//! Delegate that records toast interactions for the demo screen.

use crate::ui::toast::{Payload, Toast, ToastDelegate, ToastId};
use std::cell::RefCell;

/// One tap or swipe on a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub toast: ToastId,
    /// The payload, when it was a string.
    pub payload: Option<String>,
}

/// Keeps every interaction reported by the toasts it is registered with.
#[derive(Debug, Default)]
pub struct InteractionLog {
    entries: RefCell<Vec<Interaction>>,
}

impl InteractionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last(&self) -> Option<Interaction> {
        self.entries.borrow().last().cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl ToastDelegate for InteractionLog {
    fn on_toast_interacted(&self, toast: &Toast, payload: Option<&Payload>) {
        let payload = payload.and_then(|p| p.downcast_ref::<String>()).cloned();
        tracing::info!(id = %toast.id(), payload = ?payload, "user did tap toast");
        self.entries.borrow_mut().push(Interaction {
            toast: toast.id(),
            payload,
        });
    }
}
