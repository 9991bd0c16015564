// SPDX-License-Identifier: MPL-2.0
//! Messages produced by the toast overlay and its scheduled steps.

use super::gesture::PointerEvent;
use super::schedule::Step;
use super::toast::ToastId;

#[derive(Debug, Clone)]
pub enum Message {
    /// Raw pointer input over a toast.
    Pointer(ToastId, PointerEvent),
    /// A scheduled lifecycle step came due.
    Step(Step),
}
