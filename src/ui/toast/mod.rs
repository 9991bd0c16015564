// SPDX-License-Identifier: MPL-2.0
//! Transient top-of-screen toast.
//!
//! A toast is a colored banner with a single-line label. It attaches under
//! the top safe area of the foreground container, optionally fades in, stays
//! up for a while, then dismisses itself in two independent steps: a fade-out
//! and, a fixed two seconds later, an unconditional removal. Taps and swipes
//! are reported to a weakly held delegate along with the caller's payload.
//!
//! # Components
//!
//! - [`toast`] - The `Toast` entity, its builder and `show`
//! - [`container`] - The foreground container and its attached layers
//! - [`host`] - `Host` capability resolving the foreground container
//! - [`schedule`] - Delayed lifecycle steps and the Iced-backed scheduler
//! - [`fade`] - Opacity interpolation
//! - [`gesture`] - Tap/swipe recognition
//! - [`view`] - Iced overlay rendering
//!
//! # Usage
//!
//! ```ignore
//! use simple_toast::ui::toast::{Container, ShowOptions, TaskScheduler, Toast};
//!
//! let mut scheduler = TaskScheduler::new();
//! Toast::new("Saved!")
//!     .with_delegate(&delegate)
//!     .with_payload(Rc::new("user-42"))
//!     .show(&mut stage, &mut scheduler, ShowOptions::default(), Instant::now());
//! let task = scheduler.into_task().map(Message::Toast);
//! ```

mod container;
mod fade;
mod gesture;
mod host;
mod message;
mod schedule;
#[allow(clippy::module_inception)]
mod toast;
mod view;

pub use container::{Container, Filler, Layer};
pub use fade::Opacity;
pub use gesture::{Gesture, GestureTracker, PointerEvent, SwipeDirection};
pub use host::Host;
pub use message::Message;
pub use schedule::{delay, Scheduler, Step, TaskScheduler};
pub use toast::{Payload, ShowOptions, Toast, ToastDelegate, ToastId};
pub use view::view;
