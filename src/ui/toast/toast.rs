// SPDX-License-Identifier: MPL-2.0
//! The toast entity: text, colors, delegate, payload and lifecycle state.

use super::fade::Opacity;
use super::gesture::{Gesture, GestureTracker, PointerEvent};
use super::host::Host;
use super::schedule::{Scheduler, Step};
use crate::config::{
    DEFAULT_ANIMATED, DEFAULT_DURATION_SECS, DEFAULT_TARGET_HEIGHT, FADE_DURATION, REMOVAL_DELAY,
};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::any::Any;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

/// Opaque caller-supplied value echoed back to the delegate.
///
/// The caller keeps its own `Rc`; a toast only holds a clone until it is
/// removed.
pub type Payload = Rc<dyn Any>;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Observer notified when the user taps or swipes a toast.
pub trait ToastDelegate {
    fn on_toast_interacted(&self, toast: &Toast, payload: Option<&Payload>);
}

/// Parameters for [`Toast::show`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowOptions {
    /// Fade in over [`FADE_DURATION`] and fade out when dismissing.
    pub animated: bool,
    /// Banner height in logical pixels.
    pub target_height: f32,
    /// Time before the dismiss sequence starts.
    pub duration: Duration,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            animated: DEFAULT_ANIMATED,
            target_height: DEFAULT_TARGET_HEIGHT,
            duration: Duration::from_secs_f64(DEFAULT_DURATION_SECS),
        }
    }
}

/// A transient banner shown at the top of the foreground container.
///
/// Build it with [`Toast::new`] and the builder methods, then hand it to
/// [`Toast::show`]. The toast moves into the container and is dropped when
/// its removal step runs; callers never destroy it explicitly.
pub struct Toast {
    id: ToastId,
    text: String,
    text_color: Color,
    background_color: Color,
    delegate: Option<Weak<dyn ToastDelegate>>,
    payload: Option<Payload>,
    animated: bool,
    opacity: Opacity,
    gestures: GestureTracker,
}

impl Toast {
    /// Creates an inert toast with white text on red.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            text: text.into(),
            text_color: palette::WHITE,
            background_color: palette::RED_500,
            delegate: None,
            payload: None,
            animated: DEFAULT_ANIMATED,
            opacity: Opacity::OPAQUE,
            gestures: GestureTracker::new(),
        }
    }

    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Registers the interaction observer without keeping it alive.
    #[must_use]
    pub fn with_delegate<D: ToastDelegate + 'static>(mut self, delegate: &Rc<D>) -> Self {
        self.delegate = Some(Rc::downgrade(delegate) as Weak<dyn ToastDelegate>);
        self
    }

    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Attaches the toast to the host's foreground container and schedules
    /// its dismissal.
    ///
    /// Returns `None` (and drops the toast) when the host has no foreground
    /// container. Otherwise the toast is pinned below the top safe area,
    /// fades in when `options.animated`, and two steps are scheduled:
    /// [`Step::BeginDismiss`] after `options.duration` and [`Step::Remove`]
    /// after `options.duration + REMOVAL_DELAY` (saturating).
    pub fn show<H, S>(
        mut self,
        host: &mut H,
        scheduler: &mut S,
        options: ShowOptions,
        now: Instant,
    ) -> Option<ToastId>
    where
        H: Host + ?Sized,
        S: Scheduler + ?Sized,
    {
        let Some(container) = host.foreground_container() else {
            tracing::debug!(id = %self.id, "no foreground container, skipping toast");
            return None;
        };

        let id = self.id;
        self.animated = options.animated;
        self.opacity = if options.animated {
            Opacity::fade(0.0, 1.0, now, FADE_DURATION)
        } else {
            Opacity::OPAQUE
        };
        container.attach(self, options.target_height);

        scheduler.schedule(options.duration, Step::BeginDismiss(id));
        scheduler.schedule(
            options.duration.saturating_add(REMOVAL_DELAY),
            Step::Remove(id),
        );

        tracing::debug!(
            id = %id,
            animated = options.animated,
            duration_secs = options.duration.as_secs_f64(),
            "toast shown"
        );
        Some(id)
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    #[must_use]
    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// Returns true while the registered delegate is still alive.
    #[must_use]
    pub fn has_delegate(&self) -> bool {
        self.delegate
            .as_ref()
            .is_some_and(|delegate| delegate.strong_count() > 0)
    }

    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    #[must_use]
    pub fn opacity_at(&self, now: Instant) -> f32 {
        self.opacity.value_at(now)
    }

    #[must_use]
    pub fn is_fading(&self, now: Instant) -> bool {
        self.opacity.is_animating(now)
    }

    pub(super) fn begin_dismiss(&mut self, now: Instant) {
        if self.animated {
            let current = self.opacity.value_at(now);
            self.opacity = Opacity::fade(current, 0.0, now, FADE_DURATION);
        }
    }

    pub(super) fn settle(&mut self, now: Instant) {
        self.opacity = self.opacity.settle(now);
    }

    pub(super) fn handle_pointer(&mut self, event: PointerEvent) -> Option<Gesture> {
        let gesture = self.gestures.handle(event)?;
        self.interact(gesture);
        Some(gesture)
    }

    /// Forwards a completed gesture to the delegate.
    ///
    /// Returns false when no delegate is registered or it has been dropped.
    pub(super) fn interact(&self, gesture: Gesture) -> bool {
        let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) else {
            tracing::debug!(id = %self.id, ?gesture, "toast interaction without delegate");
            return false;
        };
        tracing::debug!(id = %self.id, ?gesture, "toast interaction");
        delegate.on_toast_interacted(self, self.payload.as_ref());
        true
    }
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("has_delegate", &self.has_delegate())
            .field("has_payload", &self.payload.is_some())
            .field("animated", &self.animated)
            .field("opacity", &self.opacity)
            .finish()
    }
}

impl Drop for Toast {
    fn drop(&mut self) {
        tracing::debug!(id = %self.id, "toast deallocated");
    }
}
