// SPDX-License-Identifier: MPL-2.0
//! The foreground container toasts attach to.
//!
//! A `Container` stands in for the top-level view of the active screen: it
//! knows its width and top safe-area inset, and owns every attached toast
//! together with its layout. Each attached toast is a [`Layer`]: the toast
//! frame pinned full-width under the safe area, plus a filler strip of the
//! same color directly above it.

use super::gesture::{Gesture, PointerEvent};
use super::schedule::Step;
use super::toast::{Toast, ToastId};
use iced::{Color, Rectangle};
use std::time::Instant;

/// Strip painted above a toast so no gap shows above the safe area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Filler {
    pub frame: Rectangle,
    pub color: Color,
}

/// One attached toast and its layout.
#[derive(Debug)]
pub struct Layer {
    toast: Toast,
    frame: Rectangle,
    filler: Filler,
}

impl Layer {
    #[must_use]
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    #[must_use]
    pub fn filler(&self) -> Filler {
        self.filler
    }

    fn pin(&mut self, width: f32, safe_area_top: f32) {
        let (frame, filler) = pinned_frames(width, safe_area_top, self.frame.height);
        self.frame = frame;
        self.filler.frame = filler;
    }
}

/// Computes the toast frame and the filler frame above it.
fn pinned_frames(width: f32, safe_area_top: f32, height: f32) -> (Rectangle, Rectangle) {
    let frame = Rectangle {
        x: 0.0,
        y: safe_area_top,
        width,
        height,
    };
    let filler = Rectangle {
        x: 0.0,
        y: safe_area_top - height,
        width,
        height,
    };
    (frame, filler)
}

/// Top-level overlay surface of a screen.
#[derive(Debug, Default)]
pub struct Container {
    width: f32,
    safe_area_top: f32,
    layers: Vec<Layer>,
}

impl Container {
    /// Creates an empty container with no top inset.
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self {
            width: width.max(0.0),
            safe_area_top: 0.0,
            layers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_safe_area_top(mut self, inset: f32) -> Self {
        self.safe_area_top = inset.max(0.0);
        self
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn safe_area_top(&self) -> f32 {
        self.safe_area_top
    }

    /// Updates the width and re-pins every attached toast.
    pub fn resize(&mut self, width: f32) {
        self.width = width.max(0.0);
        self.repin();
    }

    /// Updates the top inset and re-pins every attached toast.
    pub fn set_safe_area_top(&mut self, inset: f32) {
        self.safe_area_top = inset.max(0.0);
        self.repin();
    }

    fn repin(&mut self) {
        for layer in &mut self.layers {
            layer.pin(self.width, self.safe_area_top);
        }
    }

    pub(super) fn attach(&mut self, toast: Toast, height: f32) -> ToastId {
        let id = toast.id();
        let (frame, filler_frame) = pinned_frames(self.width, self.safe_area_top, height.max(0.0));
        let filler = Filler {
            frame: filler_frame,
            color: toast.background_color(),
        };
        self.layers.push(Layer {
            toast,
            frame,
            filler,
        });
        id
    }

    /// Attached layers, oldest first (later layers draw on top).
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.toast.id() == id)
    }

    fn get_mut(&mut self, id: ToastId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|layer| layer.toast.id() == id)
    }

    /// Runs a scheduled lifecycle step.
    ///
    /// Returns `false` if the toast is not attached here.
    pub fn apply(&mut self, step: Step, now: Instant) -> bool {
        match step {
            Step::BeginDismiss(id) => {
                let Some(layer) = self.get_mut(id) else {
                    return false;
                };
                layer.toast.begin_dismiss(now);
                tracing::debug!(id = %id, "toast dismiss started");
                true
            }
            Step::Remove(id) => {
                let Some(pos) = self.layers.iter().position(|l| l.toast.id() == id) else {
                    return false;
                };
                self.layers.remove(pos);
                tracing::debug!(id = %id, "toast removed from container");
                true
            }
        }
    }

    /// Delivers a completed gesture to a toast's delegate.
    ///
    /// Returns `true` if a delegate received the callback.
    pub fn interact(&self, id: ToastId, gesture: Gesture) -> bool {
        self.get(id).is_some_and(|layer| layer.toast.interact(gesture))
    }

    /// Feeds raw pointer input to a toast's gesture recognizer.
    pub fn pointer(&mut self, id: ToastId, event: PointerEvent) -> Option<Gesture> {
        self.get_mut(id)?.toast.handle_pointer(event)
    }

    /// Returns true while any attached toast is fading.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.layers.iter().any(|layer| layer.toast.is_fading(now))
    }

    /// Collapses finished fades.
    pub fn settle(&mut self, now: Instant) {
        for layer in &mut self.layers {
            layer.toast.settle(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toast::ShowOptions;
    use std::time::Duration;

    fn show(container: &mut Container, toast: Toast, options: ShowOptions) -> ToastId {
        let mut steps: Vec<(Duration, Step)> = Vec::new();
        toast
            .show(container, &mut steps, options, Instant::now())
            .expect("container is always available")
    }

    #[test]
    fn new_container_is_empty() {
        let container = Container::new(320.0);
        assert!(container.is_empty());
        assert_eq!(container.safe_area_top(), 0.0);
    }

    #[test]
    fn attached_toast_is_pinned_under_safe_area() {
        let mut container = Container::new(375.0).with_safe_area_top(44.0);
        let id = show(&mut container, Toast::new("hi"), ShowOptions::default());

        let layer = container.get(id).expect("toast attached");
        assert_eq!(
            layer.frame(),
            Rectangle {
                x: 0.0,
                y: 44.0,
                width: 375.0,
                height: 50.0
            }
        );
        assert_eq!(layer.filler().frame.y, -6.0);
        assert_eq!(layer.filler().frame.height, 50.0);
        assert_eq!(layer.filler().frame.width, 375.0);
        assert_eq!(layer.filler().color, layer.toast().background_color());
    }

    #[test]
    fn resize_keeps_toasts_full_width() {
        let mut container = Container::new(375.0).with_safe_area_top(20.0);
        let id = show(&mut container, Toast::new("hi"), ShowOptions::default());

        container.resize(800.0);
        container.set_safe_area_top(0.0);

        let layer = container.get(id).expect("toast attached");
        assert_eq!(layer.frame().width, 800.0);
        assert_eq!(layer.frame().y, 0.0);
        assert_eq!(layer.filler().frame.width, 800.0);
        assert_eq!(layer.filler().frame.y, -50.0);
    }

    #[test]
    fn remove_step_detaches_and_drops_toast() {
        let mut container = Container::new(320.0);
        let id = show(&mut container, Toast::new("hi"), ShowOptions::default());

        assert!(container.apply(Step::Remove(id), Instant::now()));
        assert!(!container.contains(id));
        assert!(!container.apply(Step::Remove(id), Instant::now()));
    }

    #[test]
    fn steps_for_unknown_toasts_are_ignored() {
        let mut container = Container::new(320.0);
        let stray = Toast::new("never shown").id();

        assert!(!container.apply(Step::BeginDismiss(stray), Instant::now()));
        assert!(!container.apply(Step::Remove(stray), Instant::now()));
    }

    #[test]
    fn toasts_stack_independently() {
        let mut container = Container::new(320.0);
        let first = show(&mut container, Toast::new("one"), ShowOptions::default());
        let second = show(&mut container, Toast::new("two"), ShowOptions::default());

        assert_eq!(container.len(), 2);
        assert_eq!(container.layers()[1].toast().id(), second);

        container.apply(Step::Remove(first), Instant::now());
        assert_eq!(container.len(), 1);
        assert!(container.contains(second));
    }

    #[test]
    fn interact_on_missing_toast_is_false() {
        let container = Container::new(320.0);
        assert!(!container.interact(Toast::new("x").id(), Gesture::Tap));
    }

    #[test]
    fn settle_stops_animation() {
        let mut container = Container::new(320.0);
        let start = Instant::now();
        let mut steps: Vec<(Duration, Step)> = Vec::new();
        Toast::new("fade").show(&mut container, &mut steps, ShowOptions::default(), start);

        assert!(container.is_animating(start));
        let later = start + Duration::from_secs(1);
        container.settle(later);
        assert!(!container.is_animating(later));
        assert_eq!(container.layers()[0].toast().opacity_at(later), 1.0);
    }
}
