// SPDX-License-Identifier: MPL-2.0
//! Tap and swipe recognition from raw pointer events.
//!
//! A press followed by a release produces exactly one [`Gesture`]: a swipe
//! when the pointer travelled at least [`SWIPE_MIN_DISTANCE`], a tap
//! otherwise.

use crate::config::SWIPE_MIN_DISTANCE;
use iced::Point;

/// Raw pointer input delivered to a toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Cursor moved to a position relative to the toast bounds.
    Moved(Point),
    Pressed,
    Released,
    /// Cursor left the toast; cancels any press in progress.
    Exited,
}

/// Direction of a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// A completed interaction on a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    Swipe(SwipeDirection),
}

/// Tracks one press/release cycle at a time.
///
/// A press made before any cursor position is known is anchored at the
/// first position reported after it.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    cursor: Option<Point>,
    pressed: bool,
    anchor: Option<Point>,
}

impl GestureTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one pointer event, returning a gesture when a cycle completes.
    pub fn handle(&mut self, event: PointerEvent) -> Option<Gesture> {
        match event {
            PointerEvent::Moved(position) => {
                self.cursor = Some(position);
                if self.pressed && self.anchor.is_none() {
                    self.anchor = Some(position);
                }
                None
            }
            PointerEvent::Pressed => {
                self.pressed = true;
                self.anchor = self.cursor;
                None
            }
            PointerEvent::Released => {
                if !std::mem::take(&mut self.pressed) {
                    return None;
                }
                let gesture = match (self.anchor.take(), self.cursor) {
                    (Some(start), Some(end)) => classify(start, end),
                    _ => Gesture::Tap,
                };
                Some(gesture)
            }
            PointerEvent::Exited => {
                self.cursor = None;
                self.pressed = false;
                self.anchor = None;
                None
            }
        }
    }

    /// Returns true between a press and its release.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

fn classify(start: Point, end: Point) -> Gesture {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx.abs() >= dy.abs() && dx.abs() >= SWIPE_MIN_DISTANCE {
        if dx > 0.0 {
            Gesture::Swipe(SwipeDirection::Right)
        } else {
            Gesture::Swipe(SwipeDirection::Left)
        }
    } else if dy.abs() > dx.abs() && dy.abs() >= SWIPE_MIN_DISTANCE {
        if dy > 0.0 {
            Gesture::Swipe(SwipeDirection::Down)
        } else {
            Gesture::Swipe(SwipeDirection::Up)
        }
    } else {
        Gesture::Tap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tracker: &mut GestureTracker, events: &[PointerEvent]) -> Vec<Gesture> {
        events.iter().filter_map(|e| tracker.handle(*e)).collect()
    }

    #[test]
    fn press_release_in_place_is_a_tap() {
        let mut tracker = GestureTracker::new();
        let gestures = run(
            &mut tracker,
            &[
                PointerEvent::Moved(Point::new(10.0, 10.0)),
                PointerEvent::Pressed,
                PointerEvent::Released,
            ],
        );
        assert_eq!(gestures, vec![Gesture::Tap]);
    }

    #[test]
    fn small_jitter_is_still_a_tap() {
        let mut tracker = GestureTracker::new();
        let gestures = run(
            &mut tracker,
            &[
                PointerEvent::Moved(Point::new(10.0, 10.0)),
                PointerEvent::Pressed,
                PointerEvent::Moved(Point::new(14.0, 12.0)),
                PointerEvent::Released,
            ],
        );
        assert_eq!(gestures, vec![Gesture::Tap]);
    }

    #[test]
    fn horizontal_drag_is_a_swipe() {
        let mut tracker = GestureTracker::new();
        let gestures = run(
            &mut tracker,
            &[
                PointerEvent::Moved(Point::new(10.0, 20.0)),
                PointerEvent::Pressed,
                PointerEvent::Moved(Point::new(80.0, 25.0)),
                PointerEvent::Released,
            ],
        );
        assert_eq!(gestures, vec![Gesture::Swipe(SwipeDirection::Right)]);
    }

    #[test]
    fn leftward_and_vertical_swipes_report_direction() {
        let mut tracker = GestureTracker::new();
        let left = run(
            &mut tracker,
            &[
                PointerEvent::Moved(Point::new(100.0, 20.0)),
                PointerEvent::Pressed,
                PointerEvent::Moved(Point::new(20.0, 20.0)),
                PointerEvent::Released,
            ],
        );
        let up = run(
            &mut tracker,
            &[
                PointerEvent::Moved(Point::new(50.0, 45.0)),
                PointerEvent::Pressed,
                PointerEvent::Moved(Point::new(52.0, 5.0)),
                PointerEvent::Released,
            ],
        );
        assert_eq!(left, vec![Gesture::Swipe(SwipeDirection::Left)]);
        assert_eq!(up, vec![Gesture::Swipe(SwipeDirection::Up)]);
    }

    #[test]
    fn release_without_press_yields_nothing() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.handle(PointerEvent::Released), None);
    }

    #[test]
    fn exit_cancels_press() {
        let mut tracker = GestureTracker::new();
        let gestures = run(
            &mut tracker,
            &[
                PointerEvent::Pressed,
                PointerEvent::Exited,
                PointerEvent::Released,
            ],
        );
        assert!(gestures.is_empty());
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn one_gesture_per_press() {
        let mut tracker = GestureTracker::new();
        let gestures = run(
            &mut tracker,
            &[
                PointerEvent::Pressed,
                PointerEvent::Released,
                PointerEvent::Released,
            ],
        );
        assert_eq!(gestures.len(), 1);
    }

    #[test]
    fn press_before_first_move_anchors_at_that_move() {
        let mut tracker = GestureTracker::new();
        let gestures = run(
            &mut tracker,
            &[
                PointerEvent::Pressed,
                PointerEvent::Moved(Point::new(200.0, 25.0)),
                PointerEvent::Moved(Point::new(204.0, 26.0)),
                PointerEvent::Released,
            ],
        );
        assert_eq!(gestures, vec![Gesture::Tap]);
    }

    #[test]
    fn press_without_any_position_is_a_tap() {
        let mut tracker = GestureTracker::new();
        let gestures = run(&mut tracker, &[PointerEvent::Pressed, PointerEvent::Released]);
        assert_eq!(gestures, vec![Gesture::Tap]);
    }
}
