//! The one place that knows where the pointer is.
//!
//! Single writer (the host event stream), many readers (particle field,
//! cursor, eyes). No smoothing, no debouncing: the latest event wins.

use crate::math::Vec2;

/// Current pointer position over the tracked surface, or absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    position: Option<Vec2>,
}

impl PointerTracker {
    /// Creates a tracker with no pointer.
    #[must_use]
    pub const fn new() -> Self {
        Self { position: None }
    }

    /// Records a pointer-move event.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Some(Vec2::new(x, y));
    }

    /// Records the pointer leaving the tracked surface.
    pub fn leave(&mut self) {
        self.position = None;
    }

    /// Returns the pointer position, if the pointer is over the surface.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Returns true while the pointer is over the surface.
    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.position.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_absent() {
        let tracker = PointerTracker::new();
        assert!(!tracker.is_present());
        assert_eq!(tracker.position(), None);
    }

    #[test]
    fn test_latest_event_wins() {
        let mut tracker = PointerTracker::new();
        tracker.move_to(10.0, 20.0);
        tracker.move_to(30.0, 40.0);
        assert_eq!(tracker.position(), Some(Vec2::new(30.0, 40.0)));

        tracker.leave();
        assert!(!tracker.is_present());
    }
}
