//! Host events.
//!
//! The host translates its native callbacks (window `mousemove`, element
//! `mouseenter`, `IntersectionObserver` entries, ...) into [`HostEvent`]s and
//! hands them to the page in arrival order.

use crate::document::ElementId;

/// One event from the host page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Pointer moved to viewport coordinates.
    PointerMove {
        /// Viewport X.
        x: f32,
        /// Viewport Y.
        y: f32,
    },
    /// Pointer left the tracked surface.
    PointerLeave,
    /// Pointer entered an element.
    PointerEnter {
        /// Element entered.
        target: ElementId,
    },
    /// Pointer exited an element.
    PointerExit {
        /// Element exited.
        target: ElementId,
    },
    /// Pointer moved while over an element.
    PointerMoveOver {
        /// Element under the pointer.
        target: ElementId,
        /// Viewport X.
        x: f32,
        /// Viewport Y.
        y: f32,
    },
    /// Window scrolled.
    Scroll {
        /// Vertical scroll offset.
        y: f32,
    },
    /// Element clicked.
    Click {
        /// Element clicked.
        target: ElementId,
    },
    /// Viewport resized.
    Resize {
        /// New width in CSS pixels.
        width: u32,
        /// New height in CSS pixels.
        height: u32,
    },
    /// Observed element's visibility changed.
    Intersection {
        /// Observed element.
        target: ElementId,
        /// Fraction of the element inside the viewport (0-1).
        ratio: f32,
    },
}

impl HostEvent {
    /// The element this event is aimed at, if any.
    #[must_use]
    pub const fn target(&self) -> Option<ElementId> {
        match *self {
            Self::PointerEnter { target }
            | Self::PointerExit { target }
            | Self::PointerMoveOver { target, .. }
            | Self::Click { target }
            | Self::Intersection { target, .. } => Some(target),
            Self::PointerMove { .. }
            | Self::PointerLeave
            | Self::Scroll { .. }
            | Self::Resize { .. } => None,
        }
    }
}
