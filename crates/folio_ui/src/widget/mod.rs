//! Page widgets.
//!
//! Each widget is a small state machine over host events and timers. The
//! [`WidgetSet`] owns them, attaches the ones whose elements exist and routes
//! everything else.

mod base;
mod cursor;
mod eyes;
mod navbar;
mod reveal;
mod set;
mod tilt;
mod typewriter;

pub use base::{TimerTask, Widget, WidgetContext, WidgetSlot};
pub use cursor::CursorWidget;
pub use eyes::EyesWidget;
pub use navbar::NavbarWidget;
pub use reveal::RevealWidget;
pub use set::WidgetSet;
pub use tilt::TiltWidget;
pub use typewriter::TypewriterWidget;
