//! # FOLIO Page Widgets
//!
//! Small, host-driven effects for the portfolio page.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      WIDGET PIPELINE                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Host Events ──→ WidgetSet ──→ Widget::on_event ──→ Document │
//! │  Host Clock  ──→ TimerQueue ─→ Widget::on_timer ──→ Document │
//! │  Frame       ──────────────→ Widget::on_frame ──→ Document │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Widgets never own the document, the clock or the random source; the
//! composer passes them in through [`WidgetContext`] on every call.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod config;
pub mod document;
pub mod input;
pub mod state;
pub mod style;
pub mod timer;
pub mod widget;

pub use animation::{Animation, Animation2D};
pub use config::WidgetConfig;
pub use document::{Document, ElementId, MemoryDocument, Rect};
pub use input::HostEvent;
pub use state::PageState;
pub use timer::{DeterministicClock, TimerHandle, TimerQueue};
pub use widget::{TimerTask, Widget, WidgetContext, WidgetSet, WidgetSlot};
