//! # FOLIO
//!
//! The visual effects layer of a portfolio page: an interactive particle
//! network behind the content, plus six small page widgets (navbar, reveal
//! on scroll, custom cursor, card tilt, typewriter, eyes).
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                           HOST                                │
//! │  events ─┐        clock ─┐           refresh ─┐               │
//! └──────────┼───────────────┼────────────────────┼───────────────┘
//!            ▼               ▼                    ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Page                                                          │
//! │  ├─ PointerTracker   (folio_shared)                           │
//! │  ├─ WidgetSet        (folio_ui)  ── Document trait ──> DOM    │
//! │  ├─ ParticleField    (folio_particles) ── Surface ──> canvas  │
//! │  └─ AnimationLoop + EventQueue                                │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything runs on the host's thread. Time only moves when the host
//! passes it in, and all randomness comes from one seed, so a page replays
//! identically from the same seed and event stream.
//!
//! ## Usage
//!
//! ```
//! use folio::{FxConfig, Page};
//! use folio_particles::DrawList;
//! use folio_shared::Size;
//! use folio_ui::{HostEvent, MemoryDocument};
//! use std::time::Duration;
//!
//! let mut doc = MemoryDocument::new();
//! doc.insert(doc.body(), "canvas#globalCanvas");
//!
//! let start = Duration::from_millis(16);
//! let mut page = Page::with_seed(doc, FxConfig::default(), Size::new(900, 600), 7, start)?;
//! page.dispatch(HostEvent::PointerMove { x: 450.0, y: 300.0 });
//!
//! let mut surface = DrawList::new();
//! let stats = page.frame(start, &mut surface).unwrap();
//! assert_eq!(stats.particles, 60);
//! # Ok::<(), folio::FxError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod events;
pub mod frame_loop;
pub mod page;

pub use config::{FrameConfig, FxConfig};
pub use error::{FxError, FxResult};
pub use events::{EventQueue, EventReceiver, EventSender};
pub use frame_loop::{AnimationLoop, FrameContext, FrameStats, FrameStatsAccumulator};
pub use page::Page;
