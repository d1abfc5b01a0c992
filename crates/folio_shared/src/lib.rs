//! # FOLIO Shared
//!
//! Common types used by the particle field, the widgets and the page.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - the document abstraction (`folio_ui`)
//! - the drawing surface (`folio_particles`)
//!
//! If you need either, put the type next to them.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod color;
pub mod constants;
pub mod math;
pub mod pointer;

pub use color::Color;
pub use constants::{ACCENT, PARTICLE_DENSITY, POINTER_INFLUENCE_RADIUS};
pub use math::{Size, Vec2};
pub use pointer::PointerTracker;
