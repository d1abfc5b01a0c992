//! # FOLIO Particle Network
//!
//! The animated background: drifting points that flee the pointer and link
//! up with their neighbours.
//!
//! ## Frame
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ clear → step(p) → render(p) → ... → link every close pair │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! A [`Particle`] is plain data. [`step`] and [`render`] are free functions
//! and every drawing call goes through an explicitly passed [`Surface`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod field;
pub mod particle;
pub mod surface;

pub use config::ParticleConfig;
pub use field::{target_count, ParticleField, ParticleInstance, TickStats};
pub use particle::{render, step, step_with, Particle};
pub use surface::{DrawCommand, DrawList, Surface};
