//! # Visual Constants
//!
//! Defaults for every effect on the page.
//!
//! **NOTE:** These are the values the configuration falls back to. The
//! configuration is read once at startup; nothing changes them afterwards.

use crate::color::Color;

// =============================================================================
// PALETTE
// =============================================================================

/// Neon accent (`#D2FF00`).
pub const ACCENT: Color = Color::rgb8(210, 255, 0);

/// Particle fill: the accent at half opacity.
pub const PARTICLE_COLOR: Color = ACCENT.with_alpha(0.5);

// =============================================================================
// PARTICLE FIELD
// =============================================================================

/// Viewport area (px²) per particle.
pub const PARTICLE_DENSITY: u32 = 9000;

/// Radius around the pointer inside which particles are pushed away.
pub const POINTER_INFLUENCE_RADIUS: f32 = 150.0;

/// Distance a repelled particle moves per frame, per axis.
pub const REPULSION_STEP: f32 = 3.0;

/// Repulsion stops this many radii away from an edge.
pub const EDGE_MARGIN_FACTOR: f32 = 10.0;

/// Smallest spawned radius.
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;

/// Largest spawned radius (exclusive).
pub const PARTICLE_RADIUS_MAX: f32 = 3.0;

/// Spawned velocity components lie in `[-MAX_SPEED, MAX_SPEED)`.
pub const PARTICLE_MAX_SPEED: f32 = 0.5;

/// Squared distance at which a link fades out completely.
pub const LINK_FALLOFF: f32 = 20_000.0;

/// Opacity of a link between two coincident particles.
pub const LINK_ALPHA: f32 = 0.2;

/// Link threshold is `(width / LINK_DIVISOR) * (height / LINK_DIVISOR)`.
pub const LINK_DIVISOR: f32 = 9.0;

/// Stroke width of a link.
pub const LINK_WIDTH: f32 = 1.0;

// =============================================================================
// WIDGET TIMINGS (milliseconds)
// =============================================================================

/// Delay before the typewriter reveals its first character.
pub const TYPEWRITER_INITIAL_DELAY_MS: u64 = 1000;

/// Delay between two revealed characters.
pub const TYPEWRITER_CHAR_INTERVAL_MS: u64 = 100;

/// Shortest pause between two blinks.
pub const BLINK_MIN_INTERVAL_MS: u64 = 7000;

/// Longest pause between two blinks.
pub const BLINK_MAX_INTERVAL_MS: u64 = 12_000;

/// How long the eyes stay shut during a blink.
pub const BLINK_DURATION_MS: u64 = 150;

/// Cursor outline catch-up time.
pub const CURSOR_FOLLOW_MS: u64 = 500;

// =============================================================================
// WIDGET GEOMETRY
// =============================================================================

/// Scroll offset past which the navbar turns opaque.
pub const NAVBAR_SCROLL_THRESHOLD: f32 = 50.0;

/// Maximum card rotation on either axis, in degrees.
pub const TILT_MAX_DEGREES: f32 = 5.0;

/// CSS perspective applied to tilted cards.
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;

/// Uniform scale of a hovered card.
pub const TILT_HOVER_SCALE: f32 = 1.02;

/// Cursor outline size at rest.
pub const CURSOR_OUTLINE_PX: f32 = 40.0;

/// Cursor outline size over an interactive element.
pub const CURSOR_OUTLINE_HOVER_PX: f32 = 60.0;

/// Minimum visible ratio for a reveal element to count as on screen.
pub const REVEAL_THRESHOLD: f32 = 0.1;
