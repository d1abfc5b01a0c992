//! Tunables for the particle network.

use folio_shared::constants::{
    EDGE_MARGIN_FACTOR, LINK_ALPHA, LINK_DIVISOR, LINK_FALLOFF, PARTICLE_DENSITY,
    PARTICLE_MAX_SPEED, PARTICLE_RADIUS_MAX, PARTICLE_RADIUS_MIN, POINTER_INFLUENCE_RADIUS,
    REPULSION_STEP,
};
use serde::{Deserialize, Serialize};

/// Particle network configuration (`[particles]` table).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Viewport area (px²) per particle.
    pub density: u32,
    /// Pointer repulsion radius.
    pub influence_radius: f32,
    /// Per-axis nudge away from the pointer, per frame.
    pub repulsion_step: f32,
    /// Repulsion stops `edge_margin_factor × radius` from an edge.
    pub edge_margin_factor: f32,
    /// Smallest spawned radius.
    pub radius_min: f32,
    /// Largest spawned radius (exclusive).
    pub radius_max: f32,
    /// Spawned velocity components lie in `[-max_speed, max_speed)`.
    pub max_speed: f32,
    /// Squared distance at which a link is fully transparent.
    pub link_falloff: f32,
    /// Opacity multiplier for links.
    pub link_alpha: f32,
    /// Link threshold is `(w / link_divisor) * (h / link_divisor)`.
    pub link_divisor: f32,
}

impl ParticleConfig {
    /// The stock look of the page.
    pub const DEFAULT: Self = Self {
        density: PARTICLE_DENSITY,
        influence_radius: POINTER_INFLUENCE_RADIUS,
        repulsion_step: REPULSION_STEP,
        edge_margin_factor: EDGE_MARGIN_FACTOR,
        radius_min: PARTICLE_RADIUS_MIN,
        radius_max: PARTICLE_RADIUS_MAX,
        max_speed: PARTICLE_MAX_SPEED,
        link_falloff: LINK_FALLOFF,
        link_alpha: LINK_ALPHA,
        link_divisor: LINK_DIVISOR,
    };
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
