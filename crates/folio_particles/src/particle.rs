//! A single point of the background network.
//!
//! Plain data plus two free functions: [`step`] advances a particle one
//! frame, [`render`] draws it onto whatever surface the caller passes.

use folio_shared::constants::PARTICLE_COLOR;
use folio_shared::{Color, Size, Vec2};

use crate::config::ParticleConfig;
use crate::surface::Surface;

/// A drifting point-mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in viewport pixels.
    pub position: Vec2,
    /// Velocity in pixels per frame.
    pub velocity: Vec2,
    /// Radius in pixels.
    pub radius: f32,
    /// Fill color.
    pub color: Color,
}

impl Particle {
    /// Creates a particle with the stock fill color.
    #[must_use]
    pub const fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            color: PARTICLE_COLOR,
        }
    }
}

/// Advances a particle one frame with the stock tunables.
///
/// See [`step_with`].
#[must_use]
pub fn step(particle: Particle, bounds: Size, pointer: Option<Vec2>) -> Particle {
    step_with(particle, bounds, pointer, &ParticleConfig::DEFAULT)
}

/// Advances a particle one frame.
///
/// 1. Reflect: a component of velocity flips when the particle is already
///    outside `[0, dim]` on that axis. No clamping, so a particle may overshoot
///    a bound by up to one frame of travel.
/// 2. Repel: with the pointer present and closer than
///    `influence_radius + radius`, nudge `repulsion_step` px away on each axis,
///    unless that axis is within `edge_margin_factor × radius` of the edge
///    being pushed towards.
/// 3. Move: `position += velocity`.
#[must_use]
pub fn step_with(
    mut particle: Particle,
    bounds: Size,
    pointer: Option<Vec2>,
    config: &ParticleConfig,
) -> Particle {
    let (width, height) = (bounds.w(), bounds.h());

    if particle.position.x > width || particle.position.x < 0.0 {
        particle.velocity.x = -particle.velocity.x;
    }
    if particle.position.y > height || particle.position.y < 0.0 {
        particle.velocity.y = -particle.velocity.y;
    }

    if let Some(pointer) = pointer {
        repel(&mut particle, pointer, width, height, config);
    }

    particle.position += particle.velocity;
    particle
}

fn repel(particle: &mut Particle, pointer: Vec2, width: f32, height: f32, config: &ParticleConfig) {
    if pointer.distance(particle.position) >= config.influence_radius + particle.radius {
        return;
    }

    let margin = particle.radius * config.edge_margin_factor;
    let nudge = config.repulsion_step;
    let position = &mut particle.position;

    if pointer.x < position.x && position.x < width - margin {
        position.x += nudge;
    }
    if pointer.x > position.x && position.x > margin {
        position.x -= nudge;
    }
    if pointer.y < position.y && position.y < height - margin {
        position.y += nudge;
    }
    if pointer.y > position.y && position.y > margin {
        position.y -= nudge;
    }
}

/// Draws a particle as a filled circle.
pub fn render<S: Surface + ?Sized>(particle: &Particle, surface: &mut S) {
    surface.fill_circle(particle.position, particle.radius, particle.color);
}
