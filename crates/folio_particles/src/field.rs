//! The particle field: owns the particles, rebuilds on resize, draws a frame.
//!
//! Per frame:
//! 1. Clear the surface
//! 2. `step` then `render` every particle
//! 3. Link every unordered pair closer than the link threshold
//!
//! The link pass is O(n²). `n` is bounded by viewport area / density, which
//! keeps a 4K viewport under a thousand particles.

use bytemuck::{Pod, Zeroable};
use folio_shared::constants::{ACCENT, LINK_WIDTH};
use folio_shared::{Size, Vec2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::ParticleConfig;
use crate::particle::{render, step_with, Particle};
use crate::surface::Surface;

/// Number of particles a viewport of `size` holds: `floor(area / density)`.
///
/// A zero density yields an empty field.
#[must_use]
pub fn target_count(size: Size, density: u32) -> usize {
    if density == 0 {
        return 0;
    }
    (size.area() / u64::from(density)) as usize
}

/// Packed per-particle data for hosts that batch-draw (16 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// Position (x, y).
    pub position: [f32; 2],
    /// Radius.
    pub radius: f32,
    /// Fill alpha.
    pub alpha: f32,
}

impl ParticleInstance {
    /// Size of an instance in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();
}

/// What one tick drew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Particles stepped and drawn.
    pub particles: usize,
    /// Links drawn.
    pub links: usize,
}

/// The animated particle network.
#[derive(Debug, Clone)]
pub struct ParticleField {
    /// Current particles; order only affects draw order.
    particles: Vec<Particle>,
    /// Canvas size the particles were spawned for.
    size: Size,
    /// Tunables.
    config: ParticleConfig,
    /// Spawn randomness.
    rng: ChaCha8Rng,
}

impl ParticleField {
    /// Creates an empty field. Call [`resize`](Self::resize) before ticking.
    #[must_use]
    pub fn new(config: ParticleConfig, seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            size: Size::default(),
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates an empty field with the stock tunables.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(ParticleConfig::DEFAULT, seed)
    }

    /// Throws every particle away and spawns a fresh set for `size`.
    ///
    /// Each particle gets a radius in `[radius_min, radius_max)`, a position
    /// in `[2r, dim - 2r]` on each axis and velocity components in
    /// `[-max_speed, max_speed)`.
    pub fn resize(&mut self, size: Size) {
        let count = target_count(size, self.config.density);
        self.size = size;

        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(self.spawn());
        }
        self.particles = particles;

        tracing::debug!(
            width = size.width,
            height = size.height,
            count,
            "particle field rebuilt"
        );
    }

    fn spawn(&mut self) -> Particle {
        let config = self.config;
        let rng = &mut self.rng;

        let radius = config.radius_min + rng.gen::<f32>() * (config.radius_max - config.radius_min);
        let x = spawn_coordinate(rng, self.size.w(), radius);
        let y = spawn_coordinate(rng, self.size.h(), radius);
        let dx = -config.max_speed + rng.gen::<f32>() * config.max_speed * 2.0;
        let dy = -config.max_speed + rng.gen::<f32>() * config.max_speed * 2.0;

        Particle::new(Vec2::new(x, y), Vec2::new(dx, dy), radius)
    }

    /// Draws one frame and advances every particle.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S, pointer: Option<Vec2>) -> TickStats {
        surface.clear(self.size);

        for particle in &mut self.particles {
            *particle = step_with(*particle, self.size, pointer, &self.config);
            render(particle, surface);
        }

        let links = self.connect(surface);

        TickStats {
            particles: self.particles.len(),
            links,
        }
    }

    fn connect<S: Surface + ?Sized>(&self, surface: &mut S) -> usize {
        let threshold = self.link_threshold();
        let mut links = 0;

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance_sq = a.position.distance_squared(b.position);
                if distance_sq < threshold {
                    let color = ACCENT.with_alpha(self.link_opacity(distance_sq));
                    surface.stroke_line(a.position, b.position, color, LINK_WIDTH);
                    links += 1;
                }
            }
        }

        links
    }

    /// Squared distance under which two particles are linked.
    #[must_use]
    pub fn link_threshold(&self) -> f32 {
        let divisor = self.config.link_divisor;
        (self.size.w() / divisor) * (self.size.h() / divisor)
    }

    /// Stroke opacity for a link of squared length `distance_sq`.
    #[must_use]
    pub fn link_opacity(&self, distance_sq: f32) -> f32 {
        (1.0 - distance_sq / self.config.link_falloff).max(0.0) * self.config.link_alpha
    }

    /// Current particles.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Replaces the particles for a scripted scene.
    ///
    /// The count no longer follows the density until the next resize.
    pub fn set_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }

    /// Number of particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Returns true before the first resize or on a tiny viewport.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Canvas size the field was built for.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Tunables.
    #[must_use]
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    /// Packed (x, y, radius, alpha) per particle, ready for `bytemuck::cast_slice`.
    #[must_use]
    pub fn instances(&self) -> Vec<ParticleInstance> {
        let mut out = Vec::with_capacity(self.particles.len());
        self.write_instances(&mut out);
        out
    }

    /// Packs every particle into `out` (cleared first).
    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        out.extend(self.particles.iter().map(|p| ParticleInstance {
            position: p.position.to_array(),
            radius: p.radius,
            alpha: p.color.a,
        }));
    }
}

/// Uniform in `[2r, dim - 2r]`; the midpoint when the axis is too small.
fn spawn_coordinate(rng: &mut ChaCha8Rng, dim: f32, radius: f32) -> f32 {
    let low = radius * 2.0;
    let high = dim - radius * 2.0;
    if high <= low {
        return dim * 0.5;
    }
    low + rng.gen::<f32>() * (high - low)
}
