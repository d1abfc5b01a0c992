//! Tweened values driven by frame time.
//!
//! The cursor outline trails the pointer with an [`Animation2D`]; every
//! pointer move retargets it from wherever it currently is. Interpolation is
//! linear and the value holds at the target once the tween completes.

/// A single linearly animated value.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Current value.
    current: f32,
    /// Target value.
    target: f32,
    /// Animation progress (0-1).
    progress: f32,
    /// Animation duration (seconds).
    duration: f32,
    /// Start value (for interpolation).
    start: f32,
}

impl Animation {
    /// Default animation duration.
    pub const DEFAULT_DURATION: f32 = 0.5;

    /// Creates a new animation resting at the given value.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
            progress: 1.0,
            duration: Self::DEFAULT_DURATION,
            start: value,
        }
    }

    /// Creates an animation with custom duration (seconds).
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns true if the animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Restarts the tween from the current value toward `target`.
    pub fn set_target(&mut self, target: f32) {
        self.start = self.current;
        self.target = target;
        self.progress = 0.0;
    }

    /// Updates the animation.
    ///
    /// `dt` is delta time in seconds.
    pub fn update(&mut self, dt: f32) {
        if self.progress >= 1.0 {
            return;
        }

        if self.duration > 0.0 {
            self.progress += dt / self.duration;
        } else {
            self.progress = 1.0;
        }
        self.progress = self.progress.min(1.0);

        self.current = self.start + (self.target - self.start) * self.progress;

        // Snap to target when complete
        if self.progress >= 1.0 {
            self.current = self.target;
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Animated 2D point; both axes always share one timeline.
#[derive(Debug, Clone, Default)]
pub struct Animation2D {
    x: Animation,
    y: Animation,
}

impl Animation2D {
    /// Creates a new 2D animation at rest.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: Animation::new(x),
            y: Animation::new(y),
        }
    }

    /// Sets both components' duration (seconds).
    #[must_use]
    pub fn with_duration(self, duration: f32) -> Self {
        Self {
            x: self.x.with_duration(duration),
            y: self.y.with_duration(duration),
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> (f32, f32) {
        (self.x.value(), self.y.value())
    }

    /// Restarts both axes from the current point toward `(x, y)`.
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    /// Updates the animation.
    pub fn update(&mut self, dt: f32) {
        self.x.update(dt);
        self.y.update(dt);
    }

    /// Returns true if both animations are complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.x.is_complete() && self.y.is_complete()
    }
}
