//! # FOLIO Animation Loop
//!
//! ```text
//! Host refresh callback (time T):
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ 1. BEGIN FRAME   begin_frame(T) → None once cancelled               │
//! │ 2. EVENTS        drain the host event channel                       │
//! │ 3. TIMERS        run widget timers due by T                         │
//! │ 4. FIELD         clear → step/render particles → links              │
//! │ 5. WIDGETS       per-frame tweens (cursor outline)                  │
//! │ 6. END FRAME     record FrameStats; host requests the next refresh  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use crate::config::FrameConfig;

/// Largest `dt` handed to animations, so a backgrounded tab doesn't jump.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Handles for a single frame's work.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameContext {
    /// Frame number.
    pub frame: u64,
    /// Host time at the start of the frame.
    pub now: Duration,
    /// Seconds since the previous frame, clamped to [`MAX_FRAME_DT`].
    pub dt: f32,
    /// Unclamped time since the previous frame.
    pub interval: Duration,
}

/// What one frame did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    /// Frame number.
    pub frame: u64,
    /// Time since the previous frame in microseconds (0 for the first).
    pub interval_us: u64,
    /// Clamped delta time in seconds.
    pub dt: f32,
    /// Particles stepped.
    pub particles: usize,
    /// Links drawn.
    pub links: usize,
    /// Host events handled.
    pub events_processed: usize,
    /// Widget timers run.
    pub timers_fired: usize,
}

/// The page's `requestAnimationFrame` loop, minus the scheduling.
///
/// The host calls [`begin_frame`](Self::begin_frame) from its refresh
/// callback and stops re-requesting frames once it returns `None`.
#[derive(Clone, Debug)]
pub struct AnimationLoop {
    config: FrameConfig,
    frame_count: u64,
    last_frame: Option<Duration>,
    running: bool,
    stats_accumulator: FrameStatsAccumulator,
}

impl AnimationLoop {
    /// Creates a running loop.
    #[must_use]
    pub fn new(config: FrameConfig) -> Self {
        Self {
            config,
            frame_count: 0,
            last_frame: None,
            running: true,
            stats_accumulator: FrameStatsAccumulator::new(config.budget()),
        }
    }

    /// Begins a frame at host time `now`.
    ///
    /// Returns None once the loop has been cancelled.
    #[must_use]
    pub fn begin_frame(&mut self, now: Duration) -> Option<FrameContext> {
        if !self.running {
            return None;
        }

        let interval = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_sub(last));
        self.last_frame = Some(now);

        Some(FrameContext {
            frame: self.frame_count,
            now,
            dt: interval.as_secs_f32().min(MAX_FRAME_DT),
            interval,
        })
    }

    /// Ends the current frame.
    pub fn end_frame(&mut self, stats: FrameStats) {
        self.frame_count += 1;
        self.stats_accumulator.record(stats);

        let budget = self.config.budget().as_micros() as u64;
        if self.config.enable_timing_logs && stats.interval_us > budget * 2 {
            tracing::warn!(
                frame = stats.frame,
                interval_ms = stats.interval_us as f64 / 1000.0,
                budget_ms = budget as f64 / 1000.0,
                "frame exceeded budget"
            );
        }
    }

    /// Stops the loop; every later `begin_frame` returns None.
    pub fn cancel(&mut self) {
        if self.running {
            self.running = false;
            tracing::info!(frames = self.frame_count, "animation loop cancelled");
        }
    }

    /// Returns true until [`cancel`](Self::cancel).
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the number of completed frames.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Returns the accumulated statistics.
    #[must_use]
    pub fn stats(&self) -> &FrameStatsAccumulator {
        &self.stats_accumulator
    }
}

impl Default for AnimationLoop {
    fn default() -> Self {
        Self::new(FrameConfig::default())
    }
}

/// Accumulator for frame statistics.
#[derive(Clone, Debug)]
pub struct FrameStatsAccumulator {
    /// Frame budget in microseconds.
    pub budget_us: u64,
    /// Total frames recorded.
    pub frames_recorded: u64,
    /// Frames with a measured interval (all but the first).
    pub frames_timed: u64,
    /// Sum of frame intervals.
    pub interval_us_sum: u64,
    /// Shortest interval.
    pub min_interval_us: u64,
    /// Longest interval.
    pub max_interval_us: u64,
    /// Frames whose interval exceeded the budget.
    pub frames_over_budget: u64,
    /// Sum of links drawn.
    pub links_sum: u64,
    /// Most particles in one frame.
    pub max_particles: usize,
}

impl FrameStatsAccumulator {
    /// Creates a new accumulator for a frame budget.
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self {
            budget_us: budget.as_micros() as u64,
            frames_recorded: 0,
            frames_timed: 0,
            interval_us_sum: 0,
            min_interval_us: u64::MAX,
            max_interval_us: 0,
            frames_over_budget: 0,
            links_sum: 0,
            max_particles: 0,
        }
    }

    /// Records a frame's statistics.
    pub fn record(&mut self, stats: FrameStats) {
        self.frames_recorded += 1;
        self.links_sum += stats.links as u64;
        self.max_particles = self.max_particles.max(stats.particles);

        if stats.interval_us == 0 {
            return;
        }
        self.frames_timed += 1;
        self.interval_us_sum += stats.interval_us;
        self.min_interval_us = self.min_interval_us.min(stats.interval_us);
        self.max_interval_us = self.max_interval_us.max(stats.interval_us);
        if stats.interval_us > self.budget_us {
            self.frames_over_budget += 1;
        }
    }

    /// Returns average frame interval in milliseconds.
    #[must_use]
    pub fn avg_frame_ms(&self) -> f64 {
        if self.frames_timed == 0 {
            return 0.0;
        }
        (self.interval_us_sum as f64 / self.frames_timed as f64) / 1000.0
    }

    /// Returns average FPS.
    #[must_use]
    pub fn avg_fps(&self) -> f64 {
        let avg_ms = self.avg_frame_ms();
        if avg_ms <= 0.0 {
            return 0.0;
        }
        1000.0 / avg_ms
    }

    /// Returns the fraction of timed frames over budget.
    #[must_use]
    pub fn over_budget_ratio(&self) -> f64 {
        if self.frames_timed == 0 {
            return 0.0;
        }
        self.frames_over_budget as f64 / self.frames_timed as f64
    }

    /// Returns the average links drawn per frame.
    #[must_use]
    pub fn avg_links(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        self.links_sum as f64 / self.frames_recorded as f64
    }

    /// Formats a summary of the statistics.
    #[must_use]
    pub fn summary(&self) -> String {
        let min_ms = if self.frames_timed == 0 {
            0.0
        } else {
            self.min_interval_us as f64 / 1000.0
        };
        let mut out = String::new();
        out.push_str("╔══════════════════════════════════════════════════════════════════╗\n");
        out.push_str("║                    FRAME STATISTICS SUMMARY                      ║\n");
        out.push_str("╚══════════════════════════════════════════════════════════════════╝\n");
        out.push_str("┌─ TIMING ───────────────────────────────────────────────────────┐\n");
        out.push_str(&format!("│ Frames Recorded:    {}\n", self.frames_recorded));
        out.push_str(&format!(
            "│ Average Frame:      {:.3} ms ({:.1} FPS)\n",
            self.avg_frame_ms(),
            self.avg_fps()
        ));
        out.push_str(&format!("│ Min Frame:          {min_ms:.3} ms\n"));
        out.push_str(&format!(
            "│ Max Frame:          {:.3} ms\n",
            self.max_interval_us as f64 / 1000.0
        ));
        out.push_str(&format!(
            "│ Over Budget:        {} frames ({:.1}%)\n",
            self.frames_over_budget,
            self.over_budget_ratio() * 100.0
        ));
        out.push_str("├─ FIELD ────────────────────────────────────────────────────────┤\n");
        out.push_str(&format!("│ Particles (max):    {}\n", self.max_particles));
        out.push_str(&format!("│ Links (avg):        {:.1}\n", self.avg_links()));
        out.push_str("└──────────────────────────────────────────────────────────────────┘\n");
        out
    }

    /// Prints the summary to stdout.
    pub fn print_summary(&self) {
        print!("{}", self.summary());
    }
}

impl Default for FrameStatsAccumulator {
    fn default() -> Self {
        Self::new(FrameConfig::default().budget())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_frame_cycle() {
        let mut animation = AnimationLoop::default();

        let first = animation.begin_frame(ms(1000)).unwrap();
        assert_eq!(first.frame, 0);
        assert!(first.dt.abs() < f32::EPSILON);
        animation.end_frame(FrameStats::default());

        let second = animation.begin_frame(ms(1016)).unwrap();
        assert_eq!(second.frame, 1);
        assert!((second.dt - 0.016).abs() < 1e-6);
        assert_eq!(animation.frame_count(), 1);
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut animation = AnimationLoop::default();
        let _ = animation.begin_frame(ms(0));
        let ctx = animation.begin_frame(ms(5000)).unwrap();
        assert!((ctx.dt - MAX_FRAME_DT).abs() < f32::EPSILON);
        assert_eq!(ctx.interval, ms(5000));
    }

    #[test]
    fn test_cancel_stops_frames() {
        let mut animation = AnimationLoop::default();
        assert!(animation.is_running());
        animation.cancel();
        assert!(!animation.is_running());
        assert!(animation.begin_frame(ms(16)).is_none());
    }

    #[test]
    fn test_stats_accumulator() {
        let mut acc = FrameStatsAccumulator::new(Duration::from_micros(16_666));
        acc.record(FrameStats::default());

        for i in 0..100 {
            acc.record(FrameStats {
                frame: i + 1,
                interval_us: 10_000 + (i * 100),
                links: 10,
                particles: 60,
                ..FrameStats::default()
            });
        }

        assert_eq!(acc.frames_recorded, 101);
        assert_eq!(acc.frames_timed, 100);
        assert!(acc.avg_fps() > 50.0);
        assert!(acc.avg_fps() < 100.0);
        assert_eq!(acc.frames_over_budget, 33);
        assert_eq!(acc.max_particles, 60);
        assert!(acc.summary().contains("Frames Recorded:    101"));
    }
}
