//! # Page Configuration
//!
//! One TOML file, loaded once at startup. Every table is optional and
//! defaults to the stock look of the page:
//!
//! ```toml
//! seed = 42
//!
//! [particles]
//! density = 9000
//!
//! [blink]
//! min_interval_ms = 7000
//! max_interval_ms = 12000
//!
//! [frame]
//! target_fps = 60
//! ```

use crate::error::{FxError, FxResult};
use folio_particles::ParticleConfig;
use folio_ui::WidgetConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// `[frame]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Log frames that run over budget.
    pub enable_timing_logs: bool,
    /// Target frames per second (sets the frame budget).
    pub target_fps: u32,
}

impl FrameConfig {
    /// Frame budget derived from `target_fps`.
    #[must_use]
    pub fn budget(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            enable_timing_logs: false,
            target_fps: 60,
        }
    }
}

/// Everything tunable about a page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    /// Random seed; drawn from platform entropy when absent.
    pub seed: Option<u64>,
    /// Particle network.
    pub particles: ParticleConfig,
    /// Widget tables (`[typewriter]`, `[blink]`, `[navbar]`, `[tilt]`, `[cursor]`).
    #[serde(flatten)]
    pub widgets: WidgetConfig,
    /// Animation loop.
    pub frame: FrameConfig,
}

impl FxConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// [`FxError::Parse`] for malformed TOML, [`FxError::InvalidConfig`] for
    /// out-of-range values.
    pub fn from_toml_str(source: &str) -> FxResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// [`FxError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_path(path: impl AsRef<Path>) -> FxResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| FxError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Checks every value is usable.
    ///
    /// # Errors
    ///
    /// [`FxError::InvalidConfig`] naming the first bad value.
    pub fn validate(&self) -> FxResult<()> {
        let p = &self.particles;
        if p.density == 0 {
            return Err(invalid("particles.density must be positive"));
        }
        if !(p.radius_min > 0.0 && p.radius_max >= p.radius_min) {
            return Err(invalid(format!(
                "particles radius range [{}, {}) is not positive",
                p.radius_min, p.radius_max
            )));
        }
        if p.max_speed < 0.0 || p.influence_radius < 0.0 || p.repulsion_step < 0.0 {
            return Err(invalid("particles speed, influence and step must not be negative"));
        }
        if p.link_falloff <= 0.0 || p.link_divisor <= 0.0 {
            return Err(invalid("particles.link_falloff and link_divisor must be positive"));
        }

        let w = &self.widgets;
        if w.typewriter.char_interval_ms == 0 {
            return Err(invalid("typewriter.char_interval_ms must be positive"));
        }
        if w.blink.min_interval_ms > w.blink.max_interval_ms {
            return Err(invalid(format!(
                "blink interval [{}, {}] is inverted",
                w.blink.min_interval_ms, w.blink.max_interval_ms
            )));
        }
        if w.blink.min_interval_ms == 0 {
            return Err(invalid("blink.min_interval_ms must be positive"));
        }
        if w.cursor.outline_px <= 0.0 || w.cursor.outline_hover_px <= 0.0 {
            return Err(invalid("cursor outline sizes must be positive"));
        }
        if w.tilt.perspective_px <= 0.0 {
            return Err(invalid("tilt.perspective_px must be positive"));
        }
        if self.frame.target_fps == 0 {
            return Err(invalid("frame.target_fps must be positive"));
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> FxError {
    FxError::InvalidConfig(reason.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_stock_page() {
        let config = FxConfig::from_toml_str("").unwrap();
        assert_eq!(config, FxConfig::default());
        assert_eq!(config.particles.density, 9000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_tables() {
        let config = FxConfig::from_toml_str(
            r#"
            seed = 7

            [particles]
            density = 4500

            [typewriter]
            char_interval_ms = 50

            [frame]
            target_fps = 120
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.particles.density, 4500);
        assert!((config.particles.influence_radius - 150.0).abs() < f32::EPSILON);
        assert_eq!(config.widgets.typewriter.char_interval_ms, 50);
        assert_eq!(config.widgets.typewriter.initial_delay_ms, 1000);
        assert_eq!(config.frame.target_fps, 120);
    }

    #[test]
    fn test_rejects_zero_density() {
        let err = FxConfig::from_toml_str("[particles]\ndensity = 0\n").unwrap_err();
        assert!(matches!(err, FxError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_inverted_blink() {
        let err = FxConfig::from_toml_str("[blink]\nmin_interval_ms = 5000\nmax_interval_ms = 100\n")
            .unwrap_err();
        assert!(matches!(err, FxError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_char_interval() {
        let err = FxConfig::from_toml_str("[typewriter]\nchar_interval_ms = 0\n").unwrap_err();
        assert!(matches!(err, FxError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = FxConfig::from_toml_str("seed = \"nope\"").unwrap_err();
        assert!(matches!(err, FxError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = FxConfig::from_path("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, FxError::Io { .. }));
    }

    #[test]
    fn test_budget() {
        assert_eq!(FrameConfig::default().budget(), Duration::from_nanos(16_666_666));
    }
}
