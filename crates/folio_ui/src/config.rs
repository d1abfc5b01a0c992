//! Widget tunables, one table per widget.

use folio_shared::constants::{
    BLINK_DURATION_MS, BLINK_MAX_INTERVAL_MS, BLINK_MIN_INTERVAL_MS, CURSOR_FOLLOW_MS,
    CURSOR_OUTLINE_HOVER_PX, CURSOR_OUTLINE_PX, NAVBAR_SCROLL_THRESHOLD, REVEAL_THRESHOLD,
    TILT_HOVER_SCALE, TILT_MAX_DEGREES, TILT_PERSPECTIVE_PX, TYPEWRITER_CHAR_INTERVAL_MS,
    TYPEWRITER_INITIAL_DELAY_MS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// `[typewriter]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Delay before the first character.
    pub initial_delay_ms: u64,
    /// Delay between characters.
    pub char_interval_ms: u64,
}

impl TypewriterConfig {
    /// Delay before the first character.
    #[must_use]
    pub const fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    /// Delay between characters.
    #[must_use]
    pub const fn char_interval(&self) -> Duration {
        Duration::from_millis(self.char_interval_ms)
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: TYPEWRITER_INITIAL_DELAY_MS,
            char_interval_ms: TYPEWRITER_CHAR_INTERVAL_MS,
        }
    }
}

/// `[blink]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlinkConfig {
    /// Shortest gap between blinks.
    pub min_interval_ms: u64,
    /// Longest gap between blinks (inclusive).
    pub max_interval_ms: u64,
    /// How long the lids stay shut.
    pub duration_ms: u64,
}

impl BlinkConfig {
    /// How long the lids stay shut.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: BLINK_MIN_INTERVAL_MS,
            max_interval_ms: BLINK_MAX_INTERVAL_MS,
            duration_ms: BLINK_DURATION_MS,
        }
    }
}

/// `[navbar]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Scroll offset past which the navbar turns opaque.
    pub scroll_threshold: f32,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: NAVBAR_SCROLL_THRESHOLD,
        }
    }
}

/// `[tilt]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    /// Rotation at the card's edge.
    pub max_degrees: f32,
    /// CSS perspective distance.
    pub perspective_px: f32,
    /// Scale while hovered.
    pub hover_scale: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_degrees: TILT_MAX_DEGREES,
            perspective_px: TILT_PERSPECTIVE_PX,
            hover_scale: TILT_HOVER_SCALE,
        }
    }
}

/// `[cursor]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Outline catch-up time.
    pub follow_ms: u64,
    /// Outline size at rest.
    pub outline_px: f32,
    /// Outline size over an interactive element.
    pub outline_hover_px: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            follow_ms: CURSOR_FOLLOW_MS,
            outline_px: CURSOR_OUTLINE_PX,
            outline_hover_px: CURSOR_OUTLINE_HOVER_PX,
        }
    }
}

/// All widget tables.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Typewriter timing.
    pub typewriter: TypewriterConfig,
    /// Blink timing.
    pub blink: BlinkConfig,
    /// Navbar threshold.
    pub navbar: NavbarConfig,
    /// Card tilt.
    pub tilt: TiltConfig,
    /// Custom cursor.
    pub cursor: CursorConfig,
}

impl WidgetConfig {
    /// Minimum intersection ratio that reveals an element.
    pub const REVEAL_THRESHOLD: f32 = REVEAL_THRESHOLD;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page() {
        let config = WidgetConfig::default();
        assert_eq!(config.typewriter.initial_delay(), Duration::from_millis(1000));
        assert_eq!(config.typewriter.char_interval(), Duration::from_millis(100));
        assert_eq!(config.blink.min_interval_ms, 7000);
        assert_eq!(config.blink.max_interval_ms, 12_000);
        assert_eq!(config.blink.duration(), Duration::from_millis(150));
        assert!((config.navbar.scroll_threshold - 50.0).abs() < f32::EPSILON);
        assert!((config.cursor.outline_hover_px - 60.0).abs() < f32::EPSILON);
    }
}
