//! Inline-style values the widgets write.
//!
//! Dark glass navbar, neon lime accent. Everything a widget writes into a
//! `style` attribute is formatted here so the strings stay consistent.

use folio_shared::{Color, ACCENT};

/// Page colors.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Navbar background at the top of the page.
    pub navbar_resting: Color,
    /// Navbar background once scrolled.
    pub navbar_scrolled: Color,
    /// Cursor outline fill while hovering an interactive element.
    pub cursor_hover: Color,
}

impl Theme {
    /// The portfolio's dark theme.
    pub const DARK: Self = Self {
        navbar_resting: Color::rgba8(5, 5, 5, 0.8),
        navbar_scrolled: Color::rgba8(5, 5, 5, 0.95),
        cursor_hover: ACCENT.with_alpha(0.1),
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::DARK
    }
}

/// Reveal transition on `.animate-on-scroll` elements.
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease-out, transform 0.6s ease-out";

/// Reveal start offset.
pub const REVEAL_HIDDEN_TRANSFORM: &str = "translateY(20px)";

/// Rule injected so `.visible` overrides the inline hidden state.
pub const VISIBLE_RULE: &str = ".visible {\n    opacity: 1 !important;\n    transform: translateY(0) !important;\n}\n";

/// `transparent`.
pub const TRANSPARENT: &str = "transparent";

/// `12px`.
#[must_use]
pub fn px(value: f32) -> String {
    format!("{value}px")
}

/// `translate(3px, -4px)`.
#[must_use]
pub fn translate(dx: f32, dy: f32) -> String {
    format!("translate({dx}px, {dy}px)")
}

/// `perspective(Ppx) rotateX(Xdeg) rotateY(Ydeg) scale3d(S, S, S)`.
#[must_use]
pub fn tilt_transform(perspective: f32, rotate_x: f32, rotate_y: f32, scale: f32) -> String {
    format!(
        "perspective({perspective}px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) scale3d({scale}, {scale}, {scale})"
    )
}

/// Tilt at rest.
#[must_use]
pub fn tilt_rest(perspective: f32) -> String {
    format!("perspective({perspective}px) rotateX(0) rotateY(0) scale3d(1, 1, 1)")
}
