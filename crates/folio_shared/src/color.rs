//! Colors as the host stylesheet understands them.

/// RGBA color with 8-bit channels and a real-valued alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba8(0, 0, 0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);
    /// Solid white.
    pub const WHITE: Self = Self::rgb8(255, 255, 255);

    /// Creates a color from 8-bit channels and an alpha.
    #[must_use]
    pub const fn rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 1.0)
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba8(self.r, self.g, self.b, a)
    }

    /// CSS functional notation, e.g. `rgba(210, 255, 0, 0.5)`.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}
