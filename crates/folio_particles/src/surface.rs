//! Drawing surfaces.
//!
//! The field never touches a concrete canvas. Hosts implement [`Surface`]
//! over their 2D context; tests and the headless simulator record into a
//! [`DrawList`].

use folio_shared::{Color, Size, Vec2};

/// A 2D drawing target sized to the viewport.
pub trait Surface {
    /// Wipes the whole surface.
    fn clear(&mut self, size: Size);

    /// Fills a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Strokes a straight line.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);
}

/// A recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Surface wiped.
    Clear {
        /// Area wiped.
        size: Size,
    },
    /// Filled circle.
    Circle {
        /// Center.
        center: Vec2,
        /// Radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// Stroked line.
    Line {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
    },
}

/// Surface that records commands instead of rasterizing.
///
/// `clear` drops everything recorded so far, so after a tick the list holds
/// exactly one frame.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(1024),
        }
    }

    /// All recorded commands, in order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded circles as `(center, radius, color)`.
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }

    /// Recorded lines as `(from, to, color)`.
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Color)> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            DrawCommand::Line {
                from, to, color, ..
            } => Some((from, to, color)),
            _ => None,
        })
    }

    /// Returns the total command count.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl Surface for DrawList {
    fn clear(&mut self, size: Size) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { size });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_starts_a_new_frame() {
        let mut list = DrawList::new();
        list.clear(Size::new(10, 10));
        list.fill_circle(Vec2::ZERO, 1.0, Color::WHITE);
        assert_eq!(list.command_count(), 2);

        list.clear(Size::new(10, 10));
        assert_eq!(list.command_count(), 1);
        assert_eq!(list.circles().count(), 0);
    }

    #[test]
    fn test_filters() {
        let mut list = DrawList::new();
        list.fill_circle(Vec2::new(1.0, 1.0), 2.0, Color::WHITE);
        list.stroke_line(Vec2::ZERO, Vec2::new(3.0, 4.0), Color::BLACK, 1.0);

        assert_eq!(list.circles().count(), 1);
        let (from, to, _) = list.lines().next().unwrap();
        assert_eq!(from.distance(to), 5.0);
    }
}
