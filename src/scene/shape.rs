//! Shape primitives held by the scene

use glam::Vec2;

/// Label glyph advance as a fraction of the font size
pub const LABEL_ADVANCE: f32 = 0.6;

/// RGBA colour, components in 0-1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const BLUE: Color = Color([0.0, 0.0, 1.0, 1.0]);
    pub const GREEN: Color = Color([0.0, 1.0, 0.0, 1.0]);
    pub const DARK_GRAY: Color = Color([0.25, 0.25, 0.25, 1.0]);
    pub const LIGHT_GRAY: Color = Color([0.75, 0.75, 0.75, 1.0]);
    pub const BLACK: Color = Color([0.0, 0.0, 0.0, 1.0]);
}

/// Geometry of a shape
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Rect { size: Vec2 },
    /// Ellipse inscribed in a `size` bounding box
    Oval { size: Vec2 },
    Label { text: String, font_size: f32 },
}

/// A shape in the scene. `pos` is always the top-left of its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub pos: Vec2,
    pub color: Color,
    pub filled: bool,
    pub visible: bool,
}

impl Shape {
    fn new(kind: ShapeKind, pos: Vec2) -> Self {
        Self {
            kind,
            pos,
            color: Color::BLACK,
            filled: false,
            visible: true,
        }
    }

    pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(
            ShapeKind::Rect {
                size: Vec2::new(width, height),
            },
            Vec2::new(x, y),
        )
    }

    pub fn oval(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(
            ShapeKind::Oval {
                size: Vec2::new(width, height),
            },
            Vec2::new(x, y),
        )
    }

    pub fn label(text: impl Into<String>, font_size: f32) -> Self {
        Self::new(
            ShapeKind::Label {
                text: text.into(),
                font_size,
            },
            Vec2::ZERO,
        )
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    /// Bounding box size
    pub fn size(&self) -> Vec2 {
        match &self.kind {
            ShapeKind::Rect { size } | ShapeKind::Oval { size } => *size,
            ShapeKind::Label { text, font_size } => Vec2::new(
                text.chars().count() as f32 * LABEL_ADVANCE * font_size,
                *font_size,
            ),
        }
    }

    pub fn width(&self) -> f32 {
        self.size().x
    }

    pub fn height(&self) -> f32 {
        self.size().y
    }

    /// Whether the point lies on this shape.
    ///
    /// Rects and labels use their closed bounding box; ovals use the
    /// inscribed ellipse, so bounding-box corners are outside an oval.
    pub fn contains(&self, point: Vec2) -> bool {
        let size = self.size();
        match self.kind {
            ShapeKind::Rect { .. } | ShapeKind::Label { .. } => {
                let max = self.pos + size;
                point.x >= self.pos.x && point.y >= self.pos.y && point.x <= max.x && point.y <= max.y
            }
            ShapeKind::Oval { .. } => {
                if size.x <= 0.0 || size.y <= 0.0 {
                    return false;
                }
                let half = size / 2.0;
                let d = (point - (self.pos + half)) / half;
                d.length_squared() <= 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        let rect = Shape::rect(5.0, 40.0, 40.0, 10.0);
        assert!(rect.contains(Vec2::new(5.0, 40.0)));
        assert!(rect.contains(Vec2::new(45.0, 50.0)));
        assert!(!rect.contains(Vec2::new(45.1, 45.0)));
        assert!(!rect.contains(Vec2::new(20.0, 39.9)));
    }

    #[test]
    fn test_oval_excludes_bounding_corners() {
        let ball = Shape::oval(215.0, 340.0, 20.0, 20.0);
        assert!(ball.contains(Vec2::new(225.0, 350.0)));
        assert!(!ball.contains(Vec2::new(215.0, 340.0)));
        assert!(!ball.contains(Vec2::new(235.0, 360.0)));
    }

    #[test]
    fn test_label_metrics() {
        let label = Shape::label("12", 100.0);
        assert!((label.width() - 120.0).abs() < 1e-4);
        assert!((label.height() - 100.0).abs() < 1e-4);
    }
}
