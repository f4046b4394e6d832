use egui::{Painter, Pos2, Rect, Stroke, Vec2};

mod common;
pub(crate) mod ellipse;
pub(crate) mod line;
pub(crate) mod rectangle;

pub use ellipse::Ellipse;
pub use line::Line;
pub use rectangle::Rectangle;

/// Identity of a shape on the canvas.
///
/// Moving a shape replaces it with a translated copy; the copy keeps the id,
/// so a selection survives the replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(uuid::Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Common trait that all drawable primitives implement
pub trait Drawable {
    fn id(&self) -> ShapeId;

    /// Short lowercase name, used in log output
    fn shape_type(&self) -> &'static str;

    /// Normalized bounding rectangle
    fn bounds(&self) -> Rect;

    /// Test if the shape's area contains `pos`.
    ///
    /// `line_tolerance` is how far from a line segment still counts as a hit;
    /// shapes with an interior ignore it.
    fn contains(&self, pos: Pos2, line_tolerance: f32) -> bool;

    /// A copy of this shape moved by `delta`, keeping the same id
    fn translated(&self, delta: Vec2) -> Self
    where
        Self: Sized;

    /// Stroke the outline, with `offset` mapping canvas to screen coordinates
    fn paint(&self, painter: &Painter, offset: Vec2, stroke: Stroke);
}

/// Every shape that can live on the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
}

impl Drawable for Shape {
    fn id(&self) -> ShapeId {
        match self {
            Shape::Line(l) => l.id(),
            Shape::Rectangle(r) => r.id(),
            Shape::Ellipse(e) => e.id(),
        }
    }

    fn shape_type(&self) -> &'static str {
        match self {
            Shape::Line(l) => l.shape_type(),
            Shape::Rectangle(r) => r.shape_type(),
            Shape::Ellipse(e) => e.shape_type(),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            Shape::Line(l) => l.bounds(),
            Shape::Rectangle(r) => r.bounds(),
            Shape::Ellipse(e) => e.bounds(),
        }
    }

    fn contains(&self, pos: Pos2, line_tolerance: f32) -> bool {
        match self {
            Shape::Line(l) => l.contains(pos, line_tolerance),
            Shape::Rectangle(r) => r.contains(pos, line_tolerance),
            Shape::Ellipse(e) => e.contains(pos, line_tolerance),
        }
    }

    fn translated(&self, delta: Vec2) -> Self {
        match self {
            Shape::Line(l) => Shape::Line(l.translated(delta)),
            Shape::Rectangle(r) => Shape::Rectangle(r.translated(delta)),
            Shape::Ellipse(e) => Shape::Ellipse(e.translated(delta)),
        }
    }

    fn paint(&self, painter: &Painter, offset: Vec2, stroke: Stroke) {
        match self {
            Shape::Line(l) => l.paint(painter, offset, stroke),
            Shape::Rectangle(r) => r.paint(painter, offset, stroke),
            Shape::Ellipse(e) => e.paint(painter, offset, stroke),
        }
    }
}

/// Factory functions for the zero-size shapes a press creates
pub mod factory {
    use super::*;

    /// A degenerate line with both endpoints at `anchor`
    pub fn line_at(anchor: Pos2) -> Shape {
        Shape::Line(Line::new(ShapeId::new(), anchor, anchor))
    }

    /// A zero-width, zero-height rectangle at `anchor`
    pub fn rectangle_at(anchor: Pos2) -> Shape {
        Shape::Rectangle(Rectangle::new(ShapeId::new(), anchor, Vec2::ZERO))
    }

    /// A zero-size ellipse framed at `anchor`
    pub fn ellipse_at(anchor: Pos2) -> Shape {
        Shape::Ellipse(Ellipse::new(ShapeId::new(), anchor, Vec2::ZERO))
    }
}
