use egui::{Painter, Pos2, Rect, Stroke, Vec2};

use super::{Drawable, ShapeId};
use crate::shape::common;

/// Axis-aligned rectangle given by an origin and a size.
///
/// The size is kept exactly as dragged, so it may be negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    id: ShapeId,
    origin: Pos2,
    size: Vec2,
}

impl Rectangle {
    pub fn new(id: ShapeId, origin: Pos2, size: Vec2) -> Self {
        Self { id, origin, size }
    }

    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn set_frame(&mut self, origin: Pos2, size: Vec2) {
        self.origin = origin;
        self.size = size;
    }
}

impl Drawable for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn shape_type(&self) -> &'static str {
        "rectangle"
    }

    fn bounds(&self) -> Rect {
        common::normalized_frame(self.origin, self.size)
    }

    fn contains(&self, pos: Pos2, _line_tolerance: f32) -> bool {
        common::frame_contains(self.bounds(), pos)
    }

    fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.id, self.origin + delta, self.size)
    }

    fn paint(&self, painter: &Painter, offset: Vec2, stroke: Stroke) {
        painter.rect_stroke(self.bounds().translate(offset), 0.0, stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_rectangle_dragged_backwards() {
        let rect = Rectangle::new(ShapeId::new(), pos2(100.0, 100.0), vec2(-40.0, -20.0));

        assert_eq!(rect.size(), vec2(-40.0, -20.0));
        assert_eq!(rect.bounds(), Rect::from_min_max(pos2(60.0, 80.0), pos2(100.0, 100.0)));
        assert!(rect.contains(pos2(70.0, 90.0), 0.0));
        assert!(!rect.contains(pos2(110.0, 90.0), 0.0));
    }
}
