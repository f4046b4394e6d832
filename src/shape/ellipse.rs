use egui::{Painter, Pos2, Rect, Stroke, Vec2};

use super::{Drawable, ShapeId};
use crate::shape::common;

/// Ellipse inscribed in a frame given by origin and size
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    id: ShapeId,
    origin: Pos2,
    size: Vec2,
}

impl Ellipse {
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

    fn radius(&self) -> Vec2 {
        self.bounds().size() / 2.0
    }
}

impl Drawable for Ellipse {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn shape_type(&self) -> &'static str {
        "ellipse"
    }

    fn bounds(&self) -> Rect {
        common::normalized_frame(self.origin, self.size)
    }

    fn contains(&self, pos: Pos2, _line_tolerance: f32) -> bool {
        common::ellipse_contains(self.bounds(), pos)
    }

    fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.id, self.origin + delta, self.size)
    }

    fn paint(&self, painter: &Painter, offset: Vec2, stroke: Stroke) {
        let center = self.bounds().center() + offset;
        painter.add(egui::Shape::ellipse_stroke(center, self.radius(), stroke));
    }
}
