use egui::{Painter, Pos2, Rect, Stroke, Vec2};

use super::{Drawable, ShapeId};
use crate::shape::common;

/// Straight segment between two points
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    id: ShapeId,
    start: Pos2,
    end: Pos2,
}

impl Line {
    pub fn new(id: ShapeId, start: Pos2, end: Pos2) -> Self {
        Self { id, start, end }
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn set_endpoints(&mut self, start: Pos2, end: Pos2) {
        self.start = start;
        self.end = end;
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

impl Drawable for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn shape_type(&self) -> &'static str {
        "line"
    }

    fn bounds(&self) -> Rect {
        Rect::from_two_pos(self.start, self.end)
    }

    fn contains(&self, pos: Pos2, line_tolerance: f32) -> bool {
        // A zero-length line has no stroked area yet
        if self.is_degenerate() {
            return false;
        }
        common::distance_to_line_segment(pos, self.start, self.end) <= line_tolerance
    }

    fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.id, self.start + delta, self.end + delta)
    }

    fn paint(&self, painter: &Painter, offset: Vec2, stroke: Stroke) {
        painter.line_segment([self.start + offset, self.end + offset], stroke);
    }
}
