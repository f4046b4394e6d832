use egui::{Pos2, Rect, Vec2};

/// Distance from a point to a line segment, used for line hit testing
pub(crate) fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Frame spanned by an origin and a possibly negative size.
///
/// Dragging up or left produces a negative width or height; the frame is
/// flipped so that `min <= max` on both axes.
pub(crate) fn normalized_frame(origin: Pos2, size: Vec2) -> Rect {
    Rect::from_two_pos(origin, origin + size)
}

/// Half-open containment: `min` is inside, `max` is not.
///
/// An empty frame (zero width or height) contains nothing.
pub(crate) fn frame_contains(frame: Rect, pos: Pos2) -> bool {
    if frame.width() <= 0.0 || frame.height() <= 0.0 {
        return false;
    }
    pos.x >= frame.min.x && pos.x < frame.max.x && pos.y >= frame.min.y && pos.y < frame.max.y
}

/// Inside test for the ellipse inscribed in `frame`
pub(crate) fn ellipse_contains(frame: Rect, pos: Pos2) -> bool {
    if frame.width() <= 0.0 || frame.height() <= 0.0 {
        return false;
    }
    let nx = (pos.x - frame.min.x) / frame.width() - 0.5;
    let ny = (pos.y - frame.min.y) / frame.height() - 0.5;
    nx * nx + ny * ny < 0.25
}
