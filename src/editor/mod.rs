//! The canvas editor: an ordered shape list, an optional selection, the
//! current tool, and the pointer gesture that edits them.
//!
//! Every pointer operation is a plain method, so the whole interaction model
//! runs without a window. Operations that change what is on screen bump the
//! revision counter; that is the editor's redraw request.

use egui::Pos2;
use log::{debug, info};

use crate::config::EditorConfig;
use crate::input::PointerEvent;
use crate::shape::{factory, Drawable, Shape, ShapeId};
use crate::tool::ToolMode;

mod gesture;

pub use gesture::Gesture;

#[derive(Debug, Clone)]
pub struct Editor {
    shapes: Vec<Shape>,
    selected: Option<ShapeId>,
    tool: ToolMode,
    gesture: Gesture,
    revision: u64,
    line_hit_tolerance: f32,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            shapes: Vec::new(),
            selected: None,
            tool: ToolMode::default(),
            gesture: Gesture::Idle,
            revision: 0,
            line_hit_tolerance: config.line_hit_tolerance,
        }
    }

    /// Shapes in paint order; later entries paint over earlier ones
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        let id = self.selected?;
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selected == Some(id)
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    pub fn set_tool(&mut self, tool: ToolMode) {
        if self.tool != tool {
            info!("Tool changed: {} -> {}", self.tool, tool);
            self.tool = tool;
        }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Number of redraws requested so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_line_hit_tolerance(&mut self, tolerance: f32) {
        self.line_hit_tolerance = tolerance;
    }

    /// First shape, in insertion order, whose area contains `pos`.
    ///
    /// The earliest-drawn shape wins even when a later one paints over it.
    pub fn hit_test(&self, pos: Pos2) -> Option<ShapeId> {
        self.shapes
            .iter()
            .find(|shape| shape.contains(pos, self.line_hit_tolerance))
            .map(|shape| shape.id())
    }

    /// Dispatch one pointer message. Returns true if a redraw was requested.
    pub fn handle(&mut self, event: &PointerEvent) -> bool {
        let before = self.revision;
        match *event {
            PointerEvent::Press(pos) => self.pointer_down(pos),
            PointerEvent::Move(pos) => self.pointer_drag(pos),
            PointerEvent::Release(pos) => self.pointer_up(pos),
        }
        self.revision != before
    }

    /// Start a gesture at `pos`.
    ///
    /// Pressing inside the selected shape starts a move. Anything else starts
    /// a draw and, unless the Select tool is active, appends a zero-size
    /// shape of the current tool at `pos`.
    pub fn pointer_down(&mut self, pos: Pos2) {
        let grabs_selection = self
            .selected_shape()
            .is_some_and(|shape| shape.contains(pos, self.line_hit_tolerance));

        if grabs_selection {
            debug!("Press at {:?} grabbed the selected shape", pos);
            self.gesture = Gesture::Moving {
                anchor: pos,
                dragged: false,
            };
            return;
        }

        self.gesture = Gesture::Drawing {
            anchor: pos,
            dragged: false,
        };
        let shape = match self.tool {
            ToolMode::Line => factory::line_at(pos),
            ToolMode::Rectangle => factory::rectangle_at(pos),
            ToolMode::Ellipse => factory::ellipse_at(pos),
            ToolMode::Select => return,
        };
        info!("Started {} {} at {:?}", shape.shape_type(), shape.id(), pos);
        self.shapes.push(shape);
    }

    /// Pointer moved to `pos` with the button held
    pub fn pointer_drag(&mut self, pos: Pos2) {
        let Some(anchor) = self.gesture.anchor() else {
            debug!("Ignoring drag to {:?} with no active gesture", pos);
            return;
        };

        if self.gesture.is_moving() {
            if let Some(id) = self.selected {
                self.move_selected(id, pos - anchor);
                self.gesture.mark_dragged(Some(pos));
                self.request_redraw();
                return;
            }
        }

        self.gesture.mark_dragged(None);
        if self.shapes.is_empty() {
            return;
        }
        self.resize_last(anchor, pos);
        self.request_redraw();
    }

    /// End the gesture. A release with no drag in between is a click.
    pub fn pointer_up(&mut self, pos: Pos2) {
        debug!("Release at {:?} ends {} gesture", pos, self.gesture.name());
        if !self.gesture.is_idle() && !self.gesture.was_dragged() {
            self.pointer_click(pos);
        }
        self.gesture = Gesture::Idle;
    }

    /// Select the first shape containing `pos`, unless the current gesture
    /// is a move. A miss leaves the selection as it was.
    pub fn pointer_click(&mut self, pos: Pos2) {
        if self.gesture.is_moving() {
            return;
        }
        if let Some(id) = self.hit_test(pos) {
            if self.selected != Some(id) {
                info!("Selected shape {}", id);
            }
            self.selected = Some(id);
        }
    }

    /// Replace the selected shape with a copy translated by `delta`
    fn move_selected(&mut self, id: ShapeId, delta: egui::Vec2) {
        if let Some(slot) = self.shapes.iter_mut().find(|shape| shape.id() == id) {
            *slot = slot.translated(delta);
            debug!("Moved shape {} by {:?}", id, delta);
        }
    }

    /// Reshape the in-progress shape so it spans `anchor` to `pos`
    fn resize_last(&mut self, anchor: Pos2, pos: Pos2) {
        if self.tool == ToolMode::Select {
            let hit = self.hit_test(anchor);
            if hit != self.selected {
                info!("Selection changed to {:?}", hit);
            }
            self.selected = hit;
            return;
        }

        let Some(last) = self.shapes.last_mut() else {
            return;
        };
        match (self.tool, last) {
            (ToolMode::Line, Shape::Line(line)) => line.set_endpoints(anchor, pos),
            (ToolMode::Rectangle, Shape::Rectangle(rect)) => rect.set_frame(anchor, pos - anchor),
            (ToolMode::Ellipse, Shape::Ellipse(ellipse)) => ellipse.set_frame(anchor, pos - anchor),
            (tool, shape) => {
                debug!("{} tool does not reshape a {}", tool, shape.shape_type());
            }
        }
    }

    fn request_redraw(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_press_creates_shape_for_drawing_tools() {
        let mut editor = Editor::default();
        for (i, tool) in ToolMode::DRAWING.into_iter().enumerate() {
            editor.set_tool(tool);
            editor.pointer_down(pos2(10.0, 10.0));
            editor.pointer_up(pos2(10.0, 10.0));
            assert_eq!(editor.shapes().len(), i + 1);
        }
    }

    #[test]
    fn test_select_tool_press_creates_nothing() {
        let mut editor = Editor::default();
        editor.set_tool(ToolMode::Select);
        editor.pointer_down(pos2(10.0, 10.0));
        assert!(editor.shapes().is_empty());
        assert!(matches!(editor.gesture(), Gesture::Drawing { .. }));
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut editor = Editor::default();
        editor.set_tool(ToolMode::Rectangle);
        editor.pointer_drag(pos2(50.0, 50.0));
        assert_eq!(editor.revision(), 0);
        assert!(editor.shapes().is_empty());
    }

    #[test]
    fn test_handle_reports_redraw() {
        let mut editor = Editor::default();
        editor.set_tool(ToolMode::Line);
        assert!(!editor.handle(&PointerEvent::Press(pos2(0.0, 0.0))));
        assert!(editor.handle(&PointerEvent::Move(pos2(5.0, 5.0))));
        assert!(!editor.handle(&PointerEvent::Release(pos2(5.0, 5.0))));
        assert!(editor.gesture().is_idle());
    }

    #[test]
    fn test_select_drag_may_clear_selection() {
        let mut editor = Editor::default();
        editor.set_tool(ToolMode::Rectangle);
        editor.pointer_down(pos2(0.0, 0.0));
        editor.pointer_drag(pos2(20.0, 20.0));
        editor.pointer_up(pos2(20.0, 20.0));

        editor.set_tool(ToolMode::Select);
        editor.pointer_down(pos2(10.0, 10.0));
        editor.pointer_drag(pos2(11.0, 11.0));
        assert!(editor.selected().is_some());
        editor.pointer_up(pos2(11.0, 11.0));

        // The selection is grabbed now, so scrub from empty space instead
        editor.pointer_down(pos2(100.0, 100.0));
        editor.pointer_drag(pos2(101.0, 101.0));
        assert_eq!(editor.selected(), None);
    }
}
