use egui::{Color32, Painter, Sense, Vec2};

use crate::PaintApp;
use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::shape::Drawable;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        app.set_canvas_rect(rect);

        app.handle_canvas_input(ctx, &response, rect);

        painter.rect_filled(rect, 0.0, Color32::WHITE);
        paint_shapes(&painter, app.editor(), app.config(), rect.min.to_vec2());
        app.paint_overlay(&painter, rect);
    });
}

/// Stroke every shape in insertion order, so later shapes cover earlier ones
pub fn paint_shapes(painter: &Painter, editor: &Editor, config: &EditorConfig, offset: Vec2) {
    for shape in editor.shapes() {
        let stroke = config.stroke_for(editor.is_selected(shape.id()));
        shape.paint(painter, offset, stroke);
    }
}
