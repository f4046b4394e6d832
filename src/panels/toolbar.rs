use crate::PaintApp;
use crate::tool::ToolMode;

pub fn toolbar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        let enabled = !app.has_notice();
        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal(|ui| {
                let mut tool = app.editor().tool();
                egui::ComboBox::from_id_salt("tool_combo")
                    .selected_text(tool.name())
                    .show_ui(ui, |ui| {
                        for option in ToolMode::DRAWING {
                            ui.selectable_value(&mut tool, option, option.name());
                        }
                    });
                if tool != app.editor().tool() {
                    log::info!("Tool selected from toolbar: {}", tool);
                    app.editor_mut().set_tool(tool);
                }

                if ui
                    .selectable_label(app.editor().tool() == ToolMode::Select, "Select")
                    .clicked()
                {
                    app.editor_mut().set_tool(ToolMode::Select);
                }

                if ui.button("Save").clicked() {
                    app.save_drawing();
                }
                if ui.button("Open").clicked() {
                    app.open_image(ctx);
                }

                ui.separator();
                let mut highlight = app.config().highlight_selection;
                if ui.checkbox(&mut highlight, "Highlight selection").changed() {
                    app.config_mut().highlight_selection = highlight;
                }
            });
        });
    });
}
