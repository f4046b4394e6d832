use egui::{Color32, Painter, Pos2, Rect, Response, TextureHandle, TextureOptions};

use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::input::InputHandler;
use crate::overlay::{self, CanvasOverlay};
use crate::panels::{self, Notice};
use crate::persistence;

/// Only the config is persisted; the drawing itself is never stored.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    config: EditorConfig,
    #[serde(skip)]
    editor: Editor,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    canvas_rect: Rect,
    #[serde(skip)]
    overlay: Option<CanvasOverlay<TextureHandle>>,
    #[serde(skip)]
    notice: Option<Notice>,
}

impl Default for PaintApp {
    fn default() -> Self {
        let config = EditorConfig::default();
        Self {
            editor: Editor::new(&config),
            config,
            input: InputHandler::new(),
            canvas_rect: Rect::NOTHING,
            overlay: None,
            notice: None,
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = match cc.storage {
            Some(storage) => eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default(),
            None => Self::default(),
        };
        app.editor.set_line_hit_tolerance(app.config.line_hit_tolerance);
        log::info!("Starting with {:?}", app.config);
        app
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EditorConfig {
        &mut self.config
    }

    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }

    pub(crate) fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Feed this frame's pointer input to the editor.
    ///
    /// Input is dropped while a notice is open.
    pub(crate) fn handle_canvas_input(
        &mut self,
        ctx: &egui::Context,
        response: &Response,
        rect: Rect,
    ) {
        if self.has_notice() {
            self.input.reset();
            return;
        }

        for event in self.input.process_input(ctx, response, rect) {
            if self.editor.handle(&event) {
                ctx.request_repaint();
            }
        }

        if overlay::expire(&mut self.overlay, &self.editor) {
            log::debug!("Canvas redrawn, dropping opened image");
        }
    }

    pub(crate) fn paint_overlay(&self, painter: &Painter, rect: Rect) {
        if let Some(overlay) = &self.overlay {
            let texture = overlay.content();
            let image_rect = Rect::from_min_size(rect.min, texture.size_vec2());
            let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
            painter.image(texture.id(), image_rect, uv, Color32::WHITE);
        }
    }

    /// Ask for a destination and write the canvas there as a JPEG
    pub fn save_drawing(&mut self) {
        let Some(chosen) = rfd::FileDialog::new().set_title("Save as JPG").save_file() else {
            log::debug!("Save cancelled");
            return;
        };

        let size = self.canvas_rect.size();
        let (width, height) = (size.x.max(1.0) as u32, size.y.max(1.0) as u32);
        match persistence::save_drawing(&self.editor, &self.config, width, height, &chosen) {
            Ok(path) => {
                let name = display_name(&path);
                self.notice = Some(Notice::info(format!("Drawing saved as {name}")));
            }
            Err(err) => {
                log::error!("{err}");
                self.notice = Some(Notice::error(err.user_message()));
            }
        }
    }

    /// Ask for an image and paint it once at the canvas origin
    pub fn open_image(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new().set_title("Open drawing").pick_file() else {
            log::debug!("Open cancelled");
            return;
        };

        match persistence::load_image(&path) {
            Ok(image) => {
                let texture = ctx.load_texture(
                    "opened_image",
                    image.to_color_image(),
                    TextureOptions::default(),
                );
                self.overlay = Some(CanvasOverlay::new(texture, &self.editor));
                let name = display_name(&path);
                self.notice = Some(Notice::info(format!("Drawing opened from {name}")));
            }
            Err(err) => {
                log::error!("{err}");
                self.notice = Some(Notice::error(err.user_message()));
            }
        }
    }
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.editor.set_line_hit_tolerance(self.config.line_hit_tolerance);

        panels::toolbar(self, ctx);
        panels::central_panel(self, ctx);
        panels::notice_window(&mut self.notice, ctx);
    }
}
