use egui::{Color32, Stroke};
use serde::{Deserialize, Serialize};

/// User-adjustable editor settings, persisted through eframe storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // settings added later fall back to defaults when loading old state
pub struct EditorConfig {
    /// Paint the selected shape in `highlight_color` instead of `default_color`
    pub highlight_selection: bool,
    pub default_color: Color32,
    pub highlight_color: Color32,
    /// Outline width, on screen and in exported images
    pub stroke_width: f32,
    /// How far from a line segment a point still hits the line
    pub line_hit_tolerance: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            highlight_selection: true,
            default_color: Color32::BLACK,
            highlight_color: Color32::RED,
            stroke_width: 1.0,
            line_hit_tolerance: 3.0,
        }
    }
}

impl EditorConfig {
    pub fn color_for(&self, selected: bool) -> Color32 {
        if selected && self.highlight_selection {
            self.highlight_color
        } else {
            self.default_color
        }
    }

    pub fn stroke_for(&self, selected: bool) -> Stroke {
        Stroke::new(self.stroke_width, self.color_for(selected))
    }
}
