use serde::{Deserialize, Serialize};

/// What a press on the canvas does when it doesn't grab the selected shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolMode {
    #[default]
    Line,
    Rectangle,
    Ellipse,
    Select,
}

impl ToolMode {
    /// Tools offered in the toolbar dropdown; Select has its own button
    pub const DRAWING: [ToolMode; 3] = [ToolMode::Line, ToolMode::Rectangle, ToolMode::Ellipse];

    pub fn name(&self) -> &'static str {
        match self {
            ToolMode::Line => "Line",
            ToolMode::Rectangle => "Rectangle",
            ToolMode::Ellipse => "Ellipse",
            ToolMode::Select => "Select",
        }
    }
}

impl std::fmt::Display for ToolMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
