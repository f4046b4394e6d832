#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod editor;
pub mod error;
pub mod input;
pub mod overlay;
pub mod panels;
pub mod persistence;
pub mod shape;
pub mod tool;

pub use app::PaintApp;
pub use config::EditorConfig;
pub use editor::{Editor, Gesture};
pub use error::{FileError, FileResult};
pub use input::{InputHandler, PointerEvent};
pub use overlay::CanvasOverlay;
pub use shape::{Drawable, Shape, ShapeId};
pub use tool::ToolMode;
