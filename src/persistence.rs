//! Saving the canvas as a JPEG and loading images onto it.
//!
//! Saving rasterizes the shape list with `imageproc`, so it needs no GPU
//! readback. Loading decodes the image only; it never becomes canvas state.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use egui::{Color32, ColorImage, Vec2};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_ellipse_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use log::{debug, info};

use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::error::{FileError, FileResult};
use crate::shape::{Drawable, Shape};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// The file a save actually writes: the chosen path with ".jpg" appended.
///
/// The suffix is added even when the chosen name already ends in ".jpg".
pub fn export_path(chosen: &Path) -> PathBuf {
    let mut name = OsString::from(chosen.as_os_str());
    name.push(".jpg");
    PathBuf::from(name)
}

/// Render the editor's shapes on white, the way the canvas shows them
pub fn rasterize(editor: &Editor, config: &EditorConfig, width: u32, height: u32) -> RgbImage {
    let mut image = RgbImage::from_pixel(width.max(1), height.max(1), BACKGROUND);

    // Wider strokes are stamped as copies of the 1px outline on a square brush
    let half = ((config.stroke_width.max(1.0).round() as i32) - 1) / 2;
    for shape in editor.shapes() {
        let color = to_rgb(config.color_for(editor.is_selected(shape.id())));
        for dy in -half..=half {
            for dx in -half..=half {
                draw_outline(&mut image, shape, Vec2::new(dx as f32, dy as f32), color);
            }
        }
    }
    image
}

/// Draw one 1px outline of `shape`, shifted by `offset`
fn draw_outline(image: &mut RgbImage, shape: &Shape, offset: Vec2, color: Rgb<u8>) {
    match shape {
        Shape::Line(line) => {
            let (start, end) = (line.start() + offset, line.end() + offset);
            draw_line_segment_mut(image, (start.x, start.y), (end.x, end.y), color);
        }
        Shape::Rectangle(rect) => {
            let bounds = rect.bounds().translate(offset);
            let (left, top) = (bounds.min.x.round(), bounds.min.y.round());
            // The outline covers both edges, like the screen stroke
            let width = (bounds.max.x.round() - left) as u32 + 1;
            let height = (bounds.max.y.round() - top) as u32 + 1;
            let frame = imageproc::rect::Rect::at(left as i32, top as i32).of_size(width, height);
            draw_hollow_rect_mut(image, frame, color);
        }
        Shape::Ellipse(ellipse) => {
            let bounds = ellipse.bounds().translate(offset);
            let center = bounds.center();
            draw_hollow_ellipse_mut(
                image,
                (center.x.round() as i32, center.y.round() as i32),
                (bounds.width() / 2.0).round() as i32,
                (bounds.height() / 2.0).round() as i32,
                color,
            );
        }
    }
}

/// Rasterize the canvas and write it as a JPEG next to `chosen`.
///
/// Returns the path that was written.
pub fn save_drawing(
    editor: &Editor,
    config: &EditorConfig,
    width: u32,
    height: u32,
    chosen: &Path,
) -> FileResult<PathBuf> {
    let path = export_path(chosen);
    let image = rasterize(editor, config, width, height);
    debug!("Encoding {}x{} canvas as JPEG", image.width(), image.height());

    image
        .save_with_format(&path, ImageFormat::Jpeg)
        .map_err(|source| FileError::Save { path: path.clone(), source })?;

    info!("Drawing saved to {}", path.display());
    Ok(path)
}

/// A decoded image, ready to become a texture
#[derive(Clone)]
pub struct LoadedImage {
    pub size: [usize; 2],
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedImage")
            .field("size", &self.size)
            .field("data_len", &self.rgba.len())
            .finish()
    }
}

impl LoadedImage {
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(self.size, &self.rgba)
    }
}

/// Decode any image format the `image` crate understands
pub fn load_image(path: &Path) -> FileResult<LoadedImage> {
    let decoded = image::open(path).map_err(|source| FileError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    info!("Loaded {}x{} image from {}", size[0], size[1], path.display());

    Ok(LoadedImage {
        size,
        rgba: rgba.into_raw(),
    })
}

fn to_rgb(color: Color32) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}
