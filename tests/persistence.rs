use egui::{pos2, Color32};
use image::Rgb;
use simple_paint::persistence::{self, export_path};
use simple_paint::{CanvasOverlay, Editor, EditorConfig, FileError, PointerEvent, ToolMode};

fn editor_with_rect() -> Editor {
    let mut editor = Editor::default();
    editor.set_tool(ToolMode::Rectangle);
    editor.handle(&PointerEvent::Press(pos2(10.0, 10.0)));
    editor.handle(&PointerEvent::Move(pos2(30.0, 30.0)));
    editor.handle(&PointerEvent::Release(pos2(30.0, 30.0)));
    editor
}

#[test]
fn test_rasterize_uses_screen_colors() {
    let mut editor = editor_with_rect();
    let config = EditorConfig::default();

    let image = persistence::rasterize(&editor, &config, 40, 40);
    assert_eq!(image.dimensions(), (40, 40));
    assert_eq!(*image.get_pixel(20, 10), Rgb([0, 0, 0]));
    assert_eq!(*image.get_pixel(20, 20), Rgb([255, 255, 255]));

    // Select it and the outline turns red
    editor.set_tool(ToolMode::Select);
    editor.handle(&PointerEvent::Press(pos2(20.0, 20.0)));
    editor.handle(&PointerEvent::Release(pos2(20.0, 20.0)));
    let image = persistence::rasterize(&editor, &config, 40, 40);
    assert_eq!(*image.get_pixel(20, 10), Rgb([255, 0, 0]));

    let plain = EditorConfig {
        highlight_selection: false,
        ..EditorConfig::default()
    };
    let image = persistence::rasterize(&editor, &plain, 40, 40);
    assert_eq!(*image.get_pixel(20, 10), Rgb([0, 0, 0]));
}

#[test]
fn test_save_appends_jpg_suffix() {
    let editor = editor_with_rect();
    let config = EditorConfig::default();
    let dir = tempfile::tempdir().unwrap();

    let base = dir.path().join("drawing");
    let written = persistence::save_drawing(&editor, &config, 64, 48, &base).unwrap();
    assert_eq!(written, export_path(&base));
    assert_eq!(written.file_name().unwrap(), "drawing.jpg");
    assert!(written.exists());

    // A name that already ends in .jpg still gets the suffix
    let typed = dir.path().join("typed.jpg");
    let written_typed = persistence::save_drawing(&editor, &config, 64, 48, &typed).unwrap();
    assert_eq!(written_typed.file_name().unwrap(), "typed.jpg.jpg");
    assert!(written_typed.exists());
}

#[test]
fn test_saved_drawing_opens_without_touching_shapes() {
    let editor = editor_with_rect();
    let config = EditorConfig {
        stroke_width: 5.0,
        default_color: Color32::BLACK,
        ..EditorConfig::default()
    };
    let dir = tempfile::tempdir().unwrap();

    let base = dir.path().join("roundtrip");
    let written = persistence::save_drawing(&editor, &config, 64, 48, &base).unwrap();

    let loaded = persistence::load_image(&written).unwrap();
    assert_eq!(loaded.size, [64, 48]);
    assert_eq!(loaded.rgba.len(), 64 * 48 * 4);
    assert_eq!(editor.shapes().len(), 1);

    // JPEG is lossy; a thick black edge stays dark and the background stays light
    let pixel = |x: usize, y: usize| loaded.rgba[(y * 64 + x) * 4];
    assert!(pixel(20, 10) < 100);
    assert!(pixel(50, 40) > 200);
}

#[test]
fn test_opened_image_lasts_until_first_drag() {
    let mut editor = editor_with_rect();
    let dir = tempfile::tempdir().unwrap();
    let written = persistence::save_drawing(
        &editor,
        &EditorConfig::default(),
        32,
        32,
        &dir.path().join("overlay"),
    )
    .unwrap();

    let loaded = persistence::load_image(&written).unwrap();
    let mut overlay = Some(CanvasOverlay::new(loaded, &editor));

    // A click selects the rectangle but requests no redraw
    editor.set_tool(ToolMode::Select);
    editor.handle(&PointerEvent::Press(pos2(20.0, 20.0)));
    editor.handle(&PointerEvent::Release(pos2(20.0, 20.0)));
    assert!(!simple_paint::overlay::expire(&mut overlay, &editor));
    assert_eq!(overlay.as_ref().map(|o| o.content().size), Some([32, 32]));

    // Dragging the selection redraws the canvas and wipes the image
    editor.handle(&PointerEvent::Press(pos2(20.0, 20.0)));
    editor.handle(&PointerEvent::Move(pos2(24.0, 20.0)));
    editor.handle(&PointerEvent::Release(pos2(24.0, 20.0)));
    assert!(simple_paint::overlay::expire(&mut overlay, &editor));
    assert!(overlay.is_none());

    // Opening never added shapes
    assert_eq!(editor.shapes().len(), 1);
}

#[test]
fn test_open_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does_not_exist.png");
    let err = persistence::load_image(&missing).unwrap_err();

    assert!(matches!(err, FileError::Open { .. }));
    assert_eq!(err.path(), &missing);
    assert_eq!(err.user_message(), "Error opening the drawing");
}

#[test]
fn test_save_into_missing_directory_fails() {
    let editor = Editor::default();
    let dir = tempfile::tempdir().unwrap();
    let chosen = dir.path().join("no_such_dir").join("drawing");
    let err = persistence::save_drawing(&editor, &EditorConfig::default(), 10, 10, &chosen)
        .unwrap_err();

    assert!(matches!(err, FileError::Save { .. }));
    assert!(err.path().to_string_lossy().ends_with("drawing.jpg"));
    assert!(err.to_string().contains("Failed to save drawing"));
}
