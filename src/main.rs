#![warn(clippy::all, rust_2018_idioms)]
// Hide the console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Simple Paint")
            .with_inner_size([600.0, 400.0])
            .with_min_inner_size([300.0, 200.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Simple Paint",
        native_options,
        Box::new(|cc| Ok(Box::new(simple_paint::PaintApp::new(cc)))),
    )
}
