mod app;
mod canvas;
mod filemanager;
mod palette;
mod viewport;

use app::PixelEditor;
use eframe::egui;
use lib_dot::constants::{
    INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, TITLE,
};

fn main() -> Result<(), eframe::Error> {
    lib_dot::init_logging();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        native_options,
        Box::new(|cc| Ok(Box::new(PixelEditor::new(cc)))),
    )?;

    Ok(())
}
