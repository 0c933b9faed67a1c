mod app;
mod io;
mod model;
mod preview;
mod textures;

use app::CellAnalyzerApp;
use cell_analyzer_common::layout::{WINDOW_SIZE, WINDOW_TITLE};
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Box::new(CellAnalyzerApp::with_default_data())),
    )
}
