#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use raster_paint::{CanvasConfig, PaintApp};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = match CanvasConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Failed to load configuration: {err}");
            std::process::exit(2);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Raster Paint")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "raster_paint",
        native_options,
        Box::new(|cc| create_app(cc, config)),
    )
}

fn create_app(
    cc: &eframe::CreationContext<'_>,
    config: CanvasConfig,
) -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
    Ok(Box::new(PaintApp::new(cc, config)?))
}
