#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod command;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod panels;
pub mod raster;
pub mod state;
pub mod stroke;
pub mod texture_manager;
pub mod widgets;

pub use app::PaintApp;
pub use canvas::{GridPoint, HistoryStore, Pixel, PixelBuffer};
pub use color::ActiveColor;
pub use command::Command;
pub use config::CanvasConfig;
pub use controller::CanvasController;
pub use error::{CanvasError, ConfigError};
pub use raster::{BrushRasterizer, flood_fill};
pub use state::{EditorState, Tool};
pub use stroke::StrokeState;
