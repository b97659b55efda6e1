mod buffer;
mod history;

pub use buffer::{Pixel, PixelBuffer};
pub use history::HistoryStore;

/// A `(row, col)` position on the canvas grid.
///
/// Coordinates are signed: points produced by dragging past the canvas edge are
/// valid input to the rasterizers and are clipped at write time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPoint {
    pub row: i32,
    pub col: i32,
}

impl GridPoint {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}
