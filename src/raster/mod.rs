mod brush;
mod fill;

pub use brush::{BrushRasterizer, circle_outline};
pub use fill::flood_fill;
