pub mod color_picker;

pub use color_picker::ColorPicker;
