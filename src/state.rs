use serde::{Deserialize, Serialize};

use crate::color::ActiveColor;

/// Tools that act on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Brush,
    Bucket,
}

impl Tool {
    pub const ALL: [Tool; 2] = [Tool::Brush, Tool::Bucket];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Bucket => "Bucket",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tool::Brush => "🖌",
            Tool::Bucket => "🎨",
        }
    }
}

/// User-facing editor settings: which tool, which colour, how big a brush.
///
/// Owned by the canvas controller and persisted between runs through eframe's
/// storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorState {
    pub tool: Tool,
    pub color: ActiveColor,
    pub brush_radius: i32,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            tool: Tool::Brush,
            color: ActiveColor::default(),
            brush_radius: 5,
        }
    }
}
