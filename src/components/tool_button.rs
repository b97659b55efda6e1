use eframe::egui::{self, Align2, Color32, FontId, Response, Sense, Stroke, Ui, Vec2};

use crate::state::Tool;

const SIDE: f32 = 32.0;
const ROUNDING: f32 = 4.0;
const ICON_SIZE: f32 = 20.0;

const SELECTED_FILL: Color32 = Color32::from_rgb(100, 181, 246);
const SELECTED_BORDER: Color32 = Color32::from_rgb(33, 150, 243);
const HOVER_FILL: Color32 = Color32::from_gray(40);
const IDLE_FILL: Color32 = Color32::from_gray(30);

/// Square icon toggle for one canvas tool.
pub struct ToolButton {
    tool: Tool,
    selected: bool,
}

impl ToolButton {
    pub fn new(tool: Tool, selected: bool) -> Self {
        Self { tool, selected }
    }

    fn colors(&self, hovered: bool) -> (Color32, Color32) {
        match (self.selected, hovered) {
            (true, _) => (SELECTED_FILL, Color32::BLACK),
            (false, true) => (HOVER_FILL, Color32::WHITE),
            (false, false) => (IDLE_FILL, Color32::WHITE),
        }
    }

    pub fn show(&self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(SIDE), Sense::click());

        if ui.is_rect_visible(rect) {
            let (fill, icon_color) = self.colors(response.hovered());
            let painter = ui.painter();
            painter.rect_filled(rect, ROUNDING, fill);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.tool.icon(),
                FontId::proportional(ICON_SIZE),
                icon_color,
            );
            if self.selected {
                painter.rect_stroke(rect, ROUNDING, Stroke::new(2.0, SELECTED_BORDER));
            }
        }

        response.on_hover_text(self.tool.name())
    }
}
