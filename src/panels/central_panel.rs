use crate::PaintApp;
use crate::input::CanvasView;
use crate::state::Tool;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_rect_before_wrap();
        let view = CanvasView::fit(available, app.controller().config().canvas_size);
        let (response, painter) =
            ui.allocate_painter(available.size(), egui::Sense::click_and_drag());

        // Pointer first so this frame shows the new pixels
        app.handle_canvas_input(ctx, &view, response.hovered());

        let texture_id = app.canvas_texture(ctx);
        painter.rect_filled(view.rect, 0.0, egui::Color32::WHITE);
        painter.image(
            texture_id,
            view.rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        if app.controller().active_tool() == Tool::Brush {
            if let Some(pos) = response.hover_pos().filter(|&p| view.contains(p)) {
                let center = view.grid_to_screen(view.screen_to_grid(pos));
                let radius = (app.controller().brush_radius() as f32 + 0.5) * view.scale();
                painter.circle_stroke(center, radius, egui::Stroke::new(1.0, egui::Color32::GRAY));
            }
        }
    });
}
