use crate::PaintApp;
use crate::command::Command;
use crate::components::ToolButton;
use crate::state::Tool;

const PICKER_SIDE: f32 = 180.0;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(PICKER_SIDE + 16.0)
        .show(ctx, |ui| {
            ui.heading("Colour");
            app.show_color_picker(ui, PICKER_SIDE);

            ui.horizontal(|ui| {
                let mut rgb = app.controller().editor_state().color.rgb();
                if ui.color_edit_button_rgb(&mut rgb).changed() {
                    let [r, g, b] = rgb;
                    app.controller_mut().set_active_color_rgb(r, g, b);
                }
                let [h, s, v] = app.controller().editor_state().color.hsv();
                ui.label(format!("H {:.0}°  S {:.2}  V {:.2}", h, s, v));
            });

            ui.separator();
            ui.heading("Tools");

            let active_tool = app.controller().active_tool();
            ui.horizontal(|ui| {
                for tool in Tool::ALL {
                    if ToolButton::new(tool, tool == active_tool).show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", tool.name());
                        app.execute(ctx, Command::SelectTool(tool));
                    }
                }
            });

            let config = app.controller().config().clone();
            let mut radius = app.controller().brush_radius();
            let slider = egui::Slider::new(
                &mut radius,
                config.min_brush_radius()..=config.max_brush_radius(),
            )
            .text("Brush radius");
            if ui.add(slider).changed() {
                app.controller_mut().set_brush_radius(radius);
            }

            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.controller().can_undo();
                let can_redo = app.controller().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.execute(ctx, Command::Undo);
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.execute(ctx, Command::Redo);
                }
                if ui
                    .button("Clear")
                    .on_hover_text("Undoable. Ctrl+N also forgets the history.")
                    .clicked()
                {
                    app.execute(ctx, Command::Clear { reset_history: false });
                }
            });

            ui.separator();

            let history = app.controller().history();
            egui::Grid::new("history_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label("Undo steps");
                    ui.label(history.past().to_string());
                    ui.end_row();
                    ui.label("Redo steps");
                    ui.label(history.future().to_string());
                    ui.end_row();
                    ui.label("Slot");
                    ui.label(format!("{} / {}", history.index(), history.capacity()));
                    ui.end_row();
                });
        });
}
