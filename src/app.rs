use crate::command::{Command, commands_from_input};
use crate::config::CanvasConfig;
use crate::controller::CanvasController;
use crate::error::CanvasError;
use crate::input::{CanvasEvent, CanvasView, InputHandler};
use crate::panels::{central_panel, tools_panel};
use crate::state::EditorState;
use crate::texture_manager::TextureSlot;
use crate::widgets::ColorPicker;

/// The paint program: a tools panel on the left and the canvas filling the rest.
///
/// Only the editor settings (tool, colour, brush radius) survive a restart;
/// canvas pixels are not saved.
pub struct PaintApp {
    controller: CanvasController,
    input: InputHandler,
    canvas_texture: TextureSlot,
    picker: ColorPicker,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> Result<Self, CanvasError> {
        let saved: Option<EditorState> = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));
        let controller = match saved {
            Some(editor) => {
                log::info!("Restored editor settings: {:?}", editor);
                CanvasController::with_editor_state(config, editor)?
            }
            None => CanvasController::new(config)?,
        };
        Ok(Self::with_controller(controller))
    }

    /// Build the app around an existing controller, without a window.
    pub fn with_controller(controller: CanvasController) -> Self {
        Self {
            controller,
            input: InputHandler::new(),
            canvas_texture: TextureSlot::new("canvas", egui::TextureOptions::NEAREST),
            picker: ColorPicker::new(),
        }
    }

    pub fn controller(&self) -> &CanvasController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CanvasController {
        &mut self.controller
    }

    /// Run a command; `Quit` closes the window.
    pub fn execute(&mut self, ctx: &egui::Context, command: Command) -> bool {
        if command == Command::Quit {
            log::info!("Quit requested");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return false;
        }
        log::debug!("Command: {}", command.label());
        self.controller.execute(command)
    }

    /// Feed this frame's pointer state to the controller.
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, view: &CanvasView, hovered: bool) {
        for event in self.input.process_input(ctx, view, hovered) {
            match event {
                CanvasEvent::Pressed(point) => self.controller.pointer_pressed(point),
                CanvasEvent::Dragged(point) => self.controller.pointer_dragged(point),
                CanvasEvent::Released => self.controller.pointer_released(),
            };
        }
    }

    /// Texture holding the live canvas, re-uploaded when its revision moved.
    pub fn canvas_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        let controller = &self.controller;
        self.canvas_texture
            .get_or_update(ctx, controller.revision(), || {
                controller.live_buffer().to_color_image()
            })
    }

    pub fn show_color_picker(&mut self, ui: &mut egui::Ui, side: f32) -> bool {
        let mut color = self.controller.editor_state().color;
        if !self.picker.show(ui, &mut color, side) {
            return false;
        }
        let [h, s, v] = color.hsv();
        self.controller.set_active_color_hsv(h, s, v);
        true
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Leave keys alone while a text field has focus
        if ctx.wants_keyboard_input() {
            return;
        }
        let commands = ctx.input(commands_from_input);
        for command in commands {
            self.execute(ctx, command);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.controller.editor_state());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::GridPoint;
    use crate::state::Tool;

    fn app() -> PaintApp {
        let config = CanvasConfig {
            canvas_size: [32, 32],
            ..CanvasConfig::default()
        };
        PaintApp::with_controller(CanvasController::new(config).unwrap())
    }

    #[test]
    fn test_canvas_texture_follows_revision() {
        let ctx = egui::Context::default();
        let mut app = app();

        let first = app.canvas_texture(&ctx);
        app.canvas_texture(&ctx);
        assert_eq!(app.canvas_texture.uploads(), 1);

        app.controller_mut().paint_stroke(GridPoint::new(4, 4));
        let second = app.canvas_texture(&ctx);
        assert_eq!(first, second);
        assert_eq!(app.canvas_texture.uploads(), 2);
    }

    #[test]
    fn test_execute_routes_to_controller() {
        let ctx = egui::Context::default();
        let mut app = app();
        app.execute(&ctx, Command::SelectTool(Tool::Bucket));
        assert_eq!(app.controller().active_tool(), Tool::Bucket);
        assert!(!app.execute(&ctx, Command::Quit));
    }
}
