//! Canvas editing engine.
//!
//! [`CanvasController`] owns the live pixel buffer and its history ring and
//! turns pointer samples and editor commands into pixel edits. Every mutating
//! call reports whether the live buffer changed, which is what the UI uses to
//! decide when the canvas texture has to be uploaded again.
//!
//! # Stroke lifecycle
//!
//! ```text
//!   paint_stroke(p0)  stamp at p0, nothing to join to
//!   paint_stroke(p1)  stamp at p1, join p0 -> p1
//!   ...
//!   end_stroke()      commit to history if any pixel changed
//! ```
//!
//! A bucket fill is a single shot: [`CanvasController::fill_at`] recolours the
//! region and commits right away.

use crate::canvas::{GridPoint, HistoryStore, Pixel, PixelBuffer};
use crate::command::Command;
use crate::config::CanvasConfig;
use crate::error::CanvasError;
use crate::raster::{BrushRasterizer, flood_fill};
use crate::state::{EditorState, Tool};
use crate::stroke::StrokeState;

/// Owns the live canvas and its undo/redo history.
#[derive(Debug)]
pub struct CanvasController {
    config: CanvasConfig,
    editor: EditorState,
    live: PixelBuffer,
    history: HistoryStore<PixelBuffer>,
    brush: BrushRasterizer,
    stroke: StrokeState,
    /// Pixels changed by the stroke in progress
    stroke_dirty: bool,
    /// Bumped on every change to `live`
    revision: u64,
}

impl CanvasController {
    /// Allocate a blank canvas and its history ring.
    pub fn new(config: CanvasConfig) -> Result<Self, CanvasError> {
        let editor = EditorState {
            brush_radius: config.default_brush_radius,
            ..EditorState::default()
        };
        Self::with_editor_state(config, editor)
    }

    /// Like [`CanvasController::new`], restoring previously saved editor settings.
    pub fn with_editor_state(
        config: CanvasConfig,
        mut editor: EditorState,
    ) -> Result<Self, CanvasError> {
        let live = PixelBuffer::new(config.width(), config.height())?;
        let history = HistoryStore::new(config.history_capacity, &live)?;

        editor.brush_radius = config.clamp_brush_radius(editor.brush_radius);
        let brush = BrushRasterizer::new(editor.brush_radius);

        log::info!(
            "Canvas {}x{} with {} history slots",
            config.width(),
            config.height(),
            config.history_capacity
        );

        Ok(Self {
            config,
            editor,
            live,
            history,
            brush,
            stroke: StrokeState::new(),
            stroke_dirty: false,
            revision: 0,
        })
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn editor_state(&self) -> &EditorState {
        &self.editor
    }

    /// Read-only view of the live buffer, for texture upload.
    pub fn live_buffer(&self) -> &PixelBuffer {
        &self.live
    }

    pub fn history(&self) -> &HistoryStore<PixelBuffer> {
        &self.history
    }

    pub fn stroke(&self) -> &StrokeState {
        &self.stroke
    }

    /// Changes whenever the live buffer changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn active_tool(&self) -> Tool {
        self.editor.tool
    }

    pub fn brush_radius(&self) -> i32 {
        self.editor.brush_radius
    }

    pub fn active_pixel(&self) -> Pixel {
        self.editor.color.to_pixel()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn mark_changed(&mut self, changed: bool) -> bool {
        if changed {
            self.revision = self.revision.wrapping_add(1);
        }
        changed
    }

    /// Start or continue an interaction at `point` with the active tool.
    ///
    /// The brush paints a stroke sample; the bucket fills once and commits.
    pub fn pointer_pressed(&mut self, point: GridPoint) -> bool {
        match self.editor.tool {
            Tool::Brush => self.paint_stroke(point),
            Tool::Bucket => self.fill_at(point),
        }
    }

    /// Pointer moved while held down. Only the brush reacts to dragging.
    pub fn pointer_dragged(&mut self, point: GridPoint) -> bool {
        match self.editor.tool {
            Tool::Brush => self.paint_stroke(point),
            Tool::Bucket => false,
        }
    }

    pub fn pointer_released(&mut self) -> bool {
        self.end_stroke()
    }

    /// Add a sample to the current stroke: stamp a disk at `point` and join
    /// it to the previous sample.
    pub fn paint_stroke(&mut self, point: GridPoint) -> bool {
        self.stroke.push(point);
        let pixel = self.active_pixel();

        let mut changed = self.brush.stamp_circle(&mut self.live, point, pixel);
        changed += self
            .brush
            .connect_points(&mut self.live, self.stroke.previous(), point, pixel);

        self.stroke_dirty |= changed > 0;
        self.mark_changed(changed > 0)
    }

    /// Finish the current stroke, committing it if it changed anything.
    ///
    /// The live buffer is never modified here, so this always returns `false`.
    pub fn end_stroke(&mut self) -> bool {
        self.stroke.release();
        if std::mem::take(&mut self.stroke_dirty) {
            self.history.commit(&self.live);
            log::debug!("Stroke committed, {} undo steps", self.history.past());
        }
        false
    }

    /// Bucket-fill the region under `point` with the active colour and commit.
    pub fn fill_at(&mut self, point: GridPoint) -> bool {
        self.finish_pending_stroke();
        self.stroke.push(point);
        let pixel = self.active_pixel();
        let filled = flood_fill(&mut self.live, point, pixel);
        if filled > 0 {
            self.history.commit(&self.live);
        }
        self.mark_changed(filled > 0)
    }

    /// Restore the state before the last commit.
    pub fn undo(&mut self) -> bool {
        self.finish_pending_stroke();
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.live.clone_from(snapshot);
        self.mark_changed(true)
    }

    /// Re-apply the last undone commit.
    pub fn redo(&mut self) -> bool {
        self.finish_pending_stroke();
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.live.clone_from(snapshot);
        self.mark_changed(true)
    }

    /// Blank the canvas.
    ///
    /// With `reset_history` all undo and redo steps are dropped and the blank
    /// canvas becomes the new base. Without it the clear is recorded as a
    /// normal, undoable edit.
    pub fn clear(&mut self, reset_history: bool) -> bool {
        self.finish_pending_stroke();
        let changed = self.live.fill(Pixel::TRANSPARENT);
        if reset_history {
            self.history.reset(&self.live);
            self.stroke.clear();
            log::info!("Canvas cleared, history reset");
        } else if changed {
            self.history.commit(&self.live);
            log::info!("Canvas cleared");
        }
        self.mark_changed(changed)
    }

    /// Set the brush radius, clamped to the configured range.
    pub fn set_brush_radius(&mut self, radius: i32) -> bool {
        let radius = self.config.clamp_brush_radius(radius);
        if radius != self.editor.brush_radius {
            log::debug!("Brush radius {} -> {}", self.editor.brush_radius, radius);
        }
        self.editor.brush_radius = radius;
        self.brush.set_radius(radius);
        false
    }

    pub fn set_active_color_rgb(&mut self, r: f32, g: f32, b: f32) -> bool {
        self.editor.color.set_rgb(r, g, b);
        false
    }

    pub fn set_active_color_hsv(&mut self, hue: f32, saturation: f32, value: f32) -> bool {
        self.editor.color.set_hsv(hue, saturation, value);
        false
    }

    pub fn set_tool(&mut self, tool: Tool) -> bool {
        if tool != self.editor.tool {
            self.finish_pending_stroke();
            log::info!("Tool changed: {} -> {}", self.editor.tool.name(), tool.name());
            self.editor.tool = tool;
        }
        false
    }

    /// Run a toolbar or keyboard command. `Quit` is left to the caller.
    pub fn execute(&mut self, command: Command) -> bool {
        match command {
            Command::SelectTool(tool) => self.set_tool(tool),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::Clear { reset_history } => self.clear(reset_history),
            Command::GrowBrush => self.set_brush_radius(self.editor.brush_radius + 1),
            Command::ShrinkBrush => self.set_brush_radius(self.editor.brush_radius - 1),
            Command::Quit => false,
        }
    }

    // A stroke interrupted by another action is committed before that action runs.
    fn finish_pending_stroke(&mut self) {
        if self.stroke.is_active() || self.stroke_dirty {
            self.end_stroke();
        }
    }
}
