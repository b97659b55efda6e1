use egui::{Context, Pos2, Rect, Vec2};

use crate::canvas::GridPoint;

/// Where the canvas is drawn on screen and how big it is in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasView {
    /// Screen rectangle the canvas texture is drawn into
    pub rect: Rect,
    /// Canvas dimensions as `[width, height]`
    pub size: [usize; 2],
}

impl CanvasView {
    /// Fit a canvas of `size` into `available`, anchored top-left, keeping the
    /// pixel aspect ratio square.
    pub fn fit(available: Rect, size: [usize; 2]) -> Self {
        let [width, height] = size.map(|n| n.max(1) as f32);
        let scale = (available.width() / width)
            .min(available.height() / height)
            .max(0.0);
        let rect = Rect::from_min_size(available.min, Vec2::new(width * scale, height * scale));
        Self { rect, size }
    }

    /// Screen pixels per canvas pixel.
    pub fn scale(&self) -> f32 {
        self.rect.width() / self.size[0].max(1) as f32
    }

    /// Canvas cell under a screen position. Positions outside the canvas map
    /// to cells outside the grid, which the rasterizers clip.
    pub fn screen_to_grid(&self, pos: Pos2) -> GridPoint {
        let [width, height] = self.size;
        let local = pos - self.rect.min;
        let col = (local.x / self.rect.width().max(f32::EPSILON) * width as f32).floor();
        let row = (local.y / self.rect.height().max(f32::EPSILON) * height as f32).floor();
        GridPoint::new(row as i32, col as i32)
    }

    /// Screen position of the centre of a canvas cell.
    pub fn grid_to_screen(&self, point: GridPoint) -> Pos2 {
        let scale = self.scale();
        self.rect.min
            + Vec2::new(
                (point.col as f32 + 0.5) * scale,
                (point.row as f32 + 0.5) * scale,
            )
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.rect.contains(pos)
    }
}

/// Pointer interaction with the canvas, already mapped to grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEvent {
    /// Primary button went down over the canvas
    Pressed(GridPoint),
    /// Pointer moved to a new cell while the button is held
    Dragged(GridPoint),
    /// Button released, wherever the pointer is
    Released,
}

/// The primary-button state for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
}

impl PointerSample {
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            pos: input.pointer.interact_pos(),
            pressed: input.pointer.primary_pressed(),
            down: input.pointer.primary_down(),
            released: input.pointer.primary_released(),
        })
    }
}

/// Turns raw pointer state into [`CanvasEvent`]s.
///
/// An interaction only starts with a press over the canvas, but once started it
/// keeps following the pointer outside the canvas until the button is released.
#[derive(Debug, Default)]
pub struct InputHandler {
    dragging: bool,
    last_cell: Option<GridPoint>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Read this frame's pointer state from egui.
    ///
    /// `canvas_hovered` should be false when another widget or window covers
    /// the canvas, so presses there do not paint.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        view: &CanvasView,
        canvas_hovered: bool,
    ) -> Vec<CanvasEvent> {
        self.process_pointer(PointerSample::from_egui(ctx), view, canvas_hovered)
    }

    pub fn process_pointer(
        &mut self,
        sample: PointerSample,
        view: &CanvasView,
        canvas_hovered: bool,
    ) -> Vec<CanvasEvent> {
        let mut events = Vec::new();

        if !self.dragging && sample.pressed {
            if let Some(pos) = sample.pos.filter(|&p| canvas_hovered && view.contains(p)) {
                let cell = view.screen_to_grid(pos);
                self.dragging = true;
                self.last_cell = Some(cell);
                events.push(CanvasEvent::Pressed(cell));
            }
        } else if self.dragging && sample.down {
            if let Some(pos) = sample.pos {
                let cell = view.screen_to_grid(pos);
                if self.last_cell != Some(cell) {
                    self.last_cell = Some(cell);
                    events.push(CanvasEvent::Dragged(cell));
                }
            }
        }

        if self.dragging && (sample.released || !sample.down) {
            self.dragging = false;
            self.last_cell = None;
            events.push(CanvasEvent::Released);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> CanvasView {
        // 100 canvas pixels shown at 2x, offset by (10, 20)
        CanvasView {
            rect: Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::splat(200.0)),
            size: [100, 100],
        }
    }

    fn sample(x: f32, y: f32, pressed: bool, down: bool, released: bool) -> PointerSample {
        PointerSample {
            pos: Some(Pos2::new(x, y)),
            pressed,
            down,
            released,
        }
    }

    #[test]
    fn test_fit_keeps_square_pixels() {
        let available = Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 300.0));
        let view = CanvasView::fit(available, [512, 512]);
        assert!((view.rect.width() - 300.0).abs() < 1e-3);
        assert!((view.rect.height() - 300.0).abs() < 1e-3);
        assert_eq!(view.rect.min, Pos2::ZERO);
    }

    #[test]
    fn test_screen_to_grid() {
        let view = view();
        assert_eq!(view.screen_to_grid(Pos2::new(10.0, 20.0)), GridPoint::new(0, 0));
        assert_eq!(view.screen_to_grid(Pos2::new(15.0, 21.9)), GridPoint::new(0, 2));
        assert_eq!(view.screen_to_grid(Pos2::new(209.0, 219.0)), GridPoint::new(99, 99));
        // Left of and above the canvas
        assert_eq!(view.screen_to_grid(Pos2::new(8.0, 17.0)), GridPoint::new(-2, -1));
    }

    #[test]
    fn test_grid_to_screen_round_trips() {
        let view = view();
        let point = GridPoint::new(42, 7);
        assert_eq!(view.screen_to_grid(view.grid_to_screen(point)), point);
    }

    #[test]
    fn test_press_drag_release() {
        let view = view();
        let mut input = InputHandler::new();

        let events = input.process_pointer(sample(30.0, 40.0, true, true, false), &view, true);
        assert_eq!(events, vec![CanvasEvent::Pressed(GridPoint::new(10, 10))]);

        // Same cell: no event
        let events = input.process_pointer(sample(31.0, 41.0, false, true, false), &view, true);
        assert!(events.is_empty());

        // Dragging outside the canvas keeps the interaction alive
        let events = input.process_pointer(sample(0.0, 40.0, false, true, false), &view, false);
        assert_eq!(events, vec![CanvasEvent::Dragged(GridPoint::new(10, -5))]);

        let events = input.process_pointer(sample(0.0, 40.0, false, false, true), &view, false);
        assert_eq!(events, vec![CanvasEvent::Released]);
        assert!(!input.is_dragging());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let view = view();
        let mut input = InputHandler::new();
        assert!(input
            .process_pointer(sample(5.0, 5.0, true, true, false), &view, true)
            .is_empty());
        // Covered by another window
        assert!(input
            .process_pointer(sample(30.0, 40.0, true, true, false), &view, false)
            .is_empty());
        assert!(!input.is_dragging());
    }

    #[test]
    fn test_click_in_one_frame() {
        let view = view();
        let mut input = InputHandler::new();
        let events = input.process_pointer(sample(30.0, 40.0, true, false, true), &view, true);
        assert_eq!(
            events,
            vec![
                CanvasEvent::Pressed(GridPoint::new(10, 10)),
                CanvasEvent::Released
            ]
        );
    }
}
