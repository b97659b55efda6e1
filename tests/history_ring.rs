use raster_paint::{CanvasConfig, CanvasController, GridPoint, HistoryStore, PixelBuffer};

fn controller() -> CanvasController {
    CanvasController::new(CanvasConfig {
        canvas_size: [32, 32],
        ..CanvasConfig::default()
    })
    .unwrap()
}

fn draw(canvas: &mut CanvasController, points: &[(i32, i32)]) {
    for &(row, col) in points {
        canvas.paint_stroke(GridPoint::new(row, col));
    }
    canvas.end_stroke();
}

#[test]
fn test_undo_redo_round_trip() {
    let mut canvas = controller();
    draw(&mut canvas, &[(4, 4), (4, 20)]);
    draw(&mut canvas, &[(20, 4), (28, 28)]);
    let before_undo = canvas.live_buffer().clone();

    assert!(canvas.undo());
    assert!(!canvas.live_buffer().byte_eq(&before_undo));
    assert!(canvas.redo());

    assert!(canvas.live_buffer().byte_eq(&before_undo));
}

#[test]
fn test_undo_restores_each_step() {
    let mut canvas = controller();
    let blank = canvas.live_buffer().clone();
    draw(&mut canvas, &[(10, 10)]);
    let first = canvas.live_buffer().clone();
    draw(&mut canvas, &[(20, 20)]);

    assert!(canvas.undo());
    assert!(canvas.live_buffer().byte_eq(&first));
    assert!(canvas.undo());
    assert!(canvas.live_buffer().byte_eq(&blank));
    assert!(!canvas.undo());
    assert!(canvas.live_buffer().byte_eq(&blank));
}

#[test]
fn test_commit_after_undo_discards_redo_branch() {
    let mut history = HistoryStore::new(16, &"base").unwrap();
    history.commit(&"a");
    history.commit(&"b");
    assert_eq!(history.undo(), Some(&"a"));
    history.commit(&"c");

    assert_eq!(history.redo(), None);
    assert_eq!(history.undo(), Some(&"a"));
    assert_eq!(history.redo(), Some(&"c"));
}

#[test]
fn test_commit_after_undo_discards_redo_branch_on_canvas() {
    let mut canvas = controller();
    draw(&mut canvas, &[(2, 2)]);
    draw(&mut canvas, &[(12, 12)]);
    canvas.undo();
    draw(&mut canvas, &[(25, 25)]);
    let after_branch = canvas.live_buffer().clone();

    assert!(!canvas.can_redo());
    assert!(!canvas.redo());
    assert!(canvas.live_buffer().byte_eq(&after_branch));
}

#[test]
fn test_ring_keeps_capacity_minus_one_steps() {
    let capacity = 16;
    let mut history = HistoryStore::new(capacity, &0).unwrap();
    for step in 1..=capacity {
        history.commit(&step);
    }
    assert_eq!(history.past(), capacity - 1);

    for expected in (1..capacity).rev() {
        assert_eq!(history.undo(), Some(&expected));
    }
    // The base and the first commit were overwritten
    assert_eq!(history.undo(), None);
    assert_eq!(history.past(), 0);
    assert_eq!(history.future(), capacity - 1);
}

#[test]
fn test_ring_of_buffers_on_canvas() {
    let mut canvas = controller();
    let capacity = canvas.config().history_capacity;
    for step in 0..capacity as i32 {
        draw(&mut canvas, &[(step, step)]);
    }
    for _ in 0..capacity - 1 {
        assert!(canvas.undo());
    }
    assert!(!canvas.undo());
    // Oldest retained state still has the first stroke on it
    assert!(!canvas.live_buffer().is_uniform(raster_paint::Pixel::TRANSPARENT));
}

#[test]
fn test_small_ring() {
    let blank = PixelBuffer::new(2, 2).unwrap();
    let mut history = HistoryStore::new(2, &blank).unwrap();
    let mut inked = blank.clone();
    inked.set(0, 0, raster_paint::Pixel::opaque(1, 2, 3));

    history.commit(&inked);
    assert_eq!(history.undo().map(|b| b.byte_eq(&blank)), Some(true));
    assert_eq!(history.redo().map(|b| b.byte_eq(&inked)), Some(true));
    assert!(HistoryStore::new(1, &blank).is_err());
}
