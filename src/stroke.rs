use crate::canvas::GridPoint;

/// The three most recent pointer samples of a stroke.
///
/// `None` marks "no sample": the start of a stroke or the state right after the
/// pointer was released. Sparse move events are bridged by joining each new
/// sample to the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrokeState {
    samples: [Option<GridPoint>; 3],
}

impl StrokeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift the history back by one and record `point` as the current sample.
    pub fn push(&mut self, point: GridPoint) {
        self.samples = [Some(point), self.samples[0], self.samples[1]];
    }

    pub fn current(&self) -> Option<GridPoint> {
        self.samples[0]
    }

    pub fn previous(&self) -> Option<GridPoint> {
        self.samples[1]
    }

    pub fn before_previous(&self) -> Option<GridPoint> {
        self.samples[2]
    }

    /// End the stroke. The next sample will have nothing to join to.
    pub fn release(&mut self) {
        self.samples[0] = None;
    }

    /// Forget all samples.
    pub fn clear(&mut self) {
        self.samples = [None; 3];
    }

    pub fn is_active(&self) -> bool {
        self.samples[0].is_some()
    }
}
