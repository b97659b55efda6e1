//! Fixed-capacity undo/redo ring of full canvas snapshots.
//!
//! The ring always holds the state currently shown on screen in the slot just
//! behind the write cursor. Committing writes the new state at the cursor and
//! moves it forward; undo and redo only move the cursor over slots that were
//! already written. Once all slots are in use the oldest snapshot is silently
//! overwritten, so at most `capacity - 1` steps can be undone.

use crate::error::CanvasError;

/// Ring buffer of snapshots with `past`/`future` step counters.
#[derive(Debug, Clone)]
pub struct HistoryStore<T> {
    slots: Vec<T>,
    /// Next slot to write
    index: usize,
    /// Commits that can still be undone
    past: usize,
    /// Undone steps that can still be redone
    future: usize,
}

impl<T: Clone> HistoryStore<T> {
    /// Build a ring of `capacity` slots with `initial` as the current state.
    ///
    /// Every slot is allocated up front so a running session never allocates
    /// snapshot storage.
    pub fn new(capacity: usize, initial: &T) -> Result<Self, CanvasError> {
        if capacity < 2 {
            return Err(CanvasError::InvalidHistoryCapacity(capacity));
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize(capacity, initial.clone());
        Ok(Self {
            slots,
            index: 1,
            past: 0,
            future: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn past(&self) -> usize {
        self.past
    }

    pub fn future(&self) -> usize {
        self.future
    }

    pub fn can_undo(&self) -> bool {
        self.past > 0
    }

    pub fn can_redo(&self) -> bool {
        self.future > 0
    }

    fn wrap_back(&self, steps: usize) -> usize {
        let capacity = self.capacity();
        (self.index + capacity - steps % capacity) % capacity
    }

    fn wrap_forward(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    /// Record `state` as the newest step. Discards anything that could have
    /// been redone.
    pub fn commit(&mut self, state: &T) {
        let slot = self.index;
        self.slots[slot].clone_from(state);
        self.index = self.wrap_forward(slot);
        self.past = (self.past + 1).min(self.capacity() - 1);
        self.future = 0;
        log::debug!(
            "History commit to slot {:2}. Past: {:2}  Future: {:2}  Index: {:2}",
            slot,
            self.past,
            self.future,
            self.index
        );
    }

    /// Step back one commit and return the state to restore, or `None` when
    /// there is nothing left to undo.
    pub fn undo(&mut self) -> Option<&T> {
        if self.past == 0 {
            log::debug!("Nothing to undo");
            return None;
        }
        self.past -= 1;
        self.future += 1;
        let read = self.wrap_back(2);
        self.index = self.wrap_forward(read);
        log::info!(
            "Undo. Past: {:2}  Future: {:2}  Index: {:2}",
            self.past,
            self.future,
            self.index
        );
        Some(&self.slots[read])
    }

    /// Step forward over an undone commit and return the state to restore, or
    /// `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<&T> {
        if self.future == 0 {
            log::debug!("Nothing to redo");
            return None;
        }
        self.future -= 1;
        self.past += 1;
        let read = self.index;
        self.index = self.wrap_forward(read);
        log::info!(
            "Redo. Past: {:2}  Future: {:2}  Index: {:2}",
            self.past,
            self.future,
            self.index
        );
        Some(&self.slots[read])
    }

    /// Forget all undo and redo steps and make `state` the new base.
    ///
    /// The base gets a fresh slot instead of overwriting the last undoable
    /// snapshot in place.
    pub fn reset(&mut self, state: &T) {
        let slot = self.index;
        self.slots[slot].clone_from(state);
        self.index = self.wrap_forward(slot);
        self.past = 0;
        self.future = 0;
        log::info!("History reset, base stored in slot {:2}", slot);
    }

    /// The snapshot of the state currently shown.
    pub fn current(&self) -> &T {
        &self.slots[self.wrap_back(1)]
    }
}
