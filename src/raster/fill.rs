use crate::canvas::{GridPoint, Pixel, PixelBuffer};

/// Recolour the 4-connected region of pixels sharing the seed's colour.
///
/// The colour to match is read from `seed` when the fill starts. Traversal uses
/// an explicit work list, so region size is limited by memory rather than call
/// stack depth. Each pixel is recoloured as it is queued, so it is visited once.
///
/// Returns the number of pixels recoloured: zero if the seed is outside the
/// buffer or already has `color`.
pub fn flood_fill(buffer: &mut PixelBuffer, seed: GridPoint, color: Pixel) -> usize {
    let Some(target) = buffer.get(seed.row, seed.col) else {
        return 0;
    };
    if target == color {
        return 0;
    }

    let mut pending = vec![seed];
    buffer.set(seed.row, seed.col, color);
    let mut filled = 1;

    while let Some(GridPoint { row, col }) = pending.pop() {
        for (r, c) in [(row, col - 1), (row, col + 1), (row - 1, col), (row + 1, col)] {
            if buffer.get(r, c) == Some(target) {
                buffer.set(r, c, color);
                pending.push(GridPoint::new(r, c));
                filled += 1;
            }
        }
    }

    log::debug!(
        "Flood fill at ({}, {}) recoloured {} pixels",
        seed.row,
        seed.col,
        filled
    );
    filled
}
