use crate::canvas::{GridPoint, Pixel, PixelBuffer};

/// Rasterizes round brush stamps and the thick lines joining them.
///
/// The circle outline for the current radius is kept in a scratch buffer and
/// only recomputed when the radius changes.
#[derive(Debug, Clone)]
pub struct BrushRasterizer {
    radius: i32,
    /// First-quadrant outline offsets `(dx, dy)` for `radius`
    outline: Vec<(i32, i32)>,
}

impl BrushRasterizer {
    pub fn new(radius: i32) -> Self {
        let radius = radius.max(0);
        let mut outline = Vec::new();
        circle_outline(radius, &mut outline);
        Self { radius, outline }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: i32) {
        let radius = radius.max(0);
        if radius != self.radius {
            self.radius = radius;
            circle_outline(radius, &mut self.outline);
        }
    }

    /// First-quadrant outline of the current brush, as `(dx, dy)` offsets.
    pub fn outline(&self) -> &[(i32, i32)] {
        &self.outline
    }

    /// Paint a filled disk of the brush radius around `center`.
    ///
    /// Returns the number of pixels whose colour changed.
    pub fn stamp_circle(&self, buffer: &mut PixelBuffer, center: GridPoint, pixel: Pixel) -> usize {
        let mut changed = 0;
        for &(dx, dy) in &self.outline {
            for row in (center.row - dy)..=(center.row + dy) {
                changed += usize::from(buffer.set(row, center.col + dx, pixel));
                changed += usize::from(buffer.set(row, center.col - dx, pixel));
            }
        }
        changed
    }

    /// Fill the gap between two consecutive pointer samples with a line as
    /// thick as the brush.
    ///
    /// A `None` start means there is no previous sample to join from. The end
    /// point itself is not painted; it is covered by the stamp placed there.
    pub fn connect_points(
        &self,
        buffer: &mut PixelBuffer,
        start: Option<GridPoint>,
        end: GridPoint,
        pixel: Pixel,
    ) -> usize {
        let Some(start) = start else {
            return 0;
        };
        let r = self.radius;
        let height = buffer_height(buffer);
        let width = buffer_width(buffer);

        let mut changed = 0;
        let mut paint = |row: i32, col: i32| changed += usize::from(buffer.set(row, col, pixel));

        if start.col == end.col {
            let dir = if end.row > start.row { 1 } else { -1 };
            let from = start.row.clamp(-1, height);
            let to = end.row.clamp(-1, height);
            let mut row = from;
            while row != to {
                for w in -r..=r {
                    paint(row, start.col + w);
                }
                row += dir;
            }
            return changed;
        }

        if start.row == end.row {
            let dir = if end.col > start.col { 1 } else { -1 };
            let from = start.col.clamp(-1, width);
            let to = end.col.clamp(-1, width);
            let mut col = from;
            while col != to {
                for h in -r..=r {
                    paint(start.row + h, col);
                }
                col += dir;
            }
            return changed;
        }

        let d_row = (end.row - start.row).abs();
        let d_col = (end.col - start.col).abs();
        let dir_row = if end.row > start.row { 1 } else { -1 };
        let dir_col = if end.col > start.col { 1 } else { -1 };

        if d_row < d_col {
            // Columns dominate: one span of rows per column
            let mut pk = 2 * d_row - d_col;
            let mut row = start.row;
            let mut col = start.col;
            while col != end.col {
                let step = i32::from(pk >= 0);
                row += step * dir_row;
                pk += 2 * d_row - 2 * d_col * step;
                for h in -r..=r {
                    paint(row + h, col);
                }
                col += dir_col;
            }
        } else {
            let mut pk = 2 * d_col - d_row;
            let mut col = start.col;
            let mut row = start.row;
            while row != end.row {
                let step = i32::from(pk >= 0);
                col += step * dir_col;
                pk += 2 * d_col - 2 * d_row * step;
                for w in -r..=r {
                    paint(row, col + w);
                }
                row += dir_row;
            }
        }
        changed
    }
}

// Dimensions are validated to fit in i32 when the buffer is allocated.
fn buffer_height(buffer: &PixelBuffer) -> i32 {
    i32::try_from(buffer.height()).unwrap_or(i32::MAX)
}

fn buffer_width(buffer: &PixelBuffer) -> i32 {
    i32::try_from(buffer.width()).unwrap_or(i32::MAX)
}

/// Compute the first-quadrant outline of a circle with the midpoint algorithm.
///
/// The octant from `(0, r)` towards the diagonal is stepped with integer
/// arithmetic, then mirrored across the diagonal. Every x offset in `0..=r`
/// appears at least once, so painting the vertical span `-dy..=dy` at `±dx` for
/// each entry yields a filled disk.
pub fn circle_outline(radius: i32, out: &mut Vec<(i32, i32)>) {
    out.clear();
    let radius = radius.max(0);

    let mut pk = 1 - radius;
    let (mut x, mut y) = (0, radius);
    out.push((x, y));
    while x < y {
        x += 1;
        if pk < 0 {
            pk += 2 * x + 1;
        } else {
            y -= 1;
            pk += 2 * x + 1 - 2 * y;
        }
        out.push((x, y));
    }

    // The stepping ends either on the diagonal or one diagonal step past it.
    // In the second case the last two points already mirror each other.
    let octant_len = out.len();
    let shared = if x == y { 1 } else { 2 };
    for i in (0..octant_len.saturating_sub(shared)).rev() {
        let (px, py) = out[i];
        out.push((py, px));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_radius_zero_is_single_point() {
        let mut outline = Vec::new();
        circle_outline(0, &mut outline);
        assert_eq!(outline, vec![(0, 0)]);
    }

    #[test]
    fn test_outline_radius_five() {
        let mut outline = Vec::new();
        circle_outline(5, &mut outline);
        assert_eq!(
            outline,
            vec![(0, 5), (1, 5), (2, 5), (3, 4), (4, 3), (5, 2), (5, 1), (5, 0)]
        );
    }

    #[test]
    fn test_outline_is_mirror_symmetric() {
        let mut outline = Vec::new();
        for radius in 0..=23 {
            circle_outline(radius, &mut outline);
            for &(x, y) in &outline {
                assert!(
                    outline.contains(&(y, x)),
                    "radius {radius}: ({x}, {y}) has no mirror"
                );
            }
            let max_dx = outline.iter().map(|p| p.0).max();
            assert_eq!(max_dx, Some(radius));
        }
    }

    #[test]
    fn test_set_radius_recomputes_outline() {
        let mut brush = BrushRasterizer::new(1);
        assert_eq!(brush.outline(), &[(0, 1), (1, 0)]);
        brush.set_radius(-3);
        assert_eq!(brush.radius(), 0);
        assert_eq!(brush.outline(), &[(0, 0)]);
    }
}
