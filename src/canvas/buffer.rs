use crate::error::CanvasError;

/// A single RGBA pixel, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Fully transparent black, the colour of a blank canvas.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Pixel {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Pixel> for egui::Color32 {
    fn from(pixel: Pixel) -> Self {
        egui::Color32::from_rgba_unmultiplied(pixel.r, pixel.g, pixel.b, pixel.a)
    }
}

const CHANNELS: usize = 4;

/// Row-major grid of RGBA pixels with fixed dimensions.
///
/// Pixels are stored interleaved (`r, g, b, a`) with row 0 at the top, which is
/// exactly the layout egui expects when uploading a texture. Accessors take
/// signed `(row, col)` pairs so brush code can address pixels past the edges;
/// such writes are dropped.
#[derive(Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a transparent buffer.
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        Self::filled(width, height, Pixel::TRANSPARENT)
    }

    /// Allocate a buffer with every pixel set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Result<Self, CanvasError> {
        let addressable = i32::try_from(width).is_ok() && i32::try_from(height).is_ok();
        let bytes = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .filter(|&n| n > 0 && addressable)
            .ok_or(CanvasError::InvalidDimensions { width, height })?;

        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|source| CanvasError::AllocationFailed { bytes, source })?;
        for _ in 0..width * height {
            data.extend_from_slice(&pixel.to_array());
        }

        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `[width, height]`, the order egui uses for image sizes.
    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }

    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    fn offset(&self, row: i32, col: i32) -> Option<usize> {
        self.contains(row, col)
            .then(|| (row as usize * self.width + col as usize) * CHANNELS)
    }

    /// Read a pixel, or `None` outside the buffer.
    pub fn get(&self, row: i32, col: i32) -> Option<Pixel> {
        let i = self.offset(row, col)?;
        let px = &self.data[i..i + CHANNELS];
        Some(Pixel::new(px[0], px[1], px[2], px[3]))
    }

    /// Write a pixel. Out-of-bounds writes are ignored.
    ///
    /// Returns `true` if the stored value actually changed.
    pub fn set(&mut self, row: i32, col: i32, pixel: Pixel) -> bool {
        let Some(i) = self.offset(row, col) else {
            return false;
        };
        let new = pixel.to_array();
        let slot = &mut self.data[i..i + CHANNELS];
        if *slot == new {
            return false;
        }
        slot.copy_from_slice(&new);
        true
    }

    /// Set every pixel. Returns `true` if anything changed.
    pub fn fill(&mut self, pixel: Pixel) -> bool {
        let new = pixel.to_array();
        let mut changed = false;
        for chunk in self.data.chunks_exact_mut(CHANNELS) {
            if *chunk != new {
                chunk.copy_from_slice(&new);
                changed = true;
            }
        }
        changed
    }

    /// True if every pixel equals `pixel`.
    pub fn is_uniform(&self, pixel: Pixel) -> bool {
        let expected = pixel.to_array();
        self.data.chunks_exact(CHANNELS).all(|chunk| chunk == expected)
    }

    /// Number of pixels equal to `pixel`.
    pub fn count(&self, pixel: Pixel) -> usize {
        let expected = pixel.to_array();
        self.data
            .chunks_exact(CHANNELS)
            .filter(|chunk| *chunk == expected)
            .count()
    }

    /// Interleaved RGBA bytes, row-major from the top-left.
    pub fn as_rgba_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Byte-wise comparison of two buffers, including their dimensions.
    pub fn byte_eq(&self, other: &Self) -> bool {
        self == other
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(self.size(), &self.data)
    }
}

impl Clone for PixelBuffer {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
        }
    }

    // History slots are overwritten on every commit; reuse their allocation.
    fn clone_from(&mut self, source: &Self) {
        self.width = source.width;
        self.height = source.height;
        self.data.clone_from(&source.data);
    }
}
