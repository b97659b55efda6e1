use serde::{Deserialize, Serialize};

use crate::canvas::Pixel;

/// Fully saturated colour at `hue` degrees, as shown on the hue wheel.
///
/// Piecewise-linear ramp through red, yellow, green, cyan, blue and magenta.
pub fn hue_color(hue: f32) -> [f32; 3] {
    let hue = hue.rem_euclid(360.0);
    let f = hue / 60.0;
    if hue < 60.0 {
        [1.0, f, 0.0]
    } else if hue < 120.0 {
        [2.0 - f, 1.0, 0.0]
    } else if hue < 180.0 {
        [0.0, 1.0, f - 2.0]
    } else if hue < 240.0 {
        [0.0, 4.0 - f, 1.0]
    } else if hue < 300.0 {
        [f - 4.0, 0.0, 1.0]
    } else {
        [1.0, 0.0, 6.0 - f]
    }
}

/// Convert HSV (hue in degrees, saturation and value in `0..=1`) to RGB.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [f32; 3] {
    let c = value * saturation;
    let m = value - c;
    hue_color(hue).map(|channel| c * channel + m)
}

/// The paint colour, kept in both RGB and HSV.
///
/// Both representations are private and only change together, so they always
/// describe the same colour. Channels are in `0..=1`; hue is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveColor {
    rgb: [f32; 3],
    hsv: [f32; 3],
}

impl Default for ActiveColor {
    fn default() -> Self {
        Self::from_hsv(0.0, 1.0, 1.0)
    }
}

impl ActiveColor {
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let mut color = Self {
            rgb: [0.0; 3],
            hsv: [0.0; 3],
        };
        color.set_hsv(hue, saturation, value);
        color
    }

    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        let mut color = Self::default();
        color.set_rgb(r, g, b);
        color
    }

    pub fn rgb(&self) -> [f32; 3] {
        self.rgb
    }

    pub fn hsv(&self) -> [f32; 3] {
        self.hsv
    }

    pub fn hue(&self) -> f32 {
        self.hsv[0]
    }

    pub fn saturation(&self) -> f32 {
        self.hsv[1]
    }

    pub fn value(&self) -> f32 {
        self.hsv[2]
    }

    /// The pure hue at full saturation and value.
    pub fn wheel_color(&self) -> [f32; 3] {
        hue_color(self.hue())
    }

    pub fn set_hsv(&mut self, hue: f32, saturation: f32, value: f32) {
        let hue = hue.rem_euclid(360.0);
        let saturation = saturation.clamp(0.0, 1.0);
        let value = value.clamp(0.0, 1.0);
        self.hsv = [hue, saturation, value];
        self.rgb = hsv_to_rgb(hue, saturation, value);
    }

    pub fn set_hue(&mut self, hue: f32) {
        self.set_hsv(hue, self.saturation(), self.value());
    }

    pub fn set_saturation_value(&mut self, saturation: f32, value: f32) {
        self.set_hsv(self.hue(), saturation, value);
    }

    /// Set from RGB. The hue is kept as-is for greys, where it is undefined.
    pub fn set_rgb(&mut self, r: f32, g: f32, b: f32) {
        let [r, g, b] = [r, g, b].map(|c| c.clamp(0.0, 1.0));
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;

        let hue = if chroma <= f32::EPSILON {
            self.hue()
        } else if max == r {
            60.0 * ((g - b) / chroma).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / chroma + 2.0)
        } else {
            60.0 * ((r - g) / chroma + 4.0)
        };
        let saturation = if max <= f32::EPSILON { 0.0 } else { chroma / max };

        self.hsv = [hue.rem_euclid(360.0), saturation, max];
        self.rgb = [r, g, b];
    }

    /// Opaque 8-bit pixel for painting.
    pub fn to_pixel(&self) -> Pixel {
        let [r, g, b] = self.rgb.map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8);
        Pixel::opaque(r, g, b)
    }

    pub fn to_color32(&self) -> egui::Color32 {
        self.to_pixel().into()
    }
}
