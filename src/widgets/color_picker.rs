use egui::{Color32, ColorImage, Pos2, Rect, Sense, Stroke, TextureOptions, Vec2};

use crate::color::{ActiveColor, hsv_to_rgb, hue_color};
use crate::texture_manager::TextureSlot;

/// Radius of the hue ring's centre line, in local units (the widget spans `-1..=1`).
pub const RING_RADIUS: f32 = 0.85;
/// Half the thickness of the hue ring.
pub const RING_HALF_WIDTH: f32 = 0.11;
/// Half the side of the saturation/value square.
pub const SQUARE_HALF_SIDE: f32 = 0.5;

const TEXTURE_SIZE: usize = 256;

/// Part of the picker under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    HueRing,
    SvSquare,
}

/// Position inside `rect` in local units: `-1..=1` on both axes, y pointing up.
pub fn local_uv(rect: Rect, pos: Pos2) -> Vec2 {
    Vec2::new(
        2.0 * (pos.x - rect.min.x) / rect.width() - 1.0,
        1.0 - 2.0 * (pos.y - rect.min.y) / rect.height(),
    )
}

/// Inverse of [`local_uv`].
pub fn uv_to_screen(rect: Rect, uv: Vec2) -> Pos2 {
    Pos2::new(
        rect.min.x + (uv.x + 1.0) * 0.5 * rect.width(),
        rect.min.y + (1.0 - uv.y) * 0.5 * rect.height(),
    )
}

pub fn hit_test(uv: Vec2) -> Option<PickerTarget> {
    if (uv.length() - RING_RADIUS).abs() < RING_HALF_WIDTH {
        Some(PickerTarget::HueRing)
    } else if uv.x.abs() <= SQUARE_HALF_SIDE && uv.y.abs() <= SQUARE_HALF_SIDE {
        Some(PickerTarget::SvSquare)
    } else {
        None
    }
}

/// Hue in degrees for a point on the ring.
pub fn hue_at(uv: Vec2) -> f32 {
    uv.y.atan2(uv.x).to_degrees().rem_euclid(360.0)
}

/// Saturation and value for a point in the square.
pub fn saturation_value_at(uv: Vec2) -> (f32, f32) {
    (
        (uv.x + SQUARE_HALF_SIDE).clamp(0.0, 1.0),
        (uv.y + SQUARE_HALF_SIDE).clamp(0.0, 1.0),
    )
}

fn to_color32([r, g, b]: [f32; 3]) -> Color32 {
    let [r, g, b] = [r, g, b].map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8);
    Color32::from_rgb(r, g, b)
}

/// Render the hue ring and the saturation/value square for `hue`.
pub fn picker_image(hue: f32, size: usize) -> ColorImage {
    let mut image = ColorImage::new([size, size], Color32::TRANSPARENT);
    let rect = Rect::from_min_size(Pos2::ZERO, Vec2::splat(size as f32));
    for y in 0..size {
        for x in 0..size {
            let uv = local_uv(rect, Pos2::new(x as f32 + 0.5, y as f32 + 0.5));
            let color = match hit_test(uv) {
                Some(PickerTarget::HueRing) => to_color32(hue_color(hue_at(uv))),
                Some(PickerTarget::SvSquare) => {
                    let (s, v) = saturation_value_at(uv);
                    to_color32(hsv_to_rgb(hue, s, v))
                }
                None => continue,
            };
            image.pixels[y * size + x] = color;
        }
    }
    image
}

/// HSV wheel-and-square colour picker.
///
/// A drag only edits the part it started on, so sweeping from the square into
/// the ring does not change the hue.
#[derive(Debug)]
pub struct ColorPicker {
    texture: TextureSlot,
    active: Option<PickerTarget>,
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorPicker {
    pub fn new() -> Self {
        Self {
            texture: TextureSlot::new("color_picker", TextureOptions::LINEAR),
            active: None,
        }
    }

    /// Show the picker with the given side length. Returns `true` if `color`
    /// was changed.
    pub fn show(&mut self, ui: &mut egui::Ui, color: &mut ActiveColor, side: f32) -> bool {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(side), Sense::click_and_drag());
        let mut changed = false;

        if response.is_pointer_button_down_on() {
            if let Some(pos) = response.interact_pointer_pos() {
                let uv = local_uv(rect, pos);
                let hit = hit_test(uv);
                if self.active.is_none() {
                    self.active = hit;
                }
                if hit.is_some() && hit == self.active {
                    changed = apply_pick(color, hit, uv);
                }
            }
        } else {
            self.active = None;
        }

        if ui.is_rect_visible(rect) {
            let hue = color.hue();
            // Regenerate only when the hue moves by a tenth of a degree
            let key = (hue * 10.0).round() as u64;
            let texture_id = self
                .texture
                .get_or_update(ui.ctx(), key, || picker_image(hue, TEXTURE_SIZE));

            let painter = ui.painter_at(rect);
            painter.image(
                texture_id,
                rect,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
            self.paint_markers(&painter, rect, color);
        }

        changed
    }

    fn paint_markers(&self, painter: &egui::Painter, rect: Rect, color: &ActiveColor) {
        let marker = rect.width() * 0.03;
        let outline = Stroke::new(2.0, Color32::WHITE);
        let shadow = Stroke::new(1.0, Color32::BLACK);

        let angle = color.hue().to_radians();
        let on_ring = uv_to_screen(rect, Vec2::angled(angle) * RING_RADIUS);
        painter.circle_filled(on_ring, marker, to_color32(color.wheel_color()));
        painter.circle_stroke(on_ring, marker + 1.0, shadow);
        painter.circle_stroke(on_ring, marker, outline);

        let sv = Vec2::new(
            color.saturation() - SQUARE_HALF_SIDE,
            color.value() - SQUARE_HALF_SIDE,
        );
        let in_square = uv_to_screen(rect, sv);
        painter.circle_filled(in_square, marker, color.to_color32());
        painter.circle_stroke(in_square, marker + 1.0, shadow);
        painter.circle_stroke(in_square, marker, outline);
    }
}

fn apply_pick(color: &mut ActiveColor, target: Option<PickerTarget>, uv: Vec2) -> bool {
    let before = *color;
    match target {
        Some(PickerTarget::HueRing) => color.set_hue(hue_at(uv)),
        Some(PickerTarget::SvSquare) => {
            let (s, v) = saturation_value_at(uv);
            color.set_saturation_value(s, v);
        }
        None => {}
    }
    *color != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_regions() {
        assert_eq!(hit_test(Vec2::new(0.85, 0.0)), Some(PickerTarget::HueRing));
        assert_eq!(hit_test(Vec2::new(0.0, -0.9)), Some(PickerTarget::HueRing));
        assert_eq!(hit_test(Vec2::new(0.2, -0.3)), Some(PickerTarget::SvSquare));
        assert_eq!(hit_test(Vec2::new(0.5, 0.5)), Some(PickerTarget::SvSquare));
        assert_eq!(hit_test(Vec2::ZERO), Some(PickerTarget::SvSquare));
        // Gap between square corner and ring, and outside the ring
        assert_eq!(hit_test(Vec2::new(0.6, 0.0)), None);
        assert_eq!(hit_test(Vec2::new(0.99, 0.0)), None);
    }

    #[test]
    fn test_hue_follows_angle_counter_clockwise() {
        assert!((hue_at(Vec2::new(1.0, 0.0)) - 0.0).abs() < 1e-4);
        assert!((hue_at(Vec2::new(0.0, 1.0)) - 90.0).abs() < 1e-4);
        assert!((hue_at(Vec2::new(-1.0, 0.0)) - 180.0).abs() < 1e-4);
        assert!((hue_at(Vec2::new(0.0, -1.0)) - 270.0).abs() < 1e-4);
    }

    #[test]
    fn test_square_maps_to_saturation_value() {
        assert_eq!(saturation_value_at(Vec2::new(-0.5, -0.5)), (0.0, 0.0));
        assert_eq!(saturation_value_at(Vec2::new(0.5, 0.5)), (1.0, 1.0));
        assert_eq!(saturation_value_at(Vec2::new(0.0, 0.25)), (0.5, 0.75));
    }

    #[test]
    fn test_uv_screen_round_trip() {
        let rect = Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::splat(200.0));
        assert_eq!(local_uv(rect, rect.center()), Vec2::ZERO);
        assert_eq!(local_uv(rect, rect.left_top()), Vec2::new(-1.0, 1.0));
        let pos = Pos2::new(150.0, 120.0);
        let back = uv_to_screen(rect, local_uv(rect, pos));
        assert!((back - pos).length() < 1e-3);
    }

    #[test]
    fn test_image_has_ring_and_square() {
        let image = picker_image(0.0, 64);
        assert_eq!(image.size, [64, 64]);
        // Corner is outside both regions
        assert_eq!(image.pixels[0], Color32::TRANSPARENT);
        // Top-right of the square is close to full saturation and value: red
        let near_top_right = image.pixels[16 * 64 + 47];
        assert!(near_top_right.r() > 240);
        assert!(near_top_right.g() < 10 && near_top_right.b() < 10);
        // Rightmost ring cell sits at hue ~0: red as well
        let ring = image.pixels[32 * 64 + 60];
        assert_eq!(ring.r(), 255);
        assert!(ring.g() < 10 && ring.b() < 10);
        assert_eq!(ring.a(), 255);
    }

    #[test]
    fn test_apply_pick_updates_color() {
        let mut color = ActiveColor::default();
        assert!(apply_pick(&mut color, Some(PickerTarget::HueRing), Vec2::new(0.0, 0.85)));
        assert!((color.hue() - 90.0).abs() < 1e-3);
        assert!(apply_pick(&mut color, Some(PickerTarget::SvSquare), Vec2::new(0.0, 0.0)));
        assert!((color.saturation() - 0.5).abs() < 1e-6);
        assert!((color.value() - 0.5).abs() < 1e-6);
        assert!(!apply_pick(&mut color, None, Vec2::ZERO));
    }
}
