use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "RASTER_PAINT_CONFIG";

/// Construction-time settings for the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // missing keys fall back to the defaults below
pub struct CanvasConfig {
    /// Pixel dimensions as `[width, height]`
    pub canvas_size: [usize; 2],
    /// Number of slots in the history ring
    pub history_capacity: usize,
    /// Inclusive `[min, max]` brush radius
    pub brush_radius_range: [i32; 2],
    pub default_brush_radius: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            canvas_size: [512, 512],
            history_capacity: 16,
            brush_radius_range: [0, 23],
            default_brush_radius: 5,
        }
    }
}

impl CanvasConfig {
    pub fn width(&self) -> usize {
        self.canvas_size[0]
    }

    pub fn height(&self) -> usize {
        self.canvas_size[1]
    }

    pub fn min_brush_radius(&self) -> i32 {
        self.brush_radius_range[0]
    }

    pub fn max_brush_radius(&self) -> i32 {
        self.brush_radius_range[1]
    }

    /// Clamp a radius into the configured range.
    pub fn clamp_brush_radius(&self, radius: i32) -> i32 {
        radius.clamp(self.min_brush_radius(), self.max_brush_radius())
    }

    /// Check that the values describe a usable canvas.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let [width, height] = self.canvas_size;
        if width == 0 || height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas_size must be non-zero, got {}x{}",
                width, height
            )));
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(ConfigError::Invalid(format!(
                "canvas_size {}x{} exceeds the addressable range",
                width, height
            )));
        }
        if self.history_capacity < 2 {
            return Err(ConfigError::Invalid(format!(
                "history_capacity must be at least 2, got {}",
                self.history_capacity
            )));
        }
        let [min, max] = self.brush_radius_range;
        if min < 0 || min > max {
            return Err(ConfigError::Invalid(format!(
                "brush_radius_range [{}, {}] is not a valid range",
                min, max
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.validate()?;

        let clamped = config.clamp_brush_radius(config.default_brush_radius);
        if clamped != config.default_brush_radius {
            log::warn!(
                "default_brush_radius {} outside {:?}, using {}",
                config.default_brush_radius,
                config.brush_radius_range,
                clamped
            );
            config.default_brush_radius = clamped;
        }
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded canvas config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load from [`CONFIG_ENV_VAR`] if it is set, otherwise use the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CanvasConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.canvas_size, [512, 512]);
        assert_eq!(config.history_capacity, 16);
        assert_eq!(config.brush_radius_range, [0, 23]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CanvasConfig::from_json_str(r#"{ "canvas_size": [64, 32] }"#).unwrap();
        assert_eq!(config.width(), 64);
        assert_eq!(config.height(), 32);
        assert_eq!(config.history_capacity, 16);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            CanvasConfig::from_json_str(r#"{ "canvas_size": [0, 32] }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CanvasConfig::from_json_str(r#"{ "history_capacity": 1 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CanvasConfig::from_json_str(r#"{ "brush_radius_range": [5, 2] }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CanvasConfig::from_json_str("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_default_radius_is_clamped() {
        let config = CanvasConfig::from_json_str(
            r#"{ "brush_radius_range": [1, 4], "default_brush_radius": 10 }"#,
        )
        .unwrap();
        assert_eq!(config.default_brush_radius, 4);
    }
}
