//! Configuration schema types for `metasprite.toml`
//!
//! Defines the structure and validation rules for meta-sprite configuration.

use serde::{Deserialize, Serialize};

use crate::models::DEFAULT_SPRITE_SIZE;
use crate::registry::MAX_META_SPRITES;

/// Largest output scale factor accepted by the renderer.
pub const MAX_SCALE: u8 = 16;

/// Sprite chip and registry settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChipConfig {
    /// Width of one sprite cell in pixels
    #[serde(default = "default_sprite_size")]
    pub sprite_width: u32,
    /// Height of one sprite cell in pixels
    #[serde(default = "default_sprite_size")]
    pub sprite_height: u32,
    /// Meta-sprite registry capacity (clamped to 0-96)
    #[serde(default = "default_total_meta_sprites")]
    pub total_meta_sprites: i32,
    /// Per-frame sprite ceiling reported by the chip
    #[serde(default = "default_max_sprite_count")]
    pub max_sprite_count: usize,
    /// Sprite capacity assumed when no sprite sheet is loaded
    #[serde(default = "default_total_sprites")]
    pub total_sprites: usize,
    /// Fail draws of unknown meta-sprite ids instead of warning
    #[serde(default)]
    pub strict: bool,
}

impl Default for ChipConfig {
    fn default() -> Self {
        Self {
            sprite_width: default_sprite_size(),
            sprite_height: default_sprite_size(),
            total_meta_sprites: default_total_meta_sprites(),
            max_sprite_count: default_max_sprite_count(),
            total_sprites: default_total_sprites(),
            strict: false,
        }
    }
}

fn default_sprite_size() -> u32 {
    DEFAULT_SPRITE_SIZE
}

fn default_total_meta_sprites() -> i32 {
    MAX_META_SPRITES as i32
}

fn default_max_sprite_count() -> usize {
    64
}

fn default_total_sprites() -> usize {
    256
}

/// Canvas settings for rendering meta-sprites to PNG
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_canvas_size")]
    pub canvas_width: u32,
    #[serde(default = "default_canvas_size")]
    pub canvas_height: u32,
    /// Integer output scale factor
    #[serde(default = "default_scale")]
    pub scale: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_size(),
            canvas_height: default_canvas_size(),
            scale: default_scale(),
        }
    }
}

fn default_canvas_size() -> u32 {
    128
}

fn default_scale() -> u8 {
    1
}

/// Root configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetaSpriteConfig {
    #[serde(default)]
    pub chip: ChipConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "chip.sprite_width")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "metasprite.toml: '{}' {}", self.field, self.message)
    }
}

impl MetaSpriteConfig {
    /// Validate the configuration and return any errors
    ///
    /// An out-of-range `chip.total_meta_sprites` is not an error; the registry
    /// clamps it.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        let positive = [
            ("chip.sprite_width", self.chip.sprite_width),
            ("chip.sprite_height", self.chip.sprite_height),
            ("render.canvas_width", self.render.canvas_width),
            ("render.canvas_height", self.render.canvas_height),
        ];
        for (field, value) in positive {
            if value == 0 {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: "must be a positive integer".to_string(),
                });
            }
        }

        if self.render.scale == 0 || self.render.scale > MAX_SCALE {
            errors.push(ConfigValidationError {
                field: "render.scale".to_string(),
                message: format!("must be between 1 and {}", MAX_SCALE),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MetaSpriteConfig::default();
        assert_eq!(config.chip.sprite_width, 8);
        assert_eq!(config.chip.total_meta_sprites, 96);
        assert!(!config.chip.strict);
        assert_eq!(config.render.scale, 1);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: MetaSpriteConfig = toml::from_str(
            r#"
            [chip]
            sprite_width = 16
            strict = true
            "#,
        )
        .unwrap();

        assert_eq!(config.chip.sprite_width, 16);
        assert_eq!(config.chip.sprite_height, 8);
        assert!(config.chip.strict);
        assert_eq!(config.render, RenderConfig::default());
    }

    #[test]
    fn test_validate_collects_every_error() {
        let mut config = MetaSpriteConfig::default();
        config.chip.sprite_width = 0;
        config.render.canvas_height = 0;
        config.render.scale = 17;

        let errors = config.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["chip.sprite_width", "render.canvas_height", "render.scale"]);
    }

    #[test]
    fn test_out_of_range_capacity_is_not_an_error() {
        let mut config = MetaSpriteConfig::default();
        config.chip.total_meta_sprites = 500;
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigValidationError {
            field: "render.scale".to_string(),
            message: "must be between 1 and 16".to_string(),
        };
        assert_eq!(err.to_string(), "metasprite.toml: 'render.scale' must be between 1 and 16");
    }
}
