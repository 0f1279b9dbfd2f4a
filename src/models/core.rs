//! Core types used across models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel dimensions of a single sprite cell when nothing else is specified.
pub const DEFAULT_SPRITE_SIZE: u32 = 8;

/// Render layer a sprite is drawn into.
///
/// The composition engine only distinguishes [`DrawMode::Tile`] (grid layout)
/// from everything else (free-form placement); the mode itself is forwarded
/// untouched to the sprite chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawMode {
    /// Drawn behind the tilemap
    Background,
    /// Drawn below the tilemap but above the background
    SpriteBelow,
    /// Drawn into the tilemap grid
    Tile,
    /// Regular sprite layer
    #[default]
    Sprite,
    /// Drawn above other sprites
    SpriteAbove,
    /// User interface layer
    Ui,
    /// Drawn above the user interface
    UiAbove,
}

impl DrawMode {
    /// Parse a draw mode from string
    pub fn from_str(s: &str) -> Option<DrawMode> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "background" => Some(DrawMode::Background),
            "sprite-below" => Some(DrawMode::SpriteBelow),
            "tile" => Some(DrawMode::Tile),
            "sprite" => Some(DrawMode::Sprite),
            "sprite-above" => Some(DrawMode::SpriteAbove),
            "ui" => Some(DrawMode::Ui),
            "ui-above" => Some(DrawMode::UiAbove),
            _ => None,
        }
    }

    /// Returns true when placements are laid out on a fixed grid.
    pub fn is_tile(&self) -> bool {
        matches!(self, DrawMode::Tile)
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DrawMode::Background => "background",
            DrawMode::SpriteBelow => "sprite-below",
            DrawMode::Tile => "tile",
            DrawMode::Sprite => "sprite",
            DrawMode::SpriteAbove => "sprite-above",
            DrawMode::Ui => "ui",
            DrawMode::UiAbove => "ui-above",
        };
        write!(f, "{}", s)
    }
}

/// Composite pixel size of a meta-sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
