//! Individual sprite placements inside a meta-sprite.

use serde::{Deserialize, Serialize};

/// Sprite id meaning "nothing here".
pub const EMPTY_SPRITE_ID: i32 = -1;

/// One sprite positioned relative to the meta-sprite's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Index into the sprite chip, or [`EMPTY_SPRITE_ID`]
    pub id: i32,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub flip_h: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub flip_v: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub color_offset: i32,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &i32) -> bool {
    *value == 0
}

impl Default for Placement {
    fn default() -> Self {
        Self { id: EMPTY_SPRITE_ID, x: 0, y: 0, flip_h: false, flip_v: false, color_offset: 0 }
    }
}

impl Placement {
    /// Create an unflipped placement with no color offset.
    pub fn new(id: i32, x: i32, y: i32) -> Self {
        Self { id, x, y, ..Default::default() }
    }

    pub fn with_flip(mut self, flip_h: bool, flip_v: bool) -> Self {
        self.flip_h = flip_h;
        self.flip_v = flip_v;
        self
    }

    pub fn with_color_offset(mut self, color_offset: i32) -> Self {
        self.color_offset = color_offset;
        self
    }

    /// Returns true if the placement does not reference a sprite.
    pub fn is_empty(&self) -> bool {
        self.id < 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_defaults_from_json() {
        let placement: Placement = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(placement, Placement::new(3, 0, 0));
    }

    #[test]
    fn test_placement_skips_default_flags_when_serialized() {
        let json = serde_json::to_string(&Placement::new(1, 8, 0)).unwrap();
        assert_eq!(json, r#"{"id":1,"x":8,"y":0}"#);
    }

    #[test]
    fn test_placement_is_empty() {
        assert!(Placement::default().is_empty());
        assert!(!Placement::new(0, 0, 0).is_empty());
    }
}
