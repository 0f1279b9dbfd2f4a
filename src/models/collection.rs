//! Meta-sprites: named, ordered collections of sprite placements.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::core::Bounds;
use super::sprite::Placement;

/// A meta-sprite: placements composited into a single drawable unit.
///
/// Placement order is draw order. `bounds` is the composite size used to
/// mirror placements and to derive the grid width in tile mode.
///
/// A collection without its own sprite size cannot measure its placements.
/// It takes the sprite chip's size when installed in a registry or drawn
/// (see [`adopt_sprite_size`]), and its bounds grow to cover the placements
/// at that point.
///
/// [`adopt_sprite_size`]: Self::adopt_sprite_size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteCollection {
    pub name: String,
    #[serde(default)]
    pub sprites: Vec<Placement>,
    #[serde(default)]
    pub bounds: Bounds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_height: Option<u32>,
    /// Sprite chip capacity at the time the collection was created
    #[serde(default)]
    pub sprite_max: usize,
}

impl SpriteCollection {
    /// Name given to placeholder entries created when the registry grows.
    pub const PLACEHOLDER_NAME: &'static str = "EmptyMetaSprite";

    /// Create an empty collection with no sprite size of its own.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sprites: Vec::new(),
            bounds: Bounds::default(),
            sprite_width: None,
            sprite_height: None,
            sprite_max: 0,
        }
    }

    /// Placeholder collection installed into newly in-range registry slots.
    pub fn placeholder() -> Self {
        Self::new(Self::PLACEHOLDER_NAME)
    }

    pub fn with_sprite_size(mut self, width: u32, height: u32) -> Self {
        self.sprite_width = Some(width);
        self.sprite_height = Some(height);
        self
    }

    pub fn with_bounds(mut self, width: u32, height: u32) -> Self {
        self.bounds = Bounds::new(width, height);
        self
    }

    /// Sprite cell size, once both dimensions are known.
    pub fn sprite_size(&self) -> Option<(u32, u32)> {
        self.sprite_width.zip(self.sprite_height)
    }

    /// Fill unset sprite dimensions from a sprite chip.
    ///
    /// When anything was filled in, the bounds grow to cover every placement
    /// at the new size. Bounds never shrink, so explicit bounds are kept.
    pub fn adopt_sprite_size(&mut self, width: u32, height: u32) {
        if self.sprite_size().is_some() {
            return;
        }
        let width = *self.sprite_width.get_or_insert(width);
        let height = *self.sprite_height.get_or_insert(height);
        for placement in &self.sprites {
            cover(&mut self.bounds, placement, (width, height));
        }
    }

    /// This collection, or a copy that adopted `chip_size` if it has no
    /// sprite size of its own.
    pub fn sized_for(&self, chip_size: (u32, u32)) -> Cow<'_, Self> {
        if self.sprite_size().is_some() {
            return Cow::Borrowed(self);
        }
        let mut sized = self.clone();
        sized.adopt_sprite_size(chip_size.0, chip_size.1);
        Cow::Owned(sized)
    }

    /// Append a placement, growing the bounds to cover it once the sprite
    /// size is known.
    pub fn add_sprite(
        &mut self,
        id: i32,
        x: i32,
        y: i32,
        flip_h: bool,
        flip_v: bool,
        color_offset: i32,
    ) {
        let placement =
            Placement::new(id, x, y).with_flip(flip_h, flip_v).with_color_offset(color_offset);
        if let Some(size) = self.sprite_size() {
            cover(&mut self.bounds, &placement, size);
        }
        self.sprites.push(placement);
    }

    /// Recompute bounds from every placement currently in the collection.
    ///
    /// Without a sprite size the bounds are left empty.
    pub fn recalculate_bounds(&mut self) {
        self.bounds = Bounds::default();
        if let Some(size) = self.sprite_size() {
            for placement in &self.sprites {
                cover(&mut self.bounds, placement, size);
            }
        }
    }

    /// Number of placements.
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Drop all placements and reset the bounds.
    pub fn clear(&mut self) {
        self.sprites.clear();
        self.bounds = Bounds::default();
    }
}

/// Grow `bounds` to cover a `size` sprite at the placement's offset.
fn cover(bounds: &mut Bounds, placement: &Placement, (width, height): (u32, u32)) {
    bounds.width = bounds.width.max(extent(placement.x, width));
    bounds.height = bounds.height.max(extent(placement.y, height));
}

/// Far edge of a sprite at `offset`, clamped to the `u32` range.
fn extent(offset: i32, size: u32) -> u32 {
    (i64::from(offset) + i64::from(size)).clamp(0, i64::from(u32::MAX)) as u32
}
