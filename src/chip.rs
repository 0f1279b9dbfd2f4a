//! Sprite chip interface consumed by the composition engine
//!
//! The sprite chip owns sprite pixel data and rasterization. Meta-sprite
//! composition only needs a handful of queries and a single draw primitive.

use serde::{Deserialize, Serialize};

use crate::models::DrawMode;

/// A single sprite draw issued by the composition engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteDraw {
    pub id: i32,
    pub x: i32,
    pub y: i32,
    pub scale_x: i32,
    pub scale_y: i32,
    pub flip_h: bool,
    pub flip_v: bool,
    pub mode: DrawMode,
    pub color_offset: i32,
}

/// External collaborator that stores sprites and rasterizes them.
pub trait SpriteChip {
    /// Pixel size of one sprite cell.
    fn sprite_size(&self) -> (u32, u32);

    /// Number of sprites with pixel data when `ignore_empty` is true,
    /// otherwise the chip's full capacity.
    fn total_sprites(&self, ignore_empty: bool) -> usize;

    /// Whether `id` has no visible pixel data.
    fn is_empty_at(&self, id: i32) -> bool;

    /// Per-frame draw ceiling. Informational only.
    fn max_sprite_count(&self) -> usize;

    /// Rasterize one sprite.
    fn draw_sprite(&mut self, draw: SpriteDraw);

    /// Whether `id` refers to a sprite that would produce pixels.
    fn is_drawable(&self, id: i32) -> bool {
        id >= 0 && (id as usize) < self.total_sprites(false) && !self.is_empty_at(id)
    }
}

/// In-memory sprite chip that records every draw it receives.
#[derive(Debug, Clone)]
pub struct RecordingChip {
    sprite_width: u32,
    sprite_height: u32,
    total: usize,
    empty: Vec<i32>,
    max_sprite_count: usize,
    draws: Vec<SpriteDraw>,
}

impl RecordingChip {
    /// Create a chip holding `total` non-empty sprites of the given size.
    pub fn new(sprite_width: u32, sprite_height: u32, total: usize) -> Self {
        Self {
            sprite_width,
            sprite_height,
            total,
            empty: Vec::new(),
            max_sprite_count: 64,
            draws: Vec::new(),
        }
    }

    /// Mark sprite ids as having no pixel data.
    pub fn with_empty(mut self, ids: &[i32]) -> Self {
        self.empty.extend_from_slice(ids);
        self.empty.sort_unstable();
        self.empty.dedup();
        self
    }

    pub fn with_max_sprite_count(mut self, max: usize) -> Self {
        self.max_sprite_count = max;
        self
    }

    /// Draws received so far, in order.
    pub fn draws(&self) -> &[SpriteDraw] {
        &self.draws
    }

    /// Ids of the draws received so far, in order.
    pub fn drawn_ids(&self) -> Vec<i32> {
        self.draws.iter().map(|d| d.id).collect()
    }

    /// Forget recorded draws.
    pub fn clear(&mut self) {
        self.draws.clear();
    }
}

impl SpriteChip for RecordingChip {
    fn sprite_size(&self) -> (u32, u32) {
        (self.sprite_width, self.sprite_height)
    }

    fn total_sprites(&self, ignore_empty: bool) -> usize {
        if ignore_empty {
            let empty_in_range =
                self.empty.iter().filter(|&&id| id >= 0 && (id as usize) < self.total).count();
            self.total - empty_in_range
        } else {
            self.total
        }
    }

    fn is_empty_at(&self, id: i32) -> bool {
        id < 0 || id as usize >= self.total || self.empty.contains(&id)
    }

    fn max_sprite_count(&self) -> usize {
        self.max_sprite_count
    }

    fn draw_sprite(&mut self, draw: SpriteDraw) {
        self.draws.push(draw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(id: i32) -> SpriteDraw {
        SpriteDraw {
            id,
            x: 0,
            y: 0,
            scale_x: 1,
            scale_y: 1,
            flip_h: false,
            flip_v: false,
            mode: DrawMode::Sprite,
            color_offset: 0,
        }
    }

    #[test]
    fn test_recording_chip_records_in_order() {
        let mut chip = RecordingChip::new(8, 8, 16);
        chip.draw_sprite(draw(3));
        chip.draw_sprite(draw(1));
        assert_eq!(chip.drawn_ids(), vec![3, 1]);

        chip.clear();
        assert!(chip.draws().is_empty());
    }

    #[test]
    fn test_total_sprites_ignore_empty() {
        let chip = RecordingChip::new(8, 8, 16).with_empty(&[2, 5, 40]);
        assert_eq!(chip.total_sprites(false), 16);
        assert_eq!(chip.total_sprites(true), 14);
    }

    #[test]
    fn test_is_drawable() {
        let chip = RecordingChip::new(8, 8, 4).with_empty(&[1]);
        assert!(chip.is_drawable(0));
        assert!(!chip.is_drawable(1));
        assert!(!chip.is_drawable(-1));
        assert!(!chip.is_drawable(4));
    }
}
