//! Host-facing meta-sprite API
//!
//! `GameChip` owns the meta-sprite registry and a sprite chip, and exposes the
//! operations a game uses at setup time (sizing the registry, installing
//! collections) and once per frame (drawing).

use crate::chip::SpriteChip;
use crate::composition::{draw_collection, CompositionError, DrawReport, DrawRequest, Warning};
use crate::config::ChipConfig;
use crate::models::{DrawMode, SpriteCollection};
use crate::registry::{CollectionDefaults, MetaSpriteRegistry};

/// Meta-sprite id that draws nothing.
pub const NO_META_SPRITE: i32 = -1;

/// Meta-sprite registry bound to the sprite chip that draws it.
#[derive(Debug, Clone)]
pub struct GameChip<C: SpriteChip> {
    sprites: C,
    meta_sprites: MetaSpriteRegistry,
    strict: bool,
}

impl<C: SpriteChip> GameChip<C> {
    /// Create a game chip with an empty registry in lenient mode.
    pub fn new(sprites: C) -> Self {
        Self { sprites, meta_sprites: MetaSpriteRegistry::new(), strict: false }
    }

    /// Create a game chip sized and configured from `config`.
    pub fn from_config(sprites: C, config: &ChipConfig) -> Self {
        let mut chip = Self::new(sprites);
        chip.set_total_meta_sprites(config.total_meta_sprites);
        chip.strict = config.strict;
        chip
    }

    /// Strict mode: drawing an out-of-range meta-sprite id is an error.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Resize the meta-sprite registry (clamped to `[0, 96]`) and return the
    /// resulting capacity.
    pub fn set_total_meta_sprites(&mut self, total: i32) -> usize {
        self.meta_sprites.set_capacity(total);
        self.meta_sprites.capacity()
    }

    /// Current meta-sprite registry capacity.
    pub fn total_meta_sprites(&self) -> usize {
        self.meta_sprites.capacity()
    }

    /// Sprites with pixel data when `ignore_empty` is true, otherwise the
    /// sprite chip's capacity.
    pub fn total_sprites(&self, ignore_empty: bool) -> usize {
        self.sprites.total_sprites(ignore_empty)
    }

    /// Per-frame sprite ceiling of the sprite chip. Not enforced here.
    pub fn max_sprite_count(&self) -> usize {
        self.sprites.max_sprite_count()
    }

    /// Get the meta-sprite at `id`, replacing it with `collection` if given.
    ///
    /// An empty slot is filled with a collection named `MetaSpriteNN` that
    /// copies the sprite chip's sprite size and capacity. Returns `None` when
    /// `id` is out of range.
    pub fn meta_sprite(
        &mut self,
        id: i32,
        collection: Option<SpriteCollection>,
    ) -> Option<&mut SpriteCollection> {
        let defaults = CollectionDefaults::from_chip(&self.sprites);
        self.meta_sprites.resolve(id, collection, &defaults)
    }

    /// Lowest meta-sprite id named `name`, or [`NO_META_SPRITE`].
    pub fn find_meta_sprite_id(&self, name: &str) -> i32 {
        self.meta_sprites.find_by_name(name).map_or(NO_META_SPRITE, |id| id as i32)
    }

    /// Draw meta-sprite `id` with its top-left corner at `(x, y)`.
    ///
    /// `id == -1` draws nothing. An id outside the registry draws nothing and
    /// produces a warning, or fails in strict mode. Tile mode fails the call
    /// when the collection's grid geometry is degenerate.
    pub fn draw_meta_sprite(
        &mut self,
        id: i32,
        x: i32,
        y: i32,
        flip_h: bool,
        flip_v: bool,
        mode: DrawMode,
        color_offset: i32,
    ) -> Result<DrawReport, CompositionError> {
        let request = DrawRequest { x, y, flip_h, flip_v, mode, color_offset };
        self.draw(id, &request)
    }

    /// [`draw_meta_sprite`](Self::draw_meta_sprite) with a prepared request.
    pub fn draw(&mut self, id: i32, request: &DrawRequest) -> Result<DrawReport, CompositionError> {
        if id == NO_META_SPRITE {
            return Ok(DrawReport::default());
        }

        let capacity = self.meta_sprites.capacity();
        if id < 0 || id as usize >= capacity {
            if self.strict {
                return Err(CompositionError::MetaSpriteOutOfRange { id, capacity });
            }
            return Ok(DrawReport::warning(Warning::new(format!(
                "Meta-sprite id {} is out of range (capacity {}), nothing drawn",
                id, capacity
            ))));
        }

        match self.meta_sprites.at(id) {
            Some(collection) => {
                let drawn = draw_collection(&mut self.sprites, collection, request)?;
                Ok(DrawReport::drawn(drawn))
            }
            None => Ok(DrawReport::default()),
        }
    }

    /// The meta-sprite registry.
    pub fn registry(&self) -> &MetaSpriteRegistry {
        &self.meta_sprites
    }

    pub fn registry_mut(&mut self) -> &mut MetaSpriteRegistry {
        &mut self.meta_sprites
    }

    /// The sprite chip draws are forwarded to.
    pub fn sprite_chip(&self) -> &C {
        &self.sprites
    }

    pub fn sprite_chip_mut(&mut self) -> &mut C {
        &mut self.sprites
    }

    /// Consume the game chip and return its sprite chip.
    pub fn into_sprite_chip(self) -> C {
        self.sprites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chip::RecordingChip;
    use crate::models::Placement;

    fn game_chip(capacity: i32) -> GameChip<RecordingChip> {
        let mut chip = GameChip::new(RecordingChip::new(8, 8, 128).with_max_sprite_count(32));
        chip.set_total_meta_sprites(capacity);
        chip
    }

    fn hero() -> SpriteCollection {
        let mut hero = SpriteCollection::new("hero");
        hero.add_sprite(1, 0, 0, false, false, 0);
        hero.add_sprite(2, 8, 0, false, false, 0);
        hero
    }

    #[test]
    fn test_total_meta_sprites_clamped() {
        let mut chip = game_chip(0);
        assert_eq!(chip.set_total_meta_sprites(200), 96);
        assert_eq!(chip.total_meta_sprites(), 96);
        assert_eq!(chip.set_total_meta_sprites(-3), 0);
    }

    #[test]
    fn test_passthrough_queries() {
        let chip = GameChip::new(RecordingChip::new(8, 8, 10).with_empty(&[0, 1]));
        assert_eq!(chip.total_sprites(false), 10);
        assert_eq!(chip.total_sprites(true), 8);
        assert_eq!(game_chip(1).max_sprite_count(), 32);
    }

    #[test]
    fn test_meta_sprite_lazily_created_with_chip_defaults() {
        let mut chip = GameChip::new(RecordingChip::new(16, 8, 128));
        chip.set_total_meta_sprites(10);
        crate::registry::Registry::clear(chip.registry_mut());

        let collection = chip.meta_sprite(4, None).unwrap();
        assert_eq!(collection.name, "MetaSprite04");
        assert_eq!(collection.sprite_size(), Some((16, 8)));
        assert_eq!(collection.sprite_max, 128);
    }

    #[test]
    fn test_meta_sprite_replacement() {
        let mut chip = game_chip(4);
        let stored = chip.meta_sprite(1, Some(hero())).unwrap();
        assert_eq!(stored.name, "hero");
        assert_eq!(chip.find_meta_sprite_id("hero"), 1);
        assert_eq!(chip.find_meta_sprite_id("villain"), NO_META_SPRITE);
    }

    #[test]
    fn test_meta_sprite_out_of_range() {
        let mut chip = game_chip(4);
        assert!(chip.meta_sprite(4, None).is_none());
        assert!(chip.meta_sprite(-1, Some(hero())).is_none());
    }

    #[test]
    fn test_draw_sentinel_has_no_effect() {
        let mut chip = game_chip(4).with_strict(true);
        let report =
            chip.draw_meta_sprite(NO_META_SPRITE, 0, 0, true, true, DrawMode::Tile, 3).unwrap();
        assert_eq!(report, DrawReport::default());
        assert!(chip.sprite_chip().draws().is_empty());
    }

    #[test]
    fn test_draw_meta_sprite() {
        let mut chip = game_chip(4);
        chip.meta_sprite(2, Some(hero()));

        let report = chip.draw_meta_sprite(2, 10, 20, false, false, DrawMode::Sprite, 0).unwrap();
        assert_eq!(report.drawn, 2);
        assert!(report.warnings.is_empty());
        assert_eq!(chip.sprite_chip().drawn_ids(), vec![1, 2]);
        assert_eq!(chip.sprite_chip().draws()[1].x, 18);
    }

    #[test]
    fn test_draw_out_of_range_lenient_warns() {
        let mut chip = game_chip(4);
        let report = chip.draw_meta_sprite(4, 0, 0, false, false, DrawMode::Sprite, 0).unwrap();
        assert_eq!(report.drawn, 0);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].message.contains("out of range"));
    }

    #[test]
    fn test_draw_out_of_range_strict_errors() {
        let mut chip = game_chip(4).with_strict(true);
        let result = chip.draw_meta_sprite(4, 0, 0, false, false, DrawMode::Sprite, 0);
        assert_eq!(result, Err(CompositionError::MetaSpriteOutOfRange { id: 4, capacity: 4 }));
    }

    #[test]
    fn test_draw_placeholder_draws_nothing() {
        let mut chip = game_chip(4);
        let report = chip.draw_meta_sprite(0, 0, 0, false, false, DrawMode::Sprite, 0).unwrap();
        assert_eq!(report, DrawReport::default());
    }

    #[test]
    fn test_draw_unpopulated_slot_does_not_create() {
        let mut chip = game_chip(4);
        crate::registry::Registry::clear(chip.registry_mut());

        let report = chip.draw_meta_sprite(1, 0, 0, false, false, DrawMode::Sprite, 0).unwrap();
        assert_eq!(report.drawn, 0);
        assert!(!chip.registry().is_populated(1));
    }

    #[test]
    fn test_draw_tile_geometry_error_fails_single_call() {
        let mut chip = game_chip(4);
        let mut broken = SpriteCollection::new("broken").with_sprite_size(8, 8);
        broken.sprites.push(Placement::new(1, 0, 0));
        chip.meta_sprite(0, Some(broken));
        chip.meta_sprite(1, Some(hero()));

        assert!(chip.draw_meta_sprite(0, 0, 0, false, false, DrawMode::Tile, 0).is_err());
        let report = chip.draw_meta_sprite(1, 0, 0, false, false, DrawMode::Tile, 0).unwrap();
        assert_eq!(report.drawn, 2);
    }

    #[test]
    fn test_from_config() {
        let config = ChipConfig { total_meta_sprites: 12, strict: true, ..Default::default() };
        let mut chip = GameChip::from_config(RecordingChip::new(8, 8, 16), &config);
        assert_eq!(chip.total_meta_sprites(), 12);
        assert!(chip.draw_meta_sprite(12, 0, 0, false, false, DrawMode::Sprite, 0).is_err());
    }
}
