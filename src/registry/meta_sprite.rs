//! Fixed-capacity registry of meta-sprites addressed by id.

use crate::chip::SpriteChip;
use crate::models::{SpriteCollection, DEFAULT_SPRITE_SIZE};

use super::traits::Registry;

/// Largest number of meta-sprites a registry can hold.
pub const MAX_META_SPRITES: usize = 96;

/// Values copied into collections created lazily on first access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionDefaults {
    pub sprite_width: u32,
    pub sprite_height: u32,
    pub sprite_max: usize,
}

impl Default for CollectionDefaults {
    fn default() -> Self {
        Self {
            sprite_width: DEFAULT_SPRITE_SIZE,
            sprite_height: DEFAULT_SPRITE_SIZE,
            sprite_max: 0,
        }
    }
}

impl CollectionDefaults {
    /// Snapshot the sprite size and capacity of a sprite chip.
    pub fn from_chip<C: SpriteChip + ?Sized>(chip: &C) -> Self {
        let (sprite_width, sprite_height) = chip.sprite_size();
        Self { sprite_width, sprite_height, sprite_max: chip.total_sprites(false) }
    }
}

/// Registry of meta-sprites stored in id order.
///
/// Slots are `Option`s: an empty slot is filled lazily by
/// [`get_or_create`](Self::get_or_create) or explicitly by
/// [`replace`](Self::replace). Ids are valid when `0 <= id < capacity`.
#[derive(Debug, Clone, Default)]
pub struct MetaSpriteRegistry {
    slots: Vec<Option<SpriteCollection>>,
}

impl MetaSpriteRegistry {
    /// Create a registry with no slots.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Create a registry sized with [`set_capacity`](Self::set_capacity).
    pub fn with_capacity(total: i32) -> Self {
        let mut registry = Self::new();
        registry.set_capacity(total);
        registry
    }

    /// Resize the registry to `total` slots, clamped to `[0, 96]`.
    ///
    /// Entries whose index stays in range are preserved; entries past the new
    /// end are dropped. Every in-range slot left empty receives a placeholder
    /// collection.
    pub fn set_capacity(&mut self, total: i32) {
        let total = total.clamp(0, MAX_META_SPRITES as i32) as usize;
        self.slots.resize_with(total, || None);
        for slot in self.slots.iter_mut().filter(|slot| slot.is_none()) {
            *slot = Some(SpriteCollection::placeholder());
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn index(&self, id: i32) -> Option<usize> {
        if id < 0 || id as usize >= self.slots.len() {
            None
        } else {
            Some(id as usize)
        }
    }

    /// Collection stored at `id`, without creating one.
    pub fn at(&self, id: i32) -> Option<&SpriteCollection> {
        self.index(id).and_then(|i| self.slots[i].as_ref())
    }

    /// Mutable collection stored at `id`, without creating one.
    pub fn at_mut(&mut self, id: i32) -> Option<&mut SpriteCollection> {
        let i = self.index(id)?;
        self.slots[i].as_mut()
    }

    /// Returns true if `id` is in range and its slot holds a collection.
    pub fn is_populated(&self, id: i32) -> bool {
        self.at(id).is_some()
    }

    /// Collection at `id`, creating a named default if the slot is empty.
    ///
    /// The returned collection has a sprite size: unset dimensions are taken
    /// from `defaults`. Returns `None` when `id` is out of range.
    pub fn get_or_create(
        &mut self,
        id: i32,
        defaults: &CollectionDefaults,
    ) -> Option<&mut SpriteCollection> {
        let i = self.index(id)?;
        let name = default_name(i, self.slots.len());
        let collection = self.slots[i].get_or_insert_with(|| SpriteCollection {
            sprite_max: defaults.sprite_max,
            ..SpriteCollection::new(name)
        });
        collection.adopt_sprite_size(defaults.sprite_width, defaults.sprite_height);
        Some(collection)
    }

    /// Install `collection` at `id`, overwriting any existing entry.
    ///
    /// Returns `None` (and drops `collection`) when `id` is out of range.
    pub fn replace(
        &mut self,
        id: i32,
        collection: SpriteCollection,
    ) -> Option<&mut SpriteCollection> {
        let i = self.index(id)?;
        Some(self.slots[i].insert(collection))
    }

    /// Replace the entry at `id` when `replacement` is given, otherwise get or
    /// lazily create it.
    ///
    /// Either way the stored collection adopts the sprite size in `defaults`
    /// for any dimension it leaves unset.
    pub fn resolve(
        &mut self,
        id: i32,
        replacement: Option<SpriteCollection>,
        defaults: &CollectionDefaults,
    ) -> Option<&mut SpriteCollection> {
        match replacement {
            Some(collection) => {
                let stored = self.replace(id, collection)?;
                stored.adopt_sprite_size(defaults.sprite_width, defaults.sprite_height);
                Some(stored)
            }
            None => self.get_or_create(id, defaults),
        }
    }

    /// Lowest id whose collection is named `name`.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|collection| collection.name == name))
    }

    /// Iterate over populated slots in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &SpriteCollection)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| slot.as_ref().map(|c| (i, c)))
    }
}

/// Name for a lazily created collection: `MetaSprite` followed by the id,
/// zero-padded to the digit count of the registry capacity.
pub fn default_name(id: usize, capacity: usize) -> String {
    let width = capacity.to_string().len();
    format!("MetaSprite{:0width$}", id, width = width)
}

impl Registry<SpriteCollection> for MetaSpriteRegistry {
    fn id_of(&self, name: &str) -> Option<usize> {
        self.find_by_name(name)
    }

    fn entry(&self, id: usize) -> Option<&SpriteCollection> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Empty every slot, keeping the capacity.
    fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    fn names(&self) -> Box<dyn Iterator<Item = &String> + '_> {
        Box::new(self.slots.iter().flatten().map(|collection| &collection.name))
    }
}
