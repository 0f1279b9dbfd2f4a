//! Registry of meta-sprites.
//!
//! This module provides:
//! - `MetaSpriteRegistry`, a fixed-capacity (0-96) array of optional collections
//! - A `Registry` trait for name-based lookup over any registry
//!
//! Capacity requests outside the supported range are clamped, and lookups of
//! unknown ids or names return `None` rather than failing.

mod meta_sprite;
mod traits;

pub use meta_sprite::{default_name, CollectionDefaults, MetaSpriteRegistry, MAX_META_SPRITES};
pub use traits::Registry;
