//! Data models for meta-sprites (placements, collections, draw modes)

mod collection;
mod core;
mod sprite;

// Re-export all public types
pub use collection::SpriteCollection;
pub use core::{Bounds, DrawMode, DEFAULT_SPRITE_SIZE};
pub use sprite::{Placement, EMPTY_SPRITE_ID};
