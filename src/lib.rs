//! Meta-sprites - named collections of sprite placements drawn as one unit
//!
//! This library provides functionality to:
//! - Keep a fixed-capacity registry of meta-sprites with lazy creation
//! - Draw meta-sprites through a sprite chip in free-form or tile-grid layout
//! - Mirror meta-sprites per placement or as a grid permutation
//! - Render meta-sprites from a PNG sprite sheet

pub mod chip;
pub mod cli;
pub mod composition;
pub mod config;
pub mod game_chip;
pub mod geometry;
pub mod models;
pub mod output;
pub mod parser;
pub mod raster;
pub mod registry;

pub use chip::{RecordingChip, SpriteChip, SpriteDraw};
pub use composition::{CompositionError, DrawReport, DrawRequest};
pub use game_chip::GameChip;
pub use models::{DrawMode, Placement, SpriteCollection};
