//! Error types for meta-sprite composition

use thiserror::Error;

use crate::geometry::GeometryError;

/// A warning generated while drawing a meta-sprite
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Error that fails a single meta-sprite draw.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompositionError {
    /// Tile-mode grid cannot be laid out
    #[error("Invalid tile grid for meta-sprite '{name}': {source}")]
    Geometry {
        name: String,
        #[source]
        source: GeometryError,
    },
    /// Meta-sprite id outside the registry (strict mode only)
    #[error("Meta-sprite id {id} is out of range (capacity {capacity})")]
    MetaSpriteOutOfRange { id: i32, capacity: usize },
}
