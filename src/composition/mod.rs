//! Meta-sprite composition - resolving placements into sprite draws

mod error;
mod render;
mod request;

// Re-export public API
pub use error::{CompositionError, Warning};
pub use render::{draw_collection, resolve_placement};
pub use request::{DrawReport, DrawRequest};
