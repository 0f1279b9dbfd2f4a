//! Draw parameters and results

use crate::models::DrawMode;

use super::error::Warning;

/// Where and how a meta-sprite is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawRequest {
    pub x: i32,
    pub y: i32,
    pub flip_h: bool,
    pub flip_v: bool,
    pub mode: DrawMode,
    /// Added to every placement's own color offset
    pub color_offset: i32,
}

impl DrawRequest {
    /// Unflipped sprite-mode draw at `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, ..Default::default() }
    }

    pub fn with_flip(mut self, flip_h: bool, flip_v: bool) -> Self {
        self.flip_h = flip_h;
        self.flip_v = flip_v;
        self
    }

    pub fn with_mode(mut self, mode: DrawMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_color_offset(mut self, color_offset: i32) -> Self {
        self.color_offset = color_offset;
        self
    }
}

/// Outcome of a meta-sprite draw.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawReport {
    /// Number of sprite draws issued to the chip
    pub drawn: usize,
    pub warnings: Vec<Warning>,
}

impl DrawReport {
    pub fn drawn(drawn: usize) -> Self {
        Self { drawn, warnings: Vec::new() }
    }

    pub fn warning(warning: Warning) -> Self {
        Self { drawn: 0, warnings: vec![warning] }
    }
}
