//! PNG-backed sprite chip
//!
//! `SpriteSheet` slices a sprite sheet image into fixed-size cells and
//! `RasterChip` blits those cells onto an RGBA canvas. Draw mode and color
//! offset belong to the palette and layer stages of a full chip; they are
//! accepted here but have no effect on the canvas.

use image::{imageops, RgbaImage};
use std::path::Path;
use thiserror::Error;

use crate::chip::{SpriteChip, SpriteDraw};

/// Error loading a sprite sheet
#[derive(Debug, Error)]
pub enum SheetError {
    /// Image could not be opened or decoded
    #[error("Failed to load sprite sheet: {0}")]
    Image(#[from] image::ImageError),
    /// Sprite cells have no area
    #[error("Sprite size must be non-zero, got {width}x{height}")]
    ZeroSpriteSize { width: u32, height: u32 },
    /// Sheet cannot hold a single sprite
    #[error("Sprite sheet ({sheet_w}x{sheet_h}) is smaller than one {width}x{height} sprite")]
    TooSmall { sheet_w: u32, sheet_h: u32, width: u32, height: u32 },
}

/// Sprites cut from a sheet image, numbered row-major from the top-left.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    sprite_width: u32,
    sprite_height: u32,
    sprites: Vec<RgbaImage>,
    empty: Vec<bool>,
}

impl SpriteSheet {
    /// Slice `image` into `sprite_width` x `sprite_height` cells.
    ///
    /// Partial cells on the right and bottom edges are ignored.
    pub fn from_image(
        image: &RgbaImage,
        sprite_width: u32,
        sprite_height: u32,
    ) -> Result<Self, SheetError> {
        if sprite_width == 0 || sprite_height == 0 {
            return Err(SheetError::ZeroSpriteSize { width: sprite_width, height: sprite_height });
        }

        let columns = image.width() / sprite_width;
        let rows = image.height() / sprite_height;
        if columns == 0 || rows == 0 {
            return Err(SheetError::TooSmall {
                sheet_w: image.width(),
                sheet_h: image.height(),
                width: sprite_width,
                height: sprite_height,
            });
        }

        let mut sprites = Vec::with_capacity((columns * rows) as usize);
        for row in 0..rows {
            for col in 0..columns {
                let cell = imageops::crop_imm(
                    image,
                    col * sprite_width,
                    row * sprite_height,
                    sprite_width,
                    sprite_height,
                )
                .to_image();
                sprites.push(cell);
            }
        }

        let empty = sprites.iter().map(|s| s.pixels().all(|p| p[3] == 0)).collect();
        Ok(Self { sprite_width, sprite_height, sprites, empty })
    }

    /// Load and slice a sprite sheet image from disk.
    pub fn load(path: &Path, sprite_width: u32, sprite_height: u32) -> Result<Self, SheetError> {
        let image = image::open(path)?.to_rgba8();
        Self::from_image(&image, sprite_width, sprite_height)
    }

    /// Pixel data for sprite `id`.
    pub fn get(&self, id: i32) -> Option<&RgbaImage> {
        usize::try_from(id).ok().and_then(|i| self.sprites.get(i))
    }

    /// Number of cells in the sheet.
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Cells holding at least one visible pixel.
    pub fn non_empty_count(&self) -> usize {
        self.empty.iter().filter(|&&empty| !empty).count()
    }

    /// Whether `id` is out of range or fully transparent.
    pub fn is_empty_at(&self, id: i32) -> bool {
        usize::try_from(id).ok().and_then(|i| self.empty.get(i).copied()).unwrap_or(true)
    }

    pub fn sprite_size(&self) -> (u32, u32) {
        (self.sprite_width, self.sprite_height)
    }
}

/// Sprite chip that draws sheet cells onto an RGBA canvas.
#[derive(Debug, Clone)]
pub struct RasterChip {
    sheet: SpriteSheet,
    canvas: RgbaImage,
    max_sprite_count: usize,
    draw_count: usize,
}

impl RasterChip {
    /// Create a chip with a transparent `width` x `height` canvas.
    pub fn new(sheet: SpriteSheet, width: u32, height: u32, max_sprite_count: usize) -> Self {
        Self { sheet, canvas: RgbaImage::new(width, height), max_sprite_count, draw_count: 0 }
    }

    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn into_canvas(self) -> RgbaImage {
        self.canvas
    }

    pub fn sheet(&self) -> &SpriteSheet {
        &self.sheet
    }

    /// Sprites drawn since the chip was created.
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }
}

impl SpriteChip for RasterChip {
    fn sprite_size(&self) -> (u32, u32) {
        self.sheet.sprite_size()
    }

    fn total_sprites(&self, ignore_empty: bool) -> usize {
        if ignore_empty {
            self.sheet.non_empty_count()
        } else {
            self.sheet.len()
        }
    }

    fn is_empty_at(&self, id: i32) -> bool {
        self.sheet.is_empty_at(id)
    }

    fn max_sprite_count(&self) -> usize {
        self.max_sprite_count
    }

    fn draw_sprite(&mut self, draw: SpriteDraw) {
        let Some(sprite) = self.sheet.get(draw.id) else {
            return;
        };

        let mut pixels = sprite.clone();
        if draw.flip_h {
            imageops::flip_horizontal_in_place(&mut pixels);
        }
        if draw.flip_v {
            imageops::flip_vertical_in_place(&mut pixels);
        }

        blit_clipped(&mut self.canvas, &pixels, draw.x, draw.y);
        self.draw_count += 1;
    }
}

/// Copy every non-transparent pixel of `sprite` onto `canvas` at `(x, y)`,
/// clipping anything outside the canvas.
fn blit_clipped(canvas: &mut RgbaImage, sprite: &RgbaImage, x: i32, y: i32) {
    let canvas_width = canvas.width() as i64;
    let canvas_height = canvas.height() as i64;

    for (sx, sy, pixel) in sprite.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }

        let dest_x = x as i64 + sx as i64;
        let dest_y = y as i64 + sy as i64;
        if dest_x < 0 || dest_y < 0 || dest_x >= canvas_width || dest_y >= canvas_height {
            continue;
        }

        canvas.put_pixel(dest_x as u32, dest_y as u32, *pixel);
    }
}
