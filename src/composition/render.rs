//! Meta-sprite draw algorithms

use crate::chip::{SpriteChip, SpriteDraw};
use crate::geometry::{GeometryError, Grid};
use crate::models::{Placement, SpriteCollection};

use super::error::CompositionError;
use super::request::DrawRequest;

/// Draw every visible placement of `collection` through `chip`.
///
/// Returns the number of sprite draws issued.
///
/// # Free-form mode
///
/// Any mode other than [`DrawMode::Tile`](crate::models::DrawMode::Tile).
/// Placements are drawn in stored order at their local offsets. A horizontal
/// flip mirrors each local x against the collection bounds
/// (`bounds.width - x - sprite_width`) and inverts the placement's own flip;
/// vertical flips work the same way on y.
///
/// # Tile mode
///
/// Placements become row-major cells of a grid `ceil(bounds.width /
/// sprite_width)` cells wide. Flips permute the cells (columns reversed
/// within each row, rows reversed) instead of moving individual placements,
/// and each tile is drawn with the requested flip flags.
///
/// Placements whose sprite id is empty or out of range are skipped in both
/// modes. Each draw reports `placement.color_offset + request.color_offset`,
/// wrapping on overflow. Positions saturate at the `i32` range.
///
/// A collection without its own sprite size is measured with the chip's.
pub fn draw_collection<C: SpriteChip + ?Sized>(
    chip: &mut C,
    collection: &SpriteCollection,
    request: &DrawRequest,
) -> Result<usize, CompositionError> {
    if collection.is_empty() {
        return Ok(0);
    }

    let chip_size = chip.sprite_size();
    let collection = collection.sized_for(chip_size);
    let sprite_size = collection.sprite_size().unwrap_or(chip_size);
    if request.mode.is_tile() {
        draw_tiles(chip, &collection, sprite_size, request)
    } else {
        Ok(draw_free_form(chip, &collection, sprite_size, request))
    }
}

fn draw_free_form<C: SpriteChip + ?Sized>(
    chip: &mut C,
    collection: &SpriteCollection,
    sprite_size: (u32, u32),
    request: &DrawRequest,
) -> usize {
    let mut drawn = 0;

    for placement in &collection.sprites {
        if !chip.is_drawable(placement.id) {
            continue;
        }

        chip.draw_sprite(resolve_placement(collection, placement, sprite_size, request));
        drawn += 1;
    }

    drawn
}

/// Final screen position and flips of a free-form placement.
///
/// `sprite_size` is the cell size placements are mirrored with.
pub fn resolve_placement(
    collection: &SpriteCollection,
    placement: &Placement,
    sprite_size: (u32, u32),
    request: &DrawRequest,
) -> SpriteDraw {
    let mut x = i64::from(placement.x);
    let mut y = i64::from(placement.y);
    let mut flip_h = placement.flip_h;
    let mut flip_v = placement.flip_v;

    if request.flip_h {
        x = i64::from(collection.bounds.width) - x - i64::from(sprite_size.0);
        flip_h = !flip_h;
    }

    if request.flip_v {
        y = i64::from(collection.bounds.height) - y - i64::from(sprite_size.1);
        flip_v = !flip_v;
    }

    SpriteDraw {
        id: placement.id,
        x: translate(x, request.x),
        y: translate(y, request.y),
        scale_x: 1,
        scale_y: 1,
        flip_h,
        flip_v,
        mode: request.mode,
        color_offset: placement.color_offset.wrapping_add(request.color_offset),
    }
}

fn draw_tiles<C: SpriteChip + ?Sized>(
    chip: &mut C,
    collection: &SpriteCollection,
    (sprite_width, sprite_height): (u32, u32),
    request: &DrawRequest,
) -> Result<usize, CompositionError> {
    let geometry_error = |source: GeometryError| CompositionError::Geometry {
        name: collection.name.clone(),
        source,
    };

    let grid = Grid::fit(collection.len(), collection.bounds.width, sprite_width, sprite_height)
        .map_err(geometry_error)?;

    // Mirrored cell of each placement; padding cells are never stored
    let mut cells = collection
        .sprites
        .iter()
        .enumerate()
        .map(|(index, placement)| {
            let cell = grid.mirror_index(index as u64, request.flip_h, request.flip_v);
            Ok((cell, grid.cell_position(cell)?, placement))
        })
        .collect::<Result<Vec<_>, GeometryError>>()
        .map_err(geometry_error)?;
    cells.sort_unstable_by_key(|&(cell, _, _)| cell);

    let mut drawn = 0;

    for (_, (cell_x, cell_y), placement) in cells {
        if !chip.is_drawable(placement.id) {
            continue;
        }

        chip.draw_sprite(SpriteDraw {
            id: placement.id,
            x: translate(cell_x, request.x),
            y: translate(cell_y, request.y),
            scale_x: 1,
            scale_y: 1,
            flip_h: request.flip_h,
            flip_v: request.flip_v,
            mode: request.mode,
            color_offset: placement.color_offset.wrapping_add(request.color_offset),
        });
        drawn += 1;
    }

    Ok(drawn)
}

/// `local + origin`, saturating at the `i32` range.
fn translate(local: i64, origin: i32) -> i32 {
    local.saturating_add(i64::from(origin)).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
