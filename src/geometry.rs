//! Grid geometry for tile-mode meta-sprites
//!
//! Tile mode reinterprets a meta-sprite's placements as row-major cells of a
//! rectangular grid. These helpers size that grid, map a linear cell index to
//! a pixel offset, and mirror a flat cell sequence.

use thiserror::Error;

/// Error raised by malformed grid geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Attempted to split a length into zero-width cells
    #[error("Cannot divide {total} into cells of width 0")]
    ZeroDivisor { total: u64 },
    /// A grid cell has no area
    #[error("Cell size must be non-zero, got {width}x{height}")]
    ZeroCellSize { width: u32, height: u32 },
    /// A flat sequence does not match the grid it is mirrored over
    #[error("Sequence of {actual} items does not fill a {columns}x{rows} grid")]
    SequenceLength { actual: usize, columns: usize, rows: usize },
    /// More cells than a grid row count can describe
    #[error("Grid of {cells} cells is too large")]
    TooManyCells { cells: usize },
}

/// Integer ceiling division.
///
/// Returns [`GeometryError::ZeroDivisor`] when `width` is zero instead of
/// silently producing zero.
///
/// ```
/// use metasprite::geometry::ceil_div;
///
/// assert_eq!(ceil_div(16, 8).unwrap(), 2);
/// assert_eq!(ceil_div(17, 8).unwrap(), 3);
/// assert!(ceil_div(16, 0).is_err());
/// ```
pub fn ceil_div(total: u32, width: u32) -> Result<u32, GeometryError> {
    if width == 0 {
        return Err(GeometryError::ZeroDivisor { total: total.into() });
    }
    Ok(total.div_ceil(width))
}

/// Pixel offset of the cell at `index` in a grid `grid_width` cells wide.
///
/// Offsets saturate at `i64::MAX`.
pub fn cell_position(
    index: u64,
    grid_width: u32,
    cell_width: u32,
    cell_height: u32,
) -> Result<(i64, i64), GeometryError> {
    if grid_width == 0 {
        return Err(GeometryError::ZeroDivisor { total: index });
    }
    let columns = u64::from(grid_width);
    Ok((pixels(index % columns, cell_width), pixels(index / columns, cell_height)))
}

fn pixels(cells: u64, size: u32) -> i64 {
    i64::try_from(cells.saturating_mul(u64::from(size))).unwrap_or(i64::MAX)
}

/// Index that cell `index` of a row-major `columns` x `rows` grid moves to
/// when the grid is mirrored.
///
/// Mirroring is its own inverse, so this is also the index a mirrored cell
/// came from. `index` must lie inside the grid.
pub fn mirror_index(index: u64, columns: u64, rows: u64, flip_h: bool, flip_v: bool) -> u64 {
    if columns == 0 {
        return index;
    }
    let mut row = index / columns;
    let mut col = index % columns;
    if flip_h {
        col = columns - 1 - col;
    }
    if flip_v {
        row = rows.saturating_sub(1).saturating_sub(row);
    }
    row * columns + col
}

/// Mirror a row-major sequence over a `columns` x `rows` grid.
///
/// `flip_h` reverses the column order within each row and `flip_v` reverses
/// the row order. Operates on a copy; `items` is left untouched.
pub fn mirror_sequence<T: Copy>(
    items: &[T],
    columns: usize,
    rows: usize,
    flip_h: bool,
    flip_v: bool,
) -> Result<Vec<T>, GeometryError> {
    if columns.checked_mul(rows) != Some(items.len()) {
        return Err(GeometryError::SequenceLength { actual: items.len(), columns, rows });
    }

    let (columns, rows) = (columns as u64, rows as u64);
    Ok((0..items.len() as u64)
        .map(|index| items[mirror_index(index, columns, rows, flip_h, flip_v) as usize])
        .collect())
}

/// Mirror a flat sequence of sprite ids. See [`mirror_sequence`].
pub fn mirror_ids(
    ids: &[i32],
    columns: usize,
    rows: usize,
    flip_h: bool,
    flip_v: bool,
) -> Result<Vec<i32>, GeometryError> {
    mirror_sequence(ids, columns, rows, flip_h, flip_v)
}

/// A fixed grid of equally sized cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub columns: u32,
    pub rows: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Grid {
    /// Size a grid holding `cells` entries inside a composite `bounds_width`
    /// pixels wide.
    ///
    /// Columns are `ceil(bounds_width / cell_width)` and rows are
    /// `ceil(cells / columns)`. Fails when the cell has no area or the bounds
    /// yield zero columns.
    pub fn fit(
        cells: usize,
        bounds_width: u32,
        cell_width: u32,
        cell_height: u32,
    ) -> Result<Self, GeometryError> {
        if cell_width == 0 || cell_height == 0 {
            return Err(GeometryError::ZeroCellSize { width: cell_width, height: cell_height });
        }
        let columns = ceil_div(bounds_width, cell_width)?;
        let count = u32::try_from(cells).map_err(|_| GeometryError::TooManyCells { cells })?;
        let rows = ceil_div(count, columns)?;
        Ok(Self { columns, rows, cell_width, cell_height })
    }

    /// Total number of cells, including padding on a partial last row.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.columns) * u64::from(self.rows)
    }

    /// Where cell `index` lands when the grid is mirrored.
    pub fn mirror_index(&self, index: u64, flip_h: bool, flip_v: bool) -> u64 {
        mirror_index(index, self.columns.into(), self.rows.into(), flip_h, flip_v)
    }

    /// Pixel offset of the cell at `index`.
    pub fn cell_position(&self, index: u64) -> Result<(i64, i64), GeometryError> {
        cell_position(index, self.columns, self.cell_width, self.cell_height)
    }
}
