//! Row-major tile layout for a fixed tile size

use tracing::debug;

use crate::error::AtlasError;
use crate::types::{Color, TileInfo};

/// Number of whole tiles along each axis as (x_tiles, y_tiles)
pub fn grid_dimensions(canvas: (u32, u32), tile: (u32, u32)) -> Result<(u32, u32), AtlasError> {
    let (tile_width, tile_height) = tile;
    if tile_width == 0 || tile_height == 0 {
        return Err(AtlasError::DegenerateTile {
            width: tile_width as f32,
            height: tile_height as f32,
            margin: 0.0,
        });
    }
    Ok((canvas.0 / tile_width, canvas.1 / tile_height))
}

/// Number of tiles the canvas can hold
pub fn grid_capacity(canvas: (u32, u32), tile: (u32, u32)) -> Result<usize, AtlasError> {
    let (x_tiles, y_tiles) = grid_dimensions(canvas, tile)?;
    Ok(x_tiles as usize * y_tiles as usize)
}

/// Rectangle of the `index`-th grid cell in row-major order.
///
/// Returns None when a row holds no cells, the tile size is zero, or the
/// cell's pixel coordinates don't fit in `u32`.
pub fn tile_for_index(index: usize, x_tiles: u32, tile: (u32, u32), color: Color) -> Option<TileInfo> {
    let (tile_width, tile_height) = tile;
    if x_tiles == 0 || tile_width == 0 || tile_height == 0 {
        return None;
    }
    let row = u32::try_from(index / x_tiles as usize).ok()?;
    let col = (index % x_tiles as usize) as u32;

    let x1 = col.checked_mul(tile_width)?;
    let y1 = row.checked_mul(tile_height)?;
    Some(TileInfo {
        x1,
        y1,
        x2: x1.checked_add(tile_width - 1)?,
        y2: y1.checked_add(tile_height - 1)?,
        color,
    })
}

/// Assign one tile per color, filling the grid row by row.
///
/// The i-th color always gets the i-th cell, so a tile can be found again from
/// the color's position in `colors`. Cells past the last color stay unassigned.
pub fn layout_tiles(
    canvas: (u32, u32),
    tile: (u32, u32),
    colors: &[Color],
) -> Result<Vec<TileInfo>, AtlasError> {
    let (x_tiles, y_tiles) = grid_dimensions(canvas, tile)?;
    let capacity = x_tiles as usize * y_tiles as usize;

    if capacity < colors.len() {
        return Err(AtlasError::InsufficientCapacity {
            requested: colors.len(),
            capacity,
        });
    }

    debug!(
        "layout_tiles: canvas={}x{}, tile={}x{}, grid={}x{}, colors={}",
        canvas.0,
        canvas.1,
        tile.0,
        tile.1,
        x_tiles,
        y_tiles,
        colors.len()
    );

    colors
        .iter()
        .enumerate()
        .map(|(index, &color)| {
            tile_for_index(index, x_tiles, tile, color).ok_or(AtlasError::InsufficientCapacity {
                requested: colors.len(),
                capacity,
            })
        })
        .collect()
}
