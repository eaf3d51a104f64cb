//! Paint tile colors into a pixel buffer

use tracing::debug;

use crate::color::encode_color;
use crate::constants::CHANNELS;
use crate::error::AtlasError;
use crate::surface::{pixel_offset, row_count};
use crate::types::TileInfo;

/// Fill every tile rectangle with its color and return the painted copy.
///
/// `pixels` is a flat RGBA buffer `width` pixels wide and is left untouched.
/// With `gamma_encode` all four channels (alpha too) go through
/// [`to_gamma`](crate::color::to_gamma). Tiles are painted in order, so a
/// later tile wins where rectangles overlap.
///
/// Fails before writing anything if the buffer isn't a whole number of rows,
/// a tile has inverted bounds or a tile reaches outside the image.
pub fn paint_tiles(
    tiles: &[TileInfo],
    pixels: &[f32],
    width: u32,
    gamma_encode: bool,
) -> Result<Vec<f32>, AtlasError> {
    let height = row_count(pixels.len(), width)?;

    if let Some(tile) = tiles.iter().find(|t| t.x1 > t.x2 || t.y1 > t.y2) {
        return Err(AtlasError::DegenerateTile {
            width: tile.x2 as f32 - tile.x1 as f32,
            height: tile.y2 as f32 - tile.y1 as f32,
            margin: 0.0,
        });
    }
    if let Some(tile) = tiles.iter().find(|t| t.x2 >= width || t.y2 >= height) {
        return Err(AtlasError::TileOutOfBounds {
            x2: tile.x2,
            y2: tile.y2,
            width,
            height,
        });
    }

    debug!(
        "paint_tiles: {} tiles into {}x{}, gamma_encode={}",
        tiles.len(),
        width,
        height,
        gamma_encode
    );

    let mut out = pixels.to_vec();
    for tile in tiles {
        let color = if gamma_encode {
            encode_color(tile.color)
        } else {
            tile.color
        };

        for y in tile.y1..=tile.y2 {
            let row_start = pixel_offset(tile.x1, y, width);
            let row_end = pixel_offset(tile.x2, y, width) + CHANNELS;
            for pixel in out[row_start..row_end].chunks_exact_mut(CHANNELS) {
                pixel.copy_from_slice(&color);
            }
        }
    }

    Ok(out)
}
