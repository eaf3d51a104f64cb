//! Complete atlas build from faces to painted image and new UVs

use glam::Vec2;
use tracing::{debug, info};

use crate::error::AtlasError;
use crate::groups::ColorGroups;
use crate::layout::layout_tiles;
use crate::paint::paint_tiles;
use crate::remap::remap_uvs;
use crate::surface::PixelBuffer;
use crate::types::{FaceInput, Point2D, TileInfo};
use atlasgen_config::AtlasSettings;

/// Result of an atlas build, ready for the host to commit
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasOutput {
    /// Name of the image the host should store the atlas under
    pub image_name: String,
    pub width: u32,
    pub height: u32,
    /// Painted atlas image
    pub pixels: PixelBuffer,
    /// One tile per distinct color, in first-seen color order
    pub tiles: Vec<TileInfo>,
    /// New UVs (0..1) per input face, same length and order as each face's input UVs
    pub face_uvs: Vec<Vec<Point2D>>,
}

/// Build an atlas for `faces`.
///
/// Faces sharing an exact color share a tile. All UVs of a color's faces are
/// fitted into that tile together, then normalized to 0..1 over the image.
pub fn generate_atlas(settings: &AtlasSettings, faces: &[FaceInput]) -> Result<AtlasOutput, AtlasError> {
    settings.validate()?;

    let (width, height) = settings.image_size();
    let groups = ColorGroups::from_faces(faces);
    debug!(
        "generate_atlas: {} faces, {} distinct colors",
        faces.len(),
        groups.len()
    );

    let tiles = layout_tiles(settings.image_size(), settings.tile_size(), &groups.colors())?;

    let mut face_uvs: Vec<Vec<Point2D>> = faces.iter().map(|f| Vec::with_capacity(f.uvs.len())).collect();
    let image_scale = Vec2::new(width as f32, height as f32);

    // Layout order matches group order, so tile i belongs to group i
    for ((_, face_indices), tile) in groups.iter().zip(&tiles) {
        let uvs: Vec<Point2D> = face_indices
            .iter()
            .flat_map(|&i| faces[i].uvs.iter().copied())
            .collect();

        let remapped = remap_uvs(tile, &uvs, settings.margin)?;

        let mut normalized = remapped.into_iter().map(|uv| uv / image_scale);
        for &i in face_indices {
            face_uvs[i].extend(normalized.by_ref().take(faces[i].uvs.len()));
        }
    }

    let blank = PixelBuffer::new(width, height);
    let painted = paint_tiles(&tiles, blank.channels(), width, settings.use_srgb)?;
    let pixels = PixelBuffer::from_raw(width, painted)?;

    info!(
        "Generated atlas '{}' ({}x{}) with {} tiles",
        settings.image_name,
        width,
        height,
        tiles.len()
    );

    Ok(AtlasOutput {
        image_name: settings.image_name.clone(),
        width,
        height,
        pixels,
        tiles,
        face_uvs,
    })
}
