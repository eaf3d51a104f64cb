//! Fit a set of UV coordinates into a tile rectangle

use glam::Vec2;

use crate::error::AtlasError;
use crate::types::{Point2D, TileInfo};

/// Axis-aligned bounds of a point set as (min, max).
/// Returns None for an empty set.
pub fn uv_bounds(uvs: &[Point2D]) -> Option<(Vec2, Vec2)> {
    let first = *uvs.first()?;
    Some(
        uvs.iter()
            .fold((first, first), |(min, max), &uv| (min.min(uv), max.max(uv))),
    )
}

/// Scale and translate `uvs` so their bounding box fills `tile` inset by `margin`.
///
/// Scaling is independent per axis, so aspect ratio is not preserved. The
/// result has the same length and order as the input and is in pixel units.
pub fn remap_uvs(tile: &TileInfo, uvs: &[Point2D], margin: f32) -> Result<Vec<Point2D>, AtlasError> {
    let (min, max) = uv_bounds(uvs).ok_or(AtlasError::EmptyInput)?;

    let span = Vec2::new(
        tile.x2.saturating_sub(tile.x1) as f32,
        tile.y2.saturating_sub(tile.y1) as f32,
    );
    let target = span - Vec2::splat(margin * 2.0);
    // Negated so a NaN margin is rejected too
    if !(target.x > 0.0 && target.y > 0.0) {
        return Err(AtlasError::DegenerateTile {
            width: span.x,
            height: span.y,
            margin,
        });
    }

    let extent = max - min;
    let all_finite = uvs.iter().all(|uv| uv.is_finite());
    if !all_finite || !extent.is_finite() || extent.x <= 0.0 || extent.y <= 0.0 {
        return Err(AtlasError::DegenerateInput {
            width: extent.x,
            height: extent.y,
        });
    }

    // A tiny but non-zero extent can still overflow the scale
    let scale = target / extent;
    if !scale.is_finite() {
        return Err(AtlasError::DegenerateInput {
            width: extent.x,
            height: extent.y,
        });
    }
    let offset = Vec2::new(tile.x1 as f32, tile.y1 as f32) + Vec2::splat(margin);

    Ok(uvs.iter().map(|&uv| (uv - min) * scale + offset).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(x1: u32, y1: u32, x2: u32, y2: u32) -> TileInfo {
        TileInfo { x1, y1, x2, y2, color: [1.0; 4] }
    }

    #[test]
    fn test_fits_margin_inset() {
        let t = tile(64, 0, 127, 63);
        let uvs = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.5, 1.0)];
        let out = remap_uvs(&t, &uvs, 5.0).unwrap();

        assert_eq!(out.len(), 3);
        assert!((out[0] - Vec2::new(69.0, 5.0)).length() < 1e-4);
        assert!((out[1] - Vec2::new(122.0, 5.0)).length() < 1e-4);
        assert!((out[2] - Vec2::new(95.5, 58.0)).length() < 1e-4);
    }

    #[test]
    fn test_non_uniform_scale() {
        let t = tile(0, 0, 30, 30);
        // Wide, flat input gets stretched to fill both axes
        let uvs = [Vec2::new(2.0, 3.0), Vec2::new(12.0, 4.0)];
        let out = remap_uvs(&t, &uvs, 5.0).unwrap();
        assert!((out[0] - Vec2::new(5.0, 5.0)).length() < 1e-4);
        assert!((out[1] - Vec2::new(25.0, 25.0)).length() < 1e-4);
    }

    #[test]
    fn test_preserves_order_and_length() {
        let t = tile(0, 0, 63, 63);
        let uvs: Vec<Vec2> = (0..10)
            .map(|i| Vec2::new((i * 7 % 10) as f32, (i * 3 % 10) as f32))
            .collect();
        let out = remap_uvs(&t, &uvs, 5.0).unwrap();
        assert_eq!(out.len(), uvs.len());

        // Each output point maps back to its own input point
        let scale = Vec2::splat(53.0) / Vec2::splat(9.0);
        for (input, output) in uvs.iter().zip(&out) {
            let back = (*output - Vec2::splat(5.0)) / scale;
            assert!((back - *input).length() < 1e-4);
        }
    }

    #[test]
    fn test_inverse_recovers_bounds() {
        let t = tile(128, 64, 191, 127);
        let uvs = [
            Vec2::new(0.25, 0.1),
            Vec2::new(0.75, 0.3),
            Vec2::new(0.4, 0.9),
        ];
        let margin = 5.0;
        let out = remap_uvs(&t, &uvs, margin).unwrap();

        let (in_min, in_max) = uv_bounds(&uvs).unwrap();
        let (out_min, out_max) = uv_bounds(&out).unwrap();
        let offset = Vec2::new(t.x1 as f32, t.y1 as f32) + Vec2::splat(margin);
        let scale = Vec2::new(63.0 - 2.0 * margin, 63.0 - 2.0 * margin) / (in_max - in_min);

        let min_back = (out_min - offset) / scale + in_min;
        let max_back = (out_max - offset) / scale + in_min;
        assert!((min_back - in_min).length() < 1e-5);
        assert!((max_back - in_max).length() < 1e-5);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(remap_uvs(&tile(0, 0, 63, 63), &[], 5.0), Err(AtlasError::EmptyInput));
    }

    #[test]
    fn test_degenerate_tile() {
        let uvs = [Vec2::ZERO, Vec2::ONE];
        // 8x8 tile spans 7 pixels between edges, less than 2 * 5
        let result = remap_uvs(&tile(0, 0, 7, 7), &uvs, 5.0);
        assert!(matches!(result, Err(AtlasError::DegenerateTile { .. })));

        // Exactly 2 * margin is still degenerate
        let result = remap_uvs(&tile(0, 0, 10, 20), &uvs, 5.0);
        assert!(matches!(result, Err(AtlasError::DegenerateTile { .. })));
    }

    #[test]
    fn test_degenerate_input() {
        let t = tile(0, 0, 63, 63);
        let single = [Vec2::new(0.3, 0.3)];
        assert!(matches!(
            remap_uvs(&t, &single, 5.0),
            Err(AtlasError::DegenerateInput { .. })
        ));

        let vertical_line = [Vec2::new(0.5, 0.0), Vec2::new(0.5, 1.0)];
        assert!(matches!(
            remap_uvs(&t, &vertical_line, 5.0),
            Err(AtlasError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_subnormal_extent() {
        let t = tile(0, 0, 63, 63);
        let uvs = [Vec2::ZERO, Vec2::splat(1e-45)];
        assert!(matches!(
            remap_uvs(&t, &uvs, 5.0),
            Err(AtlasError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_overflowing_extent() {
        let t = tile(0, 0, 63, 63);
        let uvs = [Vec2::new(-3e38, 0.0), Vec2::new(3e38, 1.0)];
        assert!(matches!(
            remap_uvs(&t, &uvs, 5.0),
            Err(AtlasError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_non_finite_point() {
        let t = tile(0, 0, 63, 63);
        let uvs = [Vec2::ZERO, Vec2::new(f32::NAN, 0.5), Vec2::ONE];
        assert!(matches!(
            remap_uvs(&t, &uvs, 5.0),
            Err(AtlasError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_nan_margin() {
        let t = tile(0, 0, 63, 63);
        assert!(matches!(
            remap_uvs(&t, &[Vec2::ZERO, Vec2::ONE], f32::NAN),
            Err(AtlasError::DegenerateTile { .. })
        ));
    }

    #[test]
    fn test_output_is_finite() {
        let t = tile(0, 0, 63, 63);
        let uvs = [Vec2::new(-1e30, -1e-30), Vec2::new(1e30, 1e-30), Vec2::new(0.0, 0.0)];
        let out = remap_uvs(&t, &uvs, 5.0).unwrap();
        assert!(out.iter().all(|uv| uv.is_finite()));
    }

    #[test]
    fn test_zero_margin_touches_edges() {
        let t = tile(0, 0, 63, 63);
        let out = remap_uvs(&t, &[Vec2::ZERO, Vec2::ONE], 0.0).unwrap();
        assert_eq!(out[0], Vec2::ZERO);
        assert!((out[1] - Vec2::splat(63.0)).length() < 1e-5);
    }
}
