//! Shared settings for atlas generation
//!
//! This crate is the single source of truth for the image size, tile size,
//! target image name and color encoding used by the atlas core and by any
//! host that drives it.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Default atlas image width in pixels
pub const DEFAULT_IMAGE_WIDTH: u32 = 512;

/// Default atlas image height in pixels
pub const DEFAULT_IMAGE_HEIGHT: u32 = 512;

/// Default tile width in pixels
pub const DEFAULT_TILE_WIDTH: u32 = 64;

/// Default tile height in pixels
pub const DEFAULT_TILE_HEIGHT: u32 = 64;

/// Default name of the image the host writes the atlas into
pub const DEFAULT_IMAGE_NAME: &str = "texture_atlas";

/// Default inset (pixels) between a tile's edge and its remapped UVs
pub const DEFAULT_MARGIN: f32 = 5.0;

/// Allowed image width/height in pixels
pub const IMAGE_SIZE_RANGE: RangeInclusive<u32> = 64..=4096;

/// Allowed tile width/height in pixels
pub const TILE_SIZE_RANGE: RangeInclusive<u32> = 8..=512;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("Image name can't be empty")]
    EmptyImageName,
    #[error("Margin must be finite and non-negative, got {0}")]
    InvalidMargin(f32),
}

/// Settings for one atlas build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasSettings {
    /// Atlas image width in pixels
    pub image_width: u32,
    /// Atlas image height in pixels
    pub image_height: u32,
    /// Width of each color tile in pixels
    pub tile_width: u32,
    /// Height of each color tile in pixels
    pub tile_height: u32,
    /// Name of the image resource the host stores the atlas under
    pub image_name: String,
    /// Convert linear colors to sRGB before painting
    pub use_srgb: bool,
    /// Inset in pixels kept empty around the remapped UVs of each tile
    pub margin: f32,
}

impl Default for AtlasSettings {
    fn default() -> Self {
        Self {
            image_width: DEFAULT_IMAGE_WIDTH,
            image_height: DEFAULT_IMAGE_HEIGHT,
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            image_name: DEFAULT_IMAGE_NAME.to_string(),
            use_srgb: true,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl AtlasSettings {
    /// Create settings with the given image and tile dimensions, defaults elsewhere
    pub fn new(image_size: (u32, u32), tile_size: (u32, u32)) -> Self {
        Self {
            image_width: image_size.0,
            image_height: image_size.1,
            tile_width: tile_size.0,
            tile_height: tile_size.1,
            ..Self::default()
        }
    }

    /// Image dimensions as (width, height)
    pub fn image_size(&self) -> (u32, u32) {
        (self.image_width, self.image_height)
    }

    /// Tile dimensions as (width, height)
    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// Check every setting against its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("image_width", self.image_width, &IMAGE_SIZE_RANGE)?;
        check_range("image_height", self.image_height, &IMAGE_SIZE_RANGE)?;
        check_range("tile_width", self.tile_width, &TILE_SIZE_RANGE)?;
        check_range("tile_height", self.tile_height, &TILE_SIZE_RANGE)?;

        if self.image_name.trim().is_empty() {
            return Err(ConfigError::EmptyImageName);
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ConfigError::InvalidMargin(self.margin));
        }

        Ok(())
    }
}

fn check_range(
    field: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<(), ConfigError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AtlasSettings::default();
        assert_eq!(settings.image_size(), (512, 512));
        assert_eq!(settings.tile_size(), (64, 64));
        assert_eq!(settings.image_name, "texture_atlas");
        assert!(settings.use_srgb);
        assert_eq!(settings.margin, DEFAULT_MARGIN);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_out_of_range() {
        let settings = AtlasSettings::new((32, 512), (64, 64));
        assert_eq!(
            settings.validate(),
            Err(ConfigError::OutOfRange {
                field: "image_width",
                value: 32,
                min: 64,
                max: 4096,
            })
        );

        let settings = AtlasSettings::new((512, 512), (64, 1024));
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::OutOfRange { field: "tile_height", .. })
        ));
    }

    #[test]
    fn test_empty_name_and_bad_margin() {
        let mut settings = AtlasSettings::default();
        settings.image_name = "  ".to_string();
        assert_eq!(settings.validate(), Err(ConfigError::EmptyImageName));

        let mut settings = AtlasSettings::default();
        settings.margin = -1.0;
        assert!(matches!(settings.validate(), Err(ConfigError::InvalidMargin(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: AtlasSettings =
            serde_json::from_str(r#"{ "image_width": 1024, "use_srgb": false }"#).unwrap();
        assert_eq!(settings.image_width, 1024);
        assert_eq!(settings.image_height, DEFAULT_IMAGE_HEIGHT);
        assert!(!settings.use_srgb);
        assert_eq!(settings.image_name, DEFAULT_IMAGE_NAME);
    }
}
