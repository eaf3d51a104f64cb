//! Error types for atlas generation.

use atlasgen_config::ConfigError;
use thiserror::Error;

/// Errors that can occur while building an atlas.
///
/// Every variant is a precondition failure detected before any output is
/// produced. Retrying with the same inputs gives the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AtlasError {
    #[error(
        "Insufficient image dimensions for {requested} tiles. \
         The current image size only fits {capacity} tiles."
    )]
    InsufficientCapacity { requested: usize, capacity: usize },

    #[error("Tile of {width}x{height} pixels is too small for a margin of {margin}")]
    DegenerateTile { width: f32, height: f32, margin: f32 },

    #[error("UV bounds have zero extent ({width}x{height}), can't scale into a tile")]
    DegenerateInput { width: f32, height: f32 },

    #[error("No UV coordinates to remap")]
    EmptyInput,

    #[error("width can't be 0")]
    InvalidWidth,

    #[error("Pixel buffer of {len} values is not a whole number of {width}-pixel RGBA rows")]
    BufferSizeMismatch { len: usize, width: u32 },

    #[error("Tile reaching ({x2}, {y2}) lies outside the {width}x{height} image")]
    TileOutOfBounds {
        x2: u32,
        y2: u32,
        width: u32,
        height: u32,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Host error: {0}")]
    Host(String),
}
