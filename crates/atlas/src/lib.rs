//! Color tile atlas generation
//!
//! This crate packs per-face colors into a grid of uniform tiles and rewrites
//! each face's UVs into its tile:
//! - [`layout`] - Row-major tile layout with capacity checks
//! - [`remap`] - Bounding-box UV remapping into a tile
//! - [`color`] - Linear to sRGB conversion
//! - [`surface`] - Flat RGBA `f32` pixel buffer
//! - [`paint`] - Tile painting into a pixel buffer
//! - [`groups`] - Ordered color to face association
//! - [`generator`] - Complete atlas build
//! - [`host`] - Seam between the core and the application that owns the scene

pub mod color;
pub mod constants;
pub mod error;
pub mod generator;
pub mod groups;
pub mod host;
pub mod layout;
pub mod paint;
pub mod remap;
pub mod surface;
pub mod types;

pub use color::*;
pub use constants::*;
pub use error::*;
pub use generator::*;
pub use groups::*;
pub use host::*;
pub use layout::*;
pub use paint::*;
pub use remap::*;
pub use surface::*;
pub use types::*;

pub use atlasgen_config::AtlasSettings;
