use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Linear RGBA color. Compared by exact value, never by tolerance.
pub type Color = [f32; 4];

/// A 2D texture coordinate.
pub type Point2D = Vec2;

/// A tile rectangle in pixel coordinates (inclusive bounds) and its color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileInfo {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
    /// Color in the same linear RGBA format as the input faces
    pub color: Color,
}

impl TileInfo {
    /// Width in pixels, counting both edges
    #[inline]
    pub fn pixel_width(&self) -> u32 {
        self.x2 - self.x1 + 1
    }

    /// Height in pixels, counting both edges
    #[inline]
    pub fn pixel_height(&self) -> u32 {
        self.y2 - self.y1 + 1
    }

    /// Check if a pixel lies inside the tile
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// Check if two tile rectangles share at least one pixel
    pub fn overlaps(&self, other: &TileInfo) -> bool {
        self.x1 <= other.x2 && other.x1 <= self.x2 && self.y1 <= other.y2 && other.y1 <= self.y2
    }
}

/// One polygon as seen by the atlas: its material color and UV loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceInput {
    pub color: Color,
    /// One coordinate per vertex loop, in loop order
    pub uvs: Vec<Point2D>,
}

impl FaceInput {
    pub fn new(color: Color, uvs: Vec<Point2D>) -> Self {
        Self { color, uvs }
    }
}
