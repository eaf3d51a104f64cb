//! Seam between the atlas core and the application that owns the scene
//!
//! The core never reads or writes host state directly. A host hands over the
//! faces it wants packed, then receives the painted image and the new UVs.

use std::collections::HashMap;

use tracing::debug;

use crate::error::AtlasError;
use crate::generator::{AtlasOutput, generate_atlas};
use crate::surface::PixelBuffer;
use crate::types::{FaceInput, Point2D};
use atlasgen_config::AtlasSettings;

/// Source of faces and destination of atlas results
pub trait AtlasHost {
    /// Faces to pack, each with its material color and UV loop
    fn faces(&self) -> Result<Vec<FaceInput>, AtlasError>;

    /// Store the atlas image under `name`, replacing any existing image of that name
    fn commit_image(&mut self, name: &str, pixels: &PixelBuffer) -> Result<(), AtlasError>;

    /// Write new UVs back, one list per face in the order returned by [`faces`](Self::faces)
    fn write_uvs(&mut self, face_uvs: &[Vec<Point2D>]) -> Result<(), AtlasError>;
}

/// Generate an atlas for the host's faces and commit the results.
///
/// Nothing is written to the host if generation fails.
pub fn run<H: AtlasHost + ?Sized>(host: &mut H, settings: &AtlasSettings) -> Result<AtlasOutput, AtlasError> {
    let faces = host.faces()?;
    let output = generate_atlas(settings, &faces)?;

    debug!("run: committing image '{}'", output.image_name);
    host.commit_image(&output.image_name, &output.pixels)?;
    host.write_uvs(&output.face_uvs)?;

    Ok(output)
}

/// In-memory host holding faces and committed images
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    pub faces: Vec<FaceInput>,
    pub images: HashMap<String, PixelBuffer>,
}

impl MemoryHost {
    pub fn new(faces: Vec<FaceInput>) -> Self {
        Self {
            faces,
            images: HashMap::new(),
        }
    }

    /// Get a committed image by name
    pub fn image(&self, name: &str) -> Option<&PixelBuffer> {
        self.images.get(name)
    }
}

impl AtlasHost for MemoryHost {
    fn faces(&self) -> Result<Vec<FaceInput>, AtlasError> {
        Ok(self.faces.clone())
    }

    fn commit_image(&mut self, name: &str, pixels: &PixelBuffer) -> Result<(), AtlasError> {
        self.images.insert(name.to_string(), pixels.clone());
        Ok(())
    }

    fn write_uvs(&mut self, face_uvs: &[Vec<Point2D>]) -> Result<(), AtlasError> {
        if face_uvs.len() != self.faces.len() {
            return Err(AtlasError::Host(format!(
                "expected UVs for {} faces, got {}",
                self.faces.len(),
                face_uvs.len()
            )));
        }
        for (face, uvs) in self.faces.iter_mut().zip(face_uvs) {
            face.uvs.clone_from(uvs);
        }
        Ok(())
    }
}
