//! JSON scene files and the file-backed atlas host

use std::fs;
use std::path::{Path, PathBuf};

use atlas::{AtlasError, AtlasHost, FaceInput, PixelBuffer, Point2D, decode_color};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One face in a scene file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFace {
    /// Material base color as RGBA
    pub color: [f32; 4],
    /// UV per vertex loop
    pub uvs: Vec<Point2D>,
    /// Color is sRGB encoded and must be linearized before packing
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub srgb: bool,
}

/// A scene file: the faces of one object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    pub faces: Vec<SceneFace>,
}

impl SceneFile {
    pub fn load(path: &Path) -> Result<Self, AtlasError> {
        let text = fs::read_to_string(path)
            .map_err(|e| AtlasError::Host(format!("Failed to read {}: {e}", path.display())))?;
        serde_json::from_str(&text)
            .map_err(|e| AtlasError::Host(format!("Invalid scene file {}: {e}", path.display())))
    }

    pub fn save(&self, path: &Path) -> Result<(), AtlasError> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| AtlasError::Host(format!("Failed to serialize scene: {e}")))?;
        fs::write(path, text)
            .map_err(|e| AtlasError::Host(format!("Failed to write {}: {e}", path.display())))
    }

    /// Faces in the linear color space the atlas works in
    pub fn atlas_faces(&self) -> Vec<FaceInput> {
        self.faces
            .iter()
            .map(|face| {
                let color = if face.srgb { decode_color(face.color) } else { face.color };
                FaceInput::new(color, face.uvs.clone())
            })
            .collect()
    }
}

/// Host that reads faces from a scene file, writes the atlas as PNG and the
/// updated scene as JSON
pub struct FileHost {
    scene: SceneFile,
    image_path: PathBuf,
    uv_path: Option<PathBuf>,
}

impl FileHost {
    pub fn new(scene: SceneFile, image_path: PathBuf, uv_path: Option<PathBuf>) -> Self {
        Self {
            scene,
            image_path,
            uv_path,
        }
    }

    pub fn scene(&self) -> &SceneFile {
        &self.scene
    }
}

impl AtlasHost for FileHost {
    fn faces(&self) -> Result<Vec<FaceInput>, AtlasError> {
        Ok(self.scene.atlas_faces())
    }

    fn commit_image(&mut self, name: &str, pixels: &PixelBuffer) -> Result<(), AtlasError> {
        let image = image::RgbaImage::from_raw(pixels.width, pixels.height, pixels.to_rgba8())
            .ok_or_else(|| AtlasError::Host("Failed to create image from raw pixels".to_string()))?;
        image
            .save(&self.image_path)
            .map_err(|e| AtlasError::Host(format!("Failed to save {}: {e}", self.image_path.display())))?;

        info!(
            "Wrote atlas '{}' ({}x{}) to {}",
            name,
            pixels.width,
            pixels.height,
            self.image_path.display()
        );
        Ok(())
    }

    fn write_uvs(&mut self, face_uvs: &[Vec<Point2D>]) -> Result<(), AtlasError> {
        if face_uvs.len() != self.scene.faces.len() {
            return Err(AtlasError::Host(format!(
                "expected UVs for {} faces, got {}",
                self.scene.faces.len(),
                face_uvs.len()
            )));
        }
        for (face, uvs) in self.scene.faces.iter_mut().zip(face_uvs) {
            face.uvs.clone_from(uvs);
        }

        match &self.uv_path {
            Some(path) => {
                self.scene.save(path)?;
                info!("Wrote remapped UVs to {}", path.display());
            }
            None => debug!("write_uvs: no UV output path, keeping UVs in memory"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas::{AtlasSettings, run};
    use glam::Vec2;

    const SCENE: &str = r#"{
        "faces": [
            { "color": [1.0, 0.0, 0.0, 1.0], "uvs": [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]] },
            { "color": [0.5, 0.5, 0.5, 1.0], "uvs": [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]], "srgb": true }
        ]
    }"#;

    #[test]
    fn test_parse_scene() {
        let scene: SceneFile = serde_json::from_str(SCENE).unwrap();
        assert_eq!(scene.faces.len(), 2);
        assert!(!scene.faces[0].srgb);
        assert_eq!(scene.faces[1].uvs[2], Vec2::new(0.0, 1.0));

        let faces = scene.atlas_faces();
        assert_eq!(faces[0].color, [1.0, 0.0, 0.0, 1.0]);
        assert!((faces[1].color[0] - 0.214).abs() < 1e-3);
    }

    #[test]
    fn test_file_host_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = dir.path().join("atlas.png");
        let uv_path = dir.path().join("scene.out.json");

        let scene: SceneFile = serde_json::from_str(SCENE).unwrap();
        let mut host = FileHost::new(scene, image_path.clone(), Some(uv_path.clone()));

        let settings = AtlasSettings::new((128, 64), (64, 64));
        run(&mut host, &settings).unwrap();

        let png = image::open(&image_path).unwrap().to_rgba8();
        assert_eq!(png.dimensions(), (128, 64));
        // Bottom-left pixel belongs to the first tile (red)
        assert_eq!(png.get_pixel(0, 63).0, [255, 0, 0, 255]);

        let written = SceneFile::load(&uv_path).unwrap();
        assert_eq!(written.faces.len(), 2);
        assert!(written.faces[1].srgb);
        assert!(written.faces[1].uvs.iter().all(|uv| uv.x >= 0.5 && uv.x <= 1.0));
    }

    #[test]
    fn test_missing_scene_file() {
        let result = SceneFile::load(Path::new("/nonexistent/scene.json"));
        assert!(matches!(result, Err(AtlasError::Host(_))));
    }
}
