//! Ordered association from color to the faces that use it

use crate::types::{Color, FaceInput};

/// Faces grouped by exact color, in order of first appearance.
///
/// Colors are compared with `==` on every channel. Colors that differ only
/// in the last bit are separate groups and get separate tiles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorGroups {
    groups: Vec<(Color, Vec<usize>)>,
}

impl ColorGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group face indices by color
    pub fn from_faces(faces: &[FaceInput]) -> Self {
        let mut groups = Self::new();
        for (index, face) in faces.iter().enumerate() {
            groups.insert(face.color, index);
        }
        groups
    }

    /// Add a face to its color's group, creating the group if needed
    pub fn insert(&mut self, color: Color, face: usize) {
        match self.groups.iter_mut().find(|(c, _)| *c == color) {
            Some((_, faces)) => faces.push(face),
            None => self.groups.push((color, vec![face])),
        }
    }

    /// Distinct colors in first-seen order
    pub fn colors(&self) -> Vec<Color> {
        self.groups.iter().map(|(color, _)| *color).collect()
    }

    /// Position of a color in [`colors`](Self::colors), if present
    pub fn index_of(&self, color: &Color) -> Option<usize> {
        self.groups.iter().position(|(c, _)| c == color)
    }

    /// Faces using the given color
    pub fn faces_for(&self, color: &Color) -> Option<&[usize]> {
        self.groups
            .iter()
            .find(|(c, _)| c == color)
            .map(|(_, faces)| faces.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Color, &[usize])> {
        self.groups.iter().map(|(color, faces)| (color, faces.as_slice()))
    }

    /// Number of distinct colors
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
