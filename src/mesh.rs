//! Vertex data ready for upload.
//!
//! A [`Mesh`] bundles the three arrays a draw call needs: positions, index
//! triples and per-vertex colors. It can come from the built-in demo scene or
//! from a Wavefront OBJ file.

use std::path::Path;

use thiserror::Error;

use crate::buffers::IndexTriple;
use crate::math::Vec3;

#[derive(Error, Debug)]
pub enum MeshError {
    #[error("failed to load OBJ file: {0}")]
    Obj(#[from] tobj::LoadError),
    #[error("OBJ file contains no triangles")]
    Empty,
    #[error("OBJ model '{0}' has an index count that is not a multiple of 3")]
    NotTriangulated(String),
}

/// Positions, faces and colors sharing one vertex indexing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub indices: Vec<IndexTriple>,
    pub colors: Vec<Vec3>,
}

impl Mesh {
    /// Two overlapping flat triangles at different depths, seen from z = +5.
    ///
    /// The nearer one (z = -2) is pale green, the farther one (z = -5) pale blue.
    pub fn demo() -> Self {
        let green = Vec3::from_rgb8(217, 238, 185);
        let blue = Vec3::from_rgb8(185, 217, 238);
        Self {
            positions: vec![
                Vec3::new(2.0, 0.0, -2.0),
                Vec3::new(0.0, 2.0, -2.0),
                Vec3::new(-2.0, 0.0, -2.0),
                Vec3::new(3.5, -1.0, -5.0),
                Vec3::new(2.5, 1.5, -5.0),
                Vec3::new(-1.0, 0.5, -5.0),
            ],
            indices: vec![[0, 1, 2], [3, 4, 5]],
            colors: vec![green, green, green, blue, blue, blue],
        }
    }

    /// Loads every model in an OBJ file into one mesh.
    ///
    /// Faces are triangulated on load. Vertex colors are taken from the file
    /// when present, otherwise every vertex gets `fallback_color`.
    pub fn from_obj<P: AsRef<Path>>(path: P, fallback_color: Vec3) -> Result<Self, MeshError> {
        let (models, _materials) = tobj::load_obj(path.as_ref(), &tobj::GPU_LOAD_OPTIONS)?;

        let mut mesh = Mesh::default();
        for model in &models {
            let data = &model.mesh;
            if data.indices.len() % 3 != 0 {
                return Err(MeshError::NotTriangulated(model.name.clone()));
            }

            let base = mesh.positions.len() as u32;
            let vertex_count = data.positions.len() / 3;
            mesh.positions
                .extend(data.positions.chunks_exact(3).map(|p| Vec3::new(p[0], p[1], p[2])));

            if data.vertex_color.len() == data.positions.len() {
                mesh.colors
                    .extend(data.vertex_color.chunks_exact(3).map(|c| Vec3::new(c[0], c[1], c[2])));
            } else {
                mesh.colors
                    .extend(std::iter::repeat(fallback_color).take(vertex_count));
            }

            mesh.indices.extend(
                data.indices
                    .chunks_exact(3)
                    .map(|f| [base + f[0], base + f[1], base + f[2]]),
            );
        }

        if mesh.indices.is_empty() {
            return Err(MeshError::Empty);
        }
        log::info!(
            "loaded {} vertices and {} faces from {}",
            mesh.positions.len(),
            mesh.indices.len(),
            path.as_ref().display()
        );
        Ok(mesh)
    }

    pub fn face_count(&self) -> usize {
        self.indices.len()
    }
}
