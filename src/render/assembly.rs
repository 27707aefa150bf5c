//! Triangle assembly: object space to screen space.
//!
//! For each face the three positions are promoted to homogeneous points,
//! multiplied by the MVP matrix, divided by w and mapped from NDC onto the
//! pixel grid. Colors ride along by the same indices.

use crate::buffers::{BufferKind, IndexTriple};
use crate::config::DepthRange;
use crate::error::RasterError;
use crate::geometry::to_vec4;
use crate::math::{Mat4, Vec3, Vec4};

use super::triangle::Triangle;

/// NDC to pixel mapping for a `width x height` target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
    f1: f32,
    f2: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, depth_range: DepthRange) -> Self {
        let (f1, f2) = depth_range.coefficients();
        Self {
            width: width as f32,
            height: height as f32,
            f1,
            f2,
        }
    }

    /// Maps NDC x, y in [-1, 1] to [0, width] x [0, height] and remaps z.
    /// w is passed through untouched.
    #[inline]
    pub fn apply(&self, ndc: Vec4) -> Vec4 {
        Vec4::new(
            0.5 * self.width * (ndc.x + 1.0),
            0.5 * self.height * (ndc.y + 1.0),
            ndc.z * self.f1 + self.f2,
            ndc.w,
        )
    }
}

/// Checks every face against the buffer lengths before anything is drawn.
pub fn validate_faces(
    indices: &[IndexTriple],
    position_count: usize,
    color_count: usize,
) -> Result<(), RasterError> {
    for (face, triple) in indices.iter().enumerate() {
        for &index in triple {
            for (kind, len) in [
                (BufferKind::Position, position_count),
                (BufferKind::Color, color_count),
            ] {
                if index as usize >= len {
                    return Err(RasterError::IndexOutOfBounds {
                        face,
                        index,
                        kind,
                        len,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Builds the screen-space triangle for one face.
///
/// Indices must already be validated. Returns `None` when a vertex cannot be
/// projected: clip-space w of zero, or any non-finite coordinate.
pub fn assemble(
    face: IndexTriple,
    positions: &[Vec3],
    colors: &[Vec3],
    mvp: &Mat4,
    viewport: &Viewport,
) -> Option<Triangle> {
    let mut vertices = [Vec4::ZERO; 3];
    for (vertex, &index) in vertices.iter_mut().zip(face.iter()) {
        let clip = *mvp * to_vec4(positions[index as usize], 1.0);
        if clip.w == 0.0 || !clip.w.is_finite() {
            return None;
        }

        // Homogeneous division keeps the original w for reference.
        let ndc = Vec4::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w, clip.w);
        let screen = viewport.apply(ndc);
        if !(screen.x.is_finite() && screen.y.is_finite() && screen.z.is_finite()) {
            return None;
        }
        *vertex = screen;
    }

    let colors = face.map(|index| colors[index as usize]);
    Some(Triangle::new(vertices, colors))
}
