use crate::math::{Vec2, Vec3, Vec4};

/// A triangle ready for rasterization in screen space.
///
/// x and y are pixel coordinates with the origin at the bottom-left, z is the
/// depth after the viewport remap, and w is the clip-space w the vertex was
/// divided by.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec4; 3],
    pub colors: [Vec3; 3],
}

impl Triangle {
    pub fn new(vertices: [Vec4; 3], colors: [Vec3; 3]) -> Self {
        Self { vertices, colors }
    }

    /// Flat fill color: the color of the first vertex.
    #[inline]
    pub fn color(&self) -> Vec3 {
        self.colors[0]
    }

    /// Vertex positions projected onto the screen plane.
    #[inline]
    pub fn screen_points(&self) -> [Vec2; 3] {
        self.vertices.map(|v| Vec2::new(v.x, v.y))
    }

    /// Vertex depths after the viewport remap.
    #[inline]
    pub fn depths(&self) -> [f32; 3] {
        self.vertices.map(|v| v.z)
    }
}
