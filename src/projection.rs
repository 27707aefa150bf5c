//! Perspective projection parameters.
//!
//! The [`Projection`] struct holds the camera frustum (FOV, aspect ratio,
//! near/far distances) and generates the matrix handed to
//! [`Rasterizer::set_projection`](crate::Rasterizer::set_projection).
//!
//! The camera looks down -Z in a right-handed frame. After the divide, the
//! near plane lands on NDC z = +1 and the far plane on z = -1, which the
//! viewport remap and depth negation turn into "smaller stored depth is
//! nearer".

use crate::math::{Mat4, Vec3};

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians.
    fov_y: f32,
    /// Aspect ratio (width / height).
    aspect_ratio: f32,
    /// Near plane distance.
    z_near: f32,
    /// Far plane distance.
    z_far: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect_ratio` - Width divided by height
    /// * `z_near` - Near plane distance (must be > 0)
    /// * `z_far` - Far plane distance (must be > z_near)
    pub fn new(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            fov_y,
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    /// Creates a projection from degrees instead of radians.
    pub fn from_degrees(fov_y_degrees: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self::new(fov_y_degrees.to_radians(), aspect_ratio, z_near, z_far)
    }

    /// Perspective squash followed by the orthographic fit to the NDC cube.
    pub fn matrix(&self) -> Mat4 {
        // Plane positions on the -Z axis.
        let n = -self.z_near;
        let f = -self.z_far;
        let top = self.z_near * (self.fov_y / 2.0).tan();
        let right = top * self.aspect_ratio;

        Mat4::new([
            [n / right, 0.0, 0.0, 0.0],
            [0.0, n / top, 0.0, 0.0],
            [0.0, 0.0, (n + f) / (n - f), -2.0 * n * f / (n - f)],
            [0.0, 0.0, 1.0, 0.0],
        ])
    }
}

/// View matrix for a camera at `eye` looking down -Z.
pub fn view_matrix(eye: Vec3) -> Mat4 {
    Mat4::translation(-eye.x, -eye.y, -eye.z)
}

/// Model matrix rotating `degrees` counter-clockwise about the Z axis.
pub fn model_matrix(degrees: f32) -> Mat4 {
    Mat4::rotation_z(degrees.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec4;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn ndc(m: Mat4, p: Vec4) -> Vec4 {
        let clip = m * p;
        Vec4::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w, 1.0)
    }

    #[test]
    fn from_degrees_matches_radians() {
        let degrees = Projection::from_degrees(90.0, 1.5, 0.5, 20.0).matrix();
        let radians = Projection::new(FRAC_PI_2, 1.5, 0.5, 20.0).matrix();
        let p = Vec4::new(1.0, 2.0, -3.0, 1.0);
        let (a, b) = (ndc(degrees, p), ndc(radians, p));
        assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn near_and_far_planes_map_to_ndc_bounds() {
        let m = Projection::from_degrees(45.0, 1.0, 0.1, 50.0).matrix();
        assert_relative_eq!(ndc(m, Vec4::new(0.0, 0.0, -0.1, 1.0)).z, 1.0, epsilon = 1e-4);
        assert_relative_eq!(ndc(m, Vec4::new(0.0, 0.0, -50.0, 1.0)).z, -1.0, epsilon = 1e-4);
    }

    #[test]
    fn frustum_edge_maps_to_ndc_edge() {
        let proj = Projection::from_degrees(90.0, 2.0, 1.0, 10.0);
        let m = proj.matrix();
        // 90 degree fov: at distance 4 the half height is 4, the half width 8.
        let top = ndc(m, Vec4::new(0.0, 4.0, -4.0, 1.0));
        let right = ndc(m, Vec4::new(8.0, 0.0, -4.0, 1.0));
        assert_relative_eq!(top.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(right.x, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn view_matrix_moves_eye_to_origin() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let p = view_matrix(eye) * Vec4::from_vec3(eye, 1.0);
        assert_eq!(p, Vec4::new(0.0, 0.0, 0.0, 1.0));
    }
}
