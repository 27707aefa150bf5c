use std::ops::Mul;

/// 3D vector. Used for object-space positions and for linear RGB colors.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Build a color from 8-bit channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub fn scale(&self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

/// Scalar multiplication of a vector.
impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn color_scaling_is_per_channel() {
        let c = Vec3::new(0.8, 0.4, 1.0) * 0.25;
        assert_relative_eq!(c.x, 0.2, epsilon = 1e-6);
        assert_relative_eq!(c.y, 0.1, epsilon = 1e-6);
        assert_relative_eq!(c.z, 0.25);
    }

    #[test]
    fn from_rgb8_normalizes_channels() {
        let c = Vec3::from_rgb8(255, 0, 51);
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 0.0);
        assert_relative_eq!(c.z, 0.2, epsilon = 1e-6);
    }
}
