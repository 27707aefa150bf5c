//! Model, view and projection matrices consumed by every draw.
//!
//! Provides a [`Transforms`] struct with a fluent API:
//!
//! ```ignore
//! let mut transforms = Transforms::new();
//! transforms
//!     .set_model(Mat4::rotation_z(angle))
//!     .set_view(Mat4::translation(0.0, 0.0, -5.0));
//! ```

use crate::math::mat4::Mat4;

/// The three matrices applied to object-space positions.
///
/// All default to identity. Matrices are taken as given; no validation is
/// performed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transforms {
    model: Mat4,
    view: Mat4,
    projection: Mat4,
}

impl Transforms {
    /// Identity model, view and projection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> Mat4 {
        self.model
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn set_model(&mut self, model: Mat4) -> &mut Self {
        self.model = model;
        self
    }

    pub fn set_view(&mut self, view: Mat4) -> &mut Self {
        self.view = view;
        self
    }

    pub fn set_projection(&mut self, projection: Mat4) -> &mut Self {
        self.projection = projection;
        self
    }

    /// `projection * view * model`: model is applied first.
    pub fn mvp(&self) -> Mat4 {
        self.projection * self.view * self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec4;

    #[test]
    fn test_default_is_identity() {
        let t = Transforms::default();
        assert_eq!(t.model(), Mat4::identity());
        assert_eq!(t.view(), Mat4::identity());
        assert_eq!(t.projection(), Mat4::identity());
        assert_eq!(t.mvp(), Mat4::identity());
    }

    #[test]
    fn test_fluent_api() {
        let mut t = Transforms::new();
        t.set_model(Mat4::scaling(2.0, 2.0, 2.0))
            .set_view(Mat4::translation(0.0, 0.0, -5.0));
        assert_eq!(t.model(), Mat4::scaling(2.0, 2.0, 2.0));
        assert_eq!(t.view(), Mat4::translation(0.0, 0.0, -5.0));
    }

    #[test]
    fn test_mvp_order() {
        let mut t = Transforms::new();
        t.set_model(Mat4::scaling(2.0, 2.0, 2.0))
            .set_view(Mat4::translation(1.0, 0.0, 0.0))
            .set_projection(Mat4::scaling(1.0, 3.0, 1.0));
        // scale by 2, then move x by 1, then stretch y by 3
        let p = t.mvp() * Vec4::new(1.0, 1.0, 0.0, 1.0);
        assert_eq!(p, Vec4::new(3.0, 6.0, 0.0, 1.0));
    }
}
