//! Rasterizer parameters.
//!
//! Everything here has a default matching the classic 4x supersampled
//! pipeline with a 0.1..50 depth range.

use crate::math::Vec2;

/// Near/far distances used by the viewport transform to remap NDC z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthRange {
    pub near: f32,
    pub far: f32,
}

impl DepthRange {
    pub const fn new(near: f32, far: f32) -> Self {
        Self { near, far }
    }

    /// Returns `(f1, f2)` such that `z_screen = z_ndc * f1 + f2`.
    #[inline]
    pub fn coefficients(&self) -> (f32, f32) {
        ((self.far - self.near) / 2.0, (self.far + self.near) / 2.0)
    }
}

impl Default for DepthRange {
    fn default() -> Self {
        Self::new(0.1, 50.0)
    }
}

/// Sub-pixel sample offsets, relative to the pixel center.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePattern {
    offsets: Vec<Vec2>,
}

impl SamplePattern {
    /// The 2x2 grid at +/-0.25 around the center.
    pub const GRID_2X2: [Vec2; 4] = [
        Vec2::new(-0.25, -0.25),
        Vec2::new(-0.25, 0.25),
        Vec2::new(0.25, -0.25),
        Vec2::new(0.25, 0.25),
    ];

    /// Builds a pattern from explicit offsets.
    ///
    /// An empty list falls back to a single sample at the pixel center, so a
    /// pattern always has at least one sample.
    pub fn new(offsets: impl Into<Vec<Vec2>>) -> Self {
        let mut offsets = offsets.into();
        if offsets.is_empty() {
            offsets.push(Vec2::ZERO);
        }
        Self { offsets }
    }

    /// One sample at the pixel center; coverage becomes all-or-nothing.
    pub fn center() -> Self {
        Self::new(vec![Vec2::ZERO])
    }

    pub fn offsets(&self) -> &[Vec2] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl Default for SamplePattern {
    fn default() -> Self {
        Self::new(Self::GRID_2X2)
    }
}

/// When a covered pixel updates the depth buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthWrite {
    /// Any pixel with at least one covered sample writes its depth.
    ///
    /// A partially covered edge pixel can then hide a later fragment that is
    /// only slightly nearer.
    #[default]
    Always,
    /// Only fully covered pixels write depth; partial pixels still write color.
    FullCoverageOnly,
}

/// Tunables for a [`Rasterizer`](crate::Rasterizer).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RasterizerConfig {
    pub depth_range: DepthRange,
    pub samples: SamplePattern,
    pub depth_write: DepthWrite,
}

impl RasterizerConfig {
    pub fn with_depth_range(mut self, near: f32, far: f32) -> Self {
        self.depth_range = DepthRange::new(near, far);
        self
    }

    pub fn with_samples(mut self, samples: SamplePattern) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_depth_write(mut self, depth_write: DepthWrite) -> Self {
        self.depth_write = depth_write;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_depth_coefficients() {
        let (f1, f2) = DepthRange::default().coefficients();
        assert_relative_eq!(f1, 24.95, epsilon = 1e-5);
        assert_relative_eq!(f2, 25.05, epsilon = 1e-5);
    }

    #[test]
    fn default_pattern_is_four_samples() {
        let samples = SamplePattern::default();
        assert_eq!(samples.len(), 4);
        assert!(samples.offsets().contains(&Vec2::new(0.25, -0.25)));
    }

    #[test]
    fn empty_pattern_falls_back_to_center() {
        let samples = SamplePattern::new(Vec::new());
        assert_eq!(samples.offsets(), &[Vec2::ZERO]);
        assert!(!samples.is_empty());
    }

    #[test]
    fn builder_overrides_fields() {
        let config = RasterizerConfig::default()
            .with_depth_range(1.0, 10.0)
            .with_samples(SamplePattern::center())
            .with_depth_write(DepthWrite::FullCoverageOnly);
        assert_eq!(config.depth_range, DepthRange::new(1.0, 10.0));
        assert_eq!(config.samples.len(), 1);
        assert_eq!(config.depth_write, DepthWrite::FullCoverageOnly);
    }
}
