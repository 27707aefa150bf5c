//! Supersampled triangle fill with depth testing.
//!
//! # Algorithm Overview
//!
//! For every pixel in the triangle's clamped bounding box:
//! 1. Interpolate depth at the pixel center from 2D barycentric weights
//! 2. Skip the pixel early if that depth is behind the depth buffer
//! 3. Count how many sub-pixel samples fall inside the triangle
//! 4. Write `color * covered / samples` and the depth for any covered pixel
//!
//! # Depth
//!
//! Depth is interpolated linearly in screen space (no division by w), then
//! negated so that smaller stored values are nearer. This is not
//! perspective-correct; across a strongly slanted triangle the interpolated
//! depth drifts from the true value.
//!
//! # Coverage
//!
//! Coverage is blended without accumulation: a partially covered pixel takes
//! the scaled triangle color and, under [`DepthWrite::Always`], its depth.
//! Whatever was there before is overwritten, not mixed.

use crate::config::{DepthWrite, SamplePattern};
use crate::geometry::{inside_triangle, Barycentric};
use crate::math::Vec2;

use super::framebuffer::FrameBuffer;
use super::triangle::Triangle;

/// Fills screen-space triangles into a [`FrameBuffer`].
///
/// Triangles are assumed consistently wound; see
/// [`inside_triangle`](crate::geometry::inside_triangle) for how winding
/// affects samples that land exactly on an edge.
#[derive(Debug, Clone, Copy)]
pub struct SupersampleFill<'a> {
    samples: &'a SamplePattern,
    depth_write: DepthWrite,
}

impl<'a> SupersampleFill<'a> {
    pub fn new(samples: &'a SamplePattern, depth_write: DepthWrite) -> Self {
        Self {
            samples,
            depth_write,
        }
    }

    /// Rasterizes one triangle. Writes only; never fails.
    pub fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) {
        let points = triangle.screen_points();
        let [z0, z1, z2] = triangle.depths();

        // ─────────────────────────────────────────────────────────────────
        // Step 1: Barycentric setup; degenerate triangles cover nothing
        // ─────────────────────────────────────────────────────────────────
        let Some(barycentric) = Barycentric::new(&points) else {
            log::trace!("skipping degenerate triangle {:?}", points);
            return;
        };

        // ─────────────────────────────────────────────────────────────────
        // Step 2: Bounding box, clamped to the buffer, upper bound exclusive
        // ─────────────────────────────────────────────────────────────────
        let [v0, v1, v2] = points;
        let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i64).max(0);
        let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i64).min(buffer.width() as i64);
        let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i64).max(0);
        let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i64).min(buffer.height() as i64);

        let color = triangle.color();
        let sample_count = self.samples.len() as f32;

        // ─────────────────────────────────────────────────────────────────
        // Step 3: Per pixel depth test, then coverage
        // ─────────────────────────────────────────────────────────────────
        for y in min_y..max_y {
            for x in min_x..max_x {
                let (x, y) = (x as u32, y as u32);
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);

                let [alpha, beta, gamma] = barycentric.at(center);
                let z = -(alpha * z0 + beta * z1 + gamma * z2);

                let index = buffer.index(x, y);
                if z > buffer.depth_at(index) {
                    continue;
                }

                let covered = self
                    .samples
                    .offsets()
                    .iter()
                    .filter(|offset| inside_triangle(center + **offset, &points))
                    .count();
                if covered == 0 {
                    continue;
                }

                let coverage = covered as f32 / sample_count;
                let depth = match self.depth_write {
                    DepthWrite::Always => Some(z),
                    DepthWrite::FullCoverageOnly if covered == self.samples.len() => Some(z),
                    DepthWrite::FullCoverageOnly => None,
                };
                buffer.write(index, color * coverage, depth);
            }
        }
    }
}
