//! Screen-space geometry predicates used by the fill engine.
//!
//! # Edge function
//!
//! For a directed edge from A to B, the edge function at P is the z component
//! of `(B - A) x (P - A)`:
//!
//! ```text
//! E(A, B, P) = (B.x - A.x) * (P.y - A.y) - (B.y - A.y) * (P.x - A.x)
//! ```
//!
//! - Positive: P is to the left of A -> B (inside a counter-clockwise triangle)
//! - Negative: P is to the right
//! - Zero: P lies on the line through A and B
//!
//! Barycentric weights are edge functions of the opposite edges divided by
//! the triangle's signed area (`E(v0, v1, v2)`).

use crate::math::{Vec2, Vec3, Vec4};

/// Promote an object-space position to homogeneous coordinates with the given w.
#[inline]
pub fn to_vec4(v: Vec3, w: f32) -> Vec4 {
    Vec4::from_vec3(v, w)
}

/// Signed doubled area of the parallelogram spanned by `b - a` and `p - a`.
#[inline]
pub fn edge_function(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b - a).cross(p - a)
}

/// Tests whether `p` lies in the triangle `v`.
///
/// Each directed edge v0->v1, v1->v2, v2->v0 is tested with the edge function.
/// The point is inside when the three values fall on the same side of zero,
/// with zero grouped with the positives. A point exactly on an edge is
/// therefore inside a counter-clockwise triangle but outside a clockwise one.
/// Callers are expected to submit consistently wound triangles.
#[inline]
pub fn inside_triangle(p: Vec2, v: &[Vec2; 3]) -> bool {
    let e0 = edge_function(v[0], v[1], p) >= 0.0;
    let e1 = edge_function(v[1], v[2], p) >= 0.0;
    let e2 = edge_function(v[2], v[0], p) >= 0.0;
    e0 == e1 && e1 == e2
}

/// Signed doubled area of the triangle, positive for counter-clockwise winding.
#[inline]
pub fn signed_area(v: &[Vec2; 3]) -> f32 {
    edge_function(v[0], v[1], v[2])
}

/// Barycentric evaluator for one triangle, with the inverse area computed once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    vertices: [Vec2; 3],
    inv_area: f32,
}

impl Barycentric {
    /// Returns `None` for degenerate triangles (collinear or non-finite
    /// vertices) where the weights are undefined.
    pub fn new(v: &[Vec2; 3]) -> Option<Self> {
        let area = signed_area(v);
        if !area.is_finite() || area.abs() < f32::EPSILON {
            return None;
        }
        Some(Self {
            vertices: *v,
            inv_area: 1.0 / area,
        })
    }

    /// Weights `[alpha, beta, gamma]` of `p`; they sum to one.
    #[inline]
    pub fn at(&self, p: Vec2) -> [f32; 3] {
        let [v0, v1, v2] = self.vertices;
        [
            edge_function(v1, v2, p) * self.inv_area,
            edge_function(v2, v0, p) * self.inv_area,
            edge_function(v0, v1, p) * self.inv_area,
        ]
    }
}

/// 2D barycentric coordinates `[alpha, beta, gamma]` of `p` with respect to `v`.
///
/// Returns `None` when the triangle is degenerate; see [`Barycentric::new`].
pub fn barycentric_2d(p: Vec2, v: &[Vec2; 3]) -> Option<[f32; 3]> {
    Barycentric::new(v).map(|weights| weights.at(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ccw() -> [Vec2; 3] {
        [
            Vec2::new(10.0, 10.0),
            Vec2::new(50.0, 10.0),
            Vec2::new(30.0, 50.0),
        ]
    }

    #[test]
    fn centroid_is_inside_for_either_winding() {
        let tri = ccw();
        let centroid = Vec2::new(30.0, 70.0 / 3.0);
        assert!(inside_triangle(centroid, &tri));
        let cw = [tri[0], tri[2], tri[1]];
        assert!(inside_triangle(centroid, &cw));
    }

    #[test]
    fn far_point_is_outside() {
        assert!(!inside_triangle(Vec2::new(0.5, 0.5), &ccw()));
        assert!(!inside_triangle(Vec2::new(49.0, 49.0), &ccw()));
    }

    #[test]
    fn edge_point_depends_on_winding() {
        let tri = ccw();
        let on_bottom_edge = Vec2::new(30.0, 10.0);
        assert!(inside_triangle(on_bottom_edge, &tri));
        let cw = [tri[0], tri[2], tri[1]];
        assert!(!inside_triangle(on_bottom_edge, &cw));
    }

    #[test]
    fn barycentric_weights_sum_to_one() {
        let [a, b, c] = barycentric_2d(Vec2::new(25.0, 20.0), &ccw()).unwrap();
        assert_relative_eq!(a + b + c, 1.0, epsilon = 1e-6);
        assert!(a > 0.0 && b > 0.0 && c > 0.0);
    }

    #[test]
    fn barycentric_at_vertices_is_unit() {
        let tri = ccw();
        for (i, vertex) in tri.iter().enumerate() {
            let weights = barycentric_2d(*vertex, &tri).unwrap();
            for (j, w) in weights.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(*w, expected, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn barycentric_is_winding_independent() {
        let tri = ccw();
        let cw = [tri[0], tri[2], tri[1]];
        let p = Vec2::new(28.0, 15.0);
        let [a0, b0, c0] = barycentric_2d(p, &tri).unwrap();
        let [a1, b1, c1] = barycentric_2d(p, &cw).unwrap();
        assert_relative_eq!(a0, a1, epsilon = 1e-6);
        assert_relative_eq!(b0, c1, epsilon = 1e-6);
        assert_relative_eq!(c0, b1, epsilon = 1e-6);
    }

    #[test]
    fn weights_reconstruct_the_point() {
        let tri = ccw();
        let weights = Barycentric::new(&tri).unwrap();
        let p = Vec2::new(31.0, 18.5);
        let [a, b, c] = weights.at(p);
        assert_relative_eq!(a * tri[0].x + b * tri[1].x + c * tri[2].x, p.x, epsilon = 1e-4);
        assert_relative_eq!(a * tri[0].y + b * tri[1].y + c * tri[2].y, p.y, epsilon = 1e-4);
        assert_eq!(barycentric_2d(p, &tri), Some([a, b, c]));
    }

    #[test]
    fn degenerate_triangle_has_no_barycentrics() {
        let line = [
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 5.0),
            Vec2::new(10.0, 10.0),
        ];
        assert!(barycentric_2d(Vec2::new(2.0, 3.0), &line).is_none());
        assert!(Barycentric::new(&line).is_none());

        let nan = [Vec2::new(f32::NAN, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        assert!(barycentric_2d(Vec2::ZERO, &nan).is_none());
    }

    #[test]
    fn to_vec4_keeps_components() {
        let v = to_vec4(Vec3::new(1.0, 2.0, 3.0), 1.0);
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 1.0));
    }
}
