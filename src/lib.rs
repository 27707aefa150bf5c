//! A CPU triangle rasterizer with 4x supersampled coverage and a depth buffer.
//!
//! Vertex data is uploaded once and referenced by handles; each draw runs
//! every face through assembly (MVP, perspective divide, viewport) and the
//! supersampled fill, writing into owned color and depth buffers that the
//! caller reads back.
//!
//! # Quick Start
//!
//! ```
//! use rst::prelude::*;
//!
//! let mut r = Rasterizer::new(100, 100);
//! let pos = r.load_positions(vec![
//!     Vec3::new(-0.8, -0.8, 0.0),
//!     Vec3::new(0.0, -0.8, 0.0),
//!     Vec3::new(-0.4, 0.0, 0.0),
//! ]);
//! let ind = r.load_indices(vec![[0, 1, 2]]);
//! let col = r.load_colors(vec![Vec3::new(1.0, 0.0, 0.0); 3]);
//!
//! r.clear(Buffers::COLOR | Buffers::DEPTH);
//! r.draw(pos, ind, col, Primitive::Triangle)?;
//! assert_eq!(r.framebuffer().pixel(30, 11), Some(Vec3::new(1.0, 0.0, 0.0)));
//! # Ok::<(), rst::RasterError>(())
//! ```

// Public API - exposed to library consumers
pub mod buffers;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;
pub mod transform;
#[cfg(feature = "window")]
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use buffers::{BufferKind, ColorBufferId, IndexBufferId, IndexTriple, PositionBufferId};
pub use config::{DepthRange, DepthWrite, RasterizerConfig, SamplePattern};
pub use engine::Rasterizer;
pub use error::RasterError;
pub use mesh::{Mesh, MeshError};
pub use projection::Projection;
pub use render::{Buffers, FrameBuffer, Primitive, Triangle};
pub use transform::Transforms;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rst::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{DepthRange, DepthWrite, RasterizerConfig, SamplePattern};
    pub use crate::engine::Rasterizer;
    pub use crate::error::RasterError;
    pub use crate::math::{Mat4, Vec2, Vec3, Vec4};
    pub use crate::mesh::Mesh;
    pub use crate::projection::Projection;
    pub use crate::render::{Buffers, FrameBuffer, Primitive, Triangle};
    pub use crate::transform::Transforms;
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::assembly::{assemble, Viewport};
    pub use crate::render::{FrameBuffer, SupersampleFill, Triangle};
}
