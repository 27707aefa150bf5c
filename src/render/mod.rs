//! The rasterization pipeline proper.
//!
//! - [`assembly`]: index triple -> screen-space [`Triangle`]
//! - [`fill`]: screen-space [`Triangle`] -> pixel writes
//! - [`framebuffer`]: color and depth storage

pub mod assembly;
pub mod fill;
pub mod framebuffer;
mod triangle;

pub use assembly::Viewport;
pub use fill::SupersampleFill;
pub use framebuffer::{Buffers, FrameBuffer};
pub use triangle::Triangle;

/// How a draw call interprets its index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Primitive {
    /// Outline of each index triple. Not implemented.
    Line,
    /// Each index triple is one filled triangle.
    #[default]
    Triangle,
}
