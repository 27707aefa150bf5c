use thiserror::Error;

use crate::buffers::BufferKind;
use crate::render::Primitive;

/// Failures reported by [`Rasterizer::draw`](crate::Rasterizer::draw).
///
/// A failed draw writes nothing to the frame or depth buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    #[error("no {kind} buffer was uploaded under handle {id}")]
    UnknownBuffer { kind: BufferKind, id: usize },
    #[error("face {face} references {kind} index {index}, but the buffer holds {len} entries")]
    IndexOutOfBounds {
        face: usize,
        index: u32,
        kind: BufferKind,
        len: usize,
    },
    #[error("primitive {0:?} is not supported")]
    UnsupportedPrimitive(Primitive),
}
