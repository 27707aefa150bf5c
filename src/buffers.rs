//! Uploaded vertex data, addressed by opaque handles.
//!
//! Each buffer kind has its own array-backed registry. A handle is the slot
//! index returned on upload; slots are never freed, so handles stay valid for
//! the lifetime of the owning rasterizer.

use std::fmt;

use crate::error::RasterError;
use crate::math::Vec3;

/// Which registry a handle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferKind {
    Position,
    Index,
    Color,
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferKind::Position => write!(f, "position"),
            BufferKind::Index => write!(f, "index"),
            BufferKind::Color => write!(f, "color"),
        }
    }
}

/// Handle to an uploaded position buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionBufferId(pub(crate) usize);

/// Handle to an uploaded index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexBufferId(pub(crate) usize);

/// Handle to an uploaded color buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorBufferId(pub(crate) usize);

/// One triangle as three indices into the position and color buffers.
pub type IndexTriple = [u32; 3];

/// Append-only store of uploaded arrays.
pub(crate) struct Registry<T> {
    kind: BufferKind,
    slots: Vec<Vec<T>>,
}

impl<T> Registry<T> {
    pub(crate) fn new(kind: BufferKind) -> Self {
        Self {
            kind,
            slots: Vec::new(),
        }
    }

    /// Stores `data` and returns its slot.
    pub(crate) fn insert(&mut self, data: Vec<T>) -> usize {
        let id = self.slots.len();
        log::debug!("uploaded {} buffer {} ({} entries)", self.kind, id, data.len());
        self.slots.push(data);
        id
    }

    pub(crate) fn get(&self, id: usize) -> Result<&[T], RasterError> {
        self.slots
            .get(id)
            .map(Vec::as_slice)
            .ok_or(RasterError::UnknownBuffer {
                kind: self.kind,
                id,
            })
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}

/// The three registries owned by a rasterizer.
pub(crate) struct BufferStore {
    pub(crate) positions: Registry<Vec3>,
    pub(crate) indices: Registry<IndexTriple>,
    pub(crate) colors: Registry<Vec3>,
}

impl BufferStore {
    pub(crate) fn new() -> Self {
        Self {
            positions: Registry::new(BufferKind::Position),
            indices: Registry::new(BufferKind::Index),
            colors: Registry::new(BufferKind::Color),
        }
    }

    pub(crate) fn load_positions(&mut self, positions: Vec<Vec3>) -> PositionBufferId {
        PositionBufferId(self.positions.insert(positions))
    }

    pub(crate) fn load_indices(&mut self, indices: Vec<IndexTriple>) -> IndexBufferId {
        IndexBufferId(self.indices.insert(indices))
    }

    pub(crate) fn load_colors(&mut self, colors: Vec<Vec3>) -> ColorBufferId {
        ColorBufferId(self.colors.insert(colors))
    }
}
