//! Color and depth storage for one frame.
//!
//! Both buffers share one index mapping that flips the vertical axis:
//! rasterizer coordinates put (0, 0) at the bottom-left, while stored row 0 is
//! the top row of the image. Raw slices can be handed to an image encoder
//! without reordering.

use bitflags::bitflags;

use crate::math::Vec3;

bitflags! {
    /// Selects which buffers [`FrameBuffer::clear`] resets.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Buffers: u8 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
    }
}

/// Owned color and depth buffers of equal size.
///
/// # Depth Buffer
///
/// Stores negated screen-space z, so smaller values are nearer. A cleared
/// entry is `+inf`, meaning nothing has been drawn there.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    color: Vec<Vec3>,
    depth: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Allocates both buffers in their cleared state.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color: vec![Vec3::ZERO; size],
            depth: vec![f32::INFINITY; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resets color to black and/or depth to `+inf`.
    pub fn clear(&mut self, which: Buffers) {
        if which.contains(Buffers::COLOR) {
            self.color.fill(Vec3::ZERO);
        }
        if which.contains(Buffers::DEPTH) {
            self.depth.fill(f32::INFINITY);
        }
    }

    /// Storage index of pixel (x, y), with y growing upwards.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`. Use
    /// [`checked_index`](Self::checked_index) for unvalidated coordinates.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        (self.height - 1 - y) as usize * self.width as usize + x as usize
    }

    /// Bounds-checked variant of [`index`](Self::index).
    #[inline]
    pub fn checked_index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            Some(self.index(x as u32, y as u32))
        } else {
            None
        }
    }

    /// Color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Vec3> {
        self.checked_index(x, y).map(|i| self.color[i])
    }

    /// Depth at (x, y), or None if out of bounds.
    pub fn depth(&self, x: i32, y: i32) -> Option<f32> {
        self.checked_index(x, y).map(|i| self.depth[i])
    }

    /// Write a color without touching depth. Silently ignores out-of-bounds coordinates.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Vec3) {
        if let Some(i) = self.checked_index(x, y) {
            self.color[i] = color;
        }
    }

    #[inline]
    pub(crate) fn depth_at(&self, index: usize) -> f32 {
        self.depth[index]
    }

    #[inline]
    pub(crate) fn write(&mut self, index: usize, color: Vec3, depth: Option<f32>) {
        self.color[index] = color;
        if let Some(depth) = depth {
            self.depth[index] = depth;
        }
    }

    /// Raw colors in storage order (top row first).
    pub fn colors(&self) -> &[Vec3] {
        &self.color
    }

    /// Raw depths in storage order (top row first).
    pub fn depths(&self) -> &[f32] {
        &self.depth
    }
}
