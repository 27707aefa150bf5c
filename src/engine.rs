//! Core rendering engine.
//!
//! The [`Rasterizer`] is the main entry point. It owns the uploaded buffers,
//! the transform state and the frame/depth buffers, and runs the pipeline
//! synchronously on every [`draw`](Rasterizer::draw).
//!
//! A rasterizer is single-threaded by construction: every mutating call takes
//! `&mut self`, so sharing one across threads requires the caller to
//! serialize access.

use crate::buffers::{BufferStore, ColorBufferId, IndexBufferId, IndexTriple, PositionBufferId};
use crate::config::RasterizerConfig;
use crate::error::RasterError;
use crate::math::{Mat4, Vec3};
use crate::render::assembly::{self, Viewport};
use crate::render::{Buffers, FrameBuffer, Primitive, SupersampleFill, Triangle};
use crate::transform::Transforms;

pub struct Rasterizer {
    frame: FrameBuffer,
    buffers: BufferStore,
    transforms: Transforms,
    config: RasterizerConfig,
}

impl Rasterizer {
    /// Creates a rasterizer with the default configuration.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(width, height, RasterizerConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: RasterizerConfig) -> Self {
        Self {
            frame: FrameBuffer::new(width, height),
            buffers: BufferStore::new(),
            transforms: Transforms::default(),
            config,
        }
    }

    pub fn width(&self) -> u32 {
        self.frame.width()
    }

    pub fn height(&self) -> u32 {
        self.frame.height()
    }

    pub fn config(&self) -> &RasterizerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RasterizerConfig) {
        self.config = config;
    }

    // ============ Uploads ============

    pub fn load_positions(&mut self, positions: impl Into<Vec<Vec3>>) -> PositionBufferId {
        self.buffers.load_positions(positions.into())
    }

    pub fn load_indices(&mut self, indices: impl Into<Vec<IndexTriple>>) -> IndexBufferId {
        self.buffers.load_indices(indices.into())
    }

    pub fn load_colors(&mut self, colors: impl Into<Vec<Vec3>>) -> ColorBufferId {
        self.buffers.load_colors(colors.into())
    }

    // ============ Transforms ============

    pub fn set_model(&mut self, model: Mat4) {
        self.transforms.set_model(model);
    }

    pub fn set_view(&mut self, view: Mat4) {
        self.transforms.set_view(view);
    }

    pub fn set_projection(&mut self, projection: Mat4) {
        self.transforms.set_projection(projection);
    }

    pub fn set_transforms(&mut self, transforms: Transforms) {
        self.transforms = transforms;
    }

    pub fn transforms(&self) -> &Transforms {
        &self.transforms
    }

    // ============ Drawing ============

    /// Assembles and fills every face of `indices`, in order.
    ///
    /// All handles and indices are checked before the first face is drawn, so
    /// an error leaves the frame and depth buffers untouched.
    pub fn draw(
        &mut self,
        positions: PositionBufferId,
        indices: IndexBufferId,
        colors: ColorBufferId,
        primitive: Primitive,
    ) -> Result<(), RasterError> {
        if primitive != Primitive::Triangle {
            return Err(RasterError::UnsupportedPrimitive(primitive));
        }

        let position_data = self.buffers.positions.get(positions.0)?;
        let index_data = self.buffers.indices.get(indices.0)?;
        let color_data = self.buffers.colors.get(colors.0)?;
        assembly::validate_faces(index_data, position_data.len(), color_data.len())?;

        let mvp = self.transforms.mvp();
        let viewport = Viewport::new(
            self.frame.width(),
            self.frame.height(),
            self.config.depth_range,
        );
        let fill = SupersampleFill::new(&self.config.samples, self.config.depth_write);

        let mut skipped = 0usize;
        for &face in index_data {
            match assembly::assemble(face, position_data, color_data, &mvp, &viewport) {
                Some(triangle) => fill.fill_triangle(&triangle, &mut self.frame),
                None => {
                    log::trace!("face {:?} cannot be projected, skipping", face);
                    skipped += 1;
                }
            }
        }

        log::debug!(
            "drew {} of {} faces ({} skipped)",
            index_data.len() - skipped,
            index_data.len(),
            skipped
        );
        Ok(())
    }

    /// Fills one already screen-space triangle with the current configuration.
    pub fn rasterize_triangle(&mut self, triangle: &Triangle) {
        SupersampleFill::new(&self.config.samples, self.config.depth_write)
            .fill_triangle(triangle, &mut self.frame);
    }

    pub fn clear(&mut self, which: Buffers) {
        self.frame.clear(which);
    }

    // ============ Readback ============

    /// Colors in storage order: `width * height` entries, top row first.
    pub fn frame_buffer(&self) -> &[Vec3] {
        self.frame.colors()
    }

    /// Depths in the same order as [`frame_buffer`](Self::frame_buffer).
    pub fn depth_buffer(&self) -> &[f32] {
        self.frame.depths()
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Storage index of pixel (x, y), y growing upwards.
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the target; see [`FrameBuffer::index`].
    pub fn index(&self, x: u32, y: u32) -> usize {
        self.frame.index(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffers::BufferKind;
    use crate::math::Vec4;

    const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);

    // NDC coordinates that land on (10,10) (50,10) (30,50) in a 100x100 target.
    fn red_triangle(r: &mut Rasterizer) -> (PositionBufferId, IndexBufferId, ColorBufferId) {
        let pos = r.load_positions(vec![
            Vec3::new(-0.8, -0.8, 0.0),
            Vec3::new(0.0, -0.8, 0.0),
            Vec3::new(-0.4, 0.0, 0.0),
        ]);
        let ind = r.load_indices(vec![[0, 1, 2]]);
        let col = r.load_colors(vec![RED; 3]);
        (pos, ind, col)
    }

    #[test]
    fn draw_with_identity_transforms() {
        let mut r = Rasterizer::new(100, 100);
        r.clear(Buffers::COLOR | Buffers::DEPTH);
        let (pos, ind, col) = red_triangle(&mut r);
        r.draw(pos, ind, col, Primitive::Triangle).unwrap();

        let fb = r.framebuffer();
        assert_eq!(fb.pixel(30, 11), Some(RED));
        assert_eq!(fb.pixel(0, 0), Some(Vec3::ZERO));
        assert_eq!(r.frame_buffer()[r.index(30, 11)], RED);
    }

    #[test]
    fn draw_and_rasterize_triangle_agree() {
        let mut drawn = Rasterizer::new(100, 100);
        let (pos, ind, col) = red_triangle(&mut drawn);
        drawn.draw(pos, ind, col, Primitive::Triangle).unwrap();

        let mut direct = Rasterizer::new(100, 100);
        direct.rasterize_triangle(&Triangle::new(
            [
                Vec4::new(10.0, 10.0, 25.05, 1.0),
                Vec4::new(50.0, 10.0, 25.05, 1.0),
                Vec4::new(30.0, 50.0, 25.05, 1.0),
            ],
            [RED; 3],
        ));

        assert_eq!(drawn.frame_buffer()[drawn.index(30, 11)], RED);
        assert_eq!(direct.frame_buffer()[direct.index(30, 11)], RED);
        assert_eq!(drawn.frame_buffer()[drawn.index(10, 40)], Vec3::ZERO);
        assert_eq!(direct.frame_buffer()[direct.index(10, 40)], Vec3::ZERO);
    }

    #[test]
    fn line_primitive_is_rejected() {
        let mut r = Rasterizer::new(10, 10);
        let (pos, ind, col) = red_triangle(&mut r);
        assert_eq!(
            r.draw(pos, ind, col, Primitive::Line),
            Err(RasterError::UnsupportedPrimitive(Primitive::Line))
        );
    }

    #[test]
    fn handles_from_another_rasterizer_are_unknown() {
        let mut other = Rasterizer::new(10, 10);
        other.load_positions(vec![Vec3::ZERO]);
        let foreign = other.load_positions(vec![Vec3::ZERO]);

        let mut r = Rasterizer::new(10, 10);
        let (_, ind, col) = red_triangle(&mut r);
        assert_eq!(
            r.draw(foreign, ind, col, Primitive::Triangle),
            Err(RasterError::UnknownBuffer {
                kind: BufferKind::Position,
                id: 1
            })
        );
    }

    #[test]
    fn setters_replace_transform_state() {
        let mut r = Rasterizer::new(10, 10);
        r.set_model(Mat4::scaling(2.0, 2.0, 2.0));
        r.set_view(Mat4::translation(0.0, 0.0, -3.0));
        r.set_projection(Mat4::identity());
        assert_eq!(r.transforms().model(), Mat4::scaling(2.0, 2.0, 2.0));
        assert_eq!(r.transforms().view(), Mat4::translation(0.0, 0.0, -3.0));

        r.set_transforms(Transforms::default());
        assert_eq!(r.transforms().mvp(), Mat4::identity());
    }
}
