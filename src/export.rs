//! Frame readback into encodable pixel formats.
//!
//! Colors are stored as linear `f32` channels nominally in [0, 1]. Conversion
//! clamps each channel and scales to 8 bits. Rows come out in storage order,
//! which is already top row first.

use std::path::Path;

use image::{ImageFormat, ImageResult, Rgb, RgbImage};

use crate::math::Vec3;
use crate::render::FrameBuffer;

#[inline]
fn to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[inline]
fn to_rgb8(color: Vec3) -> [u8; 3] {
    [to_u8(color.x), to_u8(color.y), to_u8(color.z)]
}

/// Copies the frame into an 8-bit RGB image.
pub fn to_rgb_image(frame: &FrameBuffer) -> RgbImage {
    let mut image = RgbImage::new(frame.width(), frame.height());
    for (pixel, color) in image.pixels_mut().zip(frame.colors()) {
        *pixel = Rgb(to_rgb8(*color));
    }
    image
}

/// Encodes the frame as a PNG file.
pub fn save_png<P: AsRef<Path>>(frame: &FrameBuffer, path: P) -> ImageResult<()> {
    to_rgb_image(frame).save_with_format(path, ImageFormat::Png)
}

/// Packs the frame as little-endian ARGB8888 words, for streaming textures.
pub fn to_argb8888(frame: &FrameBuffer) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(frame.colors().len() * 4);
    for color in frame.colors() {
        let [r, g, b] = to_rgb8(*color);
        let word = 0xFF00_0000u32 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32);
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_rows_are_top_first() {
        let mut frame = FrameBuffer::new(2, 2);
        // (0, 1) is the top-left pixel in rasterizer coordinates.
        frame.set_pixel(0, 1, Vec3::new(1.0, 0.0, 0.0));
        let image = to_rgb_image(&frame);
        assert_eq!(image.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(image.get_pixel(0, 1), &Rgb([0, 0, 0]));
    }

    #[test]
    fn channels_are_clamped_and_rounded() {
        assert_eq!(to_rgb8(Vec3::new(-1.0, 0.5, 2.0)), [0, 128, 255]);
        assert_eq!(to_rgb8(Vec3::new(0.25, 0.75, 1.0)), [64, 191, 255]);
    }

    #[test]
    fn argb_words_are_little_endian() {
        let mut frame = FrameBuffer::new(1, 1);
        frame.set_pixel(0, 0, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(to_argb8888(&frame), vec![0x00, 0x00, 0xFF, 0xFF]);
    }
}
