//! SDL2 window that shows finished frames. Enabled with the `window` feature.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;

use crate::export::to_argb8888;
use crate::render::FrameBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
}

fn check_frame_size(frame: &FrameBuffer, width: u32, height: u32) -> Result<(), String> {
    if (frame.width(), frame.height()) == (width, height) {
        Ok(())
    } else {
        Err(format!(
            "frame is {}x{}, window texture is {}x{}",
            frame.width(),
            frame.height(),
            width,
            height
        ))
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Declared before `_texture_creator` so it is dropped first.
    texture: sdl2::render::Texture<'static>,
    _texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    width: u32,
    height: u32,
}

impl Window {
    /// Opens a window with a streaming texture sized for `width x height` frames.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated, owned by the Window and
        // never replaced, and field order drops texture before it.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            canvas,
            texture,
            _texture_creator: texture_creator,
            event_pump,
            width,
            height,
        })
    }

    /// Drains pending events; Escape or closing the window yields `Quit`.
    pub fn poll_events(&mut self) -> WindowEvent {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                _ => {}
            }
        }
        WindowEvent::None
    }

    /// Uploads the frame into the streaming texture and shows it.
    ///
    /// The frame must match the size the window was opened with.
    pub fn present(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        check_frame_size(frame, self.width, self.height)?;
        self.texture
            .update(None, &to_argb8888(frame), (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas.copy(&self.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_must_match_texture_size() {
        let frame = FrameBuffer::new(8, 6);
        assert_eq!(check_frame_size(&frame, 8, 6), Ok(()));
        assert_eq!(
            check_frame_size(&frame, 6, 8),
            Err("frame is 8x6, window texture is 6x8".to_string())
        );
    }
}
