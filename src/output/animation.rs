//! Animated GIF replay of a decomposition
//!
//! Frame 0 is a blank canvas. Each rectangle of the set is then painted in
//! set order and one frame is appended per rectangle, so the last frame shows
//! the complete foreground.

use std::io::Write;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use log::debug;

use crate::geometry::{Rectangle, RectangleSet};
use crate::raster::errors::{RectError, RectResult};

const FOREGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Lowest and highest accepted frame rates
pub const MIN_FPS: f64 = 0.1;
pub const MAX_FPS: f64 = 100.0;

/// Builds an animated GIF from a rectangle set in pixel space
#[derive(Debug, Clone, Copy)]
pub struct AnimationBuilder {
    /// Per-frame delay in hundredths of a second
    delay_centis: u32,
}

impl AnimationBuilder {
    /// Create a builder for an approximate frame rate
    ///
    /// The delay is `round(100 / fps)` hundredths of a second, as GIF
    /// delays are stored in centiseconds.
    pub fn new(frames_per_second: f64) -> RectResult<Self> {
        if !(MIN_FPS..=MAX_FPS).contains(&frames_per_second) {
            return Err(RectError::InvalidArgument(format!(
                "Animation FPS {} is outside {}..={}",
                frames_per_second, MIN_FPS, MAX_FPS
            )));
        }

        Ok(AnimationBuilder {
            delay_centis: (100.0 / frames_per_second).round() as u32,
        })
    }

    pub fn delay_centis(&self) -> u32 {
        self.delay_centis
    }

    /// Render every frame without encoding
    ///
    /// The set must still be in pixel space (not centered or scaled).
    pub fn render_frames(&self, rectangles: &RectangleSet) -> Vec<RgbaImage> {
        let bounds = rectangles.bounds();
        let width = bounds.width().round().max(0.0) as u32;
        let height = bounds.height().round().max(0.0) as u32;

        let mut canvas = RgbaImage::from_pixel(width, height, BACKGROUND);
        let mut frames = Vec::with_capacity(rectangles.len() + 1);
        frames.push(canvas.clone());

        for rectangle in rectangles {
            Self::paint(&mut canvas, rectangle, bounds.min_x, bounds.min_y);
            frames.push(canvas.clone());
        }

        frames
    }

    /// Encode the animation, calling `on_frame` after each encoded frame
    pub fn encode<W, F>(&self, rectangles: &RectangleSet, output: W, mut on_frame: F) -> RectResult<()>
    where
        W: Write,
        F: FnMut(usize),
    {
        let delay = Delay::from_numer_denom_ms(self.delay_centis * 10, 1);
        let mut encoder = GifEncoder::new(output);
        encoder.set_repeat(Repeat::Infinite)?;

        for (index, frame) in self.render_frames(rectangles).into_iter().enumerate() {
            encoder.encode_frame(Frame::from_parts(frame, 0, 0, delay))?;
            on_frame(index);
        }

        debug!("Encoded {} animation frames", rectangles.len() + 1);
        Ok(())
    }

    fn paint(canvas: &mut RgbaImage, rectangle: &Rectangle, origin_x: f64, origin_y: f64) {
        let (canvas_width, canvas_height) = canvas.dimensions();
        let x0 = (rectangle.x - origin_x).round().max(0.0) as u32;
        let y0 = (rectangle.y - origin_y).round().max(0.0) as u32;
        let x1 = ((rectangle.x + rectangle.width - origin_x).round().max(0.0) as u32).min(canvas_width);
        let y1 = ((rectangle.y + rectangle.height - origin_y).round().max(0.0) as u32).min(canvas_height);

        for y in y0..y1 {
            for x in x0..x1 {
                canvas.put_pixel(x, y, FOREGROUND);
            }
        }
    }
}
