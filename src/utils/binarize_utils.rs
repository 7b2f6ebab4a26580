//! Threshold binarization
//!
//! This module turns a decoded colour image into the monochrome bitmap the
//! decomposers consume: premultiplied RGBA, optional negation, grayscale,
//! then a threshold. Every intermediate stage is kept so that callers can
//! write it out for inspection.

use image::{DynamicImage, GrayImage, Luma, Rgba, RgbaImage};
use log::{debug, info, warn};

use crate::raster::errors::RectResult;
use crate::raster::Bitmap;

/// Default gray threshold; pixels strictly brighter are foreground
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Binarization settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinarizeOptions {
    /// Negate colours before grayscaling
    pub invert: bool,
    /// Gray level a pixel must exceed to be foreground
    pub threshold: u8,
}

impl Default for BinarizeOptions {
    fn default() -> Self {
        BinarizeOptions {
            invert: false,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Every image produced on the way to the bitmap
#[derive(Debug, Clone)]
pub struct BinarizedImage {
    /// Premultiplied RGBA copy of the input
    pub rgba: RgbaImage,
    /// Negated RGBA, only when inversion was requested
    pub negative: Option<RgbaImage>,
    pub gray: GrayImage,
    /// Black/white image matching the bitmap
    pub monochrome: GrayImage,
    pub bitmap: Bitmap,
}

/// Convert to 8-bit RGBA with colour channels premultiplied by alpha
///
/// Premultiplication is done at 16 bits per channel and truncated back to
/// 8 bits, so dim and partially transparent colours round down.
pub fn to_premultiplied_rgba(image: &DynamicImage) -> RgbaImage {
    let mut rgba = image.to_rgba8();
    for pixel in rgba.pixels_mut() {
        let alpha = pixel[3] as u32 * 257;
        for channel in 0..3 {
            let wide = pixel[channel] as u32 * 257 * alpha / 65535;
            pixel[channel] = (wide >> 8) as u8;
        }
    }
    rgba
}

/// Negate colour channels against alpha, keeping alpha
///
/// Works on premultiplied input, where `alpha - c` stays within `0..=alpha`.
pub fn negate(rgba: &RgbaImage) -> RgbaImage {
    let mut negative = rgba.clone();
    for pixel in negative.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        *pixel = Rgba([a.saturating_sub(r), a.saturating_sub(g), a.saturating_sub(b), a]);
    }
    negative
}

/// Luma of one premultiplied pixel
#[inline]
pub fn luma(pixel: &Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    ((19595 * r as u32 + 38470 * g as u32 + 7471 * b as u32 + (1 << 15)) >> 16) as u8
}

/// Reduce to grayscale, dropping alpha
pub fn to_grayscale(rgba: &RgbaImage) -> GrayImage {
    GrayImage::from_fn(rgba.width(), rgba.height(), |x, y| Luma([luma(rgba.get_pixel(x, y))]))
}

/// Map gray levels above `threshold` to white, everything else to black
pub fn apply_threshold(gray: &GrayImage, threshold: u8) -> GrayImage {
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        if gray.get_pixel(x, y)[0] > threshold {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Run the whole binarization pipeline
///
/// # Returns
/// All stages plus the bitmap, or `BitmapTooSmall` for images under 2x2
pub fn binarize(image: &DynamicImage, options: &BinarizeOptions) -> RectResult<BinarizedImage> {
    info!(
        "Binarizing {}x{} image: invert={}, threshold={}",
        image.width(),
        image.height(),
        options.invert,
        options.threshold
    );

    let rgba = to_premultiplied_rgba(image);
    let negative = if options.invert { Some(negate(&rgba)) } else { None };
    let gray = to_grayscale(negative.as_ref().unwrap_or(&rgba));
    let monochrome = apply_threshold(&gray, options.threshold);
    let bitmap = Bitmap::from_gray(&monochrome)?;

    let foreground = bitmap.foreground_count();
    debug!("Bitmap has {} foreground cells", foreground);
    if foreground == 0 {
        warn!("Threshold {} leaves no foreground pixels", options.threshold);
    }

    Ok(BinarizedImage {
        rgba,
        negative,
        gray,
        monochrome,
        bitmap,
    })
}
