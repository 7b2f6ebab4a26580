//! Image input/output helpers
//!
//! Reading the source image from a file or stdin, and saving stage images
//! and reports to files or stdout.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use image::DynamicImage;
use log::info;

use crate::raster::errors::RectResult;

/// Whether a path names the standard stream
pub fn is_std_stream(path: Option<&str>) -> bool {
    matches!(path, None | Some("") | Some("-"))
}

/// Decode a PNG, GIF or JPEG from a file, or from stdin for `-`/none
pub fn load_image(path: Option<&str>) -> RectResult<DynamicImage> {
    if is_std_stream(path) {
        let mut data = Vec::new();
        io::stdin().lock().read_to_end(&mut data)?;
        info!("Read {} bytes from stdin", data.len());
        return Ok(image::load_from_memory(&data)?);
    }

    let path = path.unwrap_or_default();
    let image = image::open(path)?;
    info!("Read '{}' as a {}x{} image", path, image.width(), image.height());
    Ok(image)
}

/// Save an image, format chosen from the file extension
pub fn save_image<I: Into<DynamicImage>>(image: I, path: &str, stage: &str) -> RectResult<()> {
    let image: DynamicImage = image.into();
    image.save(path)?;
    info!("Wrote {} image to {}", stage, path);
    Ok(())
}

/// Open a buffered writer on a file, or on stdout for `-`/none
pub fn create_output(path: Option<&str>) -> RectResult<Box<dyn Write>> {
    if is_std_stream(path) {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }

    let file = File::create(path.unwrap_or_default())?;
    Ok(Box::new(BufWriter::new(file)))
}
