use image::DynamicImage;
use log::info;

use crate::decompose::{DecomposerFactory, MaximalRectangleExtractor, QuadtreeDecomposer};
use crate::geometry::{Region, RectangleSet};
use crate::output::{report, SvgSerializer, SvgStyle, SvgVariant};
use crate::raster::errors::RectResult;
use crate::raster::Bitmap;
use crate::utils::binarize_utils::{self, BinarizeOptions};
use crate::utils::logger::Logger;

/// Main interface to the RectKit library
pub struct RectKit {
    logger: Logger,
}

impl RectKit {
    /// Create a new RectKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to a run log; nothing is logged to file when absent
    ///
    /// # Returns
    /// A RectKit instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> RectResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::disabled(),
        };
        Ok(RectKit { logger })
    }

    /// Binarize a decoded image into a bitmap
    pub fn bitmap_from_image(&self, image: &DynamicImage, options: &BinarizeOptions) -> RectResult<Bitmap> {
        Ok(binarize_utils::binarize(image, options)?.bitmap)
    }

    /// Decompose a bitmap with a named method (`maximal` or `quadtree`)
    pub fn decompose(&self, bitmap: Bitmap, method: &str) -> RectResult<RectangleSet> {
        let decomposer = DecomposerFactory::create(method)?;
        let (width, height) = (bitmap.width(), bitmap.height());
        let foreground = bitmap.foreground_count();

        let rectangles = decomposer.decompose(bitmap);
        self.logger.log_summary(decomposer.name(), width, height, rectangles.len(), foreground)?;
        Ok(rectangles)
    }

    /// Greedy maximal-rectangle decomposition, leaving `bitmap` blank
    pub fn extract_maximal(&self, bitmap: &mut Bitmap) -> RectangleSet {
        MaximalRectangleExtractor::extract_all(bitmap)
    }

    /// Quadtree decomposition of one region of a bitmap
    pub fn quadtree_region(&self, bitmap: &Bitmap, region: Region) -> RectResult<RectangleSet> {
        QuadtreeDecomposer::decompose_region(bitmap, region)
    }

    /// Decode an image file and decompose it in one go
    pub fn decompose_file(&self, input_path: &str, options: &BinarizeOptions, method: &str) -> RectResult<RectangleSet> {
        let image = image::open(input_path)?;
        info!("Decomposing '{}' with {}", input_path, method);
        let bitmap = self.bitmap_from_image(&image, options)?;
        self.decompose(bitmap, method)
    }

    /// Text report of a set
    pub fn report(&self, rectangles: &RectangleSet) -> RectResult<String> {
        report::report_to_string(rectangles)
    }

    /// SVG document for a set
    pub fn svg(&self, rectangles: &RectangleSet, style: &SvgStyle, variant: SvgVariant) -> RectResult<String> {
        SvgSerializer::new(style.clone(), variant).to_svg_string(rectangles)
    }
}
