//! Binary pixel matrix
//!
//! The bitmap is the substrate both decomposers work on. Its dimensions are
//! fixed at construction; only cell values change, and only the maximal
//! rectangle extractor changes them (to erase rectangles it has claimed).

use image::{GrayImage, Luma};

use crate::geometry::Region;
use crate::raster::errors::{RectError, RectResult};

/// Smallest accepted width and height
pub const MIN_DIMENSION: u32 = 2;

/// A rectangular grid of foreground/background cells with origin (0,0)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    /// Row-major cell storage, `true` = foreground
    cells: Vec<bool>,
}

impl Bitmap {
    /// Create an all-background bitmap
    ///
    /// # Arguments
    /// * `width` - Number of columns, at least 2
    /// * `height` - Number of rows, at least 2
    ///
    /// # Returns
    /// A new Bitmap or `BitmapTooSmall` if either dimension is below the minimum
    pub fn new(width: u32, height: u32) -> RectResult<Self> {
        Self::check_dimensions(width, height)?;
        Ok(Bitmap {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        })
    }

    /// Create a bitmap from row-major cells
    pub fn from_cells(width: u32, height: u32, cells: Vec<bool>) -> RectResult<Self> {
        Self::check_dimensions(width, height)?;
        if cells.len() != width as usize * height as usize {
            return Err(RectError::InvalidArgument(format!(
                "Expected {} cells for a {}x{} bitmap, got {}",
                width as usize * height as usize,
                width,
                height,
                cells.len()
            )));
        }
        Ok(Bitmap { width, height, cells })
    }

    /// Create a bitmap by evaluating `f(x, y)` for every cell
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> RectResult<Self>
    where
        F: FnMut(u32, u32) -> bool,
    {
        let mut bitmap = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                if f(x, y) {
                    bitmap.set(x, y, true);
                }
            }
        }
        Ok(bitmap)
    }

    /// Create a bitmap from a monochrome image (non-zero = foreground)
    pub fn from_gray(image: &GrayImage) -> RectResult<Self> {
        let (width, height) = image.dimensions();
        Self::from_fn(width, height, |x, y| image.get_pixel(x, y)[0] > 0)
    }

    fn check_dimensions(width: u32, height: u32) -> RectResult<()> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(RectError::BitmapTooSmall { width, height });
        }
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The full bitmap area as a region anchored at the origin
    pub fn bounds(&self) -> Region {
        Region::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Whether the cell at (x, y) is foreground
    ///
    /// Panics if the coordinates are outside the bitmap.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        assert!(x < self.width && y < self.height, "cell ({}, {}) out of bounds", x, y);
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        assert!(x < self.width && y < self.height, "cell ({}, {}) out of bounds", x, y);
        let idx = self.index(x, y);
        self.cells[idx] = value;
    }

    /// Count the foreground cells inside a region
    ///
    /// The region must lie within the bitmap.
    pub fn count_foreground(&self, region: &Region) -> u64 {
        let mut observed = 0u64;
        for y in region.y..region.end_y() {
            let row = self.index(region.x, y);
            observed += self.cells[row..row + region.width as usize]
                .iter()
                .filter(|&&cell| cell)
                .count() as u64;
        }
        observed
    }

    /// Set every cell of a region to background
    pub fn clear_region(&mut self, region: &Region) {
        for y in region.y..region.end_y() {
            let row = self.index(region.x, y);
            self.cells[row..row + region.width as usize].fill(false);
        }
    }

    /// Total number of foreground cells
    pub fn foreground_count(&self) -> u64 {
        self.cells.iter().filter(|&&cell| cell).count() as u64
    }

    /// True when no cell is foreground
    pub fn is_blank(&self) -> bool {
        !self.cells.iter().any(|&cell| cell)
    }

    /// Whether a region lies entirely inside the bitmap
    pub fn contains_region(&self, region: &Region) -> bool {
        let end_x = region.x.checked_add(region.width);
        let end_y = region.y.checked_add(region.height);
        matches!((end_x, end_y), (Some(x), Some(y)) if x <= self.width && y <= self.height)
    }

    /// Render as a black/white monochrome image (foreground = white)
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            if self.get(x, y) {
                Luma([255])
            } else {
                Luma([0])
            }
        })
    }
}
