//! Greedy maximal-rectangle decomposition
//!
//! Repeatedly finds the single largest all-foreground rectangle, erases it
//! from the bitmap and records it, until the bitmap is blank. Each search is
//! the classic histogram-stack scan: per row, every column keeps the height
//! of the foreground run ending at that row, and a stack of open bars turns
//! the histogram into candidate rectangles in one left-to-right pass.
//!
//! One search costs O(W*H) time and O(W) memory, so a full run is
//! O(K*W*H) for K rectangles. Checkerboard-like input drives K towards W*H.

use log::{debug, info};

use crate::geometry::{Region, RectangleSet};
use crate::raster::Bitmap;
use super::strategy::DecomposerStrategy;

/// A histogram bar that has been opened but not yet closed
#[derive(Debug, Clone, Copy)]
struct OpenBar {
    /// Column where the bar starts
    start: usize,
    /// Open height before this bar was pushed
    below: u32,
}

/// Greedy largest-rectangle-first decomposer
#[derive(Debug, Default, Clone, Copy)]
pub struct MaximalRectangleExtractor;

impl MaximalRectangleExtractor {
    pub fn new() -> Self {
        MaximalRectangleExtractor
    }

    /// Find the largest all-foreground rectangle in the bitmap
    ///
    /// Ties keep the first candidate found in scan order: a later rectangle
    /// replaces the best one only if its area is strictly greater.
    ///
    /// # Returns
    /// The area and region of the rectangle, or `None` if the bitmap is blank
    pub fn find_largest(bitmap: &Bitmap) -> Option<(u64, Region)> {
        let width = bitmap.width() as usize;
        let height = bitmap.height();

        // One entry per column plus a sentinel that always stays zero
        let mut cache = vec![0u32; width + 1];
        let mut stack: Vec<OpenBar> = Vec::with_capacity(width + 1);

        let mut best_area = 0u64;
        let mut best = Region::new(0, 0, 0, 0);

        for row in 0..height {
            for (col, run) in cache.iter_mut().take(width).enumerate() {
                if bitmap.get(col as u32, row) {
                    *run += 1;
                } else {
                    *run = 0;
                }
            }

            let mut open_height = 0u32;

            for col in 0..=width {
                let run = cache[col];

                if run > open_height {
                    stack.push(OpenBar { start: col, below: open_height });
                    open_height = run;
                } else if run < open_height {
                    let mut last = OpenBar { start: col, below: 0 };

                    while run < open_height {
                        let Some(bar) = stack.pop() else { break };

                        let bar_width = (col - bar.start) as u32;
                        let area = open_height as u64 * bar_width as u64;
                        if area > best_area {
                            best_area = area;
                            best = Region::new(
                                bar.start as u32,
                                row + 1 - open_height,
                                bar_width,
                                open_height,
                            );
                        }

                        open_height = bar.below;
                        last = bar;
                    }

                    open_height = run;
                    if open_height != 0 {
                        stack.push(last);
                    }
                }
            }

            // The sentinel column closes every bar
            debug_assert!(stack.is_empty());
        }

        if best_area > 0 {
            Some((best_area, best))
        } else {
            None
        }
    }

    /// Run the extraction loop to exhaustion
    ///
    /// Every claimed rectangle is cleared from `bitmap`, which is blank when
    /// this returns.
    pub fn extract_all(bitmap: &mut Bitmap) -> RectangleSet {
        let mut rectangles = RectangleSet::for_region(&bitmap.bounds());

        while let Some((area, region)) = Self::find_largest(bitmap) {
            debug!("Extracted rectangle #{} {} with area {}", rectangles.len(), region, area);
            bitmap.clear_region(&region);
            rectangles.push(region);
        }

        info!("Maximal rectangle decomposition produced {} rectangles", rectangles.len());
        rectangles
    }
}

impl DecomposerStrategy for MaximalRectangleExtractor {
    fn decompose(&self, mut bitmap: Bitmap) -> RectangleSet {
        Self::extract_all(&mut bitmap)
    }

    fn name(&self) -> &'static str {
        "maximal"
    }
}
