//! Region structure for integer pixel rectangles
//!
//! This module defines the Region structure that addresses a rectangular
//! block of bitmap cells. The coordinates are in pixels and follow the
//! typical image coordinate system where (0,0) is the top-left corner.

use std::fmt;

/// Rectangular block of cells (in pixel coordinates)
///
/// Represents a rectangular area defined by its top-left corner coordinates
/// and dimensions. Decomposers report what they find as regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width of the region in pixels
    /// * `height` - Height of the region in pixels
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Create a region from inclusive corner coordinates
    ///
    /// `left..=right` columns and `top..=bottom` rows.
    pub fn from_corners(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Region::new(left, top, right - left + 1, bottom - top + 1)
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }

    /// Number of cells covered
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the cell (x, y) falls inside the region
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.end_x() && y >= self.y && y < self.end_y()
    }

    /// Whether two regions share at least one cell
    pub fn intersects(&self, other: &Region) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.end_x()
            && other.x < self.end_x()
            && self.y < other.end_y()
            && other.y < self.end_y()
    }

    /// Split at the integer midpoint of both axes
    ///
    /// Quadrants come back as top-left, top-right, bottom-left, bottom-right.
    /// For odd sizes the right and bottom quadrants get the extra row/column;
    /// quadrants of a one-pixel-wide or one-pixel-high region can be empty.
    pub fn quadrants(&self) -> [Region; 4] {
        let mid_x = self.x + self.width / 2;
        let mid_y = self.y + self.height / 2;
        let (end_x, end_y) = (self.end_x(), self.end_y());

        [
            Region::new(self.x, self.y, mid_x - self.x, mid_y - self.y),
            Region::new(mid_x, self.y, end_x - mid_x, mid_y - self.y),
            Region::new(self.x, mid_y, mid_x - self.x, end_y - mid_y),
            Region::new(mid_x, mid_y, end_x - mid_x, end_y - mid_y),
        ]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}x{})", self.x, self.y, self.width, self.height)
    }
}
