//! Real-valued output rectangle

use super::region::Region;

/// A rectangle in output space
///
/// Decomposers find integer regions; once placed in a set they become
/// real-valued so that centering and scaling stay exact at sub-pixel level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rectangle { x, y, width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    pub fn scale(&mut self, factor: f64) {
        self.x *= factor;
        self.y *= factor;
        self.width *= factor;
        self.height *= factor;
    }
}

impl From<Region> for Rectangle {
    fn from(region: Region) -> Self {
        Rectangle::new(
            region.x as f64,
            region.y as f64,
            region.width as f64,
            region.height as f64,
        )
    }
}
