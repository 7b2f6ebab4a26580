//! Ordered rectangle collection produced by a decomposition
//!
//! Order is discovery order. It does not matter for coverage, but the
//! animation builder replays rectangles in exactly this order.

use log::debug;

use super::bbox::BoundingBox;
use super::point::Point;
use super::rectangle::Rectangle;
use super::region::Region;

/// A bounding box plus the rectangles found inside it
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleSet {
    bounds: BoundingBox,
    /// Centroid of the bounds the set was created with
    anchor: Point,
    rectangles: Vec<Rectangle>,
}

impl RectangleSet {
    /// Create an empty set for the given bounds
    pub fn new(bounds: BoundingBox) -> Self {
        RectangleSet {
            anchor: bounds.center(),
            bounds,
            rectangles: Vec::new(),
        }
    }

    /// Create an empty set whose bounds are a pixel region
    pub fn for_region(region: &Region) -> Self {
        Self::new(BoundingBox::from_region(region))
    }

    /// Append a decomposed region
    pub fn push(&mut self, region: Region) {
        self.rectangles.push(region.into());
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rectangle> {
        self.rectangles.iter()
    }

    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    /// Sum of all rectangle areas
    pub fn total_area(&self) -> f64 {
        self.rectangles.iter().map(Rectangle::area).sum()
    }

    /// Translate by minus the centroid of the original bounds
    ///
    /// The first call puts the bounding box centroid at (0, 0). The shift is
    /// the same vector on every call, so a second call moves the set again.
    pub fn center(&mut self) {
        let dx = -self.anchor.x;
        let dy = -self.anchor.y;
        debug!("Centering {} rectangles by ({}, {})", self.rectangles.len(), dx, dy);

        self.bounds.translate(dx, dy);
        for rectangle in &mut self.rectangles {
            rectangle.translate(dx, dy);
        }
    }

    /// Multiply every coordinate by `factor`
    pub fn scale(&mut self, factor: f64) {
        self.bounds.scale(factor);
        self.anchor = Point::new(self.anchor.x * factor, self.anchor.y * factor);
        for rectangle in &mut self.rectangles {
            rectangle.scale(factor);
        }
    }
}

impl<'a> IntoIterator for &'a RectangleSet {
    type Item = &'a Rectangle;
    type IntoIter = std::slice::Iter<'a, Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.rectangles.iter()
    }
}
