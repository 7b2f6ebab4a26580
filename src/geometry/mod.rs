//! Geometry primitives
//!
//! Integer pixel regions used while decomposing, and the real-valued
//! rectangles, bounding boxes and sets handed to the serializers.

mod region;
mod point;
mod bbox;
mod rectangle;
mod rectangle_set;
mod tests;

// Re-export key types
pub use self::region::Region;
pub use self::point::Point;
pub use self::bbox::BoundingBox;
pub use self::rectangle::Rectangle;
pub use self::rectangle_set::RectangleSet;
