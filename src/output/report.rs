//! Plain-text rectangle report
//!
//! The first line is the bounding box, then one line per rectangle in set
//! order, each as `x y width height`.

use std::io::Write;

use crate::geometry::RectangleSet;
use crate::raster::errors::RectResult;

/// Write the report for a rectangle set
pub fn write_report<W: Write>(rectangles: &RectangleSet, writer: &mut W) -> RectResult<()> {
    let bounds = rectangles.bounds();
    writeln!(writer, "{} {} {} {}", bounds.min_x, bounds.min_y, bounds.width(), bounds.height())?;

    for rectangle in rectangles {
        writeln!(writer, "{} {} {} {}", rectangle.x, rectangle.y, rectangle.width, rectangle.height)?;
    }

    writer.flush()?;
    Ok(())
}

/// Render the report into a string
pub fn report_to_string(rectangles: &RectangleSet) -> RectResult<String> {
    let mut buffer = Vec::new();
    write_report(rectangles, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| e.to_string().into())
}
