//! Standalone SVG serialization
//!
//! The viewBox is the set's bounding box grown by half the stroke width on
//! every side, so outlines on the outer edge are not clipped.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use log::debug;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::geometry::{BoundingBox, RectangleSet};
use crate::raster::errors::{RectError, RectResult};
use super::styles::SvgStyle;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Document layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SvgVariant {
    /// One filled rectangle per foreground rectangle
    #[default]
    Flat,
    /// A background rectangle with the foreground rectangles drawn over it
    Holes,
}

impl FromStr for SvgVariant {
    type Err = RectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(SvgVariant::Flat),
            "holes" => Ok(SvgVariant::Holes),
            _ => Err(RectError::InvalidArgument(format!("Unknown SVG variant: {}", s))),
        }
    }
}

impl fmt::Display for SvgVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgVariant::Flat => write!(f, "flat"),
            SvgVariant::Holes => write!(f, "holes"),
        }
    }
}

/// Writes rectangle sets as SVG documents
#[derive(Debug, Clone, Default)]
pub struct SvgSerializer {
    style: SvgStyle,
    variant: SvgVariant,
}

impl SvgSerializer {
    pub fn new(style: SvgStyle, variant: SvgVariant) -> Self {
        SvgSerializer { style, variant }
    }

    /// The area the document shows
    pub fn view_box(&self, rectangles: &RectangleSet) -> BoundingBox {
        rectangles.bounds().expanded(self.style.stroke_width / 2.0)
    }

    /// Write a complete document
    pub fn write<W: Write>(&self, rectangles: &RectangleSet, output: W) -> RectResult<()> {
        let view = self.view_box(rectangles);
        debug!(
            "Writing {} SVG with {} rectangles, viewBox {} {} {} {}",
            self.variant,
            rectangles.len(),
            view.min_x,
            view.min_y,
            view.width(),
            view.height()
        );

        let mut writer = Writer::new_with_indent(output, b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", None, Some("no"))))?;

        let view_box = format!("{} {} {} {}", view.min_x, view.min_y, view.width(), view.height());
        let width = view.width().to_string();
        let height = view.height().to_string();
        let mut root = BytesStart::new("svg");
        root.push_attribute(("xmlns", SVG_NAMESPACE));
        root.push_attribute(("version", "1.1"));
        root.push_attribute(("viewBox", view_box.as_str()));
        root.push_attribute(("width", width.as_str()));
        root.push_attribute(("height", height.as_str()));
        writer.write_event(Event::Start(root))?;

        if self.variant == SvgVariant::Holes {
            let bounds = rectangles.bounds();
            Self::write_rect(
                &mut writer,
                bounds.min_x,
                bounds.min_y,
                bounds.width(),
                bounds.height(),
                &self.style.background_css(),
            )?;
        }

        let css = self.style.css();
        for rectangle in rectangles {
            Self::write_rect(&mut writer, rectangle.x, rectangle.y, rectangle.width, rectangle.height, &css)?;
        }

        writer.write_event(Event::End(BytesEnd::new("svg")))?;
        writer.get_mut().write_all(b"\n")?;
        writer.get_mut().flush()?;
        Ok(())
    }

    fn write_rect<W: Write>(
        writer: &mut Writer<W>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        css: &str,
    ) -> RectResult<()> {
        let (x, y) = (x.to_string(), y.to_string());
        let (width, height) = (width.to_string(), height.to_string());

        writer
            .create_element("rect")
            .with_attribute(("x", x.as_str()))
            .with_attribute(("y", y.as_str()))
            .with_attribute(("width", width.as_str()))
            .with_attribute(("height", height.as_str()))
            .with_attribute(("style", css))
            .write_empty()?;
        Ok(())
    }

    /// Render a complete document into a string
    pub fn to_svg_string(&self, rectangles: &RectangleSet) -> RectResult<String> {
        let mut buffer = Vec::new();
        self.write(rectangles, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| e.to_string().into())
    }
}
