//! Rectangle set serializers
//!
//! Text report, SVG document and animated GIF replay.

pub mod report;
pub mod svg;
pub mod styles;
pub mod animation;
mod tests;

pub use report::{write_report, report_to_string};
pub use svg::{SvgSerializer, SvgVariant};
pub use styles::{SvgStyle, StylePresets, DEFAULT_STYLE};
pub use animation::AnimationBuilder;
