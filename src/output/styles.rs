//! SVG style presets
//!
//! Presets are plain data in `svg_styles.toml`, embedded at compile time
//! and parsed once on first use.

use std::collections::BTreeMap;
use std::fs;
use lazy_static::lazy_static;
use log::warn;

use crate::raster::errors::{RectError, RectResult};

/// Preset used when none is requested
pub const DEFAULT_STYLE: &str = "outline";

lazy_static! {
    // Parse the embedded presets at first use
    static ref STYLE_PRESETS: StylePresets = {
        let content = include_str!("../../svg_styles.toml");
        StylePresets::from_str(content).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse SVG style presets: {}", e);
                StylePresets::default()
            })
    };
}

/// Names of the embedded presets, sorted
pub fn preset_names() -> Vec<String> {
    STYLE_PRESETS.names().into_iter().map(str::to_string).collect()
}

/// Fill and stroke settings for emitted shapes
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    /// Canvas colour for the holes variant
    pub background: String,
}

impl SvgStyle {
    /// Look up a named preset
    pub fn preset(name: &str) -> RectResult<Self> {
        STYLE_PRESETS.get(name).cloned().ok_or_else(|| {
            RectError::InvalidArgument(format!(
                "Unknown SVG style '{}', available: {}",
                name,
                STYLE_PRESETS.names().join(", ")
            ))
        })
    }

    /// Inline CSS for a foreground rectangle
    pub fn css(&self) -> String {
        format!(
            "fill: {}; stroke: {}; stroke-width: {};",
            self.fill, self.stroke, self.stroke_width
        )
    }

    /// Inline CSS for the background rectangle of the holes variant
    pub fn background_css(&self) -> String {
        format!("fill: {}; stroke: none;", self.background)
    }
}

impl Default for SvgStyle {
    fn default() -> Self {
        SvgStyle {
            fill: "rgb(255,255,255)".to_string(),
            stroke: "rgb(0,0,0)".to_string(),
            stroke_width: 0.03125,
            background: "rgb(0,0,0)".to_string(),
        }
    }
}

/// Named style table
#[derive(Debug, Default)]
pub struct StylePresets {
    styles: BTreeMap<String, SvgStyle>,
}

impl StylePresets {
    /// Parse presets from a TOML string
    pub fn from_str(content: &str) -> RectResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(RectError::GenericError(format!("Failed to parse TOML: {}", e))),
        };

        let mut presets = StylePresets::default();

        let Some(table) = toml_value.as_table() else {
            return Ok(presets);
        };

        for (name, entry) in table {
            match Self::parse_style(entry) {
                Some(style) => {
                    presets.styles.insert(name.clone(), style);
                }
                None => warn!("Ignoring incomplete SVG style preset '{}'", name),
            }
        }

        Ok(presets)
    }

    /// Load presets from a TOML file
    pub fn from_file(path: &str) -> RectResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(RectError::IoError(e)),
        };

        Self::from_str(&contents)
    }

    fn parse_style(entry: &toml::Value) -> Option<SvgStyle> {
        let table = entry.as_table()?;
        let stroke_width = match table.get("stroke_width")? {
            toml::Value::Float(f) => *f,
            toml::Value::Integer(i) => *i as f64,
            _ => return None,
        };

        Some(SvgStyle {
            fill: table.get("fill")?.as_str()?.to_string(),
            stroke: table.get("stroke")?.as_str()?.to_string(),
            stroke_width,
            background: table
                .get("background")
                .and_then(|v| v.as_str())
                .unwrap_or("rgb(0,0,0)")
                .to_string(),
        })
    }

    pub fn get(&self, name: &str) -> Option<&SvgStyle> {
        self.styles.get(name)
    }

    /// Preset names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.styles.keys().map(String::as_str).collect()
    }
}
