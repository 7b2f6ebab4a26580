//! Style listing command
//!
//! Prints the SVG style presets compiled into the binary.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::output::styles::{SvgStyle, StylePresets, DEFAULT_STYLE};
use crate::raster::errors::RectResult;
use crate::utils::logger::Logger;

/// Command for listing SVG style presets
pub struct StylesCommand<'a> {
    /// Optional TOML file with extra presets
    presets_file: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> StylesCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RectResult<Self> {
        Ok(StylesCommand {
            presets_file: args.get_one::<String>("style-file").cloned(),
            logger,
        })
    }

    fn print_style(name: &str, style: &SvgStyle) {
        let marker = if name == DEFAULT_STYLE { " (default)" } else { "" };
        println!("{}{}", name, marker);
        println!("  {}", style.css());
        println!("  background: {}", style.background);
    }
}

impl<'a> Command for StylesCommand<'a> {
    fn execute(&self) -> RectResult<()> {
        let names = match &self.presets_file {
            Some(path) => {
                info!("Listing SVG styles from {}", path);
                let presets = StylePresets::from_file(path)?;
                for name in presets.names() {
                    if let Some(style) = presets.get(name) {
                        Self::print_style(name, style);
                    }
                }
                presets.names().len()
            }
            None => {
                let names = crate::output::styles::preset_names();
                for name in &names {
                    Self::print_style(name, &SvgStyle::preset(name)?);
                }
                names.len()
            }
        };

        self.logger.log(&format!("Listed {} SVG styles", names))?;
        Ok(())
    }
}
