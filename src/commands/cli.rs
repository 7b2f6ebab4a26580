//! Command-line interface definition
//!
//! Kept in the library so that the argument set can be exercised
//! without spawning the binary.

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the argument parser for the `rectkit` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("RectKit")
        .version("0.1")
        .author("Maurice Schilpp")
        .about("Decompose a monochrome image into non-overlapping rectangles")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("The input PNG, GIF, or JPEG file, default is stdin")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("The output rectangle-data filename, default is stdout")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .help("Write a verification RGBA color PNG file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("invert")
                .long("invert")
                .help("Invert the image colors prior to grayscaling")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("negative")
                .long("negative")
                .help("Write the corresponding negative RGBA PNG file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("threshold")
                .short('t')
                .long("threshold")
                .help("Monochrome gray threshold, post negation, 0-255")
                .value_name("LEVEL")
                .default_value("127")
                .required(false),
        )
        .arg(
            Arg::new("grayscale")
                .long("grayscale")
                .help("Write the corresponding grayscale PNG file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("monochrome")
                .long("monochrome")
                .help("Write the corresponding monochrome PNG file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("animation")
                .long("animation")
                .help("Write the corresponding animated GIF file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("animation-fps")
                .long("animation-fps")
                .help("Approximate animation frames per second, 0.1-100")
                .value_name("FPS")
                .default_value("5")
                .required(false),
        )
        .arg(
            Arg::new("svg")
                .long("svg")
                .help("Write the corresponding standalone SVG file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("svg-variant")
                .long("svg-variant")
                .help("SVG layout (flat, holes)")
                .value_name("VARIANT")
                .default_value("flat")
                .required(false),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .help("SVG style preset name")
                .value_name("NAME")
                .default_value("outline")
                .required(false),
        )
        .arg(
            Arg::new("style-file")
                .long("style-file")
                .help("TOML file with SVG style presets to use instead of the built-in ones")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("list-styles")
                .long("list-styles")
                .help("List the SVG style presets and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("method")
                .short('m')
                .long("method")
                .help("Decomposition method (maximal, quadtree)")
                .value_name("METHOD")
                .default_value("maximal")
                .required(false),
        )
        .arg(
            Arg::new("center")
                .long("center")
                .help("Center the rectangles' bounding box on the origin")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("scale")
                .long("scale")
                .help("Multiply every output coordinate by this factor")
                .value_name("FACTOR")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Log file path")
                .value_name("FILE")
                .default_value("rectkit.log")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not draw progress bars")
                .action(ArgAction::SetTrue),
        )
}
