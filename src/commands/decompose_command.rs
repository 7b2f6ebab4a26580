//! Bitmap decomposition command
//!
//! This module implements the main command: read an image, binarize it,
//! decompose the foreground into rectangles and write the report, SVG,
//! animation and any requested intermediate images.

use std::fs::File;
use std::io::BufWriter;

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::decompose::DecomposerFactory;
use crate::geometry::RectangleSet;
use crate::output::{report, AnimationBuilder, StylePresets, SvgSerializer, SvgStyle, SvgVariant, DEFAULT_STYLE};
use crate::output::animation::{MAX_FPS, MIN_FPS};
use crate::raster::errors::{RectError, RectResult};
use crate::utils::binarize_utils::{self, BinarizeOptions, BinarizedImage, DEFAULT_THRESHOLD};
use crate::utils::image_utils;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Default animation frame rate
pub const DEFAULT_FPS: f64 = 5.0;

/// Optional files for the intermediate pipeline stages
#[derive(Debug, Clone, Default)]
pub struct StageOutputs {
    /// Premultiplied RGBA copy of the input
    pub verify: Option<String>,
    /// Negated RGBA image
    pub negative: Option<String>,
    pub grayscale: Option<String>,
    pub monochrome: Option<String>,
}

/// Command for decomposing an image into rectangles
pub struct DecomposeCommand<'a> {
    /// Input image path, stdin when absent or `-`
    input_file: Option<String>,
    /// Report path, stdout when absent or `-`
    output_file: Option<String>,
    stages: StageOutputs,
    binarize: BinarizeOptions,
    /// Decomposition method name
    method: String,
    svg_file: Option<String>,
    svg_style: SvgStyle,
    svg_variant: SvgVariant,
    animation_file: Option<String>,
    animation_fps: f64,
    /// Translate the result so its bounding box is centered on the origin
    center: bool,
    scale: f64,
    /// Whether to draw a progress bar while encoding the animation
    show_progress: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DecomposeCommand<'a> {
    /// Create a new decompose command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new DecomposeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RectResult<Self> {
        info!("Creating new decompose command from arguments");

        let input_file = args.get_one::<String>("input").cloned();
        let output_file = args.get_one::<String>("output").cloned();

        let invert = args.get_flag("invert");
        let negative = args.get_one::<String>("negative").cloned();
        if !invert && negative.is_some() {
            return Err(RectError::InvalidArgument(
                "A negative image was requested, but color inversion was not".to_string(),
            ));
        }

        let threshold = match args.get_one::<String>("threshold") {
            Some(value) => value.trim().parse::<u8>().map_err(|_| {
                RectError::InvalidArgument(format!(
                    "The monochrome threshold must be in [0, 255] inclusive, got {}",
                    value
                ))
            })?,
            None => DEFAULT_THRESHOLD,
        };
        debug!("Threshold: {}, invert: {}", threshold, invert);

        let animation_fps = match args.get_one::<String>("animation-fps") {
            Some(value) => value.trim().parse::<f64>()
                .map_err(|_| RectError::InvalidArgument(format!("Invalid animation FPS: {}", value)))?,
            None => DEFAULT_FPS,
        };
        if !(MIN_FPS..=MAX_FPS).contains(&animation_fps) {
            return Err(RectError::InvalidArgument(format!(
                "The requested animation FPS {} is out of range {}-{}",
                animation_fps, MIN_FPS, MAX_FPS
            )));
        }

        let scale = match args.get_one::<String>("scale") {
            Some(value) => value.trim().parse::<f64>()
                .map_err(|_| RectError::InvalidArgument(format!("Invalid scale: {}", value)))?,
            None => 1.0,
        };
        if !(scale.is_finite() && scale > 0.0) {
            return Err(RectError::InvalidArgument(format!("Scale must be positive, got {}", scale)));
        }

        let method = args.get_one::<String>("method")
            .cloned()
            .unwrap_or_else(|| "maximal".to_string());
        // Fail early on unknown methods
        DecomposerFactory::create(&method)?;

        let style_name = args.get_one::<String>("style")
            .cloned()
            .unwrap_or_else(|| DEFAULT_STYLE.to_string());
        let svg_style = match args.get_one::<String>("style-file") {
            Some(path) => {
                let presets = StylePresets::from_file(path)?;
                presets.get(&style_name).cloned().ok_or_else(|| {
                    RectError::InvalidArgument(format!("Style '{}' not found in {}", style_name, path))
                })?
            }
            None => SvgStyle::preset(&style_name)?,
        };

        let svg_variant = match args.get_one::<String>("svg-variant") {
            Some(value) => value.parse::<SvgVariant>()?,
            None => SvgVariant::Flat,
        };

        let stages = StageOutputs {
            verify: args.get_one::<String>("verify").cloned(),
            negative,
            grayscale: args.get_one::<String>("grayscale").cloned(),
            monochrome: args.get_one::<String>("monochrome").cloned(),
        };

        info!("Input: {:?}, output: {:?}, method: {}", input_file, output_file, method);

        Ok(DecomposeCommand {
            input_file,
            output_file,
            stages,
            binarize: BinarizeOptions { invert, threshold },
            method,
            svg_file: args.get_one::<String>("svg").cloned(),
            svg_style,
            svg_variant,
            animation_file: args.get_one::<String>("animation").cloned(),
            animation_fps,
            center: args.get_flag("center"),
            scale,
            show_progress: !args.get_flag("quiet"),
            logger,
        })
    }

    /// Write every requested intermediate image
    fn write_stages(&self, binarized: &BinarizedImage) -> RectResult<()> {
        if let Some(path) = &self.stages.verify {
            image_utils::save_image(binarized.rgba.clone(), path, "verification")?;
        }
        if let (Some(path), Some(negative)) = (&self.stages.negative, &binarized.negative) {
            image_utils::save_image(negative.clone(), path, "negative")?;
        }
        if let Some(path) = &self.stages.grayscale {
            image_utils::save_image(binarized.gray.clone(), path, "grayscale")?;
        }
        if let Some(path) = &self.stages.monochrome {
            image_utils::save_image(binarized.monochrome.clone(), path, "monochrome")?;
        }
        Ok(())
    }

    /// Encode the replay animation while the set is still in pixel space
    fn write_animation(&self, path: &str, rectangles: &RectangleSet) -> RectResult<()> {
        let builder = AnimationBuilder::new(self.animation_fps)?;
        let frames = rectangles.len() as u64 + 1;
        let progress = if self.show_progress {
            ProgressTracker::new(frames, "Encoding animation")
        } else {
            ProgressTracker::hidden()
        };

        let file = BufWriter::new(File::create(path)?);
        builder.encode(rectangles, file, |_| progress.increment(1))?;
        progress.finish();

        info!(
            "Wrote {} animation frames to {} ({} cs per frame)",
            frames,
            path,
            builder.delay_centis()
        );
        Ok(())
    }
}

impl<'a> Command for DecomposeCommand<'a> {
    fn execute(&self) -> RectResult<()> {
        let image = image_utils::load_image(self.input_file.as_deref())?;
        let binarized = binarize_utils::binarize(&image, &self.binarize)?;
        self.write_stages(&binarized)?;

        let bitmap = binarized.bitmap;
        let (width, height) = (bitmap.width(), bitmap.height());
        let foreground = bitmap.foreground_count();

        let decomposer = DecomposerFactory::create(&self.method)?;
        info!("Decomposing {}x{} bitmap with {}", width, height, decomposer.name());
        let mut rectangles = decomposer.decompose(bitmap);

        if let Some(path) = &self.animation_file {
            self.write_animation(path, &rectangles)?;
        }

        if self.scale != 1.0 {
            rectangles.scale(self.scale);
        }
        if self.center {
            rectangles.center();
        }

        let mut output = image_utils::create_output(self.output_file.as_deref())?;
        report::write_report(&rectangles, &mut output)?;

        if let Some(path) = &self.svg_file {
            let serializer = SvgSerializer::new(self.svg_style.clone(), self.svg_variant);
            serializer.write(&rectangles, BufWriter::new(File::create(path)?))?;
            info!("Wrote {} SVG to {}", self.svg_variant, path);
        }

        self.logger.log_summary(decomposer.name(), width, height, rectangles.len(), foreground)?;
        Ok(())
    }
}
