//! Integration tests for the decomposition pipeline

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, Rgba, RgbaImage};

use rectkit::commands::{build_cli, CommandFactory, RectkitCommandFactory};
use rectkit::utils::binarize_utils::BinarizeOptions;
use rectkit::utils::logger::Logger;
use rectkit::{Bitmap, MaximalRectangleExtractor, QuadtreeDecomposer, RectError, RectKit, Rectangle, Region};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rectkit_it_{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// 8x8 black image with a white 4x4 block at the origin and a white 2x2 block at (6,6)
fn write_blocks_png(dir: &Path) -> String {
    let image = RgbaImage::from_fn(8, 8, |x, y| {
        if (x < 4 && y < 4) || (x >= 6 && y >= 6) {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    });
    let path = dir.join("blocks.png");
    image.save(&path).unwrap();
    path.to_string_lossy().to_string()
}

fn path_str(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().to_string()
}

#[test]
fn test_api_pipeline_both_methods() {
    let dir = temp_dir("api");
    let input = write_blocks_png(&dir);
    let kit = RectKit::new(None).unwrap();

    for method in ["maximal", "quadtree"] {
        let set = kit.decompose_file(&input, &BinarizeOptions::default(), method).unwrap();
        assert_eq!(kit.report(&set).unwrap(), "0 0 8 8\n0 0 4 4\n6 6 2 2\n", "method {}", method);
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_cli_writes_all_outputs() {
    let dir = temp_dir("cli");
    let input = write_blocks_png(&dir);
    let report = path_str(&dir, "rects.txt");
    let svg = path_str(&dir, "rects.svg");
    let gif = path_str(&dir, "rects.gif");
    let mono = path_str(&dir, "mono.png");
    let gray = path_str(&dir, "gray.png");

    let matches = build_cli()
        .try_get_matches_from([
            "rectkit", "--input", &input, "--output", &report, "--svg", &svg,
            "--animation", &gif, "--monochrome", &mono, "--grayscale", &gray,
            "--center", "--quiet",
        ])
        .unwrap();
    let logger = Logger::new(&path_str(&dir, "run.log")).unwrap();
    let factory = RectkitCommandFactory::new();
    let command = match factory.create_command(&matches, &logger) {
        Ok(command) => command,
        Err(e) => panic!("command creation failed: {}", e),
    };
    if let Err(e) = command.execute() {
        panic!("command failed: {}", e);
    }

    assert_eq!(
        fs::read_to_string(&report).unwrap(),
        "-4 -4 8 8\n-4 -4 4 4\n2 2 2 2\n"
    );

    let document = fs::read_to_string(&svg).unwrap();
    assert_eq!(document.matches("<rect").count(), 2);
    assert!(document.contains("viewBox=\"-4.015625 -4.015625 8.03125 8.03125\""));

    let animation = fs::read(&gif).unwrap();
    assert!(animation.starts_with(b"GIF89a"));

    let monochrome = image::open(&mono).unwrap().to_luma8();
    assert_eq!(monochrome.dimensions(), (8, 8));
    assert_eq!(monochrome.get_pixel(0, 0)[0], 255);
    assert_eq!(monochrome.get_pixel(5, 5)[0], 0);
    assert!(fs::metadata(&gray).is_ok());

    let summary = fs::read_to_string(path_str(&dir, "run.log")).unwrap();
    assert!(summary.contains("into 2 rectangles using maximal"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_cli_rejects_bad_arguments() {
    let dir = temp_dir("args");
    let logger = Logger::new(&path_str(&dir, "run.log")).unwrap();
    let factory = RectkitCommandFactory::new();

    let cases: [&[&str]; 5] = [
        &["rectkit", "--negative", "neg.png"],
        &["rectkit", "--threshold", "300"],
        &["rectkit", "--animation-fps", "250"],
        &["rectkit", "--method", "triangles"],
        &["rectkit", "--svg-variant", "dots"],
    ];

    for args in cases {
        let matches = build_cli().try_get_matches_from(args.iter().copied()).unwrap();
        let result = factory.create_command(&matches, &logger);
        assert!(
            matches!(result, Err(RectError::InvalidArgument(_))),
            "expected rejection for {:?}",
            args
        );
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_list_styles_command() {
    let dir = temp_dir("styles");
    let logger = Logger::new(&path_str(&dir, "run.log")).unwrap();
    let matches = build_cli().try_get_matches_from(["rectkit", "--list-styles"]).unwrap();

    let command = match RectkitCommandFactory::new().create_command(&matches, &logger) {
        Ok(command) => command,
        Err(e) => panic!("command creation failed: {}", e),
    };
    assert!(command.execute().is_ok());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_scenarios_through_public_api() {
    // All foreground
    let mut full = Bitmap::from_fn(4, 4, |_, _| true).unwrap();
    let set = MaximalRectangleExtractor::extract_all(&mut full);
    assert_eq!(set.len(), 1);
    assert_eq!(set.rectangles()[0], Rectangle::from(Region::new(0, 0, 4, 4)));

    // Checkerboard
    let mut checker = Bitmap::from_cells(2, 2, vec![true, false, false, true]).unwrap();
    let set = MaximalRectangleExtractor::extract_all(&mut checker);
    assert_eq!(
        set.rectangles(),
        &[Rectangle::from(Region::new(0, 0, 1, 1)), Rectangle::from(Region::new(1, 1, 1, 1))]
    );

    // All background
    let blank = Bitmap::from_gray(&GrayImage::new(3, 3)).unwrap();
    assert!(QuadtreeDecomposer::decompose_bitmap(&blank).is_empty());
    let mut blank = blank;
    assert!(MaximalRectangleExtractor::extract_all(&mut blank).is_empty());
}
