//! Helpers shared by the unit tests

use std::collections::HashSet;

use crate::geometry::{Rectangle, RectangleSet, Region};
use crate::raster::Bitmap;

/// Build a bitmap from ASCII rows, `#` = foreground, anything else = background
pub fn bitmap_from_art(rows: &[&str]) -> Bitmap {
    let height = rows.len() as u32;
    let width = rows[0].chars().count() as u32;
    let cells = rows
        .iter()
        .flat_map(|row| row.chars().map(|c| c == '#'))
        .collect::<Vec<_>>();
    Bitmap::from_cells(width, height, cells).unwrap()
}

/// Convert an unscaled, uncentered rectangle back to a region
pub fn to_region(rectangle: &Rectangle) -> Region {
    Region::new(
        rectangle.x as u32,
        rectangle.y as u32,
        rectangle.width as u32,
        rectangle.height as u32,
    )
}

pub fn regions(set: &RectangleSet) -> Vec<Region> {
    set.iter().map(to_region).collect()
}

/// Foreground cells of a bitmap
pub fn foreground_cells(bitmap: &Bitmap) -> HashSet<(u32, u32)> {
    let mut cells = HashSet::new();
    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            if bitmap.get(x, y) {
                cells.insert((x, y));
            }
        }
    }
    cells
}

/// Assert the set covers exactly the bitmap's foreground without overlaps
pub fn assert_exact_cover(original: &Bitmap, set: &RectangleSet) {
    let mut covered = HashSet::new();
    for region in regions(set) {
        assert!(region.width > 0 && region.height > 0, "degenerate region {}", region);
        assert!(original.contains_region(&region), "region {} out of bounds", region);
        for y in region.y..region.end_y() {
            for x in region.x..region.end_x() {
                assert!(original.get(x, y), "region {} covers background cell ({}, {})", region, x, y);
                assert!(covered.insert((x, y)), "cell ({}, {}) covered twice", x, y);
            }
        }
    }
    assert_eq!(covered, foreground_cells(original));
}

/// Largest all-foreground rectangle area by exhaustive search
pub fn brute_force_largest_area(bitmap: &Bitmap) -> u64 {
    let (width, height) = (bitmap.width(), bitmap.height());
    let mut best = 0;
    for top in 0..height {
        for left in 0..width {
            for bottom in top..height {
                for right in left..width {
                    let region = Region::from_corners(left, top, right, bottom);
                    if bitmap.count_foreground(&region) == region.area() {
                        best = best.max(region.area());
                    }
                }
            }
        }
    }
    best
}

/// Small deterministic pseudo-random bitmap (xorshift), roughly `density`% foreground
pub fn pseudo_random_bitmap(width: u32, height: u32, seed: u64, density: u64) -> Bitmap {
    let mut state = seed.max(1);
    Bitmap::from_fn(width, height, |_, _| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state % 100 < density
    })
    .unwrap()
}
