//! Tests for the greedy maximal-rectangle extractor

use crate::decompose::MaximalRectangleExtractor;
use crate::geometry::Region;
use crate::raster::Bitmap;
use crate::test_utils::{
    assert_exact_cover, bitmap_from_art, brute_force_largest_area, pseudo_random_bitmap, regions,
};

#[test]
fn test_full_bitmap_is_one_rectangle() {
    let mut bitmap = Bitmap::from_fn(4, 4, |_, _| true).unwrap();
    let set = MaximalRectangleExtractor::extract_all(&mut bitmap);

    assert_eq!(regions(&set), vec![Region::new(0, 0, 4, 4)]);
    assert!(bitmap.is_blank());
}

#[test]
fn test_top_left_block() {
    let mut bitmap = bitmap_from_art(&[
        "##..",
        "##..",
        "....",
        "....",
    ]);
    let set = MaximalRectangleExtractor::extract_all(&mut bitmap);

    assert_eq!(regions(&set), vec![Region::new(0, 0, 2, 2)]);
}

#[test]
fn test_checkerboard_extraction_order() {
    let mut bitmap = bitmap_from_art(&[
        "#.",
        ".#",
    ]);
    let set = MaximalRectangleExtractor::extract_all(&mut bitmap);

    assert_eq!(
        regions(&set),
        vec![Region::new(0, 0, 1, 1), Region::new(1, 1, 1, 1)]
    );
}

#[test]
fn test_blank_bitmap_yields_nothing() {
    let mut bitmap = Bitmap::new(5, 3).unwrap();
    assert_eq!(MaximalRectangleExtractor::find_largest(&bitmap), None);

    let set = MaximalRectangleExtractor::extract_all(&mut bitmap);
    assert!(set.is_empty());
}

#[test]
fn test_find_largest_does_not_modify_bitmap() {
    let bitmap = bitmap_from_art(&[
        "#...",
        "#...",
        "####",
    ]);
    let before = bitmap.clone();

    let (area, region) = MaximalRectangleExtractor::find_largest(&bitmap).unwrap();
    assert_eq!(area, 4);
    assert_eq!(region, Region::new(0, 2, 4, 1));
    assert_eq!(bitmap, before);
}

#[test]
fn test_l_shape() {
    let mut bitmap = bitmap_from_art(&[
        "#...",
        "#...",
        "####",
    ]);
    let set = MaximalRectangleExtractor::extract_all(&mut bitmap);

    assert_eq!(
        regions(&set),
        vec![Region::new(0, 2, 4, 1), Region::new(0, 0, 1, 2)]
    );
}

#[test]
fn test_equal_areas_keep_first_found() {
    let mut bitmap = bitmap_from_art(&[
        "##..",
        "##..",
        "..##",
        "..##",
    ]);
    let set = MaximalRectangleExtractor::extract_all(&mut bitmap);
    assert_eq!(
        regions(&set),
        vec![Region::new(0, 0, 2, 2), Region::new(2, 2, 2, 2)]
    );

    // A horizontal bar found on row 0 beats an equal vertical bar closed on row 3
    let mut bitmap = bitmap_from_art(&[
        "###.",
        "...#",
        "...#",
        "...#",
    ]);
    let set = MaximalRectangleExtractor::extract_all(&mut bitmap);
    assert_eq!(
        regions(&set),
        vec![Region::new(0, 0, 3, 1), Region::new(3, 1, 1, 3)]
    );
}

#[test]
fn test_inner_hole() {
    let bitmap = bitmap_from_art(&[
        "#####",
        "#...#",
        "#####",
    ]);
    let mut working = bitmap.clone();
    let set = MaximalRectangleExtractor::extract_all(&mut working);

    assert_eq!(set.len(), 4);
    assert_eq!(regions(&set)[0], Region::new(0, 0, 5, 1));
    assert_exact_cover(&bitmap, &set);
}

#[test]
fn test_exact_cover_on_random_bitmaps() {
    for seed in 1..=12u64 {
        let original = pseudo_random_bitmap(11, 7, seed * 7919, 60);
        let mut working = original.clone();
        let set = MaximalRectangleExtractor::extract_all(&mut working);

        assert_exact_cover(&original, &set);
        assert!(working.is_blank());
    }
}

#[test]
fn test_each_step_is_maximal_and_loop_terminates() {
    for seed in 1..=6u64 {
        let mut bitmap = pseudo_random_bitmap(8, 6, seed * 104729, 70);
        let limit = bitmap.width() as usize * bitmap.height() as usize;
        let mut calls = 0;

        loop {
            let expected = brute_force_largest_area(&bitmap);
            calls += 1;
            match MaximalRectangleExtractor::find_largest(&bitmap) {
                Some((area, region)) => {
                    assert_eq!(area, expected);
                    assert_eq!(region.area(), area);
                    assert_eq!(bitmap.count_foreground(&region), area);
                    bitmap.clear_region(&region);
                }
                None => {
                    assert_eq!(expected, 0);
                    break;
                }
            }
        }

        assert!(calls <= limit + 1);
        assert!(bitmap.is_blank());
    }
}

#[test]
fn test_full_checkerboard_needs_one_rectangle_per_cell() {
    let original = Bitmap::from_fn(6, 4, |x, y| (x + y) % 2 == 0).unwrap();
    let mut working = original.clone();
    let set = MaximalRectangleExtractor::extract_all(&mut working);

    assert_eq!(set.len() as u64, original.foreground_count());
    assert_exact_cover(&original, &set);
}
