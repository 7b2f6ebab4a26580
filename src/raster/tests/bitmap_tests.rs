//! Tests for the bitmap model

use image::{GrayImage, Luma};

use crate::geometry::Region;
use crate::raster::{Bitmap, RectError};

#[test]
fn test_rejects_too_small() {
    assert!(matches!(
        Bitmap::new(1, 5),
        Err(RectError::BitmapTooSmall { width: 1, height: 5 })
    ));
    assert!(matches!(
        Bitmap::new(5, 0),
        Err(RectError::BitmapTooSmall { width: 5, height: 0 })
    ));
    assert!(Bitmap::new(2, 2).is_ok());
}

#[test]
fn test_from_cells_checks_length() {
    let result = Bitmap::from_cells(3, 2, vec![true; 5]);
    assert!(matches!(result, Err(RectError::InvalidArgument(_))));
}

#[test]
fn test_get_set_and_counts() {
    let mut bitmap = Bitmap::new(4, 3).unwrap();
    assert!(bitmap.is_blank());

    bitmap.set(1, 1, true);
    bitmap.set(3, 2, true);

    assert!(bitmap.get(1, 1));
    assert!(!bitmap.get(0, 0));
    assert_eq!(bitmap.foreground_count(), 2);
    assert_eq!(bitmap.count_foreground(&Region::new(0, 0, 2, 2)), 1);
    assert_eq!(bitmap.count_foreground(&Region::new(2, 0, 0, 3)), 0);
}

#[test]
fn test_clear_region_keeps_dimensions() {
    let mut bitmap = Bitmap::from_fn(5, 4, |_, _| true).unwrap();
    bitmap.clear_region(&Region::new(1, 1, 3, 2));

    assert_eq!((bitmap.width(), bitmap.height()), (5, 4));
    assert_eq!(bitmap.foreground_count(), 20 - 6);
    assert!(!bitmap.get(2, 2));
    assert!(bitmap.get(4, 3));
}

#[test]
fn test_gray_round_trip() {
    let mut image = GrayImage::new(3, 2);
    image.put_pixel(0, 0, Luma([200]));
    image.put_pixel(2, 1, Luma([1]));

    let bitmap = Bitmap::from_gray(&image).unwrap();
    assert!(bitmap.get(0, 0));
    assert!(bitmap.get(2, 1));
    assert_eq!(bitmap.foreground_count(), 2);

    let mono = bitmap.to_gray_image();
    assert_eq!(mono.get_pixel(0, 0)[0], 255);
    assert_eq!(mono.get_pixel(1, 0)[0], 0);
}

#[test]
fn test_contains_region() {
    let bitmap = Bitmap::new(4, 4).unwrap();
    assert!(bitmap.contains_region(&bitmap.bounds()));
    assert!(!bitmap.contains_region(&Region::new(3, 0, 2, 1)));
}

#[test]
fn test_contains_region_rejects_overflowing_end() {
    let bitmap = Bitmap::new(4, 4).unwrap();
    assert!(!bitmap.contains_region(&Region::new(u32::MAX, 0, 2, 1)));
    assert!(!bitmap.contains_region(&Region::new(0, 1, 1, u32::MAX)));
}
