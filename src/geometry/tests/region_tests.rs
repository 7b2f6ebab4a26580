//! Tests for pixel regions

use crate::geometry::Region;

#[test]
fn test_from_corners() {
    let region = Region::from_corners(1, 2, 3, 2);
    assert_eq!(region, Region::new(1, 2, 3, 1));
    assert_eq!(region.area(), 3);
    assert_eq!((region.end_x(), region.end_y()), (4, 3));
}

#[test]
fn test_quadrants_even() {
    let quadrants = Region::new(0, 0, 4, 6).quadrants();
    assert_eq!(
        quadrants,
        [
            Region::new(0, 0, 2, 3),
            Region::new(2, 0, 2, 3),
            Region::new(0, 3, 2, 3),
            Region::new(2, 3, 2, 3),
        ]
    );
}

#[test]
fn test_quadrants_of_thin_region() {
    let quadrants = Region::new(5, 2, 1, 2).quadrants();
    assert!(quadrants[0].is_empty());
    assert_eq!(quadrants[1], Region::new(5, 2, 1, 1));
    assert!(quadrants[2].is_empty());
    assert_eq!(quadrants[3], Region::new(5, 3, 1, 1));

    let total: u64 = quadrants.iter().map(Region::area).sum();
    assert_eq!(total, 2);
}

#[test]
fn test_intersects() {
    let a = Region::new(0, 0, 2, 2);
    assert!(a.intersects(&Region::new(1, 1, 2, 2)));
    assert!(!a.intersects(&Region::new(2, 0, 2, 2)));
    assert!(!a.intersects(&Region::new(0, 0, 0, 2)));
}
