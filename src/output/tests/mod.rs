
#[cfg(test)]
pub(crate) fn sample_set() -> crate::geometry::RectangleSet {
    use crate::geometry::{RectangleSet, Region};

    let mut set = RectangleSet::for_region(&Region::new(0, 0, 4, 2));
    set.push(Region::new(0, 0, 2, 2));
    set.push(Region::new(3, 1, 1, 1));
    set
}
