#[cfg(test)]
mod bitmap_tests;
