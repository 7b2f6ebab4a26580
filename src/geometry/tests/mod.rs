#[cfg(test)]
mod region_tests;
