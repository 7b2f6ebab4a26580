#[cfg(test)]
mod maximal_tests;
