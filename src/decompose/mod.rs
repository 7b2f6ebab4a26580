//! Bitmap to rectangle decomposition
//!
//! Two independent strategies share the same data model: a greedy
//! maximal-rectangle extractor and a quadtree decomposer. Callers pick
//! one, usually through [`DecomposerFactory`].

mod strategy;
mod factory;
mod maximal;
mod quadtree;
mod tests;

pub use strategy::DecomposerStrategy;
pub use factory::DecomposerFactory;
pub use maximal::MaximalRectangleExtractor;
pub use quadtree::{QuadtreeDecomposer, Quadtree, QuadNode, QuadrantCount};
