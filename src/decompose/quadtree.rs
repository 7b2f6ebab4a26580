//! Quadtree decomposition
//!
//! Splits a region into four quadrants at its integer midpoint. A quadrant
//! that is entirely foreground becomes one rectangle; a quadrant that is
//! larger than one pixel and not entirely foreground is split again.
//! Quadrants of at most one pixel that are not foreground are dropped.
//!
//! The tree lives in an arena of nodes addressed by index and is built and
//! walked with explicit work stacks, so deep trees never touch the call
//! stack. The bitmap is only read.

use log::{debug, info};

use crate::geometry::{Region, RectangleSet};
use crate::raster::errors::{RectError, RectResult};
use crate::raster::Bitmap;
use super::strategy::DecomposerStrategy;

/// Expected versus observed foreground cells in one quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantCount {
    pub expected: u64,
    pub observed: u64,
}

impl QuadrantCount {
    /// Entirely foreground and non-empty
    pub fn is_full(&self) -> bool {
        self.expected > 0 && self.observed == self.expected
    }

    /// Large enough to split and not entirely foreground
    pub fn needs_split(&self) -> bool {
        self.expected > 1 && self.observed < self.expected
    }
}

/// One split of a region into four quadrants
#[derive(Debug, Clone)]
pub struct QuadNode {
    pub quadrants: [Region; 4],
    pub counts: [QuadrantCount; 4],
    /// Arena indices of the nodes that split each quadrant further
    pub children: [Option<usize>; 4],
}

impl QuadNode {
    fn new(bitmap: &Bitmap, region: Region) -> Self {
        let quadrants = region.quadrants();
        let counts = quadrants.map(|quadrant| QuadrantCount {
            expected: quadrant.area(),
            observed: bitmap.count_foreground(&quadrant),
        });

        QuadNode {
            quadrants,
            counts,
            children: [None; 4],
        }
    }
}

/// Arena-backed quadtree over a bitmap region
#[derive(Debug, Clone)]
pub struct Quadtree {
    region: Region,
    /// Root is always at index 0
    nodes: Vec<QuadNode>,
}

impl Quadtree {
    /// Build the tree for `region`, which must lie within the bitmap
    pub fn build(bitmap: &Bitmap, region: Region) -> Self {
        let mut nodes = vec![QuadNode::new(bitmap, region)];
        let mut pending = vec![0usize];

        while let Some(index) = pending.pop() {
            for q in 0..4 {
                if nodes[index].counts[q].needs_split() {
                    let child = QuadNode::new(bitmap, nodes[index].quadrants[q]);
                    nodes.push(child);
                    let child_index = nodes.len() - 1;
                    nodes[index].children[q] = Some(child_index);
                    pending.push(child_index);
                }
            }
        }

        debug!("Built quadtree over {} with {} nodes", region, nodes.len());
        Quadtree { region, nodes }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn nodes(&self) -> &[QuadNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Fully-foreground quadrants in emission order
    ///
    /// Pre-order walk: a node's own full quadrants (0..3) first, then the
    /// subtrees of its split quadrants, also in quadrant order.
    pub fn full_regions(&self) -> Vec<Region> {
        let mut regions = Vec::new();
        let mut stack = vec![0usize];

        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];

            for (quadrant, count) in node.quadrants.iter().zip(node.counts.iter()) {
                if count.is_full() {
                    regions.push(*quadrant);
                }
            }

            // Reversed so quadrant 0's subtree is walked first
            stack.extend(node.children.iter().rev().flatten());
        }

        regions
    }
}

/// Recursive-quartering decomposer
#[derive(Debug, Default, Clone, Copy)]
pub struct QuadtreeDecomposer;

impl QuadtreeDecomposer {
    pub fn new() -> Self {
        QuadtreeDecomposer
    }

    /// Decompose one region of the bitmap
    ///
    /// # Returns
    /// The set of fully-foreground quadrants, bounded by `region`, or
    /// `InvalidArgument` if the region reaches outside the bitmap
    pub fn decompose_region(bitmap: &Bitmap, region: Region) -> RectResult<RectangleSet> {
        if !bitmap.contains_region(&region) {
            return Err(RectError::InvalidArgument(format!(
                "Region {} lies outside the {}x{} bitmap",
                region,
                bitmap.width(),
                bitmap.height()
            )));
        }

        Ok(Self::collect(bitmap, region))
    }

    /// Decompose the whole bitmap
    pub fn decompose_bitmap(bitmap: &Bitmap) -> RectangleSet {
        Self::collect(bitmap, bitmap.bounds())
    }

    fn collect(bitmap: &Bitmap, region: Region) -> RectangleSet {
        let tree = Quadtree::build(bitmap, region);
        let mut rectangles = RectangleSet::for_region(&region);
        for full in tree.full_regions() {
            rectangles.push(full);
        }

        info!(
            "Quadtree decomposition produced {} rectangles from {} nodes",
            rectangles.len(),
            tree.node_count()
        );
        rectangles
    }
}

impl DecomposerStrategy for QuadtreeDecomposer {
    fn decompose(&self, bitmap: Bitmap) -> RectangleSet {
        Self::decompose_bitmap(&bitmap)
    }

    fn name(&self) -> &'static str {
        "quadtree"
    }
}
