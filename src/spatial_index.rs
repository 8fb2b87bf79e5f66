//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for node hit testing on the canvas.
//! The index answers with *candidates*: envelopes are closed rectangles, so
//! callers apply the exact (open-boundary) predicates from [`crate::geometry`]
//! to the candidates before acting on them.

use crate::geometry::{Rect, Vec2};
use crate::graph::NodeId;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing a node's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub node: NodeId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(node: NodeId, bounds: Rect) -> Self {
        let min = bounds.min();
        let max = bounds.max();
        Self {
            node,
            min_x: min.x,
            min_y: min.y,
            max_x: max.x,
            max_y: max.y,
        }
    }

    fn same_bounds(&self, other: &Self) -> bool {
        self.min_x == other.min_x
            && self.min_y == other.min_y
            && self.max_x == other.max_x
            && self.max_y == other.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

/// Spatial index for node bounds using an R-tree.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<NodeId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the bounds of a node.
    ///
    /// Returns false, leaving the tree untouched, if the node is already
    /// indexed with exactly these bounds.
    pub fn insert(&mut self, node: NodeId, bounds: Rect) -> bool {
        let entry = SpatialEntry::new(node, bounds);
        if let Some(old_entry) = self.entries.get(&node) {
            if old_entry.same_bounds(&entry) {
                return false;
            }
            self.tree.remove(old_entry);
        }

        self.tree.insert(entry);
        self.entries.insert(node, entry);
        true
    }

    pub fn remove(&mut self, node: NodeId) -> bool {
        if let Some(entry) = self.entries.remove(&node) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Nodes whose closed bounds contain the point.
    pub fn query_point(&self, p: Vec2) -> Vec<NodeId> {
        let point_envelope = AABB::from_point([p.x, p.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .map(|entry| entry.node)
            .collect()
    }

    /// Nodes whose closed bounds intersect the rectangle.
    pub fn query_rect(&self, rect: Rect) -> Vec<NodeId> {
        let min = rect.min();
        let max = rect.max();
        let envelope = AABB::from_corners([min.x, min.y], [max.x, max.y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.node)
            .collect()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
