//! Transform collaborator - where node positions live.
//!
//! The graph owns node existence; the scene only stores positions keyed by
//! node id. Hosts with a real scene graph implement [`SceneGraph`] over it;
//! [`FlatScene`] covers the common case of one root with nodes as direct
//! children.

use crate::geometry::Vec2;
use crate::graph::NodeId;
use std::collections::HashMap;

/// Minimal transform hierarchy interface consumed by the graph model.
pub trait SceneGraph: Send {
    /// Attach a node under the scene root at the local origin.
    fn add_child(&mut self, node: NodeId);

    /// Detach a node. Returns false if it was not attached.
    fn remove_child(&mut self, node: NodeId) -> bool;

    fn local_position(&self, node: NodeId) -> Option<Vec2>;

    fn set_local_position(&mut self, node: NodeId, position: Vec2);

    /// Position in canvas coordinates after applying parent transforms.
    fn global_position(&self, node: NodeId) -> Option<Vec2>;
}

/// Single-level scene: every node is a child of a root with an offset.
#[derive(Debug, Default)]
pub struct FlatScene {
    root_offset: Vec2,
    children: HashMap<NodeId, Vec2>,
}

impl FlatScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root_offset(offset: Vec2) -> Self {
        Self {
            root_offset: offset,
            children: HashMap::new(),
        }
    }

    pub fn root_offset(&self) -> Vec2 {
        self.root_offset
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl SceneGraph for FlatScene {
    fn add_child(&mut self, node: NodeId) {
        self.children.entry(node).or_insert(Vec2::ZERO);
    }

    fn remove_child(&mut self, node: NodeId) -> bool {
        self.children.remove(&node).is_some()
    }

    fn local_position(&self, node: NodeId) -> Option<Vec2> {
        self.children.get(&node).copied()
    }

    fn set_local_position(&mut self, node: NodeId, position: Vec2) {
        if let Some(local) = self.children.get_mut(&node) {
            *local = position;
        }
    }

    fn global_position(&self, node: NodeId) -> Option<Vec2> {
        self.children.get(&node).map(|local| self.root_offset + *local)
    }
}
