//! Graph model - the node and connection collections and their operations.
//!
//! ## Ownership
//!
//! [`Graph`] exclusively owns every [`Node`] and [`Connection`]. Node
//! positions live in the scene collaborator ([`SceneGraph`]) keyed by
//! [`NodeId`]; the graph reads and writes them but never duplicates them.
//!
//! ## Ordering
//!
//! Nodes and connections are kept in creation order. Hit-testing walks that
//! order, so "first hit wins" always means "oldest node wins".
//!
//! ## Hit testing
//!
//! Every query first syncs the R-tree with the current global bounds read
//! from the scene, so a host that moves a parent transform is seen by the
//! next query. Only entries whose bounds changed are re-inserted.

mod connection;
mod node;
mod port;

pub use connection::{Connection, ConnectionId, PortAnchor};
pub use node::{Node, NodeId, NodeMetrics};
pub use port::{Port, PortDirection, PortRef, port_offset};

use crate::geometry::{CubicBezier, Rect, Vec2};
use crate::render::TextMeasure;
use crate::scene::{FlatScene, SceneGraph};
use crate::settings::NodeStyle;
use crate::spatial_index::SpatialIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::{debug, info, trace};

/// Title and port names for a node about to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTemplate {
    pub title: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl NodeTemplate {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_inputs<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.inputs = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_outputs<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.outputs = names.into_iter().map(Into::into).collect();
        self
    }
}

pub struct Graph {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    scene: Box<dyn SceneGraph>,
    index: SpatialIndex,
    style: NodeStyle,
    rng: StdRng,
    next_node_id: u64,
    next_connection_id: u64,
}

impl Graph {
    /// Create an empty graph over a [`FlatScene`].
    ///
    /// With a seed, random port picks are reproducible.
    pub fn new(style: NodeStyle, seed: Option<u64>) -> Self {
        Self::with_scene(style, Box::new(FlatScene::new()), seed)
    }

    pub fn with_scene(style: NodeStyle, scene: Box<dyn SceneGraph>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            nodes: Vec::new(),
            connections: Vec::new(),
            scene,
            index: SpatialIndex::new(),
            style,
            rng,
            next_node_id: 0,
            next_connection_id: 0,
        }
    }

    pub fn style(&self) -> &NodeStyle {
        &self.style
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    /// All nodes in creation order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id() == id)
    }

    /// Set a node's selection flag. Returns false for an unknown node.
    pub fn set_selected(&mut self, id: NodeId, selected: bool) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.is_selected = selected;
                true
            }
            None => false,
        }
    }

    /// Create a node with the default title and ports at `at` (local coordinates).
    pub fn create_node(&mut self, at: Vec2) -> NodeId {
        let template = self.style.template();
        self.create_node_with(at, &template)
    }

    pub fn create_node_with(&mut self, at: Vec2, template: &NodeTemplate) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;

        let node = Node::new(
            id,
            template.title.clone(),
            template.inputs.iter().map(Port::new).collect(),
            template.outputs.iter().map(Port::new).collect(),
        );

        self.scene.add_child(id);
        self.scene.set_local_position(id, at);
        self.nodes.push(node);

        info!(%id, x = at.x, y = at.y, "node created");
        id
    }

    /// Remove a node, its scene entry and every connection touching it.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let Some(pos) = self.nodes.iter().position(|n| n.id() == id) else {
            return false;
        };
        self.nodes.remove(pos);
        self.scene.remove_child(id);
        self.index.remove(id);

        let before = self.connections.len();
        self.connections.retain(|c| !c.references(id));
        let dropped = before - self.connections.len();

        info!(%id, dropped_connections = dropped, "node removed");
        true
    }

    /// Remove every node. Returns how many were removed.
    pub fn remove_all_nodes(&mut self) -> usize {
        let ids: Vec<NodeId> = self.nodes.iter().map(Node::id).collect();
        ids.into_iter().filter(|id| self.remove_node(*id)).count()
    }

    /// Global (canvas) position of a node.
    pub fn node_position(&self, id: NodeId) -> Option<Vec2> {
        self.scene.global_position(id)
    }

    pub fn node_local_position(&self, id: NodeId) -> Option<Vec2> {
        self.scene.local_position(id)
    }

    pub fn set_node_position(&mut self, id: NodeId, local: Vec2) {
        self.scene.set_local_position(id, local);
    }

    /// Canvas-space box of a node.
    pub fn node_bounds(&self, id: NodeId) -> Option<Rect> {
        let node = self.node(id)?;
        let origin = self.scene.global_position(id)?;
        Some(Rect::new(origin, node.size()))
    }

    /// Add `delta` to the local position of every selected node.
    pub fn translate_selected(&mut self, delta: Vec2) -> usize {
        if delta == Vec2::ZERO {
            return 0;
        }
        let mut moved = 0;
        for node in self.nodes.iter().filter(|n| n.is_selected) {
            if let Some(local) = self.scene.local_position(node.id()) {
                self.scene.set_local_position(node.id(), local + delta);
                moved += 1;
            }
        }
        moved
    }

    /// Measure every node that has no cached measurement.
    pub fn measure_nodes<M: TextMeasure + ?Sized>(&mut self, measure: &M) -> usize {
        let padding = self.style.padding;
        self.nodes
            .iter_mut()
            .filter(|n| n.needs_measure())
            .map(|n| n.ensure_measured(measure, padding))
            .filter(|measured| *measured)
            .count()
    }

    // ========================================================================
    // Hit Testing
    // ========================================================================

    /// Bring the index in line with the scene's current global bounds.
    fn sync_index(&mut self) {
        let bounds: Vec<(NodeId, Option<Rect>)> = self
            .nodes
            .iter()
            .map(|n| (n.id(), self.node_bounds(n.id())))
            .collect();

        let mut updated = 0;
        for (id, bounds) in bounds {
            let changed = match bounds {
                Some(rect) => self.index.insert(id, rect),
                None => self.index.remove(id),
            };
            if changed {
                updated += 1;
            }
        }
        if updated > 0 {
            trace!(updated, "spatial index synced");
        }
    }

    /// Every node strictly containing `p`, in creation order.
    pub fn nodes_at(&mut self, p: Vec2) -> Vec<NodeId> {
        self.sync_index();
        let candidates: HashSet<NodeId> = self.index.query_point(p).into_iter().collect();
        self.nodes
            .iter()
            .map(Node::id)
            .filter(|id| candidates.contains(id))
            .filter(|id| self.node_bounds(*id).is_some_and(|b| b.contains_point(p)))
            .collect()
    }

    /// The first node (in creation order) strictly containing `p`.
    pub fn node_at(&mut self, p: Vec2) -> Option<NodeId> {
        self.nodes_at(p).into_iter().next()
    }

    /// Every node overlapping `rect`, in creation order.
    pub fn nodes_in_box(&mut self, rect: Rect) -> Vec<NodeId> {
        self.sync_index();
        let candidates: HashSet<NodeId> = self.index.query_rect(rect).into_iter().collect();
        self.nodes
            .iter()
            .map(Node::id)
            .filter(|id| candidates.contains(id))
            .filter(|id| self.node_bounds(*id).is_some_and(|b| b.overlaps(&rect)))
            .collect()
    }

    // ========================================================================
    // Connections
    // ========================================================================

    /// All connections in creation order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id() == id)
    }

    fn connection_mut(&mut self, id: ConnectionId) -> Option<&mut Connection> {
        self.connections.iter_mut().find(|c| c.id() == id)
    }

    fn random_port(&mut self, node: NodeId, direction: PortDirection) -> Option<usize> {
        let count = self.node(node)?.port_count(direction);
        if count == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..count))
    }

    /// Start a pending connection from a random input port of `from`.
    ///
    /// Returns `None` if the node does not exist or has no input ports.
    pub fn create_connection(&mut self, from: NodeId) -> Option<ConnectionId> {
        let Some(port) = self.random_port(from, PortDirection::Input) else {
            debug!(node = %from, "no input port to start a connection from");
            return None;
        };

        let id = ConnectionId(self.next_connection_id);
        self.next_connection_id += 1;
        self.connections.push(Connection::new(id, PortAnchor::new(from, port)));

        info!(%id, node = %from, port, "connection started");
        Some(id)
    }

    /// Complete a pending connection on a random output port of `target`, or
    /// discard it when there is no target (or the target has no outputs).
    ///
    /// Returns true if the connection was completed.
    pub fn finalize_or_discard_connection(&mut self, id: ConnectionId, target: Option<NodeId>) -> bool {
        if self.connection(id).is_none() {
            return false;
        }
        let target = target.and_then(|node| self.random_port(node, PortDirection::Output).map(|p| (node, p)));

        match target {
            Some((node, port)) => {
                if let Some(conn) = self.connection_mut(id) {
                    conn.bind(PortDirection::Output, PortAnchor::new(node, port));
                }
                info!(%id, node = %node, port, "connection completed");
                true
            }
            None => {
                self.remove_connection(id);
                debug!(%id, "connection discarded");
                false
            }
        }
    }

    /// Bind one side of a connection to a port given by name or index.
    ///
    /// Returns false if the connection or node is unknown or the port does
    /// not resolve.
    pub fn bind_port(
        &mut self,
        id: ConnectionId,
        direction: PortDirection,
        node: NodeId,
        port: &PortRef,
    ) -> bool {
        let Some(index) = self.node(node).and_then(|n| n.port_index(direction, port)) else {
            debug!(%id, node = %node, ?port, %direction, "port does not resolve");
            return false;
        };
        match self.connection_mut(id) {
            Some(conn) => {
                conn.bind(direction, PortAnchor::new(node, index));
                true
            }
            None => false,
        }
    }

    pub fn remove_connection(&mut self, id: ConnectionId) -> bool {
        let before = self.connections.len();
        self.connections.retain(|c| c.id() != id);
        before != self.connections.len()
    }

    pub fn set_floating_endpoint(&mut self, id: ConnectionId, p: Vec2) {
        if let Some(conn) = self.connection_mut(id) {
            conn.set_floating_endpoint(p);
        }
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Canvas-space attachment point of a port.
    pub fn port_position(&self, anchor: PortAnchor, direction: PortDirection) -> Option<Vec2> {
        let node = self.node(anchor.node)?;
        let origin = self.scene.global_position(anchor.node)?;
        let local = node.port_anchor(direction, anchor.port, self.style.padding)?;
        Some(origin + local)
    }

    /// The bezier a connection is drawn along.
    ///
    /// Runs from the input port to the output port (or the floating endpoint
    /// while pending). Handles are horizontal only, `max(0, end.x - start.x)`
    /// long, so the wire is an S-curve between the two rows.
    pub fn connection_curve(&self, conn: &Connection) -> Option<CubicBezier> {
        let start = self.port_position(conn.input(), PortDirection::Input)?;
        let end = match conn.output() {
            Some(output) => self.port_position(output, PortDirection::Output)?,
            None => conn.floating_endpoint(),
        };
        let tangent = (end.x - start.x).max(0.0);
        Some(CubicBezier {
            start,
            control1: Vec2::new(start.x + tangent, start.y),
            control2: Vec2::new(end.x - tangent, end.y),
            end,
        })
    }
}
