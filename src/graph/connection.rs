//! Connections - wires from an input-side port to an output-side port.

use super::node::NodeId;
use super::port::PortDirection;
use crate::geometry::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConnectionId(pub u64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "connection#{}", self.0)
    }
}

/// A resolved port on a specific node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortAnchor {
    pub node: NodeId,
    pub port: usize,
}

impl PortAnchor {
    pub fn new(node: NodeId, port: usize) -> Self {
        Self { node, port }
    }
}

/// A wire between two ports.
///
/// While the output side is unset the connection is *pending* and its far
/// end follows `floating_endpoint` (the cursor, while a wire is dragged).
/// No direction or cardinality rules are enforced: a port may take part in
/// any number of connections.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    id: ConnectionId,
    input: PortAnchor,
    output: Option<PortAnchor>,
    floating_endpoint: Vec2,
}

impl Connection {
    pub fn new(id: ConnectionId, input: PortAnchor) -> Self {
        Self {
            id,
            input,
            output: None,
            floating_endpoint: Vec2::ZERO,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn input(&self) -> PortAnchor {
        self.input
    }

    pub fn output(&self) -> Option<PortAnchor> {
        self.output
    }

    pub fn anchor(&self, direction: PortDirection) -> Option<PortAnchor> {
        match direction {
            PortDirection::Input => Some(self.input),
            PortDirection::Output => self.output,
        }
    }

    pub fn floating_endpoint(&self) -> Vec2 {
        self.floating_endpoint
    }

    pub fn is_pending(&self) -> bool {
        self.output.is_none()
    }

    pub fn is_attached(&self) -> bool {
        self.output.is_some()
    }

    /// Returns true if either end sits on `node`.
    pub fn references(&self, node: NodeId) -> bool {
        self.input.node == node || self.output.is_some_and(|o| o.node == node)
    }

    pub(crate) fn bind(&mut self, direction: PortDirection, anchor: PortAnchor) {
        match direction {
            PortDirection::Input => self.input = anchor,
            PortDirection::Output => self.output = Some(anchor),
        }
    }

    pub(crate) fn set_floating_endpoint(&mut self, p: Vec2) {
        self.floating_endpoint = p;
    }
}
