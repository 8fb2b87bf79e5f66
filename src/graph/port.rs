//! Ports - named attachment points on either side of a node.

use crate::geometry::lerp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of a node a port sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PortDirection {
    Input,
    Output,
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortDirection::Input => write!(f, "input"),
            PortDirection::Output => write!(f, "output"),
        }
    }
}

/// A port, identified by a name unique within its node and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    pub name: String,
}

impl Port {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Caller-side reference to a port: by stable name or by position.
///
/// Names must be resolved to an index (see [`super::Node::port_index`])
/// before any geometry is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortRef {
    Name(String),
    Index(usize),
}

impl From<usize> for PortRef {
    fn from(index: usize) -> Self {
        PortRef::Index(index)
    }
}

impl From<&str> for PortRef {
    fn from(name: &str) -> Self {
        PortRef::Name(name.to_string())
    }
}

/// Vertical offset of a port row from the top of the node's port area.
///
/// Rows are spaced two title-heights apart. A missing index (an unresolved
/// name) or an empty side yields just the padding, the same as "no ports on
/// this side".
pub fn port_offset(index: Option<usize>, count: usize, title_height: f32, padding: f32) -> f32 {
    match index {
        Some(index) if count > 0 => {
            let span = title_height * count as f32 * 2.0;
            padding + lerp(0.0, span, index as f32 / count as f32)
        }
        _ => padding,
    }
}
