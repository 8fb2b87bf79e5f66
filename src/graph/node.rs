//! Nodes - positioned boxes that own their ports and know their own size.
//!
//! A node's size depends on font metrics only the drawing surface knows, so
//! it is measured lazily during the render pass and cached until the content
//! changes.

use super::port::{Port, PortDirection, PortRef, port_offset};
use crate::constants::UNMEASURED_NODE_SIZE;
use crate::geometry::Vec2;
use crate::render::{TextMeasure, TextMetrics};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable node handle. Ids are never reused within a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Cached text measurements a node's layout is derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeMetrics {
    pub title: TextMetrics,
    pub input_widths: Vec<f32>,
    pub output_widths: Vec<f32>,
}

impl NodeMetrics {
    fn label_widths(&self, direction: PortDirection) -> &[f32] {
        match direction {
            PortDirection::Input => &self.input_widths,
            PortDirection::Output => &self.output_widths,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    title: String,
    pub is_selected: bool,
    inputs: Vec<Port>,
    outputs: Vec<Port>,
    metrics: Option<NodeMetrics>,
    size: Vec2,
}

impl Node {
    pub fn new(id: NodeId, title: impl Into<String>, inputs: Vec<Port>, outputs: Vec<Port>) -> Self {
        Self {
            id,
            title: title.into(),
            is_selected: false,
            inputs,
            outputs,
            metrics: None,
            size: Vec2::from(UNMEASURED_NODE_SIZE),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Change the title. The cached measurement is dropped.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.invalidate_layout();
    }

    pub fn ports(&self, direction: PortDirection) -> &[Port] {
        match direction {
            PortDirection::Input => &self.inputs,
            PortDirection::Output => &self.outputs,
        }
    }

    pub fn port_count(&self, direction: PortDirection) -> usize {
        self.ports(direction).len()
    }

    /// Resolve a port reference to an index on the given side.
    pub fn port_index(&self, direction: PortDirection, port: &PortRef) -> Option<usize> {
        let ports = self.ports(direction);
        match port {
            PortRef::Index(index) => (*index < ports.len()).then_some(*index),
            PortRef::Name(name) => ports.iter().position(|p| &p.name == name),
        }
    }

    /// Current size. `20 x 20` until the first measurement.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn metrics(&self) -> Option<&NodeMetrics> {
        self.metrics.as_ref()
    }

    pub fn needs_measure(&self) -> bool {
        self.metrics.is_none()
    }

    /// Drop the cached measurement so the next render pass re-measures.
    pub fn invalidate_layout(&mut self) {
        self.metrics = None;
    }

    /// Measure title and port labels if no measurement is cached.
    ///
    /// Returns true if the node was (re)measured.
    pub fn ensure_measured<M: TextMeasure + ?Sized>(&mut self, measure: &M, padding: f32) -> bool {
        if !self.needs_measure() {
            return false;
        }

        let metrics = NodeMetrics {
            title: measure.measure_text(&self.title),
            input_widths: self.inputs.iter().map(|p| measure.measure_text(&p.name).width).collect(),
            output_widths: self.outputs.iter().map(|p| measure.measure_text(&p.name).width).collect(),
        };
        self.size = layout_size(&metrics, padding);
        self.metrics = Some(metrics);
        true
    }

    /// Height of the measured title, zero before measurement.
    pub fn title_height(&self) -> f32 {
        self.metrics.as_ref().map(|m| m.title.height()).unwrap_or(0.0)
    }

    /// Top of the port area, relative to the node origin.
    fn port_area_top(&self, padding: f32) -> f32 {
        padding + self.title_height()
    }

    /// Top of a port row, relative to the node origin.
    pub fn port_row_top(&self, direction: PortDirection, index: Option<usize>, padding: f32) -> f32 {
        self.port_area_top(padding)
            + port_offset(index, self.port_count(direction), self.title_height(), padding)
    }

    /// Measured label width of a port, zero before measurement.
    pub fn port_label_width(&self, direction: PortDirection, index: usize) -> f32 {
        self.metrics
            .as_ref()
            .and_then(|m| m.label_widths(direction).get(index).copied())
            .unwrap_or(0.0)
    }

    /// Where the port label's text box starts, relative to the node origin.
    ///
    /// Inputs are flush-left; outputs are right-aligned by their own width.
    pub fn port_label_origin(&self, direction: PortDirection, index: usize, padding: f32) -> Option<Vec2> {
        if index >= self.port_count(direction) {
            return None;
        }
        let y = self.port_row_top(direction, Some(index), padding);
        let x = match direction {
            PortDirection::Input => padding,
            PortDirection::Output => self.size.x - padding - self.port_label_width(direction, index),
        };
        Some(Vec2::new(x, y))
    }

    /// Where a wire attaches to a port, relative to the node origin.
    ///
    /// Wires leave input ports at the label's right edge and enter output
    /// ports at the label's left edge, vertically centered on the row.
    pub fn port_anchor(&self, direction: PortDirection, index: usize, padding: f32) -> Option<Vec2> {
        let origin = self.port_label_origin(direction, index, padding)?;
        let y = origin.y + self.title_height() * 0.5;
        let x = match direction {
            PortDirection::Input => origin.x + self.port_label_width(direction, index),
            PortDirection::Output => origin.x,
        };
        Some(Vec2::new(x, y))
    }
}

/// Node size for a set of measurements: wide enough for the title and the
/// widest input/output label pair, tall enough for the title band plus
/// `max(inputs, outputs)` port rows.
fn layout_size(metrics: &NodeMetrics, padding: f32) -> Vec2 {
    let title_height = metrics.title.height();
    let widest = |widths: &[f32]| widths.iter().copied().fold(0.0_f32, f32::max);

    let rows = metrics.input_widths.len().max(metrics.output_widths.len());
    let labels_width = if rows > 0 {
        widest(&metrics.input_widths) + padding + widest(&metrics.output_widths)
    } else {
        0.0
    };
    let ports_height = if rows > 0 {
        padding + title_height * 2.0 * rows as f32 - title_height
    } else {
        0.0
    };

    let width = metrics.title.width.max(labels_width) + padding * 2.0;
    let height = padding + title_height + ports_height + padding;
    Vec2::new(width.max(0.0), height.max(0.0))
}
