//! Graph render pass - node boxes, port labels and connection wires.
//!
//! This runs once per display frame and is the only place nodes get
//! measured: sizes depend on the surface's font metrics, so stale nodes are
//! measured here before anything is drawn.

use super::surface::DrawingSurface;
use crate::geometry::{Rect, Vec2};
use crate::graph::{Graph, Node, PortDirection};
use crate::profile_scope;
use crate::settings::NodeStyle;

/// Draw every node, then every connection on top.
pub fn render_graph(graph: &mut Graph, surface: &mut dyn DrawingSurface) {
    profile_scope!("render_graph");

    graph.measure_nodes(&*surface);

    let graph = &*graph;
    for node in graph.nodes() {
        if let Some(origin) = graph.node_position(node.id()) {
            render_node(node, origin, graph.style(), surface);
        }
    }

    if graph.connection_count() > 0 {
        surface.set_stroke_style(&graph.style().wire);
        for conn in graph.connections() {
            if let Some(curve) = graph.connection_curve(conn) {
                surface.stroke_bezier(&curve);
            }
        }
    }
}

/// Draw a single node whose top-left corner is at `origin`.
pub fn render_node(node: &Node, origin: Vec2, style: &NodeStyle, surface: &mut dyn DrawingSurface) {
    let size = node.size();
    let body = Rect::new(origin, size);

    surface.set_fill_style(&style.background);
    surface.fill_rect(body);

    if node.is_selected {
        surface.set_stroke_style(&style.foreground);
        surface.stroke_rect(body);
    }

    let Some(metrics) = node.metrics() else {
        return;
    };

    surface.set_fill_style(&style.foreground);
    let title_x = origin.x + (size.x - metrics.title.width) * 0.5;
    let title_y = origin.y + style.padding + metrics.title.ascent;
    surface.fill_text(node.title(), Vec2::new(title_x, title_y));

    for direction in [PortDirection::Input, PortDirection::Output] {
        for (index, port) in node.ports(direction).iter().enumerate() {
            if let Some(label) = node.port_label_origin(direction, index, style.padding) {
                let baseline = origin + label + Vec2::new(0.0, metrics.title.ascent);
                surface.fill_text(&port.name, baseline);
            }
        }
    }
}
