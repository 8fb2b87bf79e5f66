//! Selection - click and box selection over the graph's node flags.
//!
//! Selection state is the `is_selected` flag on each [`Node`]; there is no
//! separate selection set to keep in sync.

use crate::geometry::{Rect, Vec2};
use crate::graph::{Graph, Node, NodeId};
use tracing::debug;

/// Toggle the selection of the node under `point`.
///
/// Exclusive selection toggles the first hit node and deselects everything
/// else, other nodes under the point included. Non-exclusive selection
/// toggles every node under the point and leaves the rest alone.
///
/// Returns the first hit node, if any.
pub fn select_at(graph: &mut Graph, point: Vec2, exclusive: bool) -> Option<NodeId> {
    let hits = graph.nodes_at(point);
    let first = hits.first().copied();

    if exclusive {
        let flags: Vec<(NodeId, bool)> = graph
            .nodes()
            .iter()
            .map(|n| (n.id(), Some(n.id()) == first && !n.is_selected))
            .collect();
        for (id, selected) in flags {
            graph.set_selected(id, selected);
        }
    } else {
        for id in &hits {
            let selected = graph.node(*id).is_some_and(|n| n.is_selected);
            graph.set_selected(*id, !selected);
        }
    }

    debug!(x = point.x, y = point.y, exclusive, hits = hits.len(), "select at point");
    first
}

/// Select every node overlapping the box. Never deselects.
///
/// Returns the number of overlapping nodes.
pub fn select_in_box(graph: &mut Graph, origin: Vec2, size: Vec2) -> usize {
    let hits = graph.nodes_in_box(Rect::new(origin, size));
    for id in &hits {
        graph.set_selected(*id, true);
    }
    debug!(x = origin.x, y = origin.y, w = size.x, h = size.y, hits = hits.len(), "select in box");
    hits.len()
}

/// Ids of all selected nodes, in creation order.
pub fn selected_ids(graph: &Graph) -> Vec<NodeId> {
    graph.nodes().iter().filter(|n| n.is_selected).map(Node::id).collect()
}

pub fn clear_selection(graph: &mut Graph) {
    let ids = selected_ids(graph);
    for id in ids {
        graph.set_selected(id, false);
    }
}
