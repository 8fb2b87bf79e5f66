//! Unit tests for graph positions over a scene with an offset root.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use wireboard::geometry::{Rect, Vec2};
use wireboard::graph::{Graph, NodeId};
use wireboard::scene::{FlatScene, SceneGraph};
use wireboard::selection::{select_in_box, selected_ids};
use wireboard::settings::NodeStyle;

/// Scene whose root transform is owned and moved by the host.
struct HostScene {
    root: Arc<Mutex<Vec2>>,
    children: HashMap<NodeId, Vec2>,
}

impl SceneGraph for HostScene {
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
        let root = *self.root.lock();
        self.children.get(&node).map(|local| root + *local)
    }
}

fn host_graph() -> (Graph, Arc<Mutex<Vec2>>) {
    let root = Arc::new(Mutex::new(Vec2::ZERO));
    let scene = HostScene {
        root: Arc::clone(&root),
        children: HashMap::new(),
    };
    (Graph::with_scene(NodeStyle::default(), Box::new(scene), Some(1)), root)
}

fn offset_graph() -> Graph {
    let scene = FlatScene::with_root_offset(Vec2::new(100.0, 50.0));
    Graph::with_scene(NodeStyle::default(), Box::new(scene), Some(1))
}

#[test]
fn test_hit_testing_uses_global_positions() {
    let mut graph = offset_graph();
    let id = graph.create_node(Vec2::ZERO);

    assert_eq!(graph.node_local_position(id), Some(Vec2::ZERO));
    assert_eq!(graph.node_position(id), Some(Vec2::new(100.0, 50.0)));
    assert_eq!(graph.node_at(Vec2::new(10.0, 10.0)), None);
    assert_eq!(graph.node_at(Vec2::new(110.0, 60.0)), Some(id));
}

#[test]
fn test_translate_changes_local_position() {
    let mut graph = offset_graph();
    let id = graph.create_node(Vec2::new(5.0, 5.0));
    graph.node_mut(id).unwrap().is_selected = true;

    assert_eq!(graph.translate_selected(Vec2::new(10.0, -5.0)), 1);
    assert_eq!(graph.node_local_position(id), Some(Vec2::new(15.0, 0.0)));
    assert_eq!(graph.node_position(id), Some(Vec2::new(115.0, 50.0)));
}

#[test]
fn test_removed_node_leaves_scene() {
    let mut graph = offset_graph();
    let id = graph.create_node(Vec2::ZERO);
    assert!(graph.remove_node(id));

    assert_eq!(graph.node_position(id), None);
    assert_eq!(graph.node_at(Vec2::new(110.0, 60.0)), None);
    assert!(!graph.remove_node(id));
}

#[test]
fn test_hit_testing_follows_host_root_moves() {
    let (mut graph, root) = host_graph();
    let id = graph.create_node(Vec2::ZERO);
    assert_eq!(graph.node_at(Vec2::new(10.0, 10.0)), Some(id));

    *root.lock() = Vec2::new(500.0, 500.0);

    assert_eq!(
        graph.node_bounds(id),
        Some(Rect::new(Vec2::new(500.0, 500.0), Vec2::new(20.0, 20.0)))
    );
    assert_eq!(graph.node_at(Vec2::new(10.0, 10.0)), None);
    assert_eq!(graph.node_at(Vec2::new(510.0, 510.0)), Some(id));
}

#[test]
fn test_box_select_follows_host_root_moves() {
    let (mut graph, root) = host_graph();
    let id = graph.create_node(Vec2::ZERO);
    assert_eq!(graph.nodes_in_box(Rect::new(Vec2::ZERO, Vec2::new(30.0, 30.0))), vec![id]);

    *root.lock() = Vec2::new(-200.0, 300.0);

    assert_eq!(select_in_box(&mut graph, Vec2::ZERO, Vec2::new(30.0, 30.0)), 0);
    assert_eq!(select_in_box(&mut graph, Vec2::new(-195.0, 305.0), Vec2::new(5.0, 5.0)), 1);
    assert_eq!(selected_ids(&graph), vec![id]);
}
