//! Snapshot tests of recorded draw commands, using insta inline snapshots.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::TestEditor;
use wireboard::geometry::Vec2;
use wireboard::graph::{Graph, NodeTemplate, PortDirection, PortRef};
use wireboard::input::Button;
use wireboard::render::{RecordingSurface, render_graph};
use wireboard::settings::NodeStyle;

/// Padding 10, nodes titled "Op" with one input "a" and one output "b".
fn small_graph() -> Graph {
    let style = NodeStyle {
        padding: 10.0,
        ..Default::default()
    };
    Graph::new(style, Some(3))
}

fn op() -> NodeTemplate {
    NodeTemplate::new("Op").with_inputs(["a"]).with_outputs(["b"])
}

#[test]
fn snapshot_two_nodes_and_a_wire() {
    let mut graph = small_graph();
    let a = graph.create_node_with(Vec2::new(100.0, 50.0), &op());
    let b = graph.create_node_with(Vec2::new(200.0, 50.0), &op());
    graph.node_mut(a).unwrap().is_selected = true;

    let conn = graph.create_connection(a).unwrap();
    assert!(graph.bind_port(conn, PortDirection::Output, b, &PortRef::from("b")));

    let mut surface = RecordingSurface::new();
    render_graph(&mut graph, &mut surface);

    insta::assert_snapshot!(surface.transcript(), @r#"
    fill-style #242424
    fill-rect 100 50 44 54
    stroke-style #ffffff
    stroke-rect 100 50 44 54
    fill-style #ffffff
    fill-text "Op" 115 70
    fill-text "a" 110 92
    fill-text "b" 127 92
    fill-style #242424
    fill-rect 200 50 44 54
    fill-style #ffffff
    fill-text "Op" 215 70
    fill-text "a" 210 92
    fill-text "b" 227 92
    stroke-style #ffffff
    bezier 117 88 -> 227 88
    "#);
}

#[test]
fn snapshot_pending_wire_follows_endpoint() {
    let mut graph = small_graph();
    let a = graph.create_node_with(Vec2::ZERO, &op());
    let conn = graph.create_connection(a).unwrap();
    graph.set_floating_endpoint(conn, Vec2::new(150.0, 20.0));

    let mut surface = RecordingSurface::new();
    render_graph(&mut graph, &mut surface);
    let wire = surface.commands().last().unwrap().to_string();

    insta::assert_snapshot!(wire, @"bezier 17 38 -> 150 20");
}

#[test]
fn test_nodes_are_measured_once() {
    let mut graph = small_graph();
    graph.create_node_with(Vec2::ZERO, &op());
    let mut surface = RecordingSurface::new();

    render_graph(&mut graph, &mut surface);
    assert_eq!(graph.nodes()[0].size(), Vec2::new(44.0, 54.0));
    assert_eq!(graph.measure_nodes(&surface), 0);

    let id = graph.nodes()[0].id();
    graph.node_mut(id).unwrap().set_title("A much longer title");
    assert_eq!(graph.measure_nodes(&surface), 1);
}

#[test]
fn snapshot_box_select_overlay() {
    let mut t = TestEditor::new();
    t.at(10.0, 10.0).press(Button::BoxSelect);
    t.at(60.0, 40.0).tick();

    let mut surface = RecordingSurface::new();
    t.editor.render(&mut surface);

    insta::assert_snapshot!(surface.transcript(), @r"
    save
    stroke-style white
    line-dash [5.0, 3.0]
    stroke-rect 10 10 50 30
    restore
    ");
}

#[test]
fn test_idle_renders_no_overlay() {
    let mut t = TestEditor::new();
    let mut surface = RecordingSurface::new();
    t.editor.render(&mut surface);
    assert!(surface.commands().is_empty());
}
