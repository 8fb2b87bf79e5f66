//! Connection Workflow Integration Tests

use crate::helpers::{TestEditor, assert_mode};
use wireboard::geometry::Vec2;
use wireboard::graph::PortDirection;
use wireboard::input::Button;
use wireboard::modes::ModeId;
use wireboard::render::RecordingSurface;

#[test]
fn test_connect_two_nodes() {
    let mut t = TestEditor::new().with_nodes(&[(0.0, 0.0), (100.0, 0.0)]);
    let (a, b) = (t.node_id(0), t.node_id(1));

    t.at(10.0, 10.0).press(Button::Connect);
    assert_mode(&t, ModeId::Connecting);
    assert_eq!(t.editor.connections().len(), 1);
    assert!(t.editor.connections()[0].is_pending());

    t.at(110.0, 10.0).tick().click();

    assert_mode(&t, ModeId::Idle);
    let connections = t.editor.connections();
    assert_eq!(connections.len(), 1);
    assert!(connections[0].is_attached());
    assert_eq!(connections[0].input().node, a);
    assert_eq!(connections[0].output().map(|o| o.node), Some(b));
}

#[test]
fn test_connect_from_empty_space_returns_to_idle() {
    let mut t = TestEditor::new().with_nodes(&[(0.0, 0.0)]);

    t.at(500.0, 500.0).press(Button::Connect);

    assert_mode(&t, ModeId::Idle);
    assert!(t.editor.connections().is_empty());
}

#[test]
fn test_connect_to_empty_space_discards() {
    let mut t = TestEditor::new().with_nodes(&[(0.0, 0.0)]);

    t.at(10.0, 10.0).press(Button::Connect);
    t.at(300.0, 300.0).tick().click();

    assert_mode(&t, ModeId::Idle);
    assert!(t.editor.connections().is_empty());
}

#[test]
fn test_pending_endpoint_tracks_cursor() {
    let mut t = TestEditor::new().with_nodes(&[(0.0, 0.0)]);
    t.at(10.0, 10.0).press(Button::Connect);

    for (x, y) in [(40.0, 5.0), (80.0, 60.0), (-30.0, 12.0)] {
        t.at(x, y).tick();
        assert_eq!(t.editor.connections()[0].floating_endpoint(), Vec2::new(x, y));
    }
}

#[test]
fn test_same_seed_picks_same_ports() {
    let run = |seed: u64| {
        let mut t = TestEditor::with_seed(seed).with_nodes(&[(0.0, 0.0), (100.0, 0.0)]);
        for _ in 0..5 {
            t.at(10.0, 10.0).press(Button::Connect);
            t.at(110.0, 10.0).click();
        }
        t.editor
            .connections()
            .iter()
            .map(|c| (c.input().port, c.output().map(|o| o.port)))
            .collect::<Vec<_>>()
    };

    let first = run(7);
    assert_eq!(first.len(), 5);
    assert_eq!(first, run(7));
    assert!(first.iter().all(|(input, output)| *input < 3 && output.is_some_and(|o| o < 3)));
}

#[test]
fn test_wire_is_drawn_between_ports() {
    let mut t = TestEditor::new().with_nodes(&[(0.0, 0.0), (200.0, 0.0)]);
    let mut surface = RecordingSurface::new();
    // measure first so the nodes have their real size
    t.editor.render(&mut surface);

    t.at(10.0, 10.0).press(Button::Connect);
    t.at(210.0, 10.0).click();

    let graph = t.editor.graph();
    let conn = &graph.connections()[0];
    let curve = graph.connection_curve(conn).unwrap();
    let start = graph.port_position(conn.input(), PortDirection::Input).unwrap();
    let end = graph.port_position(conn.output().unwrap(), PortDirection::Output).unwrap();
    assert_eq!(curve.start, start);
    assert_eq!(curve.end, end);
    assert!(end.x > start.x);
}
