//! Selection Workflow Integration Tests

use crate::helpers::{TestEditor, assert_mode};
use wireboard::input::Button;
use wireboard::modes::ModeId;
use wireboard::render::RecordingSurface;

#[test]
fn test_click_selects_exclusively() {
    let mut t = TestEditor::new().with_nodes(&[(0.0, 0.0), (100.0, 0.0)]);

    t.at(10.0, 10.0).click();
    assert_eq!(t.selected(), vec![t.node_id(0)]);

    t.at(110.0, 10.0).click();
    assert_eq!(t.selected(), vec![t.node_id(1)]);
}

#[test]
fn test_shift_click_adds_to_selection() {
    let mut t = TestEditor::new().with_nodes(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0)]);

    t.at(10.0, 10.0).click();
    t.at(210.0, 10.0).shift_click();
    assert_eq!(t.selected(), vec![t.node_id(0), t.node_id(2)]);

    t.at(500.0, 500.0).shift_click();
    assert_eq!(t.selected(), vec![t.node_id(0), t.node_id(2)]);

    t.at(10.0, 10.0).shift_click();
    assert_eq!(t.selected(), vec![t.node_id(2)]);
}

#[test]
fn test_click_on_empty_space_clears_selection() {
    let mut t = TestEditor::new().with_nodes(&[(0.0, 0.0)]);
    t.at(10.0, 10.0).click();

    t.at(500.0, 500.0).click();

    assert!(t.selected().is_empty());
}

#[test]
fn test_box_select_keeps_existing_selection() {
    let mut t = TestEditor::new().with_nodes(&[(0.0, 0.0), (50.0, 0.0), (300.0, 300.0)]);
    t.at(310.0, 310.0).click();

    t.at(80.0, 30.0).press(Button::BoxSelect);
    t.at(-10.0, -10.0).tick().click();

    assert_mode(&t, ModeId::Idle);
    assert_eq!(t.selected(), vec![t.node_id(0), t.node_id(1), t.node_id(2)]);
}

#[test]
fn test_box_select_over_empty_space_changes_nothing() {
    let mut t = TestEditor::new().with_nodes(&[(0.0, 0.0), (100.0, 0.0)]);
    t.at(10.0, 10.0).click();

    t.at(400.0, 400.0).press(Button::BoxSelect);
    t.at(500.0, 500.0).click();

    assert_eq!(t.selected(), vec![t.node_id(0)]);
}

#[test]
fn test_box_select_uses_measured_sizes() {
    let mut t = TestEditor::new().with_nodes(&[(0.0, 0.0)]);
    let mut surface = RecordingSurface::new();
    t.editor.render(&mut surface);
    let size = t.editor.nodes()[0].size();
    assert!(size.x > 40.0 && size.y > 40.0);

    // only the far corner of the measured node is inside the box
    t.at(size.x - 5.0, size.y - 5.0).press(Button::BoxSelect);
    t.at(size.x + 50.0, size.y + 50.0).click();

    assert_eq!(t.selected(), vec![t.node_id(0)]);
}
