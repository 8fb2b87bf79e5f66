//! Unit tests for the spatial predicates.

use wireboard::geometry::{Rect, Vec2, boxes_overlap, min_max, point_in_box};

fn grid() -> Vec<Vec2> {
    let coords = [-30.0, -5.0, 0.0, 7.5, 20.0, 45.0];
    coords
        .iter()
        .flat_map(|&x| coords.iter().map(move |&y| Vec2::new(x, y)))
        .collect()
}

#[test]
fn test_boundary_points_are_outside() {
    let origin = Vec2::new(10.0, 10.0);
    let size = Vec2::new(20.0, 10.0);

    for p in [
        Vec2::new(10.0, 15.0),
        Vec2::new(30.0, 15.0),
        Vec2::new(20.0, 10.0),
        Vec2::new(20.0, 20.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(30.0, 20.0),
    ] {
        assert!(!point_in_box(p, origin, size), "{p:?} is on the boundary");
    }
    assert!(point_in_box(Vec2::new(10.001, 19.999), origin, size));
}

#[test]
fn test_overlap_is_symmetric() {
    let sizes = [Vec2::new(10.0, 10.0), Vec2::new(25.0, 5.0), Vec2::ZERO];
    for a in grid() {
        for b in grid() {
            for sa in sizes {
                for sb in sizes {
                    assert_eq!(
                        boxes_overlap(a, sa, b, sb),
                        boxes_overlap(b, sb, a, sa),
                        "{a:?}+{sa:?} vs {b:?}+{sb:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_touching_boxes_do_not_overlap() {
    let size = Vec2::new(10.0, 10.0);
    assert!(!boxes_overlap(Vec2::ZERO, size, Vec2::new(10.0, 0.0), size));
    assert!(boxes_overlap(Vec2::ZERO, size, Vec2::new(9.5, 9.5), size));
}

#[test]
fn test_min_max_is_order_independent_and_idempotent() {
    for p0 in grid() {
        for p1 in grid() {
            let (origin, size) = min_max(p0, p1);
            assert_eq!(min_max(p1, p0), (origin, size));
            assert!(size.x >= 0.0 && size.y >= 0.0);
            assert_eq!(min_max(origin, origin + size), (origin, size));
        }
    }
}

#[test]
fn test_rect_from_corners_matches_min_max() {
    let rect = Rect::from_corners(Vec2::new(50.0, 5.0), Vec2::new(10.0, 25.0));
    assert_eq!(rect.min(), Vec2::new(10.0, 5.0));
    assert_eq!(rect.max(), Vec2::new(50.0, 25.0));
    assert!(rect.contains_point(Vec2::new(30.0, 15.0)));
}
