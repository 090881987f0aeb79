use super::*;
use crate::layout::layout_tree;
use crate::tree::build::build_tree;

fn area() -> Rect {
    Rect::new(0.0, 0.0, 1000.0, 600.0)
}

fn place(n: i64) -> Vec<Point> {
    let tree = build_tree(n).unwrap();
    TidyLayout
        .place(&Hierarchy::from_tree(&tree), area())
        .unwrap()
}

#[test]
fn single_node_is_centred_at_the_top() {
    let p = place(1);
    assert_eq!(p, vec![Point::new(500.0, 0.0)]);
}

#[test]
fn two_leaves_match_reference_coordinates() {
    let p = place(2);
    assert_eq!(p[0], Point::new(500.0, 0.0));
    assert_eq!(p[1], Point::new(250.0, 600.0));
    assert_eq!(p[2], Point::new(750.0, 600.0));
}

#[test]
fn parents_are_centred_over_children() {
    let tree = build_tree(7).unwrap();
    let h = Hierarchy::from_tree(&tree);
    let p = TidyLayout.place(&h, area()).unwrap();
    for (v, slot) in h.slots().iter().enumerate() {
        if let [first, .., last] = slot.children[..] {
            let mid = (p[first].x + p[last].x) / 2.0;
            assert!((p[v].x - mid).abs() < 1e-9, "slot {v}");
        }
    }
}

#[test]
fn rows_never_overlap_and_depth_is_monotonic() {
    for n in 2..=10 {
        let tree = build_tree(n).unwrap();
        let h = Hierarchy::from_tree(&tree);
        let p = TidyLayout.place(&h, area()).unwrap();

        let row_height = area().height() / f64::from(h.max_depth());
        for depth in 0..=h.max_depth() {
            // Pre-order on one row is left-to-right order.
            let row: Vec<f64> = h
                .slots()
                .iter()
                .enumerate()
                .filter(|(_, s)| s.depth == depth)
                .map(|(v, _)| p[v].x)
                .collect();
            for pair in row.windows(2) {
                assert!(pair[0] < pair[1], "n={n} depth={depth}: {row:?}");
            }
        }
        for (v, slot) in h.slots().iter().enumerate() {
            assert!((p[v].y - f64::from(slot.depth) * row_height).abs() < 1e-9);
        }
    }
}

#[test]
fn nodes_stay_inside_the_area() {
    let tree = build_tree(9).unwrap();
    let a = Rect::new(50.0, 50.0, 1150.0, 750.0);
    let placed = layout_tree(&tree, &TidyLayout, a).unwrap();
    for node in &placed.nodes {
        assert!(node.position.x > a.x0 && node.position.x < a.x1);
        assert!(node.position.y >= a.y0 && node.position.y <= a.y1);
    }
}

#[test]
fn layout_is_deterministic() {
    assert_eq!(place(8), place(8));
}
