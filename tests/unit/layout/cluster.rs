use super::*;
use crate::tree::build::build_tree;

fn area() -> Rect {
    Rect::new(0.0, 0.0, 800.0, 400.0)
}

#[test]
fn single_node_is_centred() {
    let tree = build_tree(0).unwrap();
    let p = ClusterLayout
        .place(&Hierarchy::from_tree(&tree), area())
        .unwrap();
    assert_eq!(p, vec![Point::new(400.0, 0.0)]);
}

#[test]
fn all_leaves_share_the_bottom_row() {
    let tree = build_tree(6).unwrap();
    let h = Hierarchy::from_tree(&tree);
    let p = ClusterLayout.place(&h, area()).unwrap();
    assert_eq!(p[0].y, 0.0);
    for (v, slot) in h.slots().iter().enumerate() {
        if slot.children.is_empty() {
            assert!((p[v].y - 400.0).abs() < 1e-9);
        } else {
            assert!(p[v].y < 400.0);
        }
    }
}

#[test]
fn leaves_are_ordered_left_to_right() {
    let tree = build_tree(6).unwrap();
    let h = Hierarchy::from_tree(&tree);
    let p = ClusterLayout.place(&h, area()).unwrap();
    let xs: Vec<f64> = h
        .slots()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.children.is_empty())
        .map(|(v, _)| p[v].x)
        .collect();
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
    assert!(xs[0] > 0.0);
    assert!(*xs.last().unwrap() < 800.0);
}

#[test]
fn parents_sit_at_the_mean_of_their_children() {
    let tree = build_tree(5).unwrap();
    let h = Hierarchy::from_tree(&tree);
    let p = ClusterLayout.place(&h, area()).unwrap();
    for (v, slot) in h.slots().iter().enumerate() {
        if !slot.children.is_empty() {
            let mean =
                slot.children.iter().map(|&c| p[c].x).sum::<f64>() / slot.children.len() as f64;
            assert!((p[v].x - mean).abs() < 1e-9);
        }
    }
}
