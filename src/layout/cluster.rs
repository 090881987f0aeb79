//! Dendrogram layout: leaves evenly spaced on the bottom row, parents centred above.

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::FibTreeResult;
use crate::layout::{Hierarchy, TreeLayout};

/// Cluster (dendrogram) strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClusterLayout;

impl TreeLayout for ClusterLayout {
    fn name(&self) -> &'static str {
        "cluster"
    }

    fn place(&self, hierarchy: &Hierarchy, area: Rect) -> FibTreeResult<Vec<Point>> {
        let n = hierarchy.len();
        let mut x = vec![0.0; n];
        // Height above the leaves, in levels.
        let mut y = vec![0.0; n];
        let mut previous_leaf = None;
        visit(hierarchy, 0, &mut x, &mut y, &mut previous_leaf);

        let left = extreme_leaf(hierarchy, |c| c.first().copied());
        let right = extreme_leaf(hierarchy, |c| c.last().copied());
        let x0 = x[left] - hierarchy.separation(left, right) / 2.0;
        let x1 = x[right] + hierarchy.separation(right, left) / 2.0;
        let root_y = y[0];

        Ok((0..n)
            .map(|v| {
                let fx = (x[v] - x0) / (x1 - x0);
                let fy = if root_y > 0.0 { 1.0 - y[v] / root_y } else { 0.0 };
                Point::new(area.x0 + fx * area.width(), area.y0 + fy * area.height())
            })
            .collect())
    }
}

fn visit(
    h: &Hierarchy,
    v: usize,
    x: &mut [f64],
    y: &mut [f64],
    previous_leaf: &mut Option<usize>,
) {
    let children = &h.slots()[v].children;
    if children.is_empty() {
        x[v] = match *previous_leaf {
            Some(p) => x[p] + h.separation(v, p),
            None => 0.0,
        };
        y[v] = 0.0;
        *previous_leaf = Some(v);
        return;
    }

    for &c in children {
        visit(h, c, x, y, previous_leaf);
    }
    x[v] = children.iter().map(|&c| x[c]).sum::<f64>() / children.len() as f64;
    y[v] = 1.0 + children.iter().map(|&c| y[c]).fold(0.0, f64::max);
}

fn extreme_leaf(h: &Hierarchy, pick: impl Fn(&[usize]) -> Option<usize>) -> usize {
    let mut v = 0;
    while let Some(next) = pick(&h.slots()[v].children) {
        v = next;
    }
    v
}

#[cfg(test)]
#[path = "../../tests/unit/layout/cluster.rs"]
mod tests;
