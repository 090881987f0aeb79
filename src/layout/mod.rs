//! Coordinate assignment for call trees.
//!
//! A [`TreeLayout`] strategy receives a flattened [`Hierarchy`] and the drawable area, and
//! returns one position per slot. [`layout_tree`] wraps the strategy and produces a
//! [`PlacedTree`] with node records and curved links.

pub(crate) mod cluster;
pub(crate) mod link;
pub(crate) mod tidy;

use crate::foundation::core::{BezPath, Point, Rect};
use crate::foundation::error::{FibTreeError, FibTreeResult};
use crate::tree::node::TreeNode;

/// One node of a tree flattened into pre-order slots.
#[derive(Clone, Debug)]
pub struct Slot {
    /// Construction order of the node.
    pub order: u32,
    /// Fibonacci argument of the node.
    pub value: u32,
    /// Distance from the root, in edges.
    pub depth: u32,
    /// Parent slot.
    pub parent: Option<usize>,
    /// Child slots, left to right.
    pub children: Vec<usize>,
    /// Position among siblings.
    pub index: usize,
}

/// Arena view of a [`TreeNode`]; slot 0 is the root and parents precede children.
#[derive(Clone, Debug)]
pub struct Hierarchy {
    slots: Vec<Slot>,
}

impl Hierarchy {
    /// Flatten `tree` in pre-order.
    pub fn from_tree(tree: &TreeNode) -> Self {
        let mut slots = Vec::with_capacity(tree.len());
        let mut stack: Vec<(&TreeNode, Option<usize>, u32, usize)> = vec![(tree, None, 0, 0)];
        while let Some((node, parent, depth, index)) = stack.pop() {
            let slot = slots.len();
            slots.push(Slot {
                order: node.order(),
                value: node.value(),
                depth,
                parent,
                children: Vec::with_capacity(node.children().len()),
                index,
            });
            if let Some(p) = parent {
                slots[p].children.push(slot);
            }
            for (i, child) in node.children().iter().enumerate().rev() {
                stack.push((child, Some(slot), depth + 1, i));
            }
        }
        Self { slots }
    }

    /// All slots in pre-order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false` for hierarchies built from a tree.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Deepest depth present.
    pub fn max_depth(&self) -> u32 {
        self.slots.iter().map(|s| s.depth).max().unwrap_or(0)
    }

    /// d3's default separation: 1 between siblings, 2 between cousins.
    pub fn separation(&self, a: usize, b: usize) -> f64 {
        if self.slots[a].parent == self.slots[b].parent {
            1.0
        } else {
            2.0
        }
    }
}

/// A layout algorithm.
pub trait TreeLayout {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Return one position per slot of `hierarchy`, inside `area`.
    fn place(&self, hierarchy: &Hierarchy, area: Rect) -> FibTreeResult<Vec<Point>>;

    /// Place `tree` inside `area` and build its links.
    fn layout(&self, tree: &TreeNode, area: Rect) -> FibTreeResult<PlacedTree> {
        layout_tree(tree, self, area)
    }
}

/// Built-in layout strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Tidy tree (Buchheim et al.), compact with parents over children.
    #[default]
    Tidy,
    /// Dendrogram with every leaf on the bottom row.
    Cluster,
}

impl LayoutKind {
    /// Instantiate the strategy.
    pub fn strategy(self) -> Box<dyn TreeLayout> {
        match self {
            Self::Tidy => Box::new(tidy::TidyLayout),
            Self::Cluster => Box::new(cluster::ClusterLayout),
        }
    }
}

/// A node with its assigned position.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlacedNode {
    /// Construction order of the call.
    pub order: u32,
    /// Fibonacci argument of the call.
    pub value: u32,
    /// Distance from the root, in edges.
    pub depth: u32,
    /// Order of the parent node.
    pub parent: Option<u32>,
    /// Whether the call is a base case.
    pub is_leaf: bool,
    /// Centre of the node in canvas coordinates.
    pub position: Point,
}

/// A parent-to-child edge with its curve.
#[derive(Clone, Debug, serde::Serialize)]
pub struct PlacedLink {
    /// Parent order.
    pub source: u32,
    /// Child order.
    pub target: u32,
    /// Bump curve from parent centre to child centre.
    pub path: BezPath,
}

impl PlacedLink {
    /// The larger of the two endpoint orders; the link appears with its later endpoint.
    pub fn max_order(&self) -> u32 {
        self.source.max(self.target)
    }
}

/// Result of laying out one tree.
#[derive(Clone, Debug, serde::Serialize)]
pub struct PlacedTree {
    /// Nodes in pre-order.
    pub nodes: Vec<PlacedNode>,
    /// Links in pre-order of the child.
    pub links: Vec<PlacedLink>,
    /// Area the layout was fitted to.
    pub area: Rect,
}

impl PlacedTree {
    /// Look up a node by order.
    pub fn node(&self, order: u32) -> Option<&PlacedNode> {
        self.nodes
            .binary_search_by_key(&order, |n| n.order)
            .ok()
            .map(|i| &self.nodes[i])
    }
}

/// Lay out `tree` into `area` with `layout`.
#[tracing::instrument(skip(tree, layout), fields(layout = layout.name(), nodes = tree.len()))]
pub fn layout_tree<L: TreeLayout + ?Sized>(
    tree: &TreeNode,
    layout: &L,
    area: Rect,
) -> FibTreeResult<PlacedTree> {
    if !(area.width() > 0.0 && area.height() > 0.0) {
        return Err(FibTreeError::layout(format!(
            "layout area must be non-empty, got {}x{}",
            area.width(),
            area.height()
        )));
    }

    let hierarchy = Hierarchy::from_tree(tree);
    let positions = layout.place(&hierarchy, area)?;
    if positions.len() != hierarchy.len() {
        return Err(FibTreeError::layout(format!(
            "{} returned {} positions for {} nodes",
            layout.name(),
            positions.len(),
            hierarchy.len()
        )));
    }
    if let Some(p) = positions.iter().find(|p| !p.is_finite()) {
        return Err(FibTreeError::layout(format!(
            "{} produced a non-finite position {p:?}",
            layout.name()
        )));
    }

    let slots = hierarchy.slots();
    let nodes: Vec<PlacedNode> = slots
        .iter()
        .zip(&positions)
        .map(|(slot, &position)| PlacedNode {
            order: slot.order,
            value: slot.value,
            depth: slot.depth,
            parent: slot.parent.map(|p| slots[p].order),
            is_leaf: slot.children.is_empty(),
            position,
        })
        .collect();

    let links = slots
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| slot.parent.map(|p| (p, i)))
        .map(|(p, c)| PlacedLink {
            source: slots[p].order,
            target: slots[c].order,
            path: link::bump_y(positions[p], positions[c]),
        })
        .collect();

    tracing::debug!(nodes = hierarchy.len(), depth = hierarchy.max_depth(), "laid out tree");
    Ok(PlacedTree { nodes, links, area })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/mod.rs"]
mod tests;
