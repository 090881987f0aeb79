/// One call in the naive recursive Fibonacci expansion.
///
/// Nodes are immutable after construction: a tree is only ever produced by
/// [`TreeBuilder`](crate::TreeBuilder) and is rebuilt from scratch when the input changes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TreeNode {
    value: u32,
    order: u32,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub(crate) fn leaf(value: u32, order: u32) -> Self {
        Self {
            value,
            order,
            children: Vec::new(),
        }
    }

    pub(crate) fn branch(value: u32, order: u32, left: TreeNode, right: TreeNode) -> Self {
        Self {
            value,
            order,
            children: vec![left, right],
        }
    }

    /// Fibonacci argument of this call.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Pre-order construction index, unique within one tree.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Either empty (base case) or `[fib(value - 1), fib(value - 2)]`.
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Return `true` for the base cases `value <= 1`.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(TreeNode::len).sum::<usize>()
    }

    /// Always `false`; a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        self.iter().filter(|n| n.is_leaf()).count()
    }

    /// Longest root-to-leaf path, in edges.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Pre-order traversal (parent, left subtree, right subtree).
    ///
    /// For a freshly built tree this visits nodes in ascending `order`.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// `(parent order, child order)` pairs in pre-order of the child.
    pub fn links(&self) -> Vec<(u32, u32)> {
        let mut out = Vec::with_capacity(self.len().saturating_sub(1));
        for node in self.iter() {
            for child in &node.children {
                out.push((node.order, child.order));
            }
        }
        // Pre-order of the child equals ascending child order.
        out.sort_by_key(|&(_, child)| child);
        out
    }

    /// Compare values and shape, ignoring `order`.
    pub fn same_shape(&self, other: &TreeNode) -> bool {
        self.value == other.value
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.same_shape(b))
    }
}

/// Iterator returned by [`TreeNode::iter`].
pub struct PreOrder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a TreeNode {
    type Item = &'a TreeNode;
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/node.rs"]
mod tests;
