use crate::foundation::error::{FibTreeError, FibTreeResult};
use crate::tree::node::TreeNode;

/// Default upper bound on `n` (21 891 nodes).
pub const DEFAULT_MAX_N: u32 = 20;

/// Largest bound a builder accepts (2 692 537 nodes).
pub const HARD_MAX_N: u32 = 30;

/// Builds Fibonacci call trees under a size bound.
#[derive(Clone, Copy, Debug)]
pub struct TreeBuilder {
    max_n: u32,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self {
            max_n: DEFAULT_MAX_N,
        }
    }
}

impl TreeBuilder {
    /// Builder with the default bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder accepting inputs up to `max_n` (at most [`HARD_MAX_N`]).
    pub fn with_max_n(max_n: u32) -> FibTreeResult<Self> {
        if max_n > HARD_MAX_N {
            return Err(FibTreeError::validation(format!(
                "max_n must be <= {HARD_MAX_N}, got {max_n}"
            )));
        }
        Ok(Self { max_n })
    }

    /// Active bound.
    pub fn max_n(&self) -> u32 {
        self.max_n
    }

    /// Check `n` against the precondition and the bound.
    pub fn check(&self, n: i64) -> FibTreeResult<u32> {
        if n < 0 {
            return Err(FibTreeError::validation(format!("n must be >= 0, got {n}")));
        }
        if n > i64::from(self.max_n) {
            return Err(FibTreeError::InputTooLarge {
                n,
                max: self.max_n,
            });
        }
        Ok(n as u32)
    }

    /// Build the call tree for `n`.
    ///
    /// Orders start at 0 on every call; nothing is shared between builds.
    #[tracing::instrument(skip(self))]
    pub fn build(&self, n: i64) -> FibTreeResult<TreeNode> {
        let n = self.check(n)?;
        let (root, next) = grow(n, 0);
        tracing::debug!(n, nodes = next, "built call tree");
        Ok(root)
    }
}

/// Build the call tree for `n` with the default bound.
pub fn build_tree(n: i64) -> FibTreeResult<TreeNode> {
    TreeBuilder::new().build(n)
}

/// Number of invocations made by naive recursive Fibonacci(n), base cases included.
///
/// Equals `2 * F(n + 1) - 1`.
pub fn call_count(n: u32) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        let next = a.saturating_add(b);
        a = b;
        b = next;
    }
    // b == F(n + 1)
    b.saturating_mul(2).saturating_sub(1)
}

/// Returns the subtree for `n` and the next free order index.
fn grow(n: u32, next: u32) -> (TreeNode, u32) {
    let order = next;
    if n <= 1 {
        return (TreeNode::leaf(n, order), order + 1);
    }
    let (left, next) = grow(n - 1, order + 1);
    let (right, next) = grow(n - 2, next);
    (TreeNode::branch(n, order, left, right), next)
}

#[cfg(test)]
#[path = "../../tests/unit/tree/build.rs"]
mod tests;
