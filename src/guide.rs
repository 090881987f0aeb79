//! # fibtree guide
//!
//! ## Pipeline
//!
//! 1. Build the call tree: [`TreeBuilder::build`](crate::TreeBuilder::build) or
//!    [`build_tree`](crate::build_tree)
//! 2. Lay it out: [`layout_tree`](crate::layout_tree) with a [`TreeLayout`](crate::TreeLayout)
//! 3. Choreograph and assemble: [`compose_scene`](crate::compose_scene)
//! 4. Draw: [`render_svg`](crate::render_svg) (animated) or
//!    [`render_svg_at`](crate::render_svg_at) / [`render_frame`](crate::render_frame) (frozen)
//!
//! [`scene_for`](crate::scene_for) runs steps 1 to 3 from a [`VizConfig`](crate::VizConfig).
//! [`Visualizer`](crate::Visualizer) keeps a scene alive and rebuilds it when `n` or the container
//! width changes.
//!
//! ## The call tree
//!
//! Each node is one call of naive `fib(n)`. Calls with `n <= 1` are leaves; every other call has
//! exactly two children, `fib(n - 1)` then `fib(n - 2)`. A tree for `n` has `2 * F(n + 1) - 1`
//! nodes, so the builder refuses inputs above its bound ([`DEFAULT_MAX_N`](crate::DEFAULT_MAX_N)
//! unless configured otherwise) instead of growing without limit.
//!
//! `order` numbers nodes in the sequence the calls happen: parent first, then the whole left
//! subtree, then the right. The counter is threaded through the recursion and starts at zero for
//! every build.
//!
//! ```rust
//! let tree = fibtree::build_tree(4)?;
//! assert_eq!(tree.len(), 9);
//! assert_eq!(tree.children()[0].value(), 3);
//! assert_eq!(tree.children()[1].order(), 6);
//! # Ok::<(), fibtree::FibTreeError>(())
//! ```
//!
//! ## Layouts
//!
//! - [`LayoutKind::Tidy`](crate::LayoutKind::Tidy): compact tidy tree; siblings one unit apart,
//!   cousins two; depth maps linearly to `y`.
//! - [`LayoutKind::Cluster`](crate::LayoutKind::Cluster): dendrogram; all leaves on the bottom
//!   row.
//!
//! Links are vertical bump curves ([`bump_y`](crate::bump_y)).
//!
//! ## Choreographies
//!
//! | kind         | node entrance                    | link entrance          | exits    |
//! |--------------|----------------------------------|------------------------|----------|
//! | `still`      | none                             | none                   | instant  |
//! | `presence`   | group fades and scales in        | stroke draws and fades | reversed |
//! | `transition` | circle grows, label fades        | stroke draws and fades | instant  |
//!
//! Node delay is `order * step_secs`; a link waits for the later of its two endpoints.
//!
//! ## Rendering a file
//!
//! ```rust,no_run
//! use fibtree::{VizConfig, render_svg, scene_for};
//!
//! # fn main() -> fibtree::FibTreeResult<()> {
//! let cfg = VizConfig {
//!     n: 6,
//!     ..VizConfig::default()
//! };
//! let scene = scene_for(&cfg)?;
//! std::fs::write("fib6.svg", render_svg(&scene)?).map_err(anyhow::Error::from)?;
//! # Ok(())
//! # }
//! ```
