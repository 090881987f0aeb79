//! Fibonacci call-tree visualization.
//!
//! Build the naive-recursion call tree for `n`, lay it out, give every element a staggered
//! reveal and write the result as animated SVG (or a PNG snapshot). See [`guide`] for a
//! walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub mod config;
pub mod guide;
pub(crate) mod layout;
pub(crate) mod render;
pub(crate) mod scene;
pub mod session;
pub(crate) mod tree;

pub use crate::animation::choreography::{
    Choreography, ChoreographyKind, ChoreographySpec, LinkEffect, NodeEffect, Staggered, Still,
};
pub use crate::animation::ease::Ease;
pub use crate::animation::reveal::{Lerp, LinkAppearance, NodeAppearance, Reveal};
pub use crate::config::{Palette, Style, VizConfig};
pub use crate::foundation::core::{
    BezPath, Canvas, CanvasSpec, Margin, Point, RESPONSIVE_ASPECT, RESPONSIVE_MIN_HEIGHT, Rect, Rgb8,
    Vec2,
};
pub use crate::foundation::error::{FibTreeError, FibTreeResult};
pub use crate::layout::cluster::ClusterLayout;
pub use crate::layout::link::bump_y;
pub use crate::layout::tidy::TidyLayout;
pub use crate::layout::{
    Hierarchy, LayoutKind, PlacedLink, PlacedNode, PlacedTree, Slot, TreeLayout, layout_tree,
};
pub use crate::render::raster::{Frame, rasterize_svg, render_frame, write_png};
pub use crate::render::svg::{render_svg, render_svg_at};
pub use crate::scene::diff::{Exit, SceneDiff, diff_scenes};
pub use crate::scene::model::{
    ElementKey, Scene, SceneLink, SceneNode, SceneSample, compose_scene, scene_for,
};
pub use crate::session::Visualizer;
pub use crate::tree::build::{DEFAULT_MAX_N, HARD_MAX_N, TreeBuilder, build_tree, call_count};
pub use crate::tree::node::{PreOrder, TreeNode};
