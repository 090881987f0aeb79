use std::fmt;

use crate::animation::choreography::{LinkEffect, NodeEffect};
use crate::animation::reveal::{LinkAppearance, NodeAppearance, Reveal};
use crate::config::{Style, VizConfig};
use crate::foundation::core::Canvas;
use crate::foundation::error::FibTreeResult;
use crate::layout::{PlacedLink, PlacedNode};
use crate::tree::node::TreeNode;

/// Stable identity of a scene element across rebuilds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum ElementKey {
    /// A node, by order.
    Node(u32),
    /// A link, by `(source, target)` order.
    Link(u32, u32),
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(order) => write!(f, "node-{order}"),
            Self::Link(source, target) => write!(f, "link-{source}-{target}"),
        }
    }
}

/// A placed node with its entrance.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SceneNode {
    /// Position and identity.
    pub placed: PlacedNode,
    /// Entrance timing; `None` when shown from the start.
    pub reveal: Option<Reveal>,
}

impl SceneNode {
    /// Identity of this node across rebuilds.
    pub fn key(&self) -> ElementKey {
        ElementKey::Node(self.placed.order)
    }
}

/// A placed link with its entrance.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SceneLink {
    /// Endpoints and curve.
    pub placed: PlacedLink,
    /// Entrance timing; `None` when drawn from the start.
    pub reveal: Option<Reveal>,
}

impl SceneLink {
    /// Identity of this link across rebuilds.
    pub fn key(&self) -> ElementKey {
        ElementKey::Link(self.placed.source, self.placed.target)
    }
}

/// A laid-out, choreographed tree ready to draw.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Scene {
    /// Input the tree was built from.
    pub n: u32,
    /// Resolved output size.
    pub canvas: Canvas,
    /// Colours and marker geometry.
    pub style: Style,
    /// Nodes in construction order.
    pub nodes: Vec<SceneNode>,
    /// Links in construction order of their child.
    pub links: Vec<SceneLink>,
    /// How nodes enter.
    pub node_effect: NodeEffect,
    /// How links enter.
    pub link_effect: LinkEffect,
    /// Whether removed elements play their entrance in reverse.
    pub animates_exit: bool,
    /// Time at which the last element is fully shown.
    pub duration_secs: f64,
}

/// Sampled appearances at one instant, index-aligned with [`Scene::nodes`] and [`Scene::links`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneSample {
    /// Sampled scene time in seconds.
    pub t: f64,
    /// Node appearances.
    pub nodes: Vec<NodeAppearance>,
    /// Link appearances.
    pub links: Vec<LinkAppearance>,
}

impl SceneSample {
    /// Number of nodes with anything painted.
    pub fn visible_nodes(&self) -> usize {
        self.nodes.iter().filter(|a| !a.is_invisible()).count()
    }

    /// Number of links with a drawn, non-transparent stroke.
    pub fn visible_links(&self) -> usize {
        self.links
            .iter()
            .filter(|a| a.opacity > 0.0 && a.drawn > 0.0)
            .count()
    }
}

impl Scene {
    /// Appearance of every element at scene time `t` (seconds).
    pub fn sample(&self, t: f64) -> SceneSample {
        let nodes = self
            .nodes
            .iter()
            .map(|n| match n.reveal {
                Some(r) => self.node_effect.appearance(r.progress(t)),
                None => NodeAppearance::SHOWN,
            })
            .collect();
        let links = self
            .links
            .iter()
            .map(|l| match l.reveal {
                Some(r) => self.link_effect.appearance(r.progress(t)),
                None => LinkAppearance::SHOWN,
            })
            .collect();
        SceneSample { t, nodes, links }
    }

    /// All element keys, nodes first.
    pub fn keys(&self) -> impl Iterator<Item = ElementKey> + '_ {
        self.nodes
            .iter()
            .map(SceneNode::key)
            .chain(self.links.iter().map(SceneLink::key))
    }

    /// Reveal attached to `key`, if the element exists and is animated.
    ///
    /// Nodes are stored by order and links by target order, so both lookups are binary searches.
    pub fn reveal_of(&self, key: ElementKey) -> Option<Reveal> {
        match key {
            ElementKey::Node(order) => self
                .nodes
                .binary_search_by_key(&order, |n| n.placed.order)
                .ok()
                .and_then(|i| self.nodes[i].reveal),
            ElementKey::Link(source, target) => self
                .links
                .binary_search_by_key(&target, |l| l.placed.target)
                .ok()
                .map(|i| &self.links[i])
                .filter(|l| l.placed.source == source)
                .and_then(|l| l.reveal),
        }
    }
}

/// Lay out and choreograph `tree` according to `config`.
#[tracing::instrument(skip_all, fields(n = tree.value(), nodes = tree.len()))]
pub fn compose_scene(tree: &TreeNode, config: &VizConfig) -> FibTreeResult<Scene> {
    config.choreography.validate()?;
    config.style.validate()?;
    config.margin.validate()?;
    let canvas = config.canvas.resolve()?;
    let area = canvas.inner_area(config.margin)?;

    let layout = config.layout.strategy();
    let placed = layout.layout(tree, area)?;
    let choreography = config.choreography.build()?;

    let mut duration_secs: f64 = 0.0;
    let mut nodes = Vec::with_capacity(placed.nodes.len());
    for node in placed.nodes {
        let reveal = choreography.node_reveal(&node)?;
        if let Some(r) = reveal {
            duration_secs = duration_secs.max(r.end_secs());
        }
        nodes.push(SceneNode {
            placed: node,
            reveal,
        });
    }
    let mut links = Vec::with_capacity(placed.links.len());
    for link in placed.links {
        let reveal = choreography.link_reveal(&link)?;
        if let Some(r) = reveal {
            duration_secs = duration_secs.max(r.end_secs());
        }
        links.push(SceneLink {
            placed: link,
            reveal,
        });
    }

    tracing::debug!(
        choreography = choreography.name(),
        duration_secs,
        "composed scene"
    );
    Ok(Scene {
        n: tree.value(),
        canvas,
        style: config.style,
        nodes,
        links,
        node_effect: choreography.node_effect(),
        link_effect: choreography.link_effect(),
        animates_exit: choreography.animates_exit(),
        duration_secs,
    })
}

/// Build the tree for `config.n` and compose its scene.
pub fn scene_for(config: &VizConfig) -> FibTreeResult<Scene> {
    let tree = config.tree_builder()?.build(config.n)?;
    compose_scene(&tree, config)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
