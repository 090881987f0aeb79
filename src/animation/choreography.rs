//! Staggered reveal strategies.
//!
//! A [`Choreography`] decides when each node and link appears and how the entrance looks.
//! Delays are proportional to construction order, so the tree unfolds in the same sequence the
//! recursive calls were made.

use crate::animation::ease::Ease;
use crate::animation::reveal::{LinkAppearance, NodeAppearance, Reveal};
use crate::foundation::error::{FibTreeError, FibTreeResult};
use crate::layout::{PlacedLink, PlacedNode};

/// Upper bound for the per-order stagger step.
pub const MAX_STEP_SECS: f64 = 5.0;

/// Upper bound for any single entrance duration.
pub const MAX_DURATION_SECS: f64 = 60.0;

/// How a node's entrance is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeEffect {
    /// Shown immediately.
    None,
    /// Whole node group fades in and scales up from its centre.
    FadeScale,
    /// Circle radius grows while the label fades in at full size.
    Grow,
}

impl NodeEffect {
    /// Appearance at eased progress `p`.
    pub fn appearance(self, p: f64) -> NodeAppearance {
        match self {
            Self::None => NodeAppearance::SHOWN,
            Self::FadeScale => NodeAppearance {
                opacity: p,
                circle_scale: p,
                label_scale: p,
                label_opacity: 1.0,
            },
            Self::Grow => NodeAppearance {
                opacity: p,
                circle_scale: p,
                label_scale: 1.0,
                label_opacity: p,
            },
        }
    }
}

/// How a link's entrance is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkEffect {
    /// Shown immediately.
    None,
    /// Stroke is drawn from the parent end while fading in.
    DrawFade,
}

impl LinkEffect {
    /// Appearance at eased progress `p`.
    pub fn appearance(self, p: f64) -> LinkAppearance {
        match self {
            Self::None => LinkAppearance::SHOWN,
            Self::DrawFade => LinkAppearance {
                opacity: p,
                drawn: p,
            },
        }
    }
}

/// A reveal strategy.
pub trait Choreography {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Effect applied to node entrances.
    fn node_effect(&self) -> NodeEffect;

    /// Effect applied to link entrances.
    fn link_effect(&self) -> LinkEffect;

    /// Entrance of `node`, or `None` when it is shown from the start.
    fn node_reveal(&self, node: &PlacedNode) -> FibTreeResult<Option<Reveal>>;

    /// Entrance of `link`, or `None` when it is shown from the start.
    fn link_reveal(&self, link: &PlacedLink) -> FibTreeResult<Option<Reveal>>;

    /// Return `true` when removed elements play their entrance in reverse.
    fn animates_exit(&self) -> bool {
        false
    }
}

/// Everything visible at once.
#[derive(Clone, Copy, Debug, Default)]
pub struct Still;

impl Choreography for Still {
    fn name(&self) -> &'static str {
        "still"
    }

    fn node_effect(&self) -> NodeEffect {
        NodeEffect::None
    }

    fn link_effect(&self) -> LinkEffect {
        LinkEffect::None
    }

    fn node_reveal(&self, _node: &PlacedNode) -> FibTreeResult<Option<Reveal>> {
        Ok(None)
    }

    fn link_reveal(&self, _link: &PlacedLink) -> FibTreeResult<Option<Reveal>> {
        Ok(None)
    }
}

/// Order-staggered entrance shared by the presence and transition styles.
#[derive(Clone, Copy, Debug)]
pub struct Staggered {
    name: &'static str,
    step_secs: f64,
    node_duration_secs: f64,
    link_duration_secs: f64,
    ease: Ease,
    node_effect: NodeEffect,
    exit: bool,
}

impl Staggered {
    /// Enter/exit style: node groups fade and scale, links draw, removals reverse.
    pub fn presence(spec: &ChoreographySpec) -> FibTreeResult<Self> {
        spec.validate()?;
        Ok(Self {
            name: "presence",
            step_secs: spec.step_secs,
            node_duration_secs: spec.node_duration_secs,
            link_duration_secs: spec.link_duration_secs,
            ease: spec.ease,
            node_effect: NodeEffect::FadeScale,
            exit: true,
        })
    }

    /// Transition style: circles grow, labels fade, links draw; removals are immediate.
    pub fn transition(spec: &ChoreographySpec) -> FibTreeResult<Self> {
        spec.validate()?;
        Ok(Self {
            name: "transition",
            step_secs: spec.step_secs,
            node_duration_secs: spec.node_duration_secs,
            link_duration_secs: spec.link_duration_secs,
            ease: spec.ease,
            node_effect: NodeEffect::Grow,
            exit: false,
        })
    }

    /// Seconds between consecutive orders.
    pub fn step_secs(&self) -> f64 {
        self.step_secs
    }
}

impl Choreography for Staggered {
    fn name(&self) -> &'static str {
        self.name
    }

    fn node_effect(&self) -> NodeEffect {
        self.node_effect
    }

    fn link_effect(&self) -> LinkEffect {
        LinkEffect::DrawFade
    }

    fn node_reveal(&self, node: &PlacedNode) -> FibTreeResult<Option<Reveal>> {
        let delay = f64::from(node.order) * self.step_secs;
        Reveal::new(delay, self.node_duration_secs, self.ease).map(Some)
    }

    fn link_reveal(&self, link: &PlacedLink) -> FibTreeResult<Option<Reveal>> {
        let delay = f64::from(link.max_order()) * self.step_secs;
        Reveal::new(delay, self.link_duration_secs, self.ease).map(Some)
    }

    fn animates_exit(&self) -> bool {
        self.exit
    }
}

/// Built-in choreographies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoreographyKind {
    /// No animation.
    Still,
    /// Enter/exit presence animation.
    Presence,
    /// Imperative transition animation.
    #[default]
    Transition,
}

/// Serializable choreography settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChoreographySpec {
    /// Which strategy to build.
    pub kind: ChoreographyKind,
    /// Delay added per construction order.
    pub step_secs: f64,
    /// Seconds each node entrance takes.
    pub node_duration_secs: f64,
    /// Seconds each link takes to draw.
    pub link_duration_secs: f64,
    /// Easing shared by node and link entrances.
    pub ease: Ease,
}

impl Default for ChoreographySpec {
    fn default() -> Self {
        Self {
            kind: ChoreographyKind::default(),
            step_secs: 0.5,
            node_duration_secs: 0.3,
            link_duration_secs: 0.5,
            ease: Ease::default(),
        }
    }
}

impl ChoreographySpec {
    /// Check timing ranges.
    pub fn validate(&self) -> FibTreeResult<()> {
        if !self.step_secs.is_finite() || self.step_secs <= 0.0 || self.step_secs > MAX_STEP_SECS
        {
            return Err(FibTreeError::validation(format!(
                "step_secs must be in (0, {MAX_STEP_SECS}], got {}",
                self.step_secs
            )));
        }
        for (name, v) in [
            ("node_duration_secs", self.node_duration_secs),
            ("link_duration_secs", self.link_duration_secs),
        ] {
            if !v.is_finite() || v <= 0.0 || v > MAX_DURATION_SECS {
                return Err(FibTreeError::validation(format!(
                    "{name} must be in (0, {MAX_DURATION_SECS}], got {v}"
                )));
            }
        }
        Ok(())
    }

    /// Instantiate the strategy.
    pub fn build(&self) -> FibTreeResult<Box<dyn Choreography>> {
        Ok(match self.kind {
            ChoreographyKind::Still => Box::new(Still),
            ChoreographyKind::Presence => Box::new(Staggered::presence(self)?),
            ChoreographyKind::Transition => Box::new(Staggered::transition(self)?),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/choreography.rs"]
mod tests;
