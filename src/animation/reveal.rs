use crate::animation::ease::Ease;
use crate::foundation::error::{FibTreeError, FibTreeResult};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Value at fraction `t` of the way from `a` to `b`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// Entrance timing of one scene element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Reveal {
    /// Seconds from scene start until the element starts appearing.
    pub delay_secs: f64,
    /// Seconds the entrance takes.
    pub duration_secs: f64,
    /// Easing applied to the raw progress.
    pub ease: Ease,
}

impl Reveal {
    /// Create a validated reveal.
    pub fn new(delay_secs: f64, duration_secs: f64, ease: Ease) -> FibTreeResult<Self> {
        if !delay_secs.is_finite() || delay_secs < 0.0 {
            return Err(FibTreeError::animation(format!(
                "reveal delay must be finite and >= 0, got {delay_secs}"
            )));
        }
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(FibTreeError::animation(format!(
                "reveal duration must be finite and > 0, got {duration_secs}"
            )));
        }
        Ok(Self {
            delay_secs,
            duration_secs,
            ease,
        })
    }

    /// Time at which the element is fully shown.
    pub fn end_secs(&self) -> f64 {
        self.delay_secs + self.duration_secs
    }

    /// Eased progress in `[0, 1]` at scene time `t`.
    pub fn progress(&self, t: f64) -> f64 {
        let raw = (t - self.delay_secs) / self.duration_secs;
        self.ease.apply(raw)
    }

    /// Interpolate `from -> to` at scene time `t`.
    pub fn tween<T: Lerp>(&self, from: &T, to: &T, t: f64) -> T {
        T::lerp(from, to, self.progress(t))
    }
}

/// Visual state of a node at some instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct NodeAppearance {
    /// Opacity of the whole node group.
    pub opacity: f64,
    /// Multiplier on the circle radius.
    pub circle_scale: f64,
    /// Multiplier on the label size.
    pub label_scale: f64,
    /// Opacity of the label alone.
    pub label_opacity: f64,
}

impl NodeAppearance {
    /// Fully revealed.
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        circle_scale: 1.0,
        label_scale: 1.0,
        label_opacity: 1.0,
    };

    /// Not yet revealed.
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        circle_scale: 0.0,
        label_scale: 0.0,
        label_opacity: 0.0,
    };

    /// Return `true` when nothing of the node would be painted.
    pub fn is_invisible(&self) -> bool {
        self.opacity <= 0.0 || (self.circle_scale <= 0.0 && self.label_opacity <= 0.0)
    }
}

impl Lerp for NodeAppearance {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            circle_scale: f64::lerp(&a.circle_scale, &b.circle_scale, t),
            label_scale: f64::lerp(&a.label_scale, &b.label_scale, t),
            label_opacity: f64::lerp(&a.label_opacity, &b.label_opacity, t),
        }
    }
}

/// Visual state of a link at some instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LinkAppearance {
    /// Stroke opacity.
    pub opacity: f64,
    /// Fraction of the path length drawn, from the parent end.
    pub drawn: f64,
}

impl LinkAppearance {
    /// Fully drawn.
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        drawn: 1.0,
    };

    /// Not yet drawn.
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        drawn: 0.0,
    };
}

impl Lerp for LinkAppearance {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            drawn: f64::lerp(&a.drawn, &b.drawn, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
