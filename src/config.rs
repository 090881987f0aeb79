//! JSON-facing visualization settings.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::choreography::ChoreographySpec;
use crate::foundation::core::{CanvasSpec, Margin, Rgb8};
use crate::foundation::error::{FibTreeError, FibTreeResult};
use crate::layout::LayoutKind;
use crate::tree::build::{DEFAULT_MAX_N, TreeBuilder};

/// Colours used by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Fill of nodes with children.
    pub internal: Rgb8,
    /// Fill of base-case nodes.
    pub leaf: Rgb8,
    /// Stroke of parent-child links.
    pub link: Rgb8,
    /// Fill of the value labels.
    pub label: Rgb8,
    /// Canvas background; transparent when `None`.
    pub background: Option<Rgb8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            internal: Rgb8::new(0x4d, 0xb6, 0xac),
            leaf: Rgb8::new(0x7e, 0x57, 0xc2),
            link: Rgb8::new(0x4a, 0x4a, 0x4a),
            label: Rgb8::new(0xff, 0xff, 0xff),
            background: Some(Rgb8::new(0x1e, 0x1e, 0x1e)),
        }
    }
}

/// Marker, stroke and label geometry.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Style {
    /// Fill and stroke colours.
    pub palette: Palette,
    /// Circle radius in pixels.
    pub node_radius: f64,
    /// Link stroke width in pixels.
    pub link_width: f64,
    /// Draw each node's value inside its circle.
    pub show_labels: bool,
    /// Label font size in pixels.
    pub font_size: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            node_radius: 18.0,
            link_width: 1.5,
            show_labels: true,
            font_size: 12.0,
        }
    }
}

impl Style {
    /// Check that all sizes are positive and finite.
    pub fn validate(&self) -> FibTreeResult<()> {
        for (name, v) in [
            ("node_radius", self.node_radius),
            ("link_width", self.link_width),
            ("font_size", self.font_size),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(FibTreeError::validation(format!(
                    "style.{name} must be finite and > 0, got {v}"
                )));
            }
        }
        Ok(())
    }
}

/// Everything needed to build, lay out, animate and draw one tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VizConfig {
    /// Fibonacci argument of the root call.
    pub n: i64,
    /// Largest accepted `n`.
    pub max_n: u32,
    /// Fixed or container-driven canvas size.
    pub canvas: CanvasSpec,
    /// Space kept free around the tree.
    pub margin: Margin,
    /// Coordinate assignment strategy.
    pub layout: LayoutKind,
    /// Reveal timings.
    pub choreography: ChoreographySpec,
    /// Colours and marker geometry.
    pub style: Style,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            n: 5,
            max_n: DEFAULT_MAX_N,
            canvas: CanvasSpec::default(),
            margin: Margin::default(),
            layout: LayoutKind::default(),
            choreography: ChoreographySpec::default(),
            style: Style::default(),
        }
    }
}

impl VizConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FibTreeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FibTreeError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FibTreeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FibTreeError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Tree builder honouring `max_n`.
    pub fn tree_builder(&self) -> FibTreeResult<TreeBuilder> {
        TreeBuilder::with_max_n(self.max_n)
    }

    /// Check every field; the first problem found is returned.
    pub fn validate(&self) -> FibTreeResult<()> {
        self.tree_builder()?.check(self.n)?;
        self.margin.validate()?;
        self.canvas.resolve()?.inner_area(self.margin)?;
        self.choreography.validate()?;
        self.style.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
