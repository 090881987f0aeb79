//! Stateful front end that mirrors an embedding page: it owns the current configuration and
//! rebuilds the whole scene whenever the input or the container size changes.

use crate::config::VizConfig;
use crate::foundation::core::CanvasSpec;
use crate::foundation::error::FibTreeResult;
use crate::render::svg::render_svg;
use crate::scene::diff::{SceneDiff, diff_scenes};
use crate::scene::model::{Scene, scene_for};

/// Owns one visualization and its current scene.
#[derive(Debug)]
pub struct Visualizer {
    config: VizConfig,
    scene: Scene,
    generation: u64,
}

impl Visualizer {
    /// Validate `config` and build the first scene.
    #[tracing::instrument(skip_all, fields(n = config.n))]
    pub fn new(config: VizConfig) -> FibTreeResult<Self> {
        config.validate()?;
        let scene = scene_for(&config)?;
        tracing::info!(n = config.n, nodes = scene.nodes.len(), "initial scene built");
        Ok(Self {
            config,
            scene,
            generation: 0,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &VizConfig {
        &self.config
    }

    /// Current scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Number of rebuilds since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Animated SVG for the current scene.
    pub fn svg(&self) -> FibTreeResult<String> {
        render_svg(&self.scene)
    }

    /// Rebuild for a new input. On error the previous scene stays in place.
    pub fn set_n(&mut self, n: i64) -> FibTreeResult<SceneDiff> {
        let next = VizConfig {
            n,
            ..self.config.clone()
        };
        self.rebuild(next)
    }

    /// Follow a new container width. Fixed-size canvases ignore this.
    pub fn resize(&mut self, container_width: u32) -> FibTreeResult<Option<SceneDiff>> {
        let CanvasSpec::Responsive { min_height, .. } = self.config.canvas else {
            tracing::debug!(container_width, "fixed canvas; resize ignored");
            return Ok(None);
        };
        let next = VizConfig {
            canvas: CanvasSpec::Responsive {
                container_width,
                min_height,
            },
            ..self.config.clone()
        };
        self.rebuild(next).map(Some)
    }

    /// Replace the whole configuration.
    pub fn reconfigure(&mut self, config: VizConfig) -> FibTreeResult<SceneDiff> {
        self.rebuild(config)
    }

    /// Full rebuild: nothing from the previous tree or layout is reused.
    fn rebuild(&mut self, config: VizConfig) -> FibTreeResult<SceneDiff> {
        config.validate()?;
        let scene = scene_for(&config)?;
        let diff = diff_scenes(Some(&self.scene), &scene);

        self.generation += 1;
        tracing::info!(
            generation = self.generation,
            n = config.n,
            entered = diff.entered.len(),
            exited = diff.exited.len(),
            "scene rebuilt"
        );
        self.config = config;
        self.scene = scene;
        Ok(diff)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
