/// Convenience result type used across the crate.
pub type FibTreeResult<T> = Result<T, FibTreeError>;

/// Top-level error type for tree building, layout, choreography and rendering.
#[derive(thiserror::Error, Debug)]
pub enum FibTreeError {
    /// Invalid input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// The requested tree would exceed the configured size bound.
    #[error("input too large: n={n} exceeds the maximum of {max}")]
    InputTooLarge {
        /// Requested input.
        n: i64,
        /// Active upper bound.
        max: u32,
    },

    /// Coordinate assignment failed.
    #[error("layout error: {0}")]
    Layout(String),

    /// Reveal timing or sampling failed.
    #[error("animation error: {0}")]
    Animation(String),

    /// SVG writing or rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FibTreeError {
    /// Build a [`FibTreeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FibTreeError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`FibTreeError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`FibTreeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FibTreeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
