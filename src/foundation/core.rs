use crate::foundation::error::{FibTreeError, FibTreeResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Minimum height of a responsive canvas, in pixels.
pub const RESPONSIVE_MIN_HEIGHT: u32 = 600;

/// Height/width ratio used by responsive canvases.
pub const RESPONSIVE_ASPECT: f64 = 0.75;

/// Output surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

impl Canvas {
    /// Create a validated canvas.
    pub fn new(width: u32, height: u32) -> FibTreeResult<Self> {
        if width == 0 || height == 0 {
            return Err(FibTreeError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Size a canvas to a container: full width, `max(min_height, width * 0.75)` tall.
    pub fn responsive(container_width: u32, min_height: u32) -> FibTreeResult<Self> {
        let scaled = (f64::from(container_width) * RESPONSIVE_ASPECT).round() as u32;
        Self::new(container_width, scaled.max(min_height))
    }

    /// Drawable area left after removing `margin` from every side.
    pub fn inner_area(self, margin: Margin) -> FibTreeResult<Rect> {
        let w = f64::from(self.width) - margin.left - margin.right;
        let h = f64::from(self.height) - margin.top - margin.bottom;
        if w <= 0.0 || h <= 0.0 {
            return Err(FibTreeError::validation(format!(
                "margin leaves no drawable area on a {}x{} canvas",
                self.width, self.height
            )));
        }
        Ok(Rect::new(margin.left, margin.top, margin.left + w, margin.top + h))
    }
}

/// How the canvas size is chosen.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CanvasSpec {
    /// Fixed pixel dimensions.
    Fixed {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// Follow the container width; height keeps a 4:3 ratio with a floor.
    Responsive {
        /// Container width in pixels.
        container_width: u32,
        /// Lower bound for the height.
        #[serde(default = "default_min_height")]
        min_height: u32,
    },
}

fn default_min_height() -> u32 {
    RESPONSIVE_MIN_HEIGHT
}

impl Default for CanvasSpec {
    fn default() -> Self {
        let c = Canvas::default();
        Self::Fixed {
            width: c.width,
            height: c.height,
        }
    }
}

impl CanvasSpec {
    /// Resolve into concrete dimensions.
    pub fn resolve(self) -> FibTreeResult<Canvas> {
        match self {
            Self::Fixed { width, height } => Canvas::new(width, height),
            Self::Responsive {
                container_width,
                min_height,
            } => Canvas::responsive(container_width, min_height),
        }
    }

    /// Return `true` when the size tracks the container.
    pub fn is_responsive(self) -> bool {
        matches!(self, Self::Responsive { .. })
    }
}

/// Space reserved around the tree, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Margin {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
}

impl Margin {
    /// Same margin on all four sides.
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Reject negative or non-finite edges.
    pub fn validate(self) -> FibTreeResult<()> {
        for v in [self.top, self.right, self.bottom, self.left] {
            if !v.is_finite() || v < 0.0 {
                return Err(FibTreeError::validation(
                    "margin values must be finite and >= 0",
                ));
            }
        }
        Ok(())
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(50.0)
    }
}

/// Opaque 8-bit RGB colour, (de)serialized as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb`.
    pub fn from_hex(s: &str) -> FibTreeResult<Self> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| FibTreeError::validation(format!("colour '{s}' must start with '#'")))?;
        let channel = |h: &str| {
            u8::from_str_radix(h, 16)
                .map_err(|_| FibTreeError::validation(format!("colour '{s}' is not valid hex")))
        };
        if !hex.is_ascii() {
            return Err(FibTreeError::validation(format!(
                "colour '{s}' is not valid hex"
            )));
        }
        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(FibTreeError::validation(format!(
                "colour '{s}' must be #rrggbb or #rgb"
            ))),
        }
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = FibTreeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb8> for String {
    fn from(value: Rgb8) -> Self {
        value.to_hex()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
