use std::path::Path;
use std::sync::{Arc, OnceLock};

use anyhow::Context as _;

use crate::foundation::error::{FibTreeError, FibTreeResult};
use crate::render::svg::render_svg_at;
use crate::scene::model::Scene;

/// Largest raster edge accepted, in pixels.
pub const MAX_RASTER_DIM: u32 = 16_384;

/// Straight-alpha RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8, `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl Frame {
    /// RGBA of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// System fonts, loaded on first use and shared by every rasterization.
fn font_db() -> Arc<usvg::fontdb::Database> {
    static FONTS: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "loaded system fonts");
            Arc::new(db)
        })
        .clone()
}

fn svg_options() -> usvg::Options<'static> {
    usvg::Options {
        fontdb: font_db(),
        ..Default::default()
    }
}

/// Rasterize an SVG document at its intrinsic size.
pub fn rasterize_svg(svg: &str) -> FibTreeResult<Frame> {
    let opts = svg_options();
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| FibTreeError::render(format!("parse svg: {e}")))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width > MAX_RASTER_DIM || height > MAX_RASTER_DIM {
        return Err(FibTreeError::render(format!(
            "raster size too large: {width}x{height} (max {MAX_RASTER_DIM}x{MAX_RASTER_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| FibTreeError::render("failed to allocate pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut data = pixmap.take();
    unpremultiply_in_place(&mut data);
    Ok(Frame {
        width,
        height,
        data,
    })
}

/// Rasterize the scene as it looks at `t` seconds.
#[tracing::instrument(skip(scene))]
pub fn render_frame(scene: &Scene, t: f64) -> FibTreeResult<Frame> {
    let svg = render_svg_at(scene, t)?;
    rasterize_svg(&svg)
}

/// Encode `frame` as PNG at `path`, creating parent directories.
pub fn write_png(frame: &Frame, path: &Path) -> FibTreeResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Premultiplied RGBA8 to straight RGBA8.
fn unpremultiply_in_place(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
