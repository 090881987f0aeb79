//! SVG output.
//!
//! [`render_svg`] writes a self-animating document: every element carries its own CSS
//! `animation` with the delay from its reveal. [`render_svg_at`] bakes the appearance at a
//! single instant into plain presentation attributes, which is what the rasterizer consumes.

use std::fmt::{self, Write as _};

use kurbo::ParamCurveArclen;

use crate::animation::choreography::{LinkEffect, NodeEffect};
use crate::animation::reveal::{LinkAppearance, NodeAppearance, Reveal};
use crate::foundation::error::{FibTreeError, FibTreeResult};
use crate::scene::model::{Scene, SceneLink, SceneNode};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Arc-length accuracy used for dash lengths, in pixels.
const ARCLEN_ACCURACY: f64 = 0.05;

/// Write `scene` as an animated SVG document.
#[tracing::instrument(skip_all, fields(nodes = scene.nodes.len()))]
pub fn render_svg(scene: &Scene) -> FibTreeResult<String> {
    let mut out = String::with_capacity(256 + scene.nodes.len() * 256);
    write_animated(&mut out, scene).map_err(write_failed)?;
    Ok(out)
}

/// Write `scene` as a static SVG document frozen at `t` seconds.
#[tracing::instrument(skip(scene), fields(nodes = scene.nodes.len()))]
pub fn render_svg_at(scene: &Scene, t: f64) -> FibTreeResult<String> {
    if !t.is_finite() || t < 0.0 {
        return Err(FibTreeError::validation(format!(
            "snapshot time must be finite and >= 0, got {t}"
        )));
    }
    let sample = scene.sample(t);
    let mut out = String::with_capacity(256 + scene.nodes.len() * 256);
    write_snapshot(&mut out, scene, &sample.nodes, &sample.links).map_err(write_failed)?;
    Ok(out)
}

fn write_failed(e: fmt::Error) -> FibTreeError {
    FibTreeError::render(format!("write svg: {e}"))
}

/// Compact decimal: at most two fractional digits, no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn secs(v: f64) -> String {
    format!("{}s", num(v))
}

fn open_document(out: &mut String, scene: &Scene) -> fmt::Result {
    let (w, h) = (scene.canvas.width, scene.canvas.height);
    writeln!(
        out,
        r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    )?;
    if let Some(bg) = scene.style.palette.background {
        writeln!(
            out,
            r#"<rect width="{w}" height="{h}" fill="{}"/>"#,
            bg.to_hex()
        )?;
    }
    Ok(())
}

fn write_style(out: &mut String, scene: &Scene) -> fmt::Result {
    let style = &scene.style;
    let p = &style.palette;
    writeln!(out, "<style>")?;
    writeln!(
        out,
        ".fib-link {{ fill: none; stroke: {}; stroke-width: {}; }}",
        p.link.to_hex(),
        num(style.link_width)
    )?;
    writeln!(out, ".fib-internal {{ fill: {}; }}", p.internal.to_hex())?;
    writeln!(out, ".fib-leaf {{ fill: {}; }}", p.leaf.to_hex())?;
    writeln!(
        out,
        ".fib-label {{ fill: {}; font-size: {}px; font-family: sans-serif; text-anchor: middle; }}",
        p.label.to_hex(),
        num(style.font_size)
    )?;
    writeln!(
        out,
        "@keyframes fib-draw {{ from {{ stroke-dashoffset: 1; opacity: 0; }} to {{ stroke-dashoffset: 0; opacity: 1; }} }}"
    )?;
    writeln!(
        out,
        "@keyframes fib-pop {{ from {{ opacity: 0; transform: scale(0); }} to {{ opacity: 1; transform: scale(1); }} }}"
    )?;
    writeln!(
        out,
        "@keyframes fib-fade {{ from {{ opacity: 0; }} to {{ opacity: 1; }} }}"
    )?;
    writeln!(out, "</style>")
}

fn animation(name: &str, reveal: &Reveal) -> String {
    format!(
        "animation: {name} {} {} {} both",
        secs(reveal.duration_secs),
        reveal.ease.css_timing(),
        secs(reveal.delay_secs)
    )
}

fn node_class(node: &SceneNode) -> &'static str {
    if node.placed.is_leaf {
        "fib-leaf"
    } else {
        "fib-internal"
    }
}

fn write_animated(out: &mut String, scene: &Scene) -> fmt::Result {
    open_document(out, scene)?;
    write_style(out, scene)?;

    writeln!(out, r#"<g class="fib-links">"#)?;
    for link in &scene.links {
        write_animated_link(out, scene, link)?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="fib-nodes">"#)?;
    for node in &scene.nodes {
        write_animated_node(out, scene, node)?;
    }
    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")
}

fn write_animated_link(out: &mut String, scene: &Scene, link: &SceneLink) -> fmt::Result {
    let d = link.placed.path.to_svg();
    match (scene.link_effect, link.reveal) {
        (LinkEffect::DrawFade, Some(r)) => writeln!(
            out,
            r#"<path id="{}" class="fib-link" d="{d}" pathLength="1" stroke-dasharray="1" style="{}"/>"#,
            link.key(),
            animation("fib-draw", &r)
        ),
        _ => writeln!(
            out,
            r#"<path id="{}" class="fib-link" d="{d}"/>"#,
            link.key()
        ),
    }
}

fn write_label(out: &mut String, scene: &Scene, node: &SceneNode, style: Option<String>) -> fmt::Result {
    if !scene.style.show_labels {
        return Ok(());
    }
    match style {
        Some(s) => writeln!(
            out,
            r#"<text class="fib-label" dy="0.35em" style="{s}">{}</text>"#,
            node.placed.value
        ),
        None => writeln!(
            out,
            r#"<text class="fib-label" dy="0.35em">{}</text>"#,
            node.placed.value
        ),
    }
}

fn write_animated_node(out: &mut String, scene: &Scene, node: &SceneNode) -> fmt::Result {
    let pos = node.placed.position;
    let r = num(scene.style.node_radius);
    let class = node_class(node);
    writeln!(
        out,
        r#"<g id="{}" transform="translate({} {})">"#,
        node.key(),
        num(pos.x),
        num(pos.y)
    )?;
    match (scene.node_effect, node.reveal) {
        (NodeEffect::FadeScale, Some(rev)) => {
            writeln!(out, r#"<g style="{}">"#, animation("fib-pop", &rev))?;
            writeln!(out, r#"<circle class="{class}" r="{r}"/>"#)?;
            write_label(out, scene, node, None)?;
            writeln!(out, "</g>")?;
        }
        (NodeEffect::Grow, Some(rev)) => {
            writeln!(
                out,
                r#"<circle class="{class}" r="{r}" style="{}"/>"#,
                animation("fib-pop", &rev)
            )?;
            write_label(out, scene, node, Some(animation("fib-fade", &rev)))?;
        }
        _ => {
            writeln!(out, r#"<circle class="{class}" r="{r}"/>"#)?;
            write_label(out, scene, node, None)?;
        }
    }
    writeln!(out, "</g>")
}

fn write_snapshot(
    out: &mut String,
    scene: &Scene,
    nodes: &[NodeAppearance],
    links: &[LinkAppearance],
) -> fmt::Result {
    open_document(out, scene)?;
    let style = &scene.style;

    writeln!(
        out,
        r#"<g class="fib-links" fill="none" stroke="{}" stroke-width="{}">"#,
        style.palette.link.to_hex(),
        num(style.link_width)
    )?;
    for (link, a) in scene.links.iter().zip(links) {
        if a.opacity <= 0.0 || a.drawn <= 0.0 {
            continue;
        }
        let d = link.placed.path.to_svg();
        if a.drawn >= 1.0 {
            writeln!(
                out,
                r#"<path id="{}" d="{d}" opacity="{}"/>"#,
                link.key(),
                num(a.opacity)
            )?;
        } else {
            let len: f64 = link
                .placed
                .path
                .segments()
                .map(|s| s.arclen(ARCLEN_ACCURACY))
                .sum();
            writeln!(
                out,
                r#"<path id="{}" d="{d}" opacity="{}" stroke-dasharray="{} {}" stroke-dashoffset="{}"/>"#,
                link.key(),
                num(a.opacity),
                num(len),
                num(len),
                num(len * (1.0 - a.drawn))
            )?;
        }
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="fib-nodes">"#)?;
    for (node, a) in scene.nodes.iter().zip(nodes) {
        if a.is_invisible() {
            continue;
        }
        let pos = node.placed.position;
        writeln!(
            out,
            r#"<g id="{}" transform="translate({} {})" opacity="{}">"#,
            node.key(),
            num(pos.x),
            num(pos.y),
            num(a.opacity)
        )?;
        let r = style.node_radius * a.circle_scale;
        if r > 0.0 {
            let fill = if node.placed.is_leaf {
                style.palette.leaf
            } else {
                style.palette.internal
            };
            writeln!(out, r#"<circle r="{}" fill="{}"/>"#, num(r), fill.to_hex())?;
        }
        let size = style.font_size * a.label_scale;
        if style.show_labels && a.label_opacity > 0.0 && size > 0.0 {
            writeln!(
                out,
                r#"<text y="{}" font-size="{}" font-family="sans-serif" text-anchor="middle" fill="{}" opacity="{}">{}</text>"#,
                num(size * 0.35),
                num(size),
                style.palette.label.to_hex(),
                num(a.label_opacity),
                node.placed.value
            )?;
        }
        writeln!(out, "</g>")?;
    }
    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
