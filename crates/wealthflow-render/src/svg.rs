// File: crates/wealthflow-render/src/svg.rs
// Summary: Serialize a Scene to a standalone SVG document.
// Output is deterministic (fixed attribute order, compact numbers) so it can be snapshot-tested.

use std::fmt::Write as _;

use wealthflow_core::geometry::coord;
use wealthflow_core::Color;

use crate::scene::{Anchor, Scene, Shape, Stroke, Style};

const INDENT: &str = "  ";

pub fn to_svg(scene: &Scene) -> String {
    let mut out = String::with_capacity(4096);
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" font-family="{font}">"#,
        w = scene.width,
        h = scene.height,
        font = escape(scene.font_family),
    );
    let _ = writeln!(out, r#"{INDENT}<rect width="{}" height="{}"{}/>"#, scene.width, scene.height, fill_attrs(Some(scene.background)));
    for shape in &scene.shapes {
        write_shape(&mut out, shape, 1);
    }
    out.push_str("</svg>\n");
    out
}

fn write_shape(out: &mut String, shape: &Shape, depth: usize) {
    let pad = INDENT.repeat(depth);
    let _ = match shape {
        Shape::Group { offset, shapes } => {
            if offset.x == 0.0 && offset.y == 0.0 {
                let _ = writeln!(out, "{pad}<g>");
            } else {
                let _ = writeln!(out, r#"{pad}<g transform="translate({},{})">"#, coord(offset.x), coord(offset.y));
            }
            for s in shapes {
                write_shape(out, s, depth + 1);
            }
            writeln!(out, "{pad}</g>")
        }
        Shape::Rect { rect, radius, style } => {
            let rx = if *radius > 0.0 { format!(r#" rx="{}""#, coord(*radius)) } else { String::new() };
            writeln!(
                out,
                r#"{pad}<rect x="{}" y="{}" width="{}" height="{}"{rx}{}/>"#,
                coord(rect.left),
                coord(rect.top),
                coord(rect.width()),
                coord(rect.height()),
                style_attrs(style),
            )
        }
        Shape::Path { path, style } => {
            writeln!(out, r#"{pad}<path d="{}"{}/>"#, path.to_svg_data(), style_attrs(style))
        }
        Shape::Circle { center, radius, style } => writeln!(
            out,
            r#"{pad}<circle cx="{}" cy="{}" r="{}"{}/>"#,
            coord(center.x),
            coord(center.y),
            coord(*radius),
            style_attrs(style),
        ),
        Shape::Line { from, to, stroke, opacity } => writeln!(
            out,
            r#"{pad}<line x1="{}" y1="{}" x2="{}" y2="{}"{}{}/>"#,
            coord(from.x),
            coord(from.y),
            coord(to.x),
            coord(to.y),
            stroke_attrs(stroke),
            opacity_attr(*opacity),
        ),
        Shape::Text { at, text, style, rotation } => {
            let mut attrs = format!(r#" x="{}" y="{}""#, coord(at.x), coord(at.y));
            match style.anchor {
                Anchor::Start => {}
                Anchor::Middle => attrs.push_str(r#" text-anchor="middle""#),
                Anchor::End => attrs.push_str(r#" text-anchor="end""#),
            }
            if style.middle {
                attrs.push_str(r#" dominant-baseline="middle""#);
            }
            let _ = write!(attrs, r#" font-size="{}""#, coord(style.size));
            if style.bold {
                attrs.push_str(r#" font-weight="700""#);
            }
            attrs.push_str(&fill_attrs(Some(style.color)));
            if *rotation != 0.0 {
                let _ = write!(attrs, r#" transform="rotate({} {} {})""#, coord(*rotation), coord(at.x), coord(at.y));
            }
            writeln!(out, "{pad}<text{attrs}>{}</text>", escape(text))
        }
    };
}

fn fill_attrs(fill: Option<Color>) -> String {
    match fill {
        None => r#" fill="none""#.to_string(),
        Some(c) if c.a < 255 => format!(r#" fill="{c}" fill-opacity="{}""#, coord(c.opacity())),
        Some(c) => format!(r#" fill="{c}""#),
    }
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut s = format!(r#" stroke="{}" stroke-width="{}""#, stroke.color, coord(stroke.width));
    if stroke.color.a < 255 {
        let _ = write!(s, r#" stroke-opacity="{}""#, coord(stroke.color.opacity()));
    }
    if let Some((on, off)) = stroke.dash {
        let _ = write!(s, r#" stroke-dasharray="{},{}""#, coord(on), coord(off));
    }
    s
}

fn opacity_attr(opacity: f64) -> String {
    if opacity < 1.0 { format!(r#" opacity="{}""#, coord(opacity)) } else { String::new() }
}

fn style_attrs(style: &Style) -> String {
    let mut s = fill_attrs(style.fill);
    if let Some(stroke) = &style.stroke {
        s.push_str(&stroke_attrs(stroke));
    }
    s.push_str(&opacity_attr(style.opacity));
    s
}

/// Escape text and attribute content.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
