// File: crates/wealthflow-render/src/png.rs
// Summary: Rasterize a Scene to PNG using a Skia CPU raster surface.

use skia_safe as skia;

use wealthflow_core::geometry::PathSegment;
use wealthflow_core::{Color, Path};

use crate::error::{RenderError, Result};
use crate::scene::{Anchor, Scene, Shape, Stroke, Style, TextStyle};

fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn sk_point(p: wealthflow_core::Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn sk_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for seg in &path.segments {
        match *seg {
            PathSegment::MoveTo(p) => {
                out.move_to(sk_point(p));
            }
            PathSegment::LineTo(p) => {
                out.line_to(sk_point(p));
            }
            PathSegment::CubicTo(a, b, p) => {
                out.cubic_to(sk_point(a), sk_point(b), sk_point(p));
            }
            PathSegment::Close => {
                out.close();
            }
        }
    }
    out
}

fn fill_paint(color: Color, opacity: f64) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(sk_color(color));
    paint.set_alpha_f(color.opacity() as f32 * opacity as f32);
    paint
}

fn stroke_paint(stroke: &Stroke, opacity: f64) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width as f32);
    paint.set_color(sk_color(stroke.color));
    paint.set_alpha_f(stroke.color.opacity() as f32 * opacity as f32);
    if let Some((on, off)) = stroke.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[on as f32, off as f32], 0.0));
    }
    paint
}

/// Fill first, then stroke, matching SVG paint order.
fn paints(style: &Style) -> Vec<skia::Paint> {
    let mut out = Vec::with_capacity(2);
    if let Some(fill) = style.fill {
        out.push(fill_paint(fill, style.opacity));
    }
    if let Some(stroke) = &style.stroke {
        out.push(stroke_paint(stroke, style.opacity));
    }
    out
}

/// Font lookup with a system fallback.
struct Fonts {
    mgr: skia::FontMgr,
}

impl Fonts {
    fn new() -> Self {
        Self { mgr: skia::FontMgr::default() }
    }

    fn font(&self, style: &TextStyle) -> skia::Font {
        let weight = if style.bold { skia::FontStyle::bold() } else { skia::FontStyle::normal() };
        match self.mgr.match_family_style("sans-serif", weight) {
            Some(typeface) => skia::Font::from_typeface(typeface, style.size as f32),
            None => {
                let mut font = skia::Font::default();
                font.set_size(style.size as f32);
                font
            }
        }
    }
}

fn draw_text(canvas: &skia::Canvas, fonts: &Fonts, at: skia::Point, text: &str, style: &TextStyle) {
    let font = fonts.font(style);
    let paint = fill_paint(style.color, 1.0);
    let (width, _) = font.measure_str(text, Some(&paint));
    let dx = match style.anchor {
        Anchor::Start => 0.0,
        Anchor::Middle => -width / 2.0,
        Anchor::End => -width,
    };
    // Baseline sits roughly a third of the size below the visual middle.
    let dy = if style.middle { style.size as f32 * 0.35 } else { 0.0 };
    canvas.draw_str(text, (at.x + dx, at.y + dy), &font, &paint);
}

fn draw_shape(canvas: &skia::Canvas, fonts: &Fonts, shape: &Shape) {
    match shape {
        Shape::Group { offset, shapes } => {
            canvas.save();
            canvas.translate(sk_point(*offset));
            for s in shapes {
                draw_shape(canvas, fonts, s);
            }
            canvas.restore();
        }
        Shape::Rect { rect, radius, style } => {
            let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
            let rrect = skia::RRect::new_rect_xy(r, *radius as f32, *radius as f32);
            for paint in paints(style) {
                canvas.draw_rrect(&rrect, &paint);
            }
        }
        Shape::Path { path, style } => {
            let p = sk_path(path);
            for paint in paints(style) {
                canvas.draw_path(&p, &paint);
            }
        }
        Shape::Circle { center, radius, style } => {
            for paint in paints(style) {
                canvas.draw_circle(sk_point(*center), *radius as f32, &paint);
            }
        }
        Shape::Line { from, to, stroke, opacity } => {
            canvas.draw_line(sk_point(*from), sk_point(*to), &stroke_paint(stroke, *opacity));
        }
        Shape::Text { at, text, style, rotation } => {
            let p = sk_point(*at);
            if *rotation != 0.0 {
                canvas.save();
                canvas.rotate(*rotation as f32, Some(p));
                draw_text(canvas, fonts, p, text, style);
                canvas.restore();
            } else {
                draw_text(canvas, fonts, p, text, style);
            }
        }
    }
}

/// Render `scene` to PNG bytes.
pub fn render_png(scene: &Scene) -> Result<Vec<u8>> {
    let (width, height) = (scene.width, scene.height);
    let mut surface = skia::surfaces::raster_n32_premul((width as i32, height as i32))
        .ok_or(RenderError::Surface { width, height })?;
    let canvas = surface.canvas();
    canvas.clear(sk_color(scene.background));

    let fonts = Fonts::new();
    for shape in &scene.shapes {
        draw_shape(canvas, &fonts, shape);
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image.encode_to_data(skia::EncodedImageFormat::PNG).ok_or(RenderError::Encode)?;
    tracing::debug!(width, height, bytes = data.len(), "encoded png");
    Ok(data.as_bytes().to_vec())
}
