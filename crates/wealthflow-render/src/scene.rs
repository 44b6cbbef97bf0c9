// File: crates/wealthflow-render/src/scene.rs
// Summary: Backend-neutral display list and the builders that lay out each chart kind.
// Notes:
// - Builders only place marks; they never compute data geometry. Connectors,
//   band paths, polylines and ticks all come from wealthflow-core.
// - Shapes inside a Group are relative to the group's offset.

use wealthflow_core::axis::Axis;
use wealthflow_core::chart::{LineChartGeometry, SeriesStyle, StackedAreaGeometry};
use wealthflow_core::layout::ResolvedDiagram;
use wealthflow_core::{Color, Path, PlotFrame, Point, Rect};

use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// On/off dash lengths.
    pub dash: Option<(f64, f64)>,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width, dash: None }
    }

    pub const fn dashed(self, on: f64, off: f64) -> Self {
        Self { dash: Some((on, off)), ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
    pub opacity: f64,
}

impl Style {
    pub const fn fill(color: Color) -> Self {
        Self { fill: Some(color), stroke: None, opacity: 1.0 }
    }

    pub const fn stroke(stroke: Stroke) -> Self {
        Self { fill: None, stroke: Some(stroke), opacity: 1.0 }
    }

    pub const fn with_stroke(self, stroke: Stroke) -> Self {
        Self { stroke: Some(stroke), ..self }
    }

    pub const fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self { fill: None, stroke: None, opacity: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub bold: bool,
    pub color: Color,
    pub anchor: Anchor,
    /// Center vertically on the anchor point instead of sitting on the baseline.
    pub middle: bool,
}

impl TextStyle {
    pub const fn new(size: f64, color: Color) -> Self {
        Self { size, bold: false, color, anchor: Anchor::Start, middle: false }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn anchor(self, anchor: Anchor) -> Self {
        Self { anchor, ..self }
    }

    pub const fn middle(self) -> Self {
        Self { middle: true, ..self }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Group { offset: Point, shapes: Vec<Shape> },
    Rect { rect: Rect, radius: f64, style: Style },
    Path { path: Path, style: Style },
    Circle { center: Point, radius: f64, style: Style },
    Line { from: Point, to: Point, stroke: Stroke, opacity: f64 },
    /// `rotation` is in degrees, about `at`.
    Text { at: Point, text: String, style: TextStyle, rotation: f64 },
}

impl Shape {
    pub fn group(offset: Point, shapes: Vec<Shape>) -> Self {
        Shape::Group { offset, shapes }
    }

    pub fn line(from: Point, to: Point, stroke: Stroke) -> Self {
        Shape::Line { from, to, stroke, opacity: 1.0 }
    }

    pub fn text(at: Point, text: impl Into<String>, style: TextStyle) -> Self {
        Shape::Text { at, text: text.into(), style, rotation: 0.0 }
    }

    /// Number of leaf shapes, descending into groups.
    pub fn count(&self) -> usize {
        match self {
            Shape::Group { shapes, .. } => shapes.iter().map(Shape::count).sum(),
            _ => 1,
        }
    }
}

/// A complete drawing: canvas size, background and shapes in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub font_family: &'static str,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(width: u32, height: u32, theme: &Theme) -> Self {
        Self { width, height, background: theme.background, font_family: theme.font_family, shapes: Vec::new() }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.iter().map(Shape::count).sum()
    }
}

const LINK_LABEL_SIZE: f64 = 12.0;
const NODE_OUTLINE: f64 = 3.0;

/// Flow diagram: connectors first, then link labels, then node boxes on top.
pub fn flow_scene(diagram: &ResolvedDiagram, theme: &Theme) -> Scene {
    let style = &diagram.style;
    let mut scene = Scene::new(style.width, style.height, theme);

    let links = diagram
        .links
        .iter()
        .map(|l| Shape::Path {
            path: l.connector.to_path(),
            style: Style::stroke(Stroke::new(l.color, l.stroke_width)).with_opacity(style.link_opacity),
        })
        .collect();
    scene.push(Shape::group(Point::default(), links));

    let label_style = TextStyle::new(LINK_LABEL_SIZE, theme.muted_text).bold().anchor(Anchor::Middle);
    let labels = diagram
        .links
        .iter()
        .filter_map(|l| l.label.as_ref())
        .map(|label| Shape::text(label.anchor, label.text.clone(), label_style))
        .collect();
    scene.push(Shape::group(Point::default(), labels));

    let text_style = TextStyle::new(style.font_size, theme.node_text).bold().anchor(Anchor::Middle).middle();
    for node in &diagram.nodes {
        let mut shapes = vec![Shape::Rect {
            rect: Rect::centered(Point::default(), node.rect.width(), node.rect.height()),
            radius: style.corner_radius,
            style: Style::fill(node.color).with_stroke(Stroke::new(theme.outline, NODE_OUTLINE)),
        }];
        shapes.extend(node.lines.iter().map(|line| Shape::text(Point::new(0.0, line.dy), line.text.clone(), text_style)));
        scene.push(Shape::group(node.rect.center(), shapes));
    }

    tracing::debug!(nodes = diagram.nodes.len(), links = diagram.links.len(), "built flow scene");
    scene
}

const TICK_SIZE: f64 = 6.0;
const TICK_LABEL_SIZE: f64 = 14.0;
const TITLE_SIZE: f64 = 16.0;
const LEGEND_SIZE: f64 = 13.0;
const LEGEND_ROW: f64 = 30.0;
const LEGEND_SWATCH: f64 = 25.0;
const LEGEND_WIDTH: f64 = 140.0;

/// Bottom and left axes with tick marks, labels and titles, in plot-local coordinates.
fn axes(x: &Axis, y: &Axis, width: f64, height: f64, theme: &Theme) -> Vec<Shape> {
    let line = Stroke::new(theme.axis_line, 1.0);
    let tick_text = TextStyle::new(TICK_LABEL_SIZE, theme.text).bold();
    let title = TextStyle::new(TITLE_SIZE, theme.text).bold().anchor(Anchor::Middle);
    let mut out = vec![
        Shape::line(Point::new(0.0, height), Point::new(width, height), line),
        Shape::line(Point::new(0.0, 0.0), Point::new(0.0, height), line),
    ];
    for t in &x.ticks {
        out.push(Shape::line(Point::new(t.position, height), Point::new(t.position, height + TICK_SIZE), line));
        out.push(Shape::text(Point::new(t.position, height + 20.0), t.label.clone(), tick_text.anchor(Anchor::Middle)));
    }
    for t in &y.ticks {
        out.push(Shape::line(Point::new(-TICK_SIZE, t.position), Point::new(0.0, t.position), line));
        out.push(Shape::text(Point::new(-9.0, t.position + 5.0), t.label.clone(), tick_text.anchor(Anchor::End)));
    }
    out.push(Shape::text(Point::new(width / 2.0, height + 45.0), x.label.clone(), title));
    out.push(Shape::Text { at: Point::new(-45.0, height / 2.0), text: y.label.clone(), style: title, rotation: -90.0 });
    out
}

/// Faint horizontal rules at each y tick.
fn grid(y: &Axis, width: f64, theme: &Theme) -> Vec<Shape> {
    y.ticks
        .iter()
        .map(|t| Shape::Line {
            from: Point::new(0.0, t.position),
            to: Point::new(width, t.position),
            stroke: Stroke::new(theme.grid, 1.0),
            opacity: 0.1,
        })
        .collect()
}

enum Swatch {
    Block,
    Line { width: f64, dashed: bool },
}

fn legend(entries: &[(&SeriesStyle, Swatch)], frame: &PlotFrame, theme: &Theme) -> Shape {
    let text = TextStyle::new(LEGEND_SIZE, theme.text).bold();
    let rows = entries
        .iter()
        .enumerate()
        .map(|(i, (series, swatch))| {
            let mark = match *swatch {
                Swatch::Block => Shape::Rect {
                    rect: Rect::from_ltwh(0.0, -6.0, LEGEND_SWATCH, 12.0),
                    radius: 0.0,
                    style: Style::fill(series.color),
                },
                Swatch::Line { width, dashed } => {
                    let stroke = Stroke::new(series.color, width);
                    let stroke = if dashed { stroke.dashed(4.0, 2.0) } else { stroke };
                    Shape::line(Point::new(0.0, 0.0), Point::new(LEGEND_SWATCH, 0.0), stroke)
                }
            };
            let label = Shape::text(Point::new(32.0, 4.0), series.label.clone(), text);
            Shape::group(Point::new(0.0, i as f64 * LEGEND_ROW), vec![mark, label])
        })
        .collect();
    Shape::group(Point::new(frame.width as f64 - LEGEND_WIDTH, frame.insets.top as f64), rows)
}

fn plot_origin(frame: &PlotFrame) -> Point {
    let r = frame.plot_rect();
    Point::new(r.left, r.top)
}

/// Stacked shares with the dashed overlay line and a legend (overlay first, then bands top-down).
pub fn stacked_area_scene(g: &StackedAreaGeometry, frame: &PlotFrame, theme: &Theme) -> Scene {
    let mut scene = Scene::new(frame.width, frame.height, theme);
    let (w, h) = (frame.plot_width(), frame.plot_height());

    let mut plot = g
        .areas
        .iter()
        .map(|a| Shape::Path {
            path: a.path.clone(),
            style: Style::fill(a.style.color).with_stroke(Stroke::new(theme.outline, 2.0)).with_opacity(0.8),
        })
        .collect::<Vec<_>>();
    if let Some(line) = &g.overlay {
        let mut stroke = Stroke::new(line.style.color, line.style.stroke_width);
        if line.style.dashed {
            stroke = stroke.dashed(8.0, 4.0);
        }
        plot.push(Shape::Path { path: line.path.clone(), style: Style::stroke(stroke) });
    }
    plot.extend(axes(&g.x_axis, &g.y_axis, w, h, theme));
    scene.push(Shape::group(plot_origin(frame), plot));

    let mut entries = Vec::new();
    if let Some(line) = &g.overlay {
        entries.push((&line.style, Swatch::Line { width: 3.0, dashed: line.style.dashed }));
    }
    entries.extend(g.areas.iter().rev().map(|a| (&a.style, Swatch::Block)));
    scene.push(legend(&entries, frame, theme));

    tracing::debug!(areas = g.areas.len(), "built stacked area scene");
    scene
}

/// Comparison lines with sample markers, a dashed reference rule and a legend.
pub fn line_chart_scene(g: &LineChartGeometry, frame: &PlotFrame, marker_radius: f64, theme: &Theme) -> Scene {
    let mut scene = Scene::new(frame.width, frame.height, theme);
    let (w, h) = (frame.plot_width(), frame.plot_height());

    let mut plot = grid(&g.y_axis, w, theme);
    if let Some((reference, y)) = &g.reference {
        plot.push(Shape::Line {
            from: Point::new(0.0, *y),
            to: Point::new(w, *y),
            stroke: Stroke::new(reference.color, 2.0).dashed(5.0, 5.0),
            opacity: 0.5,
        });
    }
    for line in &g.lines {
        let mut stroke = Stroke::new(line.style.color, line.style.stroke_width);
        if line.style.dashed {
            stroke = stroke.dashed(8.0, 4.0);
        }
        plot.push(Shape::Path { path: line.path.clone(), style: Style::stroke(stroke).with_opacity(0.9) });
    }
    for line in &g.lines {
        plot.extend(line.points.iter().map(|&p| Shape::Circle {
            center: p,
            radius: marker_radius,
            style: Style::fill(line.style.color).with_stroke(Stroke::new(theme.outline, 2.0)),
        }));
    }
    plot.extend(axes(&g.x_axis, &g.y_axis, w, h, theme));
    scene.push(Shape::group(plot_origin(frame), plot));

    let entries = g
        .lines
        .iter()
        .map(|l| (&l.style, Swatch::Line { width: l.style.stroke_width, dashed: l.style.dashed }))
        .collect::<Vec<_>>();
    scene.push(legend(&entries, frame, theme));

    tracing::debug!(lines = g.lines.len(), "built line chart scene");
    scene
}
