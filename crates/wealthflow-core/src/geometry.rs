// File: crates/wealthflow-core/src/geometry.rs
// Summary: Lightweight geometry types emitted to the renderer (points, rects, paths).

use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    /// Rect of `width` x `height` centered on `center`.
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Self::from_ltwh(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic bezier: two control points then the end point.
    CubicTo(Point, Point, Point),
    Close,
}

/// Renderer-agnostic path. Segments are kept in drawing order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.segments.push(PathSegment::LineTo(p));
        self
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, end: Point) -> &mut Self {
        self.segments.push(PathSegment::CubicTo(c1, c2, end));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(PathSegment::Close);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last point reached by the path, if any.
    pub fn current_point(&self) -> Option<Point> {
        self.segments.iter().rev().find_map(|s| match *s {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) | PathSegment::CubicTo(_, _, p) => Some(p),
            PathSegment::Close => None,
        })
    }

    /// SVG path data, e.g. `M 100,150 C 240,150 240,100 320,100`.
    pub fn to_svg_data(&self) -> String {
        let mut out = String::new();
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = match *seg {
                PathSegment::MoveTo(p) => write!(out, "M {},{}", coord(p.x), coord(p.y)),
                PathSegment::LineTo(p) => write!(out, "L {},{}", coord(p.x), coord(p.y)),
                PathSegment::CubicTo(a, b, p) => write!(
                    out,
                    "C {},{} {},{} {},{}",
                    coord(a.x), coord(a.y), coord(b.x), coord(b.y), coord(p.x), coord(p.y)
                ),
                PathSegment::Close => write!(out, "Z"),
            };
        }
        out
    }
}

/// Compact number for path data and SVG attributes: integers print bare,
/// others keep at most 3 decimals.
pub fn coord(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.3}", v);
        match s.trim_end_matches('0').trim_end_matches('.') {
            "-0" => "0".to_string(),
            t => t.to_string(),
        }
    }
}
