// File: crates/wealthflow-core/src/curve.rs
// Summary: Monotone-in-x cubic smoothing for line and area paths.
// Notes:
// - Fritsch-Carlson style tangents: the curve passes through every sample and
//   never overshoots between two samples, so a flat stretch stays flat and a
//   peak is never exaggerated.
// - Works for decreasing x too, which the lower edge of an area needs.

use crate::geometry::{Path, Point};

#[inline]
fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Tangent at `p1` from its two neighbours.
fn interior_tangent(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    if h0 == 0.0 || h1 == 0.0 || h0 + h1 == 0.0 {
        return 0.0;
    }
    let s0 = (p1.y - p0.y) / h0;
    let s1 = (p2.y - p1.y) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() { t } else { 0.0 }
}

/// Tangent at an end point, from the segment slope and the neighbouring tangent.
fn end_tangent(a: Point, b: Point, t: f64) -> f64 {
    let h = b.x - a.x;
    if h != 0.0 { (3.0 * (b.y - a.y) / h - t) / 2.0 } else { t }
}

fn tangents(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    let mut t = vec![0.0; n];
    for i in 1..n - 1 {
        t[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
    }
    t[0] = end_tangent(points[0], points[1], t[1]);
    t[n - 1] = end_tangent(points[n - 2], points[n - 1], t[n - 2]);
    t
}

/// Append `points` to `path`. When `connect` is true the first point is joined
/// with a line from the current point instead of starting a new subpath.
fn append_monotone(path: &mut Path, points: &[Point], connect: bool) {
    let Some(&first) = points.first() else { return };
    if connect {
        path.line_to(first);
    } else {
        path.move_to(first);
    }
    match points.len() {
        1 => {}
        2 => {
            path.line_to(points[1]);
        }
        _ => {
            let t = tangents(points);
            for i in 0..points.len() - 1 {
                let (a, b) = (points[i], points[i + 1]);
                let dx = (b.x - a.x) / 3.0;
                path.cubic_to(
                    Point::new(a.x + dx, a.y + dx * t[i]),
                    Point::new(b.x - dx, b.y - dx * t[i + 1]),
                    b,
                );
            }
        }
    }
}

/// Smooth open path through `points`.
pub fn monotone_x(points: &[Point]) -> Path {
    let mut path = Path::new();
    append_monotone(&mut path, points, false);
    path
}

/// Closed area between two edges sampled at the same x positions: the upper
/// edge left to right, then the lower edge right to left.
pub fn area_path(upper: &[Point], lower: &[Point]) -> Path {
    let mut path = Path::new();
    if upper.is_empty() {
        return path;
    }
    append_monotone(&mut path, upper, false);
    let reversed = lower.iter().rev().copied().collect::<Vec<_>>();
    append_monotone(&mut path, &reversed, true);
    path.close();
    path
}
