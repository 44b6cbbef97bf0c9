// File: crates/wealthflow-core/src/axis.rs
// Summary: Axis model with "nice" tick generation and tick labels.

use crate::scale::LinearScale;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Integer tick bounds and increment. A negative increment means "divide by
/// `-inc`", which keeps fractional steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = (start * k).round();
        i2 = (stop * k).round();
        if i1 / k < start { i1 += 1.0; }
        if i2 / k > stop { i2 -= 1.0; }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = (start / k).round();
        i2 = (stop / k).round();
        if i1 * k < start { i1 += 1.0; }
        if i2 * k > stop { i2 -= 1.0; }
        inc = k;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Roughly `count` round-numbered ticks covering `[start, stop]`, with steps
/// of 1, 2 or 5 times a power of ten. Returned ascending.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if start < stop { (start, stop) } else { (stop, start) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if i2 < i1 || !inc.is_finite() {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Position in plot-local coordinates.
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub scale: LinearScale,
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn new(label: impl Into<String>, scale: LinearScale, count: usize, format: impl Fn(f64) -> String) -> Self {
        let (d0, d1) = scale.domain();
        let ticks = nice_ticks(d0, d1, count)
            .into_iter()
            .map(|v| Tick { value: v, position: scale.map(v), label: format(v) })
            .collect();
        Self { label: label.into(), scale, ticks }
    }

    /// Year axis: integer labels, about eight ticks.
    pub fn years(label: impl Into<String>, scale: LinearScale) -> Self {
        Self::new(label, scale, 8, |v| format!("{}", v.round() as i64))
    }

    /// Percentage axis: `40%`.
    pub fn percent(label: impl Into<String>, scale: LinearScale) -> Self {
        Self::new(label, scale, 10, |v| format!("{}%", trim_number(v)))
    }

    /// Plain numeric axis.
    pub fn plain(label: impl Into<String>, scale: LinearScale) -> Self {
        Self::new(label, scale, 10, trim_number)
    }
}

fn trim_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
