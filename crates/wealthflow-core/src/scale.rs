// File: crates/wealthflow-core/src/scale.rs
// Summary: Linear domain -> range mapping used by every chart transform.

use crate::error::{ChartError, Result};

/// Domain coordinate (e.g., year or share of wealth).
pub type Value = f64;
/// Range coordinate (e.g., pixels inside the plot rect).
pub type Position = f64;

/// Linear scale mapping `[domain_min, domain_max]` onto `[range_min, range_max]`.
///
/// Ranges may be inverted (`range_min > range_max`), which is how the value
/// axis puts larger values higher on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain_min: Value,
    pub domain_max: Value,
    pub range_min: Position,
    pub range_max: Position,
}

impl LinearScale {
    /// Build a scale, rejecting a degenerate or non-finite domain.
    pub fn try_new(domain: (Value, Value), range: (Position, Position)) -> Result<Self> {
        let (d0, d1) = domain;
        if !d0.is_finite() || !d1.is_finite() || d0 == d1 {
            return Err(ChartError::Domain { min: d0, max: d1 });
        }
        Ok(Self::new(domain, range))
    }

    /// Build a scale without validation. A degenerate domain maps every value
    /// to `range_min`; see [`LinearScale::map`].
    pub const fn new(domain: (Value, Value), range: (Position, Position)) -> Self {
        Self { domain_min: domain.0, domain_max: domain.1, range_min: range.0, range_max: range.1 }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.domain_max == self.domain_min
    }

    pub fn domain(&self) -> (Value, Value) {
        (self.domain_min, self.domain_max)
    }

    pub fn range(&self) -> (Position, Position) {
        (self.range_min, self.range_max)
    }

    /// Map a domain value to a range position. Clamps to `range_min` when the
    /// domain is degenerate so a chart still renders something.
    pub fn map(&self, v: Value) -> Position {
        if self.is_degenerate() {
            tracing::warn!(domain = self.domain_min, "degenerate scale domain, clamping to range_min");
            return self.range_min;
        }
        let t = (v - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    /// Strict variant of [`LinearScale::map`].
    pub fn try_map(&self, v: Value) -> Result<Position> {
        if self.is_degenerate() {
            return Err(ChartError::Domain { min: self.domain_min, max: self.domain_max });
        }
        Ok(self.map(v))
    }

    /// Inverse of [`LinearScale::map`]: `unmap(map(v)) == v` for a
    /// non-degenerate scale, up to floating error.
    pub fn unmap(&self, p: Position) -> Value {
        let span = self.range_max - self.range_min;
        if span == 0.0 || self.is_degenerate() {
            return self.domain_min;
        }
        let t = (p - self.range_min) / span;
        self.domain_min + t * (self.domain_max - self.domain_min)
    }
}

/// One-shot linear interpolation; clamps to `range_min` on a degenerate domain.
pub fn map(value: Value, domain_min: Value, domain_max: Value, range_min: Position, range_max: Position) -> Position {
    LinearScale::new((domain_min, domain_max), (range_min, range_max)).map(value)
}

/// One-shot inverse of [`map`].
pub fn unmap(position: Position, domain_min: Value, domain_max: Value, range_min: Position, range_max: Position) -> Value {
    LinearScale::new((domain_min, domain_max), (range_min, range_max)).unmap(position)
}
