// File: crates/wealthflow-core/src/types.rs
// Summary: Shared frame configuration (viewBox sizes, margins).

use crate::geometry::Rect;

/// Default viewBox width for every chart.
pub const WIDTH: u32 = 1000;
/// Default viewBox height for the time-series charts.
pub const HEIGHT: u32 = 500;

/// Margins around the plot area, in viewBox units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same margin on every side.
    pub const fn uniform(m: u32) -> Self {
        Self::new(m, m, m, m)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Time-series charts leave room on the right for the legend.
    fn default() -> Self {
        Self::new(60, 150, 40, 60)
    }
}

/// Outer size plus margins; the plot area is what scales map into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotFrame {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
}

impl PlotFrame {
    pub const fn new(width: u32, height: u32, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    /// Plot width; zero when margins exceed the frame.
    pub fn plot_width(&self) -> f64 {
        self.width.saturating_sub(self.insets.hsum()) as f64
    }

    pub fn plot_height(&self) -> f64 {
        self.height.saturating_sub(self.insets.vsum()) as f64
    }

    /// Plot area in frame coordinates.
    pub fn plot_rect(&self) -> Rect {
        Rect::from_ltwh(self.insets.left as f64, self.insets.top as f64, self.plot_width(), self.plot_height())
    }

    /// Horizontal range in plot-local coordinates (left to right).
    pub fn x_range(&self) -> (f64, f64) {
        (0.0, self.plot_width())
    }

    /// Vertical range in plot-local coordinates, inverted so larger values sit higher.
    pub fn y_range(&self) -> (f64, f64) {
        (self.plot_height(), 0.0)
    }
}

impl Default for PlotFrame {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}
