// File: crates/wealthflow-core/src/chart.rs
// Summary: Time-series chart definitions and their plot geometry (areas, lines, axes).
// Notes:
// - Geometry is in plot-local coordinates: (0, 0) is the top-left of the plot
//   rect. Renderers translate by the frame insets.

use crate::axis::Axis;
use crate::color::Color;
use crate::curve::{area_path, monotone_x};
use crate::error::Result;
use crate::geometry::{Path, Point};
use crate::record::Dataset;
use crate::scale::LinearScale;
use crate::series::{project, project_mapped, Polyline};
use crate::stack::{layers, stack};
use crate::types::PlotFrame;

/// How one field is drawn and labelled.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesStyle {
    pub field: String,
    pub label: String,
    pub color: Color,
    pub stroke_width: f64,
    pub dashed: bool,
}

impl SeriesStyle {
    pub fn new(field: impl Into<String>, label: impl Into<String>, color: Color) -> Self {
        Self { field: field.into(), label: label.into(), color, stroke_width: 2.0, dashed: false }
    }

    pub fn width(mut self, w: f64) -> Self {
        self.stroke_width = w;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }
}

/// Horizontal guide at a fixed domain value.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceLine {
    pub value: f64,
    pub color: Color,
}

#[derive(Clone, Debug)]
pub struct AreaShape {
    pub style: SeriesStyle,
    pub path: Path,
}

#[derive(Clone, Debug)]
pub struct LineShape {
    pub style: SeriesStyle,
    pub path: Path,
    /// Projected samples, for markers.
    pub points: Vec<Point>,
}

impl LineShape {
    fn from_polyline(style: SeriesStyle, line: Polyline) -> Self {
        Self { path: monotone_x(&line.points), points: line.points, style }
    }
}

/// Stacked-area chart of shares with an optional overlay line.
#[derive(Clone, Debug)]
pub struct StackedAreaChart {
    pub frame: PlotFrame,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub x_label: String,
    pub y_label: String,
    /// Bottom to top.
    pub layers: Vec<SeriesStyle>,
    /// Drawn at `y_domain.1 - value`, i.e. measured down from the top.
    pub overlay: Option<SeriesStyle>,
    pub data: Dataset,
}

#[derive(Clone, Debug)]
pub struct StackedAreaGeometry {
    pub areas: Vec<AreaShape>,
    pub overlay: Option<LineShape>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl StackedAreaChart {
    /// Unchecked: a degenerate domain clamps to the plot edge so a
    /// single-sample chart still draws.
    pub fn x_scale(&self) -> LinearScale {
        LinearScale::new(self.x_domain, self.frame.x_range())
    }

    pub fn y_scale(&self) -> LinearScale {
        LinearScale::new(self.y_domain, self.frame.y_range())
    }

    pub fn geometry(&self) -> Result<StackedAreaGeometry> {
        let (x, y) = (self.x_scale(), self.y_scale());
        let fields = self.layers.iter().map(|s| s.field.as_str()).collect::<Vec<_>>();
        let stacked = stack(&self.data, &fields, 0.0)?;

        let areas = layers(&stacked)
            .into_iter()
            .zip(&self.layers)
            .map(|(layer, style)| {
                let xs = layer.points.iter().map(|&(k, _, _)| x.map(k as f64));
                let upper = xs.clone().zip(&layer.points).map(|(px, p)| Point::new(px, y.map(p.2))).collect::<Vec<_>>();
                let lower = xs.zip(&layer.points).map(|(px, p)| Point::new(px, y.map(p.1))).collect::<Vec<_>>();
                AreaShape { style: style.clone(), path: area_path(&upper, &lower) }
            })
            .collect();

        let top = self.y_domain.1;
        let overlay = match &self.overlay {
            Some(style) => {
                let line = project_mapped(&self.data, &style.field, &x, &y, |v| top - v)?;
                Some(LineShape::from_polyline(style.clone(), line))
            }
            None => None,
        };

        Ok(StackedAreaGeometry {
            areas,
            overlay,
            x_axis: Axis::years(self.x_label.clone(), x),
            y_axis: Axis::percent(self.y_label.clone(), y),
        })
    }
}

/// Multi-line comparison chart with markers and an optional reference line.
#[derive(Clone, Debug)]
pub struct LineChart {
    pub frame: PlotFrame,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub x_label: String,
    pub y_label: String,
    pub lines: Vec<SeriesStyle>,
    pub reference: Option<ReferenceLine>,
    pub marker_radius: f64,
    pub data: Dataset,
}

#[derive(Clone, Debug)]
pub struct LineChartGeometry {
    pub lines: Vec<LineShape>,
    /// Reference line and its plot-local y.
    pub reference: Option<(ReferenceLine, f64)>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl LineChart {
    pub fn x_scale(&self) -> LinearScale {
        LinearScale::new(self.x_domain, self.frame.x_range())
    }

    pub fn y_scale(&self) -> LinearScale {
        LinearScale::new(self.y_domain, self.frame.y_range())
    }

    pub fn geometry(&self) -> Result<LineChartGeometry> {
        let (x, y) = (self.x_scale(), self.y_scale());
        let lines = self
            .lines
            .iter()
            .map(|style| Ok(LineShape::from_polyline(style.clone(), project(&self.data, &style.field, &x, &y)?)))
            .collect::<Result<Vec<_>>>()?;
        let reference = self.reference.clone().map(|r| {
            let py = y.map(r.value);
            (r, py)
        });
        Ok(LineChartGeometry {
            lines,
            reference,
            x_axis: Axis::years(self.x_label.clone(), x),
            y_axis: Axis::plain(self.y_label.clone(), y),
        })
    }
}
