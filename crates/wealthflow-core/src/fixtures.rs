// File: crates/wealthflow-core/src/fixtures.rs
// Summary: Built-in datasets and chart definitions, compiled in from data/*.csv.

use crate::allocate::AllocationTable;
use crate::chart::{LineChart, ReferenceLine, SeriesStyle, StackedAreaChart};
use crate::color::Color;
use crate::error::Result;
use crate::layout::{FlowDiagram, FlowStyle};
use crate::record::Dataset;
use crate::ticker::PoolComparison;
use crate::types::PlotFrame;

const WEALTH_FLOW_NODES: &str = include_str!("../data/wealth_flow_nodes.csv");
const WEALTH_FLOW_LINKS: &str = include_str!("../data/wealth_flow_links.csv");
const RECYCLING_NODES: &str = include_str!("../data/recycling_nodes.csv");
const RECYCLING_LINKS: &str = include_str!("../data/recycling_links.csv");
const DISTRIBUTION: &str = include_str!("../data/distribution.csv");
const SQUEEZE: &str = include_str!("../data/squeeze.csv");
const ALLOCATION: &str = include_str!("../data/allocation.csv");

/// First and last year covered by the time-series fixtures.
pub const YEARS: (f64, f64) = (1985.0, 2023.0);

/// Where everyday spending ends up: sources -> intermediaries -> holders.
pub fn wealth_flow() -> Result<FlowDiagram> {
    FlowDiagram::from_csv("wealth_flow", WEALTH_FLOW_NODES, WEALTH_FLOW_LINKS, FlowStyle::wealth_flow())
}

/// What accumulated wealth is actually spent on.
pub fn recycling() -> Result<FlowDiagram> {
    FlowDiagram::from_csv("recycling", RECYCLING_NODES, RECYCLING_LINKS, FlowStyle::recycling())
}

/// Share of total wealth by group: `bottom50, middle40, top10, top1`.
pub fn distribution() -> Result<Dataset> {
    Dataset::from_csv("distribution", DISTRIBUTION, "year")
}

/// Indices with 1985 = 100: `realWages, housePrices, stockPrices, bondPrices`.
pub fn squeeze() -> Result<Dataset> {
    Dataset::from_csv("squeeze", SQUEEZE, "year")
}

/// Monthly spending categories; fractions sum to 1.
pub fn allocation_table() -> Result<AllocationTable> {
    AllocationTable::from_csv("allocation", ALLOCATION, 1.0)
}

/// Bottom 50% vs top 1%, in pounds.
pub fn pools() -> PoolComparison {
    PoolComparison::new(300e9, 6_300e9)
}

pub fn divergence_chart() -> Result<StackedAreaChart> {
    Ok(StackedAreaChart {
        frame: PlotFrame::default(),
        x_domain: YEARS,
        y_domain: (0.0, 100.0),
        x_label: "Year".into(),
        y_label: "Share of Total Wealth (%)".into(),
        layers: vec![
            SeriesStyle::new("bottom50", "Bottom 50%", Color::from_rgb(0x10, 0xb9, 0x81)),
            SeriesStyle::new("middle40", "Middle 40%", Color::from_rgb(0xf5, 0x9e, 0x0b)),
            SeriesStyle::new("top10", "Top 10%", Color::from_rgb(0xef, 0x44, 0x44)),
        ],
        overlay: Some(SeriesStyle::new("top1", "Top 1%", Color::from_rgb(0x7c, 0x3a, 0xed)).width(4.0).dashed()),
        data: distribution()?,
    })
}

pub fn squeeze_chart() -> Result<LineChart> {
    Ok(LineChart {
        frame: PlotFrame::default(),
        x_domain: YEARS,
        y_domain: (0.0, 1000.0),
        x_label: "Year".into(),
        y_label: "Index (1985 = 100)".into(),
        lines: vec![
            SeriesStyle::new("realWages", "Real Wages", Color::from_rgb(0xef, 0x44, 0x44)).width(4.0),
            SeriesStyle::new("housePrices", "House Prices", Color::from_rgb(0xf5, 0x9e, 0x0b)).width(3.0),
            SeriesStyle::new("stockPrices", "Stock Prices", Color::from_rgb(0x8b, 0x5c, 0xf6)).width(3.0),
            SeriesStyle::new("bondPrices", "Bond Prices", Color::from_rgb(0x06, 0xb6, 0xd4)).width(3.0),
        ],
        reference: Some(ReferenceLine { value: 100.0, color: Color::from_rgb(0x94, 0xa3, 0xb8) }),
        marker_radius: 4.0,
        data: squeeze()?,
    })
}
