// File: crates/wealthflow-core/src/lib.rs
// Summary: Core library entry point; chart data transforms, income allocator, transfer ticker.

pub mod error;
pub mod scale;
pub mod geometry;
pub mod color;
pub mod types;
pub mod record;
pub mod stack;
pub mod series;
pub mod curve;
pub mod axis;
pub mod layout;
pub mod chart;
pub mod allocate;
pub mod ticker;
pub mod format;
pub mod fixtures;

pub use error::{ChartError, Result};
pub use scale::LinearScale;
pub use geometry::{Path, PathSegment, Point, Rect};
pub use color::Color;
pub use types::{Insets, PlotFrame};
pub use record::{Dataset, Record};
pub use stack::{stack, Band, StackedRecord};
pub use series::{project, project_all, project_mapped, Polyline};
pub use curve::{area_path, monotone_x};
pub use axis::{nice_ticks, Axis, Tick};
pub use layout::{connector, Connector, FlowDiagram, FlowStyle, Link, Node, ResolvedDiagram};
pub use chart::{LineChart, SeriesStyle, StackedAreaChart};
pub use allocate::{AllocationRule, AllocationTable, Breakdown, Destination, IncomeRange};
pub use ticker::{PoolComparison, Ticker, TickerConfig, TransferAccumulator};
pub use format::{format_currency, CurrencyFormat};
