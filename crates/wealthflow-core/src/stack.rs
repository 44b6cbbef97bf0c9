// File: crates/wealthflow-core/src/stack.rs
// Summary: Stacked-area aggregation (cumulative bands per record, declared key order).

use crate::error::Result;
use crate::record::Record;

/// One category's vertical slice at one record: `[lower, upper]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Band {
    pub field: String,
    pub lower: f64,
    pub upper: f64,
}

impl Band {
    pub fn thickness(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Bands for a single record, bottom to top in declared key order.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedRecord {
    pub key: i32,
    pub bands: Vec<Band>,
}

impl StackedRecord {
    /// Upper bound of the top band, or `None` when no keys were stacked.
    pub fn top(&self) -> Option<f64> {
        self.bands.last().map(|b| b.upper)
    }
}

/// Stack `fields` for every record, starting each record at `baseline`.
///
/// Key order is part of the contract: the first field is drawn at the bottom.
/// Bands are contiguous: `bands[i].upper == bands[i + 1].lower`. An empty
/// `fields` slice yields records with no bands.
pub fn stack<'a, I>(records: I, fields: &[&str], baseline: f64) -> Result<Vec<StackedRecord>>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut out = Vec::new();
    for r in records {
        let mut running = baseline;
        let mut bands = Vec::with_capacity(fields.len());
        for &f in fields {
            let v = r.require(f)?;
            bands.push(Band { field: f.to_string(), lower: running, upper: running + v });
            running += v;
        }
        out.push(StackedRecord { key: r.key, bands });
    }
    tracing::debug!(records = out.len(), fields = fields.len(), baseline, "stacked records");
    Ok(out)
}

/// A stacked category across all records: the shape an area renderer consumes.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub field: String,
    /// `(key, lower, upper)` in record order.
    pub points: Vec<(i32, f64, f64)>,
}

/// Transpose per-record bands into per-field layers, preserving stacking order.
pub fn layers(stacked: &[StackedRecord]) -> Vec<Layer> {
    let Some(first) = stacked.first() else { return Vec::new() };
    first
        .bands
        .iter()
        .enumerate()
        .map(|(i, band)| Layer {
            field: band.field.clone(),
            points: stacked
                .iter()
                .filter_map(|s| s.bands.get(i).map(|b| (s.key, b.lower, b.upper)))
                .collect(),
        })
        .collect()
}
