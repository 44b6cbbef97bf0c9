// File: crates/wealthflow-core/src/series.rs
// Summary: Series projection: record fields -> polylines in plot coordinates.
// Notes:
// - Output order always equals record order. Datasets are ascending by key,
//   so x-coordinates come out strictly increasing for an increasing x scale.

use crate::error::Result;
use crate::geometry::Point;
use crate::record::Record;
use crate::scale::LinearScale;

/// One projected field.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub field: String,
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Project `field` of every record: x from the record key, y from the value.
/// A record lacking the field fails the whole projection.
pub fn project<'a, I>(records: I, field: &str, x: &LinearScale, y: &LinearScale) -> Result<Polyline>
where
    I: IntoIterator<Item = &'a Record>,
{
    project_mapped(records, field, x, y, |v| v)
}

/// Like [`project`], passing each value through `f` before scaling
/// (e.g. `|v| 100.0 - v` to draw a share from the top of a 0..100 stack).
pub fn project_mapped<'a, I, F>(records: I, field: &str, x: &LinearScale, y: &LinearScale, f: F) -> Result<Polyline>
where
    I: IntoIterator<Item = &'a Record>,
    F: Fn(f64) -> f64,
{
    let points = records
        .into_iter()
        .map(|r| Ok(Point::new(x.map(r.key as f64), y.map(f(r.require(field)?)))))
        .collect::<Result<Vec<_>>>()?;
    Ok(Polyline { field: field.to_string(), points })
}

/// Project several fields, one polyline each, in the order given.
pub fn project_all(records: &[Record], fields: &[&str], x: &LinearScale, y: &LinearScale) -> Result<Vec<Polyline>> {
    let out = fields.iter().map(|f| project(records, f, x, y)).collect::<Result<Vec<_>>>()?;
    tracing::debug!(fields = fields.len(), records = records.len(), "projected series");
    Ok(out)
}
