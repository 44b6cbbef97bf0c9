// File: crates/wealthflow-core/src/record.rs
// Summary: Time-series records and the ordered dataset that owns them.
// Notes:
// - A Dataset is always strictly ascending by key; construction rejects
//   anything else so downstream transforms never have to re-sort.

use crate::error::{ChartError, Result};

/// One row of a time-series fixture: an ordering key (year) plus named values.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub key: i32,
    fields: Vec<(String, f64)>,
}

impl Record {
    pub fn new<S: Into<String>>(key: i32, fields: impl IntoIterator<Item = (S, f64)>) -> Self {
        Self { key, fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect() }
    }

    /// Builder-style field insertion; replaces an existing field of the same name.
    pub fn with(mut self, field: impl Into<String>, value: f64) -> Self {
        let field = field.into();
        match self.fields.iter_mut().find(|(k, _)| *k == field) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((field, value)),
        }
        self
    }

    pub fn get(&self, field: &str) -> Option<f64> {
        self.fields.iter().find(|(k, _)| k == field).map(|&(_, v)| v)
    }

    /// Like [`Record::get`] but reports the missing field with this record's key.
    pub fn require(&self, field: &str) -> Result<f64> {
        self.get(field).ok_or_else(|| ChartError::FieldMissing { key: self.key, field: field.to_string() })
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }
}

/// Immutable, strictly ascending sequence of records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Validate ordering: keys must be strictly ascending (no duplicates).
    pub fn try_new(records: Vec<Record>) -> Result<Self> {
        for pair in records.windows(2) {
            if pair[1].key <= pair[0].key {
                return Err(ChartError::UnsortedRecords { previous: pair[0].key, key: pair[1].key });
            }
        }
        Ok(Self { records })
    }

    /// Parse CSV text with a header row; the `key_column` column holds the
    /// ordering key and every other column becomes a numeric field.
    pub fn from_csv(name: &'static str, text: &str, key_column: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(text.as_bytes());
        let headers = rdr.headers()?.iter().map(|h| h.to_string()).collect::<Vec<_>>();
        let key_idx = headers
            .iter()
            .position(|h| h == key_column)
            .ok_or_else(|| ChartError::Fixture { name, message: format!("missing key column '{key_column}'") })?;

        let mut records = Vec::new();
        for (row, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let raw_key = cell(&rec, key_idx, name, row)?;
            let key = raw_key
                .parse::<i32>()
                .map_err(|_| ChartError::Fixture { name, message: format!("row {row}: bad key '{raw_key}'") })?;
            let mut fields = Vec::with_capacity(headers.len().saturating_sub(1));
            for (i, h) in headers.iter().enumerate() {
                if i == key_idx {
                    continue;
                }
                let raw = cell(&rec, i, name, row)?;
                let v = raw
                    .parse::<f64>()
                    .map_err(|_| ChartError::Fixture { name, message: format!("row {row}: bad value '{raw}' for '{h}'") })?;
                fields.push((h.clone(), v));
            }
            records.push(Record::new(key, fields));
        }
        let ds = Self::try_new(records)?;
        tracing::debug!(fixture = name, rows = ds.len(), "loaded dataset");
        Ok(ds)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record with exactly this key.
    pub fn get(&self, key: i32) -> Option<&Record> {
        self.records.binary_search_by_key(&key, |r| r.key).ok().map(|i| &self.records[i])
    }

    /// First and last key, if any records exist.
    pub fn key_range(&self) -> Option<(i32, i32)> {
        Some((self.records.first()?.key, self.records.last()?.key))
    }

    /// Min/max over the named fields across all records.
    pub fn value_range(&self, fields: &[&str]) -> Result<Option<(f64, f64)>> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for r in &self.records {
            for f in fields {
                let v = r.require(f)?;
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        Ok(if lo <= hi { Some((lo, hi)) } else { None })
    }
}

fn cell<'r>(rec: &'r csv::StringRecord, i: usize, name: &'static str, row: usize) -> Result<&'r str> {
    rec.get(i).ok_or_else(|| ChartError::Fixture { name, message: format!("row {row}: short record") })
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
