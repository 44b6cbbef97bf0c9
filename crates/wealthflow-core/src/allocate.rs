// File: crates/wealthflow-core/src/allocate.rs
// Summary: Income allocator: annual income -> monthly breakdown by category.
// Notes:
// - Every rule carries its own Destination tag. Aggregates ("to the wealthy",
//   "you keep") filter on that tag, so there is no second beneficiary list
//   that could drift out of sync with the rule table.

use std::str::FromStr;

use crate::color::Color;
use crate::error::{ChartError, Result};

/// Where a category's money ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Transferred to asset holders (rent, interest, margins).
    Upward,
    /// Spent in the local economy.
    Circulating,
    /// Kept by the earner.
    Retained,
}

impl FromStr for Destination {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upward" => Ok(Self::Upward),
            "circulating" => Ok(Self::Circulating),
            "retained" => Ok(Self::Retained),
            other => Err(ChartError::Fixture { name: "allocation", message: format!("unknown destination '{other}'") }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AllocationRule {
    pub category: String,
    /// Share of monthly income, in `[0, 1]`.
    pub fraction: f64,
    pub beneficiary: String,
    pub color: Color,
    pub destination: Destination,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownEntry {
    pub category: String,
    /// Monthly amount; never negative.
    pub amount: f64,
    pub fraction: f64,
    pub beneficiary: String,
    pub color: Color,
    pub destination: Destination,
}

/// Result of one allocation. Recomputed (not mutated) on every income change.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakdown {
    pub annual_income: f64,
    pub monthly: f64,
    pub entries: Vec<BreakdownEntry>,
}

impl Breakdown {
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    pub fn total_for(&self, destination: Destination) -> f64 {
        self.entries.iter().filter(|e| e.destination == destination).map(|e| e.amount).sum()
    }

    /// Monthly amount flowing to the wealthy.
    pub fn upward(&self) -> f64 {
        self.total_for(Destination::Upward)
    }

    /// Monthly amount the earner keeps.
    pub fn retained(&self) -> f64 {
        self.total_for(Destination::Retained)
    }

    /// `amount` as a percentage of monthly income (0 for zero income).
    pub fn percent_of_monthly(&self, amount: f64) -> f64 {
        if self.monthly > 0.0 { amount / self.monthly * 100.0 } else { 0.0 }
    }

    pub fn annual_upward(&self) -> f64 {
        self.upward() * 12.0
    }

    pub fn upward_over_years(&self, years: u32) -> f64 {
        self.annual_upward() * years as f64
    }
}

/// Validated rule table. Fractions sum to `total` (1.0 = full allocation).
#[derive(Clone, Debug, PartialEq)]
pub struct AllocationTable {
    rules: Vec<AllocationRule>,
    total: f64,
}

const FRACTION_TOLERANCE: f64 = 1e-9;

impl AllocationTable {
    pub fn try_new(rules: Vec<AllocationRule>, total: f64) -> Result<Self> {
        for r in &rules {
            if !r.fraction.is_finite() || !(0.0..=1.0).contains(&r.fraction) {
                return Err(ChartError::InvalidFraction { category: r.category.clone(), fraction: r.fraction });
            }
        }
        let actual = rules.iter().map(|r| r.fraction).sum::<f64>();
        if (actual - total).abs() > FRACTION_TOLERANCE {
            return Err(ChartError::AllocationMismatch { expected: total, actual });
        }
        Ok(Self { rules, total })
    }

    /// Parse `category,fraction,beneficiary,color,destination` rows.
    pub fn from_csv(name: &'static str, text: &str, total: f64) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(text.as_bytes());
        let mut rules = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let col = |i: usize| rec.get(i).unwrap_or("");
            let fraction = col(1)
                .parse::<f64>()
                .map_err(|_| ChartError::Fixture { name, message: format!("bad fraction '{}' for '{}'", col(1), col(0)) })?;
            rules.push(AllocationRule {
                category: col(0).to_string(),
                fraction,
                beneficiary: col(2).to_string(),
                color: Color::from_hex(col(3))?,
                destination: col(4).parse()?,
            });
        }
        Self::try_new(rules, total)
    }

    pub fn rules(&self) -> &[AllocationRule] {
        &self.rules
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Split `annual_income / 12` across the rules.
    pub fn allocate(&self, annual_income: f64) -> Result<Breakdown> {
        if !annual_income.is_finite() || annual_income < 0.0 {
            return Err(ChartError::InvalidIncome(annual_income));
        }
        let monthly = annual_income / 12.0;
        let entries = self
            .rules
            .iter()
            .map(|r| BreakdownEntry {
                category: r.category.clone(),
                amount: monthly * r.fraction,
                fraction: r.fraction,
                beneficiary: r.beneficiary.clone(),
                color: r.color,
                destination: r.destination,
            })
            .collect();
        tracing::debug!(annual_income, monthly, "allocated income");
        Ok(Breakdown { annual_income, monthly, entries })
    }
}

/// Bounds of the income input. Values are clamped and snapped before allocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IncomeRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl IncomeRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Nearest step from `min`, kept inside `[min, max]`. NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let v = value.max(self.min).min(self.max);
        if self.step <= 0.0 {
            return v;
        }
        let snapped = self.min + ((v - self.min) / self.step).round() * self.step;
        snapped.min(self.max)
    }
}

impl Default for IncomeRange {
    fn default() -> Self {
        Self::new(15_000.0, 150_000.0, 5_000.0)
    }
}
