// File: crates/wealthflow-core/src/format.rs
// Summary: Unit-suffixed currency strings (£1.578B, £2.50M, £18,264).

use num_format::{Locale, ToFormattedString as _};

/// One magnitude branch: values `>= threshold` are divided by `threshold`
/// and suffixed with `suffix`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tier {
    pub threshold: f64,
    pub suffix: &'static str,
    pub decimals: usize,
}

/// Formatting policy. Tiers are checked largest first; values below every
/// tier print whole-unit with `base_decimals`.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub tiers: Vec<Tier>,
    pub base_decimals: usize,
    /// Thousands separators on the integer part (en locale, `1,000`).
    pub grouped: bool,
}

impl CurrencyFormat {
    /// Live counter policy: more decimals for larger units so the counter
    /// visibly moves. `£1.578B`, `£65.75M`, `£18,264`.
    pub fn ticker() -> Self {
        Self {
            symbol: "£",
            tiers: vec![
                Tier { threshold: 1e9, suffix: "B", decimals: 3 },
                Tier { threshold: 1e6, suffix: "M", decimals: 2 },
            ],
            base_decimals: 0,
            grouped: true,
        }
    }

    /// Calculator policy: one decimal for every unit. `£2.5K`, `£1.2M`.
    pub fn compact() -> Self {
        Self {
            symbol: "£",
            tiers: vec![
                Tier { threshold: 1e9, suffix: "B", decimals: 1 },
                Tier { threshold: 1e6, suffix: "M", decimals: 1 },
                Tier { threshold: 1e3, suffix: "K", decimals: 1 },
            ],
            base_decimals: 0,
            grouped: true,
        }
    }

    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return format!("{}{}", self.symbol, amount);
        }
        let sign = if amount < 0.0 { "-" } else { "" };
        let abs = amount.abs();
        let (int_part, frac_part, suffix) = self.round_into_tier(abs);
        let int_part = if self.grouped { group(&int_part) } else { int_part };
        // No "-£0" after rounding.
        let is_zero = int_part.chars().all(|c| c == '0' || c == ',') && frac_part.chars().all(|c| c == '0');
        let sign = if is_zero { "" } else { sign };
        if frac_part.is_empty() {
            format!("{sign}{}{int_part}{suffix}", self.symbol)
        } else {
            format!("{sign}{}{int_part}.{frac_part}{suffix}", self.symbol)
        }
    }

    /// Round `abs` in the tier it falls in, moving up a tier when rounding
    /// reaches the next threshold (`999,999.6` -> `1.00M`, not `1,000,000`).
    fn round_into_tier(&self, abs: f64) -> (String, String, &'static str) {
        let mut tier = self.tiers.iter().find(|t| abs >= t.threshold);
        loop {
            let (unit, decimals, suffix) = match tier {
                Some(t) => (t.threshold, t.decimals, t.suffix),
                None => (1.0, self.base_decimals, ""),
            };
            let (int_part, frac_part) = round_half_up(abs / unit, decimals);
            let rounded = decimal_value(&int_part, &frac_part) * unit;
            match self.tiers.iter().find(|t| rounded >= t.threshold) {
                Some(up) if up.threshold > unit => tier = Some(up),
                _ => return (int_part, frac_part, suffix),
            }
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::ticker()
    }
}

/// Format with the live-counter policy.
pub fn format_currency(amount: f64) -> String {
    CurrencyFormat::ticker().format(amount)
}

/// Whole-number percentage, `80%`.
pub fn format_percent(value: f64) -> String {
    format_percent_with(value, 0)
}

/// Percentage with a fixed number of decimals, `4.5%`.
pub fn format_percent_with(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{value}%");
    }
    let (int_part, frac_part) = round_half_up(value.abs(), decimals);
    let zero = int_part == "0" && frac_part.chars().all(|c| c == '0');
    let sign = if value < 0.0 && !zero { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{int_part}%")
    } else {
        format!("{sign}{int_part}.{frac_part}%")
    }
}

/// Round a non-negative finite value half-up to `decimals` places.
///
/// Works on the shortest decimal representation of `x`, so `1.2345` rounds
/// to `1.235` even though its binary value is slightly below that.
/// Returns (integer digits, fractional digits).
fn round_half_up(x: f64, decimals: usize) -> (String, String) {
    let repr = format!("{x}");
    let (int_str, frac_str) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits = int_str.bytes().map(|b| b - b'0').collect::<Vec<u8>>();
    let frac = frac_str.bytes().map(|b| b - b'0').collect::<Vec<u8>>();
    digits.extend((0..decimals).map(|i| frac.get(i).copied().unwrap_or(0)));

    if frac.get(decimals).is_some_and(|&d| d >= 5) {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - decimals;
    let to_string = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    let int_part = to_string(&digits[..split]);
    let int_part = match int_part.trim_start_matches('0') {
        "" => "0".to_string(),
        trimmed => trimmed.to_string(),
    };
    (int_part, to_string(&digits[split..]))
}

fn decimal_value(int_part: &str, frac_part: &str) -> f64 {
    let text = if frac_part.is_empty() { int_part.to_string() } else { format!("{int_part}.{frac_part}") };
    text.parse().unwrap_or(0.0)
}

fn group(int_part: &str) -> String {
    match int_part.parse::<u128>() {
        Ok(n) => n.to_formatted_string(&Locale::en),
        Err(_) => int_part.to_string(),
    }
}

