// File: crates/wealthflow-core/tests/format.rs
// Purpose: Currency formatter tiers, half-up rounding and sign handling.

use wealthflow_core::format::{format_currency, format_percent, format_percent_with, CurrencyFormat};

#[test]
fn ticker_policy() {
    let f = CurrencyFormat::ticker();
    assert_eq!(f.format(18_264.0), "£18,264");
    assert_eq!(f.format(1_578_000_000.0), "£1.578B");
    assert_eq!(f.format(65_750_400.0), "£65.75M");
    assert_eq!(f.format(6_300_000_000_000.0), "£6,300.000B");
    assert_eq!(f.format(999.5), "£1,000");
    assert_eq!(f.format(0.0), "£0");
    assert_eq!(format_currency(18_264.0), f.format(18_264.0));
}

#[test]
fn compact_policy() {
    let f = CurrencyFormat::compact();
    assert_eq!(f.format(875.0), "£875");
    assert_eq!(f.format(2_500.0), "£2.5K");
    assert_eq!(f.format(24_000.0), "£24.0K");
    assert_eq!(f.format(720_000.0), "£720.0K");
    assert_eq!(f.format(1_200_000.0), "£1.2M");
    assert_eq!(f.format(300e9), "£300.0B");
}

#[test]
fn rounds_half_up_on_decimal_value() {
    let f = CurrencyFormat::ticker();
    assert_eq!(f.format(1_234_500_000.0), "£1.235B");
    assert_eq!(f.format(2_345_000.0), "£2.35M");
    assert_eq!(f.format(0.5), "£1");

    let cents = CurrencyFormat { tiers: vec![], base_decimals: 2, grouped: false, ..CurrencyFormat::ticker() };
    assert_eq!(cents.format(9.995), "£10.00");
    assert_eq!(cents.format(1234.5), "£1234.50");
}

#[test]
fn rounding_up_moves_to_the_next_tier() {
    let f = CurrencyFormat::ticker();
    assert_eq!(f.format(999_999.6), "£1.00M");
    assert_eq!(f.format(999_995_000.0), "£1.000B");
    assert_eq!(f.format(999_994_000.0), "£999.99M");
    assert_eq!(f.format(999_999.4), "£999,999");

    let c = CurrencyFormat::compact();
    assert_eq!(c.format(999.96), "£1.0K");
    assert_eq!(c.format(999_950.0), "£1.0M");
    assert_eq!(c.format(-999_999.6), "-£1.0M");
}

#[test]
fn negatives_carry_a_leading_minus() {
    let f = CurrencyFormat::ticker();
    assert_eq!(f.format(-18_264.0), "-£18,264");
    assert_eq!(f.format(-2_000_000_000.0), "-£2.000B");
    assert_eq!(f.format(-0.4), "£0");
}

#[test]
fn non_finite_values_render_verbatim() {
    assert_eq!(format_currency(f64::NAN), "£NaN");
    assert_eq!(format_currency(f64::INFINITY), "£inf");
}

#[test]
fn percent() {
    assert_eq!(format_percent(80.0), "80%");
    assert_eq!(format_percent(4.545), "5%");
    assert_eq!(format_percent(-2.5), "-3%");
}

#[test]
fn percent_with_decimals() {
    assert_eq!(format_percent_with(4.545_454, 1), "4.5%");
    assert_eq!(format_percent_with(95.454_545, 1), "95.5%");
    assert_eq!(format_percent_with(-0.04, 1), "0.0%");
    assert_eq!(format_percent_with(f64::NAN, 1), "NaN%");
}
