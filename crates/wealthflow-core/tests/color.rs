// File: crates/wealthflow-core/tests/color.rs
// Purpose: Hex color parsing accepts the short, long and alpha forms and nothing else.

use wealthflow_core::color::Color;
use wealthflow_core::error::ChartError;

#[test]
fn parses_hex_forms() {
    assert_eq!(Color::from_hex("#10b981").unwrap(), Color::from_rgb(0x10, 0xb9, 0x81));
    assert_eq!(Color::from_hex("#fff").unwrap(), Color::from_rgb(255, 255, 255));
    assert_eq!(Color::from_hex("#7c3aed80").unwrap(), Color::from_argb(0x80, 0x7c, 0x3a, 0xed));
    assert_eq!(" #EF4444 ".parse::<Color>().unwrap(), Color::from_rgb(0xef, 0x44, 0x44));
    assert_eq!(Color::from_rgb(6, 182, 212).to_string(), "#06b6d4");
}

#[test]
fn rejects_anything_but_hex_digits() {
    for bad in ["#+f+f+f", "#+fffff", "#-12345", "10b981", "#12345", "#gggggg", "#é12"] {
        assert!(matches!(Color::from_hex(bad), Err(ChartError::InvalidColor(_))), "{bad} should be rejected");
    }
}
