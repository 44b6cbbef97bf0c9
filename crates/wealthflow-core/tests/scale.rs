// File: crates/wealthflow-core/tests/scale.rs
// Purpose: Linear mapping, inverted ranges, degenerate domains and the round-trip law.

use proptest::prelude::*;
use wealthflow_core::error::ChartError;
use wealthflow_core::scale::{self, LinearScale};

#[test]
fn maps_years_onto_plot_width() {
    let x = LinearScale::try_new((1985.0, 2023.0), (0.0, 790.0)).unwrap();
    assert_eq!(x.map(1985.0), 0.0);
    assert_eq!(x.map(2023.0), 790.0);
    assert!((x.map(2004.0) - 395.0).abs() < 1e-9);
}

#[test]
fn inverted_range_puts_large_values_on_top() {
    let y = LinearScale::new((0.0, 100.0), (400.0, 0.0));
    assert_eq!(y.map(0.0), 400.0);
    assert_eq!(y.map(100.0), 0.0);
    assert!((y.map(25.0) - 300.0).abs() < 1e-9);
    assert!((y.unmap(300.0) - 25.0).abs() < 1e-9);
}

#[test]
fn degenerate_domain_is_rejected_or_clamped() {
    let err = LinearScale::try_new((5.0, 5.0), (0.0, 100.0)).unwrap_err();
    assert!(matches!(err, ChartError::Domain { min, max } if min == 5.0 && max == 5.0));
    assert!(LinearScale::try_new((f64::NAN, 1.0), (0.0, 1.0)).is_err());

    let s = LinearScale::new((5.0, 5.0), (10.0, 100.0));
    assert!(s.is_degenerate());
    assert_eq!(s.map(7.0), 10.0);
    assert!(s.try_map(7.0).is_err());
    assert_eq!(s.unmap(50.0), 5.0);
}

#[test]
fn free_functions_match_scale() {
    assert_eq!(scale::map(50.0, 0.0, 100.0, 0.0, 1000.0), 500.0);
    assert_eq!(scale::unmap(500.0, 0.0, 100.0, 0.0, 1000.0), 50.0);
    assert_eq!(scale::map(3.0, 2.0, 2.0, 7.0, 9.0), 7.0);
}

proptest! {
    #[test]
    fn unmap_inverts_map(
        d0 in -1_000.0f64..1_000.0,
        dspan in 1.0f64..1_000.0,
        r0 in -1_000.0f64..1_000.0,
        rspan in 10.0f64..2_000.0,
        flip in any::<bool>(),
        t in 0.0f64..=1.0,
    ) {
        let range = if flip { (r0 + rspan, r0) } else { (r0, r0 + rspan) };
        let s = LinearScale::try_new((d0, d0 + dspan), range).unwrap();
        let v = d0 + t * dspan;
        let back = s.unmap(s.map(v));
        prop_assert!((back - v).abs() <= 1e-6, "v={v} back={back}");
    }
}
