// File: crates/wealthflow-core/tests/fixtures.rs
// Purpose: Built-in fixtures load and validate; chart definitions produce expected geometry.

use wealthflow_core::error::ChartError;
use wealthflow_core::fixtures;
use wealthflow_core::geometry::{PathSegment, Point};
use wealthflow_core::record::{Dataset, Record};

fn starts_near(segments: &[PathSegment], want: Point) -> bool {
    match segments.first() {
        Some(PathSegment::MoveTo(p)) => (p.x - want.x).abs() < 1e-9 && (p.y - want.y).abs() < 1e-9,
        _ => false,
    }
}

#[test]
fn datasets_load_sorted() {
    let d = fixtures::distribution().unwrap();
    assert_eq!(d.len(), 9);
    assert_eq!(d.key_range(), Some((1985, 2023)));
    assert_eq!(d.get(2000).and_then(|r| r.get("top1")), Some(24.0));
    assert_eq!(d.value_range(&["top10"]).unwrap(), Some((45.0, 65.0)));

    let s = fixtures::squeeze().unwrap();
    assert_eq!(s.records()[0].field_names().collect::<Vec<_>>(), ["realWages", "housePrices", "stockPrices", "bondPrices"]);
    assert_eq!(s.get(2023).and_then(|r| r.get("stockPrices")), Some(920.0));
}

#[test]
fn diagrams_and_table_load() {
    let flow = fixtures::wealth_flow().unwrap();
    assert_eq!((flow.nodes().len(), flow.links().len()), (9, 8));
    assert_eq!(flow.position("bondholders"), Some(Point::new(750.0, 300.0)));
    assert_eq!(flow.node("wages").map(|n| n.label.as_str()), Some("Workers' Wages"));

    let recycling = fixtures::recycling().unwrap();
    assert_eq!((recycling.nodes().len(), recycling.links().len()), (9, 10));

    let table = fixtures::allocation_table().unwrap();
    assert_eq!(table.rules().len(), 6);
    assert_eq!(table.total(), 1.0);
}

#[test]
fn dataset_rejects_unsorted_or_duplicate_keys() {
    let err = Dataset::try_new(vec![Record::new(1990, [("a", 1.0)]), Record::new(1985, [("a", 1.0)])]).unwrap_err();
    assert!(matches!(err, ChartError::UnsortedRecords { previous: 1990, key: 1985 }));
    assert!(Dataset::try_new(vec![Record::new(1990, [("a", 1.0)]), Record::new(1990, [("a", 2.0)])]).is_err());

    let err = Dataset::from_csv("test", "year,a\n1985,x\n", "year").unwrap_err();
    assert!(matches!(err, ChartError::Fixture { name: "test", .. }));
    assert!(Dataset::from_csv("test", "when,a\n1985,1\n", "year").is_err());
}

#[test]
fn divergence_chart_geometry() {
    let chart = fixtures::divergence_chart().unwrap();
    let g = chart.geometry().unwrap();
    assert_eq!(g.areas.len(), 3);
    assert_eq!(g.areas[0].style.field, "bottom50");

    // Bottom band's upper edge starts at 10% of a 400-unit plot, the top band's at 90%.
    assert!(starts_near(&g.areas[0].path.segments, Point::new(0.0, 360.0)));
    assert!(starts_near(&g.areas[2].path.segments, Point::new(0.0, 40.0)));
    assert_eq!(g.areas[2].path.segments.last(), Some(&PathSegment::Close));

    let overlay = g.overlay.unwrap();
    assert!(overlay.style.dashed);
    assert_eq!(overlay.points.len(), 9);
    assert!((overlay.points[0].y - 72.0).abs() < 1e-9);
    assert_eq!(g.x_axis.ticks.len(), 8);
    assert_eq!(g.y_axis.ticks.last().map(|t| t.label.as_str()), Some("100%"));
}

#[test]
fn squeeze_chart_geometry() {
    let chart = fixtures::squeeze_chart().unwrap();
    let g = chart.geometry().unwrap();
    assert_eq!(g.lines.len(), 4);
    assert_eq!(g.lines[0].style.stroke_width, 4.0);
    let first = g.lines[0].points[0];
    assert_eq!(first.x, 0.0);
    assert!((first.y - 360.0).abs() < 1e-9);
    assert_eq!(g.lines[2].points[8].x, 790.0);

    let (reference, y) = g.reference.unwrap();
    assert_eq!(reference.value, 100.0);
    assert!((y - 360.0).abs() < 1e-9);
}

#[test]
fn chart_with_missing_field_fails() {
    let mut chart = fixtures::squeeze_chart().unwrap();
    chart.lines[0].field = "goldPrices".into();
    assert!(matches!(chart.geometry(), Err(ChartError::FieldMissing { key: 1985, .. })));
}

#[test]
fn single_year_chart_clamps_instead_of_failing() {
    let mut chart = fixtures::squeeze_chart().unwrap();
    let last = chart.data.get(2023).cloned().unwrap();
    chart.data = Dataset::try_new(vec![last]).unwrap();
    chart.x_domain = (2023.0, 2023.0);

    let g = chart.geometry().unwrap();
    assert_eq!(g.lines.len(), 4);
    assert_eq!(g.lines[0].points.len(), 1);
    // Degenerate x domain clamps to the left plot edge.
    assert_eq!(g.lines[0].points[0].x, 0.0);
    assert_eq!(g.x_axis.ticks.len(), 1);
    assert_eq!(g.x_axis.ticks[0].label, "2023");

    let mut stacked = fixtures::divergence_chart().unwrap();
    let only = stacked.data.get(1985).cloned().unwrap();
    stacked.data = Dataset::try_new(vec![only]).unwrap();
    stacked.x_domain = (1985.0, 1985.0);
    let g = stacked.geometry().unwrap();
    assert_eq!(g.areas.len(), 3);
    assert!(starts_near(&g.areas[0].path.segments, Point::new(0.0, 360.0)));
}
