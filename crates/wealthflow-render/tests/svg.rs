// File: crates/wealthflow-render/tests/svg.rs
// Purpose: Structural checks on SVG output for every built-in chart.

use wealthflow_core::fixtures;
use wealthflow_core::record::Dataset;
use wealthflow_render::svg::escape;
use wealthflow_render::{theme, Draw, Theme};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn wealth_flow_svg() {
    let diagram = fixtures::wealth_flow().unwrap();
    let svg = diagram.to_svg(&Theme::light()).unwrap();

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1000 600""#));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"d="M 180,150 C 250,150 250,100 320,100""#));
    assert!(svg.contains(r##"stroke="#f59e0b" stroke-width="17.5" opacity="0.6""##));
    assert!(svg.contains(">£420B/yr</text>"));
    assert!(svg.contains("Workers&apos; Wages"));
    assert!(svg.contains(r#"<g transform="translate(750,100)">"#));
    assert_eq!(count(&svg, "<path "), 8);
    // Background plus nine node boxes.
    assert_eq!(count(&svg, "<rect "), 10);
    assert!(svg.contains(r#"rx="8""#));
}

#[test]
fn wealth_flow_scene_counts() {
    let scene = fixtures::wealth_flow().unwrap().scene(&Theme::light()).unwrap();
    assert_eq!((scene.width, scene.height), (1000, 600));
    // 8 links, 5 link labels, 9 boxes, 12 label lines.
    assert_eq!(scene.shape_count(), 34);
}

#[test]
fn recycling_svg() {
    let svg = fixtures::recycling().unwrap().to_svg(&Theme::light()).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 1000 700""#));
    assert!(svg.contains(r#"stroke-width="140""#));
    assert!(svg.contains(r#"rx="10""#));
    assert!(svg.contains(r#"font-size="13""#));
    assert_eq!(count(&svg, "<path "), 10);
    assert!(svg.contains(">£650B</text>"));
}

#[test]
fn divergence_svg() {
    let svg = fixtures::divergence_chart().unwrap().to_svg(&Theme::light()).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 1000 500""#));
    assert!(svg.contains(r#"<g transform="translate(60,40)">"#));
    assert!(svg.contains(r##"fill="#10b981" stroke="#ffffff" stroke-width="2" opacity="0.8""##));
    assert!(svg.contains(r##"stroke="#7c3aed" stroke-width="4" stroke-dasharray="8,4""##));
    assert!(svg.contains(r#"transform="rotate(-90 -45 200)">Share of Total Wealth (%)</text>"#));
    assert!(svg.contains(">100%</text>"));
    assert!(svg.contains(">1985</text>"));

    // Legend: overlay first, then bands from the top down.
    let legend = &svg[svg.find(r#"<g transform="translate(860,40)">"#).unwrap()..];
    let order = ["Top 1%", "Top 10%", "Middle 40%", "Bottom 50%"].map(|l| legend.find(&format!(">{l}<")).unwrap());
    assert!(order.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn squeeze_svg() {
    let svg = fixtures::squeeze_chart().unwrap().to_svg(&Theme::light()).unwrap();
    assert_eq!(count(&svg, "<circle "), 36);
    assert!(svg.contains(r##"y1="360" x2="790" y2="360" stroke="#94a3b8" stroke-width="2" stroke-dasharray="5,5" opacity="0.5""##));
    assert!(svg.contains(r##"stroke="#ef4444" stroke-width="4" opacity="0.9""##));
    assert!(svg.contains(">Index (1985 = 100)</text>"));
    assert!(svg.contains(">Stock Prices</text>"));
}

#[test]
fn single_year_chart_still_renders() {
    let mut chart = fixtures::squeeze_chart().unwrap();
    let only = chart.data.get(1985).cloned().unwrap();
    chart.data = Dataset::try_new(vec![only]).unwrap();
    chart.x_domain = (1985.0, 1985.0);

    let svg = chart.to_svg(&Theme::light()).unwrap();
    assert_eq!(count(&svg, "<circle "), 4);
    assert!(svg.contains(r#"<circle cx="0" cy="360" r="4""#));
}

#[test]
fn theme_colors_reach_the_document() {
    let svg = fixtures::squeeze_chart().unwrap().to_svg(&Theme::dark()).unwrap();
    assert!(svg.contains(r##"<rect width="1000" height="500" fill="#0f172a"/>"##));
    assert_eq!(theme::find("DARK").name, "dark");
    assert_eq!(theme::find("sepia"), Theme::light());
}

#[test]
fn escapes_markup() {
    assert_eq!(escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
}

#[test]
fn writes_svg_file() {
    let dir = std::env::temp_dir().join(format!("wealthflow-render-{}", std::process::id()));
    let path = dir.join("nested/flow.svg");
    let diagram = fixtures::wealth_flow().unwrap();
    wealthflow_render::write_svg(&diagram, &Theme::light(), &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, diagram.to_svg(&Theme::light()).unwrap());
    std::fs::remove_dir_all(&dir).ok();
}
