// File: crates/wealthflow-render/tests/snapshot.rs
// Purpose: Golden SVG snapshots with bless flow.
// Behavior:
// - Renders each built-in chart to SVG text with the light theme.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, compares against the committed snapshot for an exact match; a
//   missing snapshot fails.

use std::path::PathBuf;

use wealthflow_core::fixtures;
use wealthflow_render::{Draw, Theme};

fn snapshot_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__")
}

fn updating() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn check(name: &str, svg: &str) {
    let dir = snapshot_dir();
    let path = dir.join(format!("{name}.svg"));

    if updating() {
        std::fs::create_dir_all(&dir).expect("create snapshots dir");
        std::fs::write(&path, svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), svg.len());
        return;
    }

    let want = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("missing snapshot {} ({e}); set UPDATE_SNAPSHOTS=1 to bless", path.display()));
    assert_eq!(svg, want, "rendered SVG differs from golden snapshot: {}", path.display());
}

#[test]
fn golden_wealth_flow() {
    check("wealth_flow", &fixtures::wealth_flow().unwrap().to_svg(&Theme::light()).unwrap());
}

#[test]
fn golden_recycling() {
    check("recycling", &fixtures::recycling().unwrap().to_svg(&Theme::light()).unwrap());
}

#[test]
fn golden_divergence() {
    check("divergence", &fixtures::divergence_chart().unwrap().to_svg(&Theme::light()).unwrap());
}

#[test]
fn golden_squeeze() {
    check("squeeze", &fixtures::squeeze_chart().unwrap().to_svg(&Theme::light()).unwrap());
}

#[test]
fn rendering_is_deterministic() {
    let chart = fixtures::divergence_chart().unwrap();
    assert_eq!(chart.to_svg(&Theme::light()).unwrap(), chart.to_svg(&Theme::light()).unwrap());
}
