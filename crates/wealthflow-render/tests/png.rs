// File: crates/wealthflow-render/tests/png.rs
// Purpose: Raster output decodes to the scene size with the theme background.
#![cfg(feature = "png")]

use wealthflow_core::fixtures;
use wealthflow_render::png::render_png;
use wealthflow_render::{Draw, Theme};

#[test]
fn flow_diagram_png() {
    let scene = fixtures::wealth_flow().unwrap().scene(&Theme::light()).unwrap();
    let bytes = render_png(&scene).expect("render png");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (1000, 600));
    assert_eq!(img.get_pixel(2, 2).0, [255, 255, 255, 255]);
}

#[test]
fn line_chart_png_uses_dark_background() {
    let scene = fixtures::squeeze_chart().unwrap().scene(&Theme::dark()).unwrap();
    let img = image::load_from_memory(&render_png(&scene).unwrap()).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (1000, 500));
    assert_eq!(img.get_pixel(2, 2).0, [0x0f, 0x17, 0x2a, 255]);
}
