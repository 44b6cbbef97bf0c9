// File: crates/wealthflow-render/src/theme.rs
// Summary: Light/Dark page colors for chart chrome (background, text, axes, outlines).
// Series and node colors come from the chart definitions, not the theme.

use wealthflow_core::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    /// Axis labels, titles, legend text.
    pub text: Color,
    /// Link labels and secondary text.
    pub muted_text: Color,
    pub axis_line: Color,
    pub grid: Color,
    /// Stroke around node boxes, area bands and markers.
    pub outline: Color,
    /// Text drawn on top of colored node boxes.
    pub node_text: Color,
    pub font_family: &'static str,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_rgb(0xff, 0xff, 0xff),
            text: Color::from_rgb(0x1e, 0x29, 0x3b),
            muted_text: Color::from_rgb(0x64, 0x74, 0x8b),
            axis_line: Color::from_rgb(0x33, 0x41, 0x55),
            grid: Color::from_rgb(0x00, 0x00, 0x00),
            outline: Color::from_rgb(0xff, 0xff, 0xff),
            node_text: Color::from_rgb(0xff, 0xff, 0xff),
            font_family: "system-ui, sans-serif",
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(0x0f, 0x17, 0x2a),
            text: Color::from_rgb(0xe2, 0xe8, 0xf0),
            muted_text: Color::from_rgb(0x94, 0xa3, 0xb8),
            axis_line: Color::from_rgb(0xcb, 0xd5, 0xe1),
            grid: Color::from_rgb(0xe2, 0xe8, 0xf0),
            outline: Color::from_rgb(0x0f, 0x17, 0x2a),
            node_text: Color::from_rgb(0xff, 0xff, 0xff),
            font_family: "system-ui, sans-serif",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name)).unwrap_or_default()
}
