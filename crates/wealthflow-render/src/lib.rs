// File: crates/wealthflow-render/src/lib.rs
// Summary: Renderer entry point; draws core chart definitions as SVG (and PNG with the `png` feature).

pub mod error;
pub mod theme;
pub mod scene;
pub mod svg;
#[cfg(feature = "png")]
pub mod png;

use std::path::Path;

use wealthflow_core::{FlowDiagram, LineChart, StackedAreaChart};

pub use error::{RenderError, Result};
pub use scene::{Scene, Shape};
pub use theme::Theme;

/// A chart definition that can be laid out as a [`Scene`].
pub trait Draw {
    fn scene(&self, theme: &Theme) -> Result<Scene>;

    fn to_svg(&self, theme: &Theme) -> Result<String> {
        Ok(svg::to_svg(&self.scene(theme)?))
    }
}

impl Draw for FlowDiagram {
    fn scene(&self, theme: &Theme) -> Result<Scene> {
        Ok(scene::flow_scene(&self.resolve()?, theme))
    }
}

impl Draw for StackedAreaChart {
    fn scene(&self, theme: &Theme) -> Result<Scene> {
        Ok(scene::stacked_area_scene(&self.geometry()?, &self.frame, theme))
    }
}

impl Draw for LineChart {
    fn scene(&self, theme: &Theme) -> Result<Scene> {
        Ok(scene::line_chart_scene(&self.geometry()?, &self.frame, self.marker_radius, theme))
    }
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let io = |source| RenderError::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io)?;
    }
    std::fs::write(path, bytes).map_err(io)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote chart");
    Ok(())
}

/// Render `chart` to an SVG file, creating parent directories as needed.
pub fn write_svg(chart: &impl Draw, theme: &Theme, path: impl AsRef<Path>) -> Result<()> {
    write_bytes(path.as_ref(), chart.to_svg(theme)?.as_bytes())
}

/// Render `chart` to a PNG file through a Skia raster surface.
#[cfg(feature = "png")]
pub fn write_png(chart: &impl Draw, theme: &Theme, path: impl AsRef<Path>) -> Result<()> {
    write_bytes(path.as_ref(), &png::render_png(&chart.scene(theme)?)?)
}
