// File: crates/wealthflow-render/src/error.rs
// Summary: Renderer errors.

use thiserror::Error;
use wealthflow_core::ChartError;

pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("failed to write {}: {source}", .path.display())]
    Io { path: std::path::PathBuf, source: std::io::Error },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: u32, height: u32 },

    #[error("PNG encoding failed")]
    Encode,
}
