pub mod backend;
pub mod chart;
pub mod styles;
#[cfg(test)]
mod tests;

use thiserror::Error;

pub use backend::{ChartBackend, PngBackend, DEFAULT_CHART_SIZE};
pub use chart::render_chart;
pub use styles::{Color, Theme, DEFAULT_THEME};

/// Errors raised while mounting or rendering charts. None of these are
/// recovered from: this is a display page with no retry path, so they halt
/// the startup sequence.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("no chart is mounted in container `{0}`")]
    UnknownContainer(String),
    #[error("theme `{0}` has not been registered")]
    UnknownTheme(String),
    #[error("chart drawing failed: {0}")]
    Draw(String),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
