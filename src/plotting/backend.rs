//! The charting capability the dashboard is wired against.
//!
//! Rather than calling a rendering library directly, chart assembly talks to
//! a [`ChartBackend`]: one-time theme registration, per-container chart
//! initialization, and per-container re-layout on resize. The shipped
//! implementation is [`PngBackend`], an offscreen renderer; tests substitute
//! their own.

use std::collections::HashMap;

use super::chart::render_chart;
use super::styles::Theme;
use super::PlotError;
use crate::types::ChartConfig;

/// Render size for a freshly mounted chart, before any resize.
pub const DEFAULT_CHART_SIZE: (u32, u32) = (600, 400);

pub trait ChartBackend {
    /// Register `theme` under `name`. Must happen before any [`init`] call
    /// that references `name`.
    ///
    /// [`init`]: ChartBackend::init
    fn register_theme(&mut self, name: &str, theme: Theme);

    /// Mount `config` in `container`, replacing any chart already mounted
    /// there. Fails fast if `theme` has not been registered.
    fn init(&mut self, container: &str, theme: &str, config: ChartConfig)
        -> Result<(), PlotError>;

    /// Re-layout the chart mounted in `container` at a new size. Fails fast
    /// if nothing is mounted there.
    fn resize(&mut self, container: &str, width: u32, height: u32) -> Result<(), PlotError>;
}

/// A chart mounted in one container.
struct MountedChart {
    theme: String,
    config: ChartConfig,
    size: (u32, u32),
    png: Vec<u8>,
}

/// Offscreen backend that renders every mounted chart to a PNG.
#[derive(Default)]
pub struct PngBackend {
    themes: HashMap<String, Theme>,
    charts: HashMap<String, MountedChart>,
}

impl PngBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// PNG bytes of the chart mounted in `container`, if any.
    pub fn rendered(&self, container: &str) -> Option<&[u8]> {
        self.charts
            .get(container)
            .map(|chart| chart.png.as_slice())
    }

    /// Current render size of the chart mounted in `container`.
    pub fn size(&self, container: &str) -> Option<(u32, u32)> {
        self.charts.get(container).map(|chart| chart.size)
    }

    pub fn is_mounted(&self, container: &str) -> bool {
        self.charts.contains_key(container)
    }

    pub fn mounted_count(&self) -> usize {
        self.charts.len()
    }
}

impl ChartBackend for PngBackend {
    fn register_theme(&mut self, name: &str, theme: Theme) {
        self.themes.insert(name.to_string(), theme);
    }

    fn init(
        &mut self,
        container: &str,
        theme: &str,
        config: ChartConfig,
    ) -> Result<(), PlotError> {
        let styles = self
            .themes
            .get(theme)
            .ok_or_else(|| PlotError::UnknownTheme(theme.to_string()))?;

        // Re-initializing keeps the container's current size.
        let size = self
            .charts
            .get(container)
            .map(|chart| chart.size)
            .unwrap_or(DEFAULT_CHART_SIZE);
        let png = render_chart(&config, styles, size.0, size.1)?;

        self.charts.insert(
            container.to_string(),
            MountedChart {
                theme: theme.to_string(),
                config,
                size,
                png,
            },
        );
        Ok(())
    }

    fn resize(&mut self, container: &str, width: u32, height: u32) -> Result<(), PlotError> {
        let theme_name = self
            .charts
            .get(container)
            .ok_or_else(|| PlotError::UnknownContainer(container.to_string()))?
            .theme
            .clone();
        let theme = self
            .themes
            .get(&theme_name)
            .ok_or_else(|| PlotError::UnknownTheme(theme_name.clone()))?
            .clone();

        let chart = self
            .charts
            .get_mut(container)
            .ok_or_else(|| PlotError::UnknownContainer(container.to_string()))?;
        if chart.size == (width, height) {
            return Ok(());
        }
        chart.png = render_chart(&chart.config, &theme, width, height)?;
        chart.size = (width, height);
        Ok(())
    }
}
