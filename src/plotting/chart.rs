use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
// The local `Color` config type shadows the plotters trait of the same name;
// pull the trait methods back in anonymously.
use plotters::style::Color as _;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::Cursor;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;
use once_cell::sync::Lazy;

use super::styles::{Color, Theme};
use super::PlotError;
use crate::types::{ChartConfig, SeriesConfig};

// Series data is immutable after startup, so rendered PNGs can be cached by
// configuration hash and size. Resizing back to a previous size is a hit.
static PLOT_CACHE: Lazy<Mutex<LruCache<PlotCacheKey, Vec<u8>>>> =
    Lazy::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(16).unwrap())));

#[derive(Hash, Eq, PartialEq)]
struct PlotCacheKey {
    width: u32,
    height: u32,
    config_hash: u64,
}

impl PlotCacheKey {
    fn new(config: &ChartConfig, theme: &Theme, width: u32, height: u32) -> Self {
        let mut hasher = DefaultHasher::new();
        config.title.hash(&mut hasher);
        hash_bound(&mut hasher, config.y_axis.min);
        hash_bound(&mut hasher, config.y_axis.max);
        for series in &config.series {
            series.name.hash(&mut hasher);
            series.show_symbol.hash(&mut hasher);
            for sample in &series.data {
                sample.timestamp.timestamp().hash(&mut hasher);
                sample.value.to_bits().hash(&mut hasher);
            }
        }
        for color in [
            theme.background_color,
            theme.title_color,
            theme.label_color,
            theme.grid_color,
            theme.axis_color,
        ]
        .iter()
        .chain(&theme.palette)
        {
            hash_color(&mut hasher, *color);
        }
        theme.line_width.hash(&mut hasher);
        theme.smooth.hash(&mut hasher);
        theme.title_font_size.hash(&mut hasher);
        theme.label_font_size.hash(&mut hasher);
        theme.margin.hash(&mut hasher);
        theme.label_area_size.hash(&mut hasher);

        Self {
            width,
            height,
            config_hash: hasher.finish(),
        }
    }
}

fn hash_color(hasher: &mut impl Hasher, color: Color) {
    hasher.write_u8(color.r);
    hasher.write_u8(color.g);
    hasher.write_u8(color.b);
    hasher.write_u64(color.a.to_bits());
}

fn hash_bound(hasher: &mut impl Hasher, bound: Option<f64>) {
    bound.is_some().hash(hasher);
    hasher.write_u64(bound.unwrap_or(0.0).to_bits());
}

// Helper function to wrap drawing errors
fn draw_err<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Draw(e.to_string())
}

/// Render a chart configuration, styled by `theme`, to a PNG at the given
/// size.
pub fn render_chart(
    config: &ChartConfig,
    theme: &Theme,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, PlotError> {
    let cache_key = PlotCacheKey::new(config, theme, width, height);

    // Try to get from cache first
    if let Ok(mut cache) = PLOT_CACHE.lock() {
        if let Some(png) = cache.get(&cache_key) {
            return Ok(png.clone());
        }
    }

    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw_chart(config, theme, &root)?;
        root.present().map_err(draw_err)?;
    }

    let image = image::RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| PlotError::Draw("rendered buffer has unexpected size".to_string()))?;
    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;

    // Cache the result
    if let Ok(mut cache) = PLOT_CACHE.lock() {
        cache.put(cache_key, png.clone());
    }

    Ok(png)
}

/// Internal function that draws the chart onto a drawing area.
fn draw_chart(
    config: &ChartConfig,
    theme: &Theme,
    root_area: &DrawingArea<BitMapBackend, Shift>,
) -> Result<(), PlotError> {
    let background: RGBAColor = theme.background_color.into();
    let title_color: RGBAColor = theme.title_color.into();
    let label_color: RGBAColor = theme.label_color.into();
    let grid_color: RGBAColor = theme.grid_color.into();
    let axis_color: RGBAColor = theme.axis_color.into();

    root_area.fill(&background).map_err(draw_err)?;

    let sample_count = config
        .series
        .iter()
        .map(|series| series.data.len())
        .max()
        .unwrap_or(0);
    let (min_val, max_val) = y_range(config);

    let mut chart_builder = ChartBuilder::on(root_area)
        .caption(
            &config.title,
            ("sans-serif", theme.title_font_size as i32)
                .into_font()
                .color(&title_color),
        )
        .margin(theme.margin as i32)
        .set_all_label_area_size(theme.label_area_size as i32)
        .build_cartesian_2d(0f64..sample_count.max(1) as f64, min_val..max_val)
        .map_err(draw_err)?;

    // X labels come from the longest series' timestamps; show only a few to
    // prevent overlap.
    let times: Vec<String> = config
        .series
        .iter()
        .max_by_key(|series| series.data.len())
        .map(|series| {
            series
                .data
                .iter()
                .map(|sample| sample.timestamp.format("%H:%M").to_string())
                .collect()
        })
        .unwrap_or_default();

    let x_label_formatter = move |x: &f64| {
        let idx = *x as usize;
        if idx < times.len() {
            if idx == 0
                || idx == times.len() - 1
                || (idx % (times.len() / 4).max(1) == 0 && idx > 0 && idx < times.len() - 1)
            {
                times[idx].clone()
            } else {
                String::new()
            }
        } else {
            String::new()
        }
    };
    let y_label_formatter = |y: &f64| {
        if y.abs() < 10.0 {
            format!("{:.2}", y)
        } else {
            format!("{:.0}", y)
        }
    };

    let mut mesh = chart_builder.configure_mesh();
    mesh.light_line_style(TRANSPARENT)
        .bold_line_style(grid_color)
        .axis_style(axis_color)
        .label_style(
            ("sans-serif", theme.label_font_size as i32)
                .into_font()
                .color(&label_color),
        )
        .x_label_formatter(&x_label_formatter)
        .y_label_formatter(&y_label_formatter)
        // Rotate x labels for better readability
        .x_label_style(
            ("sans-serif", theme.label_font_size as i32)
                .into_font()
                .color(&label_color)
                .transform(FontTransform::Rotate90)
                .pos(Pos::new(HPos::Right, VPos::Center)),
        );
    mesh.draw().map_err(draw_err)?;

    for (index, series) in config.series.iter().enumerate() {
        let color: RGBAColor = theme.series_color(index).into();
        let points = series_points(series, theme.smooth);

        chart_builder
            .draw_series(LineSeries::new(points, color.stroke_width(theme.line_width)))
            .map_err(draw_err)?
            .label(series.name.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

        if series.show_symbol {
            chart_builder
                .draw_series(series.data.iter().enumerate().map(|(i, sample)| {
                    Circle::new((i as f64, sample.value), 2, color.filled())
                }))
                .map_err(draw_err)?;
        }
    }

    // A legend only earns its space with more than one series.
    if config.series.len() > 1 {
        chart_builder
            .configure_series_labels()
            .background_style(background.mix(0.8))
            .border_style(axis_color)
            .label_font(
                ("sans-serif", theme.label_font_size as i32)
                    .into_font()
                    .color(&label_color),
            )
            .draw()
            .map_err(draw_err)?;
    }

    Ok(())
}

/// Y bounds for a chart: fixed bounds win, anything unspecified falls back
/// to the adaptive range of the plotted values.
fn y_range(config: &ChartConfig) -> (f64, f64) {
    let (min, max) = match (config.y_axis.min, config.y_axis.max) {
        (Some(min), Some(max)) => (min, max),
        (min, max) => {
            let values: Vec<f64> = config
                .series
                .iter()
                .flat_map(|series| series.data.iter().map(|sample| sample.value))
                .collect();
            let (auto_min, auto_max) = calculate_adaptive_range(&values);
            (min.unwrap_or(auto_min), max.unwrap_or(auto_max))
        }
    };

    // Degenerate ranges would make the coordinate system unbuildable.
    if max > min {
        (min, max)
    } else {
        (min, min + 1.0)
    }
}

/// Optionally smooth a series with a short moving average and pair each
/// value with its sample index.
fn series_points(series: &SeriesConfig, smooth: bool) -> Vec<(f64, f64)> {
    let raw: Vec<f64> = series.data.iter().map(|sample| sample.value).collect();
    if !smooth || raw.len() < 3 {
        return raw.iter().enumerate().map(|(i, v)| (i as f64, *v)).collect();
    }

    let window_size = 3;
    (0..raw.len())
        .map(|i| {
            let start = i.saturating_sub(window_size / 2);
            let end = (i + window_size / 2 + 1).min(raw.len());
            let avg = raw[start..end].iter().sum::<f64>() / (end - start) as f64;
            (i as f64, avg)
        })
        .collect()
}

pub(crate) fn calculate_adaptive_range(values: &[f64]) -> (f64, f64) {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    if sorted.is_empty() {
        return (0.0, 1.0);
    }

    // Remove extreme outliers (values beyond the 95th percentile). Indexing
    // off len - 1 keeps the percentile below the top element even for small
    // samples, so a single spike cannot be its own reference point.
    let p95_idx = ((sorted.len() - 1) as f64 * 0.95) as usize;
    let normal_max = sorted[p95_idx];
    let absolute_max = sorted[sorted.len() - 1];

    // Use the 95th percentile for the main scale unless the peaks are tame
    // enough to show outright.
    let display_max = if absolute_max > normal_max * 2.0 {
        normal_max * 1.2
    } else {
        absolute_max * 1.1
    };

    (0.0, display_max)
}
