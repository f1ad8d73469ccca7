use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::chart::calculate_adaptive_range;
use super::*;
use crate::generate::uniform_random;
use crate::types::{ChartConfig, SeriesConfig, Tooltip, ValueAxis};

fn sample_config(seed: u64) -> ChartConfig {
    let mut rng = StdRng::seed_from_u64(seed);
    ChartConfig {
        title: "CPU Utilization (%)".to_string(),
        tooltip: Tooltip::axis(),
        y_axis: ValueAxis::bounded(0.0, 100.0),
        series: vec![SeriesConfig {
            name: "CPU".to_string(),
            show_symbol: false,
            data: uniform_random(&mut rng, 60, 0.0, 100.0, 2),
        }],
    }
}

#[test]
fn render_produces_png_of_requested_size() {
    let png = render_chart(&sample_config(1), &Theme::default(), 600, 400).unwrap();

    assert!(!png.is_empty());
    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!(decoded.width(), 600);
    assert_eq!(decoded.height(), 400);
}

#[test]
fn render_handles_empty_series() {
    let config = ChartConfig {
        title: "Empty".to_string(),
        tooltip: Tooltip::axis(),
        y_axis: ValueAxis::auto(),
        series: vec![SeriesConfig {
            name: "Nothing".to_string(),
            show_symbol: false,
            data: Vec::new(),
        }],
    };

    assert!(render_chart(&config, &Theme::default(), 320, 240).is_ok());
}

#[test]
fn render_handles_constant_data_with_auto_axis() {
    // A flat series must not produce a degenerate y range.
    let config = ChartConfig {
        title: "Flat".to_string(),
        tooltip: Tooltip::axis(),
        y_axis: ValueAxis::auto(),
        series: vec![SeriesConfig {
            name: "Flat".to_string(),
            show_symbol: false,
            data: crate::generate::constant(60, 0.0),
        }],
    };

    assert!(render_chart(&config, &Theme::default(), 320, 240).is_ok());
}

#[test]
fn cached_render_is_stable() {
    let config = sample_config(2);
    let first = render_chart(&config, &Theme::default(), 400, 300).unwrap();
    let second = render_chart(&config, &Theme::default(), 400, 300).unwrap();
    assert_eq!(first, second);
}

#[test]
fn changed_axis_bounds_change_the_render() {
    // Same data, different fixed Y bounds: the renders must not be served
    // from the same cache slot.
    let mut config = sample_config(8);
    let narrow = render_chart(&config, &Theme::default(), 400, 300).unwrap();

    config.y_axis = ValueAxis::bounded(0.0, 1000.0);
    let wide = render_chart(&config, &Theme::default(), 400, 300).unwrap();

    assert_ne!(narrow, wide);
}

#[test]
fn changed_theme_styling_changes_the_render() {
    let config = sample_config(9);
    let smoothed = render_chart(&config, &Theme::default(), 400, 300).unwrap();

    let mut theme = Theme::default();
    theme.smooth = false;
    theme.line_width = 1;
    let plain = render_chart(&config, &theme, 400, 300).unwrap();

    assert_ne!(smoothed, plain);
}

#[test]
fn adaptive_range_damps_outliers() {
    let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0]; // 100.0 is an outlier
    let (min, max) = calculate_adaptive_range(&values);

    assert_eq!(min, 0.0);
    assert!(max < 100.0); // Max should be scaled down due to outlier
    assert!(max > 5.0); // But should still be greater than the normal range
}

#[test]
fn adaptive_range_shows_tame_peaks_outright() {
    let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let (min, max) = calculate_adaptive_range(&values);

    assert_eq!(min, 0.0);
    assert!(max >= 5.0 && max < 6.0); // No outlier, so the true max plus headroom
}

#[test]
fn adaptive_range_of_empty_data() {
    assert_eq!(calculate_adaptive_range(&[]), (0.0, 1.0));
}

#[test]
fn backend_init_requires_registered_theme() {
    let mut backend = PngBackend::new();
    let result = backend.init("cpu", "missing-theme", sample_config(3));
    assert!(matches!(result, Err(PlotError::UnknownTheme(_))));
}

#[test]
fn backend_resize_requires_mounted_container() {
    let mut backend = PngBackend::new();
    backend.register_theme(DEFAULT_THEME, Theme::default());
    let result = backend.resize("nowhere", 300, 200);
    assert!(matches!(result, Err(PlotError::UnknownContainer(_))));
}

#[test]
fn backend_init_is_idempotent_per_container() {
    let mut backend = PngBackend::new();
    backend.register_theme(DEFAULT_THEME, Theme::default());

    backend.init("cpu", DEFAULT_THEME, sample_config(4)).unwrap();
    let first = backend.rendered("cpu").unwrap().to_vec();

    backend.init("cpu", DEFAULT_THEME, sample_config(5)).unwrap();
    let second = backend.rendered("cpu").unwrap().to_vec();

    assert_eq!(backend.mounted_count(), 1);
    assert_ne!(first, second);
}

#[test]
fn backend_resize_rerenders_at_new_size() {
    let mut backend = PngBackend::new();
    backend.register_theme(DEFAULT_THEME, Theme::default());
    backend.init("cpu", DEFAULT_THEME, sample_config(6)).unwrap();
    assert_eq!(backend.size("cpu"), Some(DEFAULT_CHART_SIZE));

    backend.resize("cpu", 300, 200).unwrap();
    assert_eq!(backend.size("cpu"), Some((300, 200)));

    let decoded = image::load_from_memory(backend.rendered("cpu").unwrap()).unwrap();
    assert_eq!(decoded.width(), 300);
    assert_eq!(decoded.height(), 200);
}

#[test]
fn default_theme_is_declarative_data() {
    let theme = Theme::default();
    let value = serde_json::to_value(&theme).unwrap();

    assert_eq!(value["palette"].as_array().unwrap().len(), 8);
    assert_eq!(value["background_color"]["r"], 0x00);
    assert_eq!(value["background_color"]["g"], 0x24);
    assert_eq!(value["background_color"]["b"], 0x38);
    assert_eq!(value["line_width"], 3);

    let back: Theme = serde_json::from_value(value).unwrap();
    assert_eq!(back, theme);
}
