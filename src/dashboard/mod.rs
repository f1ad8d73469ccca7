//! Chart assembly for the six monitored metrics.
//!
//! Builds one declarative [`ChartConfig`] per metric from freshly generated
//! series, then mounts them all on a [`ChartBackend`] in a single startup
//! pass: theme registration first, then one `init` per container. Errors
//! propagate and halt the sequence.

use rand::Rng;

use crate::generate::{constant, ramp_sustain_decay, uniform_random};
use crate::plotting::{ChartBackend, PlotError, Theme, DEFAULT_THEME};
use crate::types::{ChartConfig, SeriesConfig, Tooltip, ValueAxis};

#[cfg(test)]
mod tests;

/// Samples per series: one per simulated minute over the last hour.
pub const DATA_POINTS: usize = 60;

/// Container ids, in display order.
pub const CONTAINERS: [&str; 6] = [
    "load_average",
    "cpu_utilization",
    "memory_utilization",
    "network_throughput",
    "network_latency",
    "network_availability",
];

fn load_average_config(rng: &mut impl Rng) -> ChartConfig {
    // One series per averaging window; shorter windows peak higher.
    let windows = [
        ("1-min Average", 0.7),
        ("5-min Average", 0.5),
        ("15-min Average", 0.3),
    ];
    ChartConfig {
        title: "System Load Average".to_string(),
        tooltip: Tooltip::axis_with_cross(),
        y_axis: ValueAxis::auto(),
        series: windows
            .iter()
            .map(|(name, peak)| SeriesConfig {
                name: (*name).to_string(),
                show_symbol: false,
                data: ramp_sustain_decay(rng, DATA_POINTS, 0.2, *peak, false),
            })
            .collect(),
    }
}

fn cpu_utilization_config(rng: &mut impl Rng) -> ChartConfig {
    ChartConfig {
        title: "CPU Utilization (%)".to_string(),
        tooltip: Tooltip::axis(),
        y_axis: ValueAxis::bounded(0.0, 100.0),
        series: vec![SeriesConfig {
            name: "CPU".to_string(),
            show_symbol: true,
            data: ramp_sustain_decay(rng, DATA_POINTS, 10.0, 90.0, false),
        }],
    }
}

fn memory_utilization_config(rng: &mut impl Rng) -> ChartConfig {
    ChartConfig {
        title: "Memory Utilization (%)".to_string(),
        tooltip: Tooltip::axis(),
        y_axis: ValueAxis::bounded(0.0, 100.0),
        series: vec![SeriesConfig {
            name: "Memory".to_string(),
            show_symbol: true,
            data: ramp_sustain_decay(rng, DATA_POINTS, 20.0, 80.0, false),
        }],
    }
}

fn network_throughput_config(rng: &mut impl Rng) -> ChartConfig {
    ChartConfig {
        title: "Network Throughput (Mbps)".to_string(),
        tooltip: Tooltip::axis_no_animation(),
        y_axis: ValueAxis::bounded(0.0, 100.0),
        series: vec![SeriesConfig {
            name: "Throughput".to_string(),
            show_symbol: false,
            data: ramp_sustain_decay(rng, DATA_POINTS, 20.0, 100.0, false),
        }],
    }
}

fn network_latency_config(rng: &mut impl Rng) -> ChartConfig {
    ChartConfig {
        title: "Network Latency (ms)".to_string(),
        tooltip: Tooltip::axis_no_animation(),
        y_axis: ValueAxis::bounded(0.0, 500.0),
        series: vec![SeriesConfig {
            name: "Latency".to_string(),
            show_symbol: false,
            // Latency varies between 50 ms and 500 ms, whole milliseconds
            data: uniform_random(rng, DATA_POINTS, 50.0, 500.0, 0),
        }],
    }
}

fn network_availability_config(_rng: &mut impl Rng) -> ChartConfig {
    ChartConfig {
        title: "Network Availability (%)".to_string(),
        tooltip: Tooltip::axis_no_animation(),
        // Bounds stay [90, 100] no matter what the data does.
        y_axis: ValueAxis::bounded(90.0, 100.0),
        series: vec![SeriesConfig {
            name: "Availability".to_string(),
            show_symbol: false,
            data: constant(DATA_POINTS, 100.0),
        }],
    }
}

/// Build the full set of chart configurations, keyed by container id and in
/// display order.
pub fn build_charts(rng: &mut impl Rng) -> Vec<(String, ChartConfig)> {
    vec![
        ("load_average".to_string(), load_average_config(rng)),
        ("cpu_utilization".to_string(), cpu_utilization_config(rng)),
        (
            "memory_utilization".to_string(),
            memory_utilization_config(rng),
        ),
        (
            "network_throughput".to_string(),
            network_throughput_config(rng),
        ),
        ("network_latency".to_string(), network_latency_config(rng)),
        (
            "network_availability".to_string(),
            network_availability_config(rng),
        ),
    ]
}

/// Register the default theme and mount every chart on `backend`. Returns
/// the container ids in display order.
pub fn initialize_dashboard<B: ChartBackend>(
    backend: &mut B,
    rng: &mut impl Rng,
) -> Result<Vec<String>, PlotError> {
    // The theme must exist before any chart references it by name.
    backend.register_theme(DEFAULT_THEME, Theme::default());

    let mut containers = Vec::with_capacity(CONTAINERS.len());
    for (container, config) in build_charts(rng) {
        backend.init(&container, DEFAULT_THEME, config)?;
        containers.push(container);
    }
    Ok(containers)
}
