use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::plotting::PngBackend;
use crate::types::TooltipTrigger;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn builds_six_charts_in_display_order() {
    let charts = build_charts(&mut rng());

    let containers: Vec<&str> = charts.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(containers, CONTAINERS);
}

#[test]
fn every_series_has_one_sample_per_minute() {
    for (container, config) in build_charts(&mut rng()) {
        for series in &config.series {
            assert_eq!(series.data.len(), DATA_POINTS, "{container}/{}", series.name);
            for pair in series.data.windows(2) {
                assert_eq!(
                    (pair[1].timestamp - pair[0].timestamp).num_seconds(),
                    60,
                    "{container}/{}",
                    series.name
                );
            }
        }
    }
}

#[test]
fn load_average_chart_has_three_windows() {
    let charts = build_charts(&mut rng());
    let (_, load) = &charts[0];

    assert_eq!(load.series.len(), 3);
    assert_eq!(load.series[0].name, "1-min Average");
    assert_eq!(load.series[1].name, "5-min Average");
    assert_eq!(load.series[2].name, "15-min Average");
    assert_eq!(load.tooltip.trigger, TooltipTrigger::Axis);
    assert!(load.tooltip.axis_pointer.unwrap().cross);
    // Load bounds adapt to the data.
    assert_eq!(load.y_axis.min, None);
    assert_eq!(load.y_axis.max, None);
}

#[test]
fn availability_bounds_are_fixed_regardless_of_data() {
    let charts = build_charts(&mut rng());
    let (container, availability) = &charts[5];

    assert_eq!(container, "network_availability");
    assert_eq!(availability.y_axis.min, Some(90.0));
    assert_eq!(availability.y_axis.max, Some(100.0));
    for sample in &availability.series[0].data {
        assert_eq!(sample.value, 100.0);
    }
}

#[test]
fn utilization_charts_are_percent_bounded() {
    let charts = build_charts(&mut rng());
    for index in [1, 2, 3] {
        let (container, config) = &charts[index];
        assert_eq!(config.y_axis.min, Some(0.0), "{container}");
        assert_eq!(config.y_axis.max, Some(100.0), "{container}");
    }

    let (_, latency) = &charts[4];
    assert_eq!(latency.y_axis.max, Some(500.0));
}

#[test]
fn initialize_mounts_every_chart() {
    let mut backend = PngBackend::new();
    let containers = initialize_dashboard(&mut backend, &mut rng()).unwrap();

    assert_eq!(containers, CONTAINERS);
    assert_eq!(backend.mounted_count(), CONTAINERS.len());
    for container in &containers {
        let png = backend.rendered(container).unwrap();
        assert!(!png.is_empty(), "{container}");
    }
}
