//! # Common Types
//!
//! This module contains the common types used throughout the application for
//! representing time-series data and the declarative chart configurations
//! built from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One measured point: an absolute timestamp and a value in the metric's
/// unit (%, Mbps, ms, ...).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// When the value was (nominally) observed
    pub timestamp: DateTime<Utc>,
    /// The observed value, in the metric's own unit
    pub value: f64,
}

/// An ordered run of samples for one metric, ascending by timestamp.
pub type Series = Vec<Sample>;

/// What causes a chart tooltip to appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipTrigger {
    /// Tooltip follows the x axis and shows every series at that position
    Axis,
    /// Tooltip is shown for the hovered data point only
    Item,
}

/// Axis-pointer styling attached to a tooltip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisPointer {
    /// Draw crosshair lines through the hovered position
    pub cross: bool,
    /// Animate pointer movement
    pub animation: bool,
}

/// Declarative tooltip behavior for one chart.
///
/// Carried as data so an interactive backend can honor it; the static PNG
/// backend renders nothing for it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub trigger: TooltipTrigger,
    pub axis_pointer: Option<AxisPointer>,
}

impl Tooltip {
    /// Axis-triggered tooltip with no pointer decoration.
    pub fn axis() -> Self {
        Self {
            trigger: TooltipTrigger::Axis,
            axis_pointer: None,
        }
    }

    /// Axis-triggered tooltip with a crosshair pointer.
    pub fn axis_with_cross() -> Self {
        Self {
            trigger: TooltipTrigger::Axis,
            axis_pointer: Some(AxisPointer {
                cross: true,
                animation: true,
            }),
        }
    }

    /// Axis-triggered tooltip with pointer animation disabled.
    pub fn axis_no_animation() -> Self {
        Self {
            trigger: TooltipTrigger::Axis,
            axis_pointer: Some(AxisPointer {
                cross: false,
                animation: false,
            }),
        }
    }
}

/// Value-axis declaration for the Y axis. `None` bounds are computed
/// adaptively from the plotted data at render time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ValueAxis {
    /// Both bounds derived from the data.
    pub fn auto() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Fixed bounds, applied regardless of the plotted data's range.
    pub fn bounded(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

/// One named series bound to a chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Legend / tooltip name for the series
    pub name: String,
    /// Draw a marker at each sample in addition to the line
    pub show_symbol: bool,
    /// The data to plot
    pub data: Series,
}

/// The declarative description of one chart: title, axes, tooltip behavior
/// and the series to plot. Built once at startup and never mutated after the
/// chart is mounted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Human-readable chart title
    pub title: String,
    /// Tooltip behavior descriptor
    pub tooltip: Tooltip,
    /// Y-axis bounds; the X axis is always a time axis
    pub y_axis: ValueAxis,
    /// The series plotted in this chart, in palette order
    pub series: Vec<SeriesConfig>,
}
