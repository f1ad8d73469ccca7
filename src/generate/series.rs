//! Synthetic series generation strategies.
//!
//! Each strategy produces a fixed-length [`Series`] whose timestamps count
//! back from "now" in one-minute steps, the most recent sample last. All
//! randomness comes through the caller's [`Rng`], so callers that need
//! reproducible output can seed a `StdRng`.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::types::{Sample, Series};

/// Spacing between consecutive samples: one simulated minute.
const SAMPLE_INTERVAL_SECS: i64 = 60;

/// Timestamps for `data_points` samples ending at `now`, one minute apart
/// and strictly increasing. Shared by every generation strategy.
pub fn sample_times(now: DateTime<Utc>, data_points: usize) -> Vec<DateTime<Utc>> {
    (0..data_points)
        .map(|i| now - Duration::seconds(SAMPLE_INTERVAL_SECS * (data_points - 1 - i) as i64))
        .collect()
}

/// Each value drawn independently and uniformly from
/// `[min_value, max_value]`, rounded to `decimals` fractional digits.
/// No temporal correlation between samples.
pub fn uniform_random(
    rng: &mut impl Rng,
    data_points: usize,
    min_value: f64,
    max_value: f64,
    decimals: u32,
) -> Series {
    let factor = 10f64.powi(decimals as i32);
    sample_times(Utc::now(), data_points)
        .into_iter()
        .map(|timestamp| {
            let raw = rng.gen_range(min_value..=max_value);
            Sample {
                timestamp,
                value: (raw * factor).round() / factor,
            }
        })
        .collect()
}

/// Every sample holds `value` exactly. Models an "always up" signal.
pub fn constant(data_points: usize, value: f64) -> Series {
    sample_times(Utc::now(), data_points)
        .into_iter()
        .map(|timestamp| Sample { timestamp, value })
        .collect()
}

/// Rise toward `peak_value`, hold near it, then decay toward zero.
///
/// The index range splits into three phases (boundaries truncate
/// `n * 0.3` / `n * 0.7` to indices):
/// - ramp: exponential-style convergence, `load += (peak - load) * (u * 0.1)`
/// - sustain: `peak` plus a jitter in `[-0.05, 0.05]`, or exactly `peak`
///   when `stable` is set
/// - decay: multiply by a factor in `[0.90, 0.95]` each step
///
/// The emitted value is floored at zero on every step; the running
/// accumulator is left untouched.
pub fn ramp_sustain_decay(
    rng: &mut impl Rng,
    data_points: usize,
    initial_value: f64,
    peak_value: f64,
    stable: bool,
) -> Series {
    let ramp_end = (data_points as f64 * 0.3) as usize;
    let sustain_end = (data_points as f64 * 0.7) as usize;

    let mut load = initial_value;
    sample_times(Utc::now(), data_points)
        .into_iter()
        .enumerate()
        .map(|(i, timestamp)| {
            if i < ramp_end {
                load += (peak_value - load) * (rng.gen::<f64>() * 0.1);
            } else if i < sustain_end {
                let jitter = if stable {
                    0.0
                } else {
                    rng.gen::<f64>() * 0.1 - 0.05
                };
                load = peak_value + jitter;
            } else {
                load *= 0.95 - rng.gen::<f64>() * 0.05;
            }
            Sample {
                timestamp,
                value: load.max(0.0),
            }
        })
        .collect()
}
