mod series;

pub use series::{constant, ramp_sustain_decay, sample_times, uniform_random};
