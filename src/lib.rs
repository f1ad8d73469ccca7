//! # System Monitoring Dashboard
//!
//! `sysdash` renders a static monitoring dashboard: it fabricates plausible
//! time-series values (CPU, memory, network throughput/latency/availability,
//! load averages) at startup, assembles a declarative chart configuration
//! for each metric, and draws them through a themed chart backend. There is
//! no data collection and no persistence; every launch generates fresh data.
//!
//! ## Features
//!
//! - Four series-generation strategies (uniform random, constant,
//!   ramp/sustain/decay) over a shared one-minute time grid
//! - Declarative chart configurations: titles, axis bounds, tooltip
//!   descriptors, named series
//! - A serializable visual theme registered by name before any chart uses it
//! - A pluggable [`ChartBackend`] so tests run without a window
//! - An egui shell that re-lays every chart out on window resize
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::{Arc, Mutex};
//! use eframe::NativeOptions;
//! use sysdash::app::{App, AppWrapper};
//!
//! let app = Arc::new(Mutex::new(App::new().unwrap()));
//!
//! eframe::run_native(
//!     "System Monitoring",
//!     NativeOptions::default(),
//!     Box::new(move |_cc| Ok(Box::new(AppWrapper { app }))),
//! ).unwrap();
//! ```

pub mod app;
pub mod dashboard;
pub mod generate;
pub mod plotting;
pub mod types;

// Re-export main types for convenience
pub use app::App as DashboardApp;
pub use plotting::{ChartBackend, PlotError, PngBackend, Theme};
pub use types::{ChartConfig, Sample, Series};
