use eframe::App as EApp;
use egui::TextureHandle;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dashboard;
use crate::plotting::{ChartBackend, PlotError, PngBackend, DEFAULT_CHART_SIZE};

/// Main application state
pub struct App {
    /// Offscreen renderer holding every mounted chart
    pub backend: PngBackend,
    /// Container ids in display order
    pub containers: Vec<String>,
    /// Decoded chart textures, keyed by container id
    pub textures: HashMap<String, TextureHandle>,
    /// Size every chart is currently rendered at
    pub chart_size: (u32, u32),
    pub update_needed: bool,
    pub error_message: Option<String>,
}

impl App {
    /// Generate all series and mount the six charts. The data is fixed for
    /// the lifetime of the app; only the render size changes afterwards.
    pub fn new() -> Result<Self, PlotError> {
        let mut rng = StdRng::from_entropy();
        Self::with_rng(&mut rng)
    }

    /// Like [`App::new`] with a caller-provided random source, so tests can
    /// seed it.
    pub fn with_rng(rng: &mut impl Rng) -> Result<Self, PlotError> {
        let mut backend = PngBackend::new();
        let containers = dashboard::initialize_dashboard(&mut backend, rng)?;
        Ok(Self {
            backend,
            containers,
            textures: HashMap::new(),
            chart_size: DEFAULT_CHART_SIZE,
            update_needed: true,
            error_message: None,
        })
    }

    /// Re-layout every chart at `size`. Each chart resizes independently; a
    /// failure on one is reported but does not stop the others.
    pub fn resize_charts(&mut self, size: (u32, u32)) {
        if size == self.chart_size || size.0 == 0 || size.1 == 0 {
            return;
        }
        self.chart_size = size;
        // A fresh pass supersedes any error from an earlier layout.
        self.error_message = None;
        for container in &self.containers {
            if let Err(e) = self.backend.resize(container, size.0, size.1) {
                eprintln!("Resize error for {}: {}", container, e);
                self.error_message = Some(e.to_string());
            }
        }
        self.update_needed = true;
    }
}

/// Thread-safe wrapper around App for use with eframe
pub struct AppWrapper {
    pub app: Arc<Mutex<App>>,
}

impl EApp for AppWrapper {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Ok(mut app) = self.app.lock() {
            super::ui::draw_ui(&mut app, ctx);
        } else {
            eprintln!("Failed to acquire app lock in update");
        }
    }
}
