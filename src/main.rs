//! System Monitoring Dashboard
//!
//! A GUI application that displays synthetic system and network metrics.

use std::sync::{Arc, Mutex};

use eframe::egui;

use sysdash::app::{App, AppWrapper};

fn main() -> anyhow::Result<()> {
    // Generate all series and mount the charts before opening the window;
    // a failure here is fatal.
    let app = App::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("System Monitoring"),
        ..Default::default()
    };

    let app = Arc::new(Mutex::new(app));
    eframe::run_native(
        "System Monitoring",
        options,
        Box::new(move |cc| {
            // Configure default fonts and style
            let fonts = egui::FontDefinitions::default();
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(AppWrapper { app }) as Box<dyn eframe::App>)
        }),
    )
    .map_err(|e| anyhow::anyhow!("error running application: {e}"))?;

    Ok(())
}
