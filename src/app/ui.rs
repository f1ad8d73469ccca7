use egui::Context;

use super::state::App;

const CHART_COLUMNS: usize = 2;
const CHART_ASPECT: f32 = 400.0 / 600.0;
const MIN_CHART_WIDTH: f32 = 240.0;

/// Draw the dashboard: a two-column grid of rendered charts that re-lays
/// itself out when the window size changes.
pub fn draw_ui(app: &mut App, ctx: &Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("System Monitoring");
        ui.separator();

        if let Some(error) = app.error_message.clone() {
            ui.colored_label(egui::Color32::RED, error);
        }

        // Window resize: fit two charts per row at the current panel width.
        let spacing = ui.spacing().item_spacing.x;
        let chart_width =
            ((ui.available_width() - spacing) / CHART_COLUMNS as f32).max(MIN_CHART_WIDTH);
        let chart_height = chart_width * CHART_ASPECT;
        app.resize_charts((chart_width as u32, chart_height as u32));

        let containers = app.containers.clone();
        egui::ScrollArea::vertical().show(ui, |ui| {
            for row in containers.chunks(CHART_COLUMNS) {
                ui.horizontal(|ui| {
                    for container in row {
                        if let Some(texture) = app.textures.get(container) {
                            ui.image(texture);
                        }
                    }
                });
            }
        });
    });

    // Refresh textures after a resize (or on the first frame).
    if app.update_needed {
        load_chart_textures(app, ctx);
        app.update_needed = false;
    }
}

fn load_chart_textures(app: &mut App, ctx: &Context) {
    for container in app.containers.clone() {
        let Some(png) = app.backend.rendered(&container) else {
            continue;
        };
        match image::load_from_memory(png) {
            Ok(decoded) => {
                let size = [decoded.width() as usize, decoded.height() as usize];
                let pixels = decoded.to_rgba8();
                let pixels = pixels.as_flat_samples();
                let texture = ctx.load_texture(
                    format!("chart_{container}"),
                    egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice()),
                    egui::TextureOptions::LINEAR,
                );
                app.textures.insert(container, texture);
            }
            Err(e) => eprintln!("Failed to decode chart image for {}: {}", container, e),
        }
    }
}
