use eframe::egui::{self, RichText, Ui};

use crate::data::model::PlotSpec;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Title and a short summary of the series.
pub fn top_bar(ui: &mut Ui, spec: &PlotSpec) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new(&spec.title).strong());
        ui.separator();

        match spec.series.summary() {
            Some(s) => {
                ui.label(format!("{} points", s.count));
                ui.separator();
                ui.label(format!(
                    "min {:.4}   max {:.4}   mean {:.4}",
                    s.min, s.max, s.mean
                ));
            }
            None => {
                ui.label("no data points");
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Next ▶").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    });
}
