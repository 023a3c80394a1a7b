use eframe::egui;

use crate::data::model::PlotSpec;
use crate::error::RenderError;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Interactive preview of a single chart.  Nothing is written to disk.
pub struct PreviewApp {
    pub spec: PlotSpec,
}

impl PreviewApp {
    pub fn new(spec: PlotSpec) -> Self {
        Self { spec }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.spec);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::series_plot(ui, &self.spec);
        });
    }
}

/// Open a window for `spec` and block until the user closes it.
pub fn show(spec: PlotSpec) -> Result<(), RenderError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    let title = spec.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(PreviewApp::new(spec)))),
    )
    .map_err(|e| RenderError::Window(e.to_string()))
}
