use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::data::model::PlotSpec;

// ---------------------------------------------------------------------------
// Series plot (central panel)
// ---------------------------------------------------------------------------

/// Render one series as a line chart in the central panel.
pub fn series_plot(ui: &mut Ui, spec: &PlotSpec) {
    let color = Color32::from_rgb(spec.color.red, spec.color.green, spec.color.blue);

    let points: PlotPoints = spec
        .series
        .points
        .iter()
        .map(|&(x, y)| [x, y])
        .collect();

    Plot::new("series_plot")
        .legend(Legend::default())
        .x_axis_label(spec.labels.x.clone())
        .y_axis_label(spec.labels.y.clone())
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(points)
                .name(&spec.labels.y)
                .color(color)
                .width(1.5);

            plot_ui.line(line);
        });
}
