use std::ops::Range;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::data::model::PlotSpec;
use crate::error::RenderError;

/// Default image size in pixels (10 × 6 inches at 100 dpi).
pub const DEFAULT_SIZE: (u32, u32) = (1000, 600);

/// Relative padding added above and below the y data.
const Y_MARGIN: f64 = 0.05;

/// Largest magnitude kept on an axis; beyond it `end - start` can overflow.
const MAX_BOUND: f64 = f64::MAX / 2.0;

// ---------------------------------------------------------------------------
// Output naming
// ---------------------------------------------------------------------------

/// `<dir>/<name without its last extension>.png`
///
/// `run.1.rmsd.xvg` becomes `run.1.rmsd.png`; only the final extension is
/// replaced.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("png")
}

// ---------------------------------------------------------------------------
// PNG rendering
// ---------------------------------------------------------------------------

/// Draw `spec` and write it to `spec.output`.
///
/// The bitmap is released when this returns, so memory does not grow with
/// the number of files processed.
pub fn render_png(spec: &PlotSpec, size: (u32, u32)) -> Result<(), RenderError> {
    if let Some(dir) = spec.output.parent() {
        if !dir.as_os_str().is_empty() && !dir.is_dir() {
            return Err(RenderError::OutputDir(dir.to_path_buf()));
        }
    }

    if !fonts_available() {
        return Err(RenderError::Draw("no usable sans-serif font found".into()));
    }

    let root = BitMapBackend::new(&spec.output, size).into_drawing_area();
    panic::catch_unwind(AssertUnwindSafe(|| draw_chart(&root, spec)))
        .map_err(|_| RenderError::Draw("plotting backend panicked".into()))?
        .map_err(|e| RenderError::Draw(e.to_string()))?;
    root.present().map_err(|e| RenderError::Draw(e.to_string()))?;
    Ok(())
}

/// Whether plotters can lay out text with a sans-serif system font.
///
/// Checked once per process.
pub fn fonts_available() -> bool {
    static AVAILABLE: OnceLock<bool> = OnceLock::new();
    *AVAILABLE.get_or_init(|| {
        panic::catch_unwind(|| {
            FontDesc::new(FontFamily::SansSerif, 12.0, FontStyle::Normal)
                .box_size("0")
                .is_ok()
        })
        .unwrap_or(false)
    })
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &PlotSpec,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let color = RGBColor(spec.color.red, spec.color.green, spec.color.blue);
    let x_range = axis_range(spec.series.x_range(), 0.0);
    let y_range = axis_range(spec.series.y_range(), Y_MARGIN);

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(spec.labels.x.as_str())
        .y_desc(spec.labels.y.as_str())
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            spec.series.points.iter().copied(),
            color.stroke_width(2),
        ))?
        .label(spec.labels.y.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

/// Axis bounds for the data range.
///
/// Empty or non-finite data gets `0..1`; a single repeated value is widened
/// so the axis never collapses.  Bounds are clamped to `±f64::MAX / 2` so the
/// span stays finite, and padding that would overflow is dropped.
pub fn axis_range(data: Option<Range<f64>>, margin: f64) -> Range<f64> {
    let Some(r) = data else {
        return 0.0..1.0;
    };
    if !r.start.is_finite() || !r.end.is_finite() {
        return 0.0..1.0;
    }
    let r = r.start.clamp(-MAX_BOUND, MAX_BOUND)..r.end.clamp(-MAX_BOUND, MAX_BOUND);
    let span = r.end - r.start;
    if span == 0.0 {
        let pad = if r.start == 0.0 { 1.0 } else { r.start.abs() * 0.1 };
        return (r.start - pad)..(r.end + pad);
    }
    let pad = span * margin;
    let padded = (r.start - pad)..(r.end + pad);
    if (padded.end - padded.start).is_finite() {
        padded
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{DataSeries, LabelPair};
    use palette::Srgb;

    fn spec(points: Vec<(f64, f64)>, output: PathBuf) -> PlotSpec {
        PlotSpec {
            series: DataSeries::new(points),
            labels: LabelPair::new("Time (ps)", "Energy (kJ/mol)"),
            title: "Plot of energy.xvg".into(),
            color: Srgb::new(200, 30, 30),
            output,
        }
    }

    #[test]
    fn output_replaces_last_extension_only() {
        assert_eq!(output_path(Path::new("energy.xvg")), PathBuf::from("energy.png"));
        assert_eq!(
            output_path(Path::new("dir/run.1.rmsd.xvg")),
            PathBuf::from("dir/run.1.rmsd.png")
        );
    }

    #[test]
    fn empty_data_gets_unit_axis() {
        assert_eq!(axis_range(None, Y_MARGIN), 0.0..1.0);
        assert_eq!(axis_range(Some(f64::NEG_INFINITY..1.0), 0.0), 0.0..1.0);
    }

    #[test]
    fn flat_data_is_widened() {
        let r = axis_range(Some(5.0..5.0), 0.0);
        assert!(r.start < 5.0 && r.end > 5.0);
        let r = axis_range(Some(0.0..0.0), 0.0);
        assert_eq!(r, -1.0..1.0);
    }

    #[test]
    fn margin_scales_with_span() {
        let r = axis_range(Some(0.0..10.0), 0.1);
        assert_eq!(r, -1.0..11.0);
        assert_eq!(axis_range(Some(0.0..10.0), 0.0), 0.0..10.0);
    }

    #[test]
    fn huge_values_keep_a_finite_axis() {
        for margin in [0.0, Y_MARGIN] {
            let r = axis_range(Some(-1e308..1e308), margin);
            assert!(r.start.is_finite() && r.end.is_finite());
            assert!((r.end - r.start).is_finite());
            assert!(r.start < r.end);
        }
        let r = axis_range(Some(1.5e308..1.5e308), Y_MARGIN);
        assert!(r.start.is_finite() && r.end.is_finite() && r.start < r.end);
    }

    #[test]
    fn missing_output_dir_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("energy.png");
        let err = render_png(&spec(vec![(0.0, 1.0)], out), DEFAULT_SIZE).unwrap_err();
        assert!(matches!(err, RenderError::OutputDir(_)));
    }

    #[test]
    fn writes_png_of_requested_size() {
        if !fonts_available() {
            eprintln!("skipping: no sans-serif font installed");
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("energy.png");
        let points = vec![(0.0, -150.2), (1.0, -149.8), (2.0, -151.0)];
        render_png(&spec(points, out.clone()), (640, 480)).unwrap();
        assert_eq!(image::image_dimensions(&out).unwrap(), (640, 480));
    }

    #[test]
    fn empty_series_still_produces_a_chart() {
        if !fonts_available() {
            eprintln!("skipping: no sans-serif font installed");
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.png");
        render_png(&spec(Vec::new(), out.clone()), (320, 240)).unwrap();
        assert_eq!(image::image_dimensions(&out).unwrap(), (320, 240));
    }

    #[test]
    fn extreme_values_render_without_panicking() {
        if !fonts_available() {
            eprintln!("skipping: no sans-serif font installed");
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("extreme.png");
        let points = vec![(-1e308, -1e308), (1e308, 1e308)];
        render_png(&spec(points, out.clone()), (320, 240)).unwrap();
        assert!(out.is_file());
    }

    #[test]
    fn missing_font_is_an_error_not_a_panic() {
        if fonts_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("energy.png");
        let err = render_png(&spec(vec![(0.0, 1.0)], out), DEFAULT_SIZE).unwrap_err();
        assert!(matches!(err, RenderError::Draw(_)));
    }
}
