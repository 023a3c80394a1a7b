use std::ops::Range;
use std::path::PathBuf;

use palette::Srgb;

// ---------------------------------------------------------------------------
// DataSeries – the numeric content of one file
// ---------------------------------------------------------------------------

/// Ordered `(x, y)` pairs in file line order.
///
/// Order is meaningful (usually a time series); nothing is sorted or
/// de-duplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSeries {
    pub points: Vec<(f64, f64)>,
}

/// Basic statistics over the y column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl DataSeries {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        DataSeries { points }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(x, _)| x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, y)| y)
    }

    /// `min..max` of the x values, or `None` for an empty series.
    pub fn x_range(&self) -> Option<Range<f64>> {
        min_max(self.xs())
    }

    /// `min..max` of the y values, or `None` for an empty series.
    pub fn y_range(&self) -> Option<Range<f64>> {
        min_max(self.ys())
    }

    pub fn summary(&self) -> Option<SeriesSummary> {
        let range = self.y_range()?;
        let sum: f64 = self.ys().sum();
        Some(SeriesSummary {
            count: self.len(),
            min: range.start,
            max: range.end,
            mean: sum / self.len() as f64,
        })
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<Range<f64>> {
    values.fold(None, |acc: Option<Range<f64>>, v| match acc {
        None => Some(v..v),
        Some(r) => Some(r.start.min(v)..r.end.max(v)),
    })
}

// ---------------------------------------------------------------------------
// SeriesHeader – `@` directives carried by the file itself
// ---------------------------------------------------------------------------

/// Labels declared by the file's own `@ title` / `@ xaxis label` /
/// `@ yaxis label` directives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesHeader {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

// ---------------------------------------------------------------------------
// LabelPair / PlotSpec – what the renderer consumes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPair {
    pub x: String,
    pub y: String,
}

impl LabelPair {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        LabelPair {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Everything needed to draw one chart.  Built and dropped per file.
#[derive(Debug, Clone)]
pub struct PlotSpec {
    pub series: DataSeries,
    pub labels: LabelPair,
    pub title: String,
    pub color: Srgb<u8>,
    /// Destination image; unused by the interactive preview.
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_of_empty_series_are_none() {
        let series = DataSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.x_range(), None);
        assert_eq!(series.y_range(), None);
        assert_eq!(series.summary(), None);
    }

    #[test]
    fn ranges_ignore_line_order() {
        let series = DataSeries::new(vec![(2.0, -1.0), (0.0, 4.0), (1.0, 1.0)]);
        assert_eq!(series.x_range(), Some(0.0..2.0));
        assert_eq!(series.y_range(), Some(-1.0..4.0));
    }

    #[test]
    fn summary_reports_mean() {
        let series = DataSeries::new(vec![(0.0, 1.0), (1.0, 2.0), (2.0, 6.0)]);
        let summary = series.summary().unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 6.0);
        assert!((summary.mean - 3.0).abs() < 1e-12);
    }
}
