use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::app;
use crate::color::ColorPicker;
use crate::data::loader::{self, SeriesFile};
use crate::data::model::PlotSpec;
use crate::error::Error;
use crate::labels;
use crate::render::{self, DEFAULT_SIZE};
use crate::rng::SimpleRng;

// ---------------------------------------------------------------------------
// Run options
// ---------------------------------------------------------------------------

/// Where charts go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// `<stem>.png` next to each input.
    Png { size: (u32, u32) },
    /// One blocking preview window per file.
    Window,
}

/// Where axis labels come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LabelSource {
    /// Keyword lookup on the file name.
    #[default]
    Filename,
    /// The file's own `@` directives, falling back to the file name.
    Header,
}

/// What to do when one file fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the error and move on to the next file.
    #[default]
    Continue,
    /// Stop the run at the first error.
    FailFast,
}

#[derive(Debug, Clone)]
pub struct Options {
    pub dir: PathBuf,
    /// Extension without the leading dot.
    pub extension: String,
    pub mode: OutputMode,
    pub labels: LabelSource,
    pub failure: FailurePolicy,
    /// Seed for color selection; `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            extension: "xvg".to_string(),
            mode: OutputMode::Png { size: DEFAULT_SIZE },
            labels: LabelSource::default(),
            failure: FailurePolicy::default(),
            seed: None,
        }
    }
}

/// Outcome of a full run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub processed: usize,
    /// Charts written, in processing order.
    pub outputs: Vec<PathBuf>,
    /// Files that failed, with the rendered error chain.
    pub failed: Vec<(PathBuf, String)>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Regular files in `dir` whose name ends with `.<extension>`, sorted by name.
pub fn discover(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, Error> {
    let discovery = |source| Error::Discovery {
        path: dir.to_path_buf(),
        source,
    };
    let suffix = format!(".{extension}");

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(discovery)? {
        let path = entry.map_err(discovery)?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            log::warn!("Skipping {}: file name is not valid UTF-8", path.display());
            continue;
        };
        if !name.ends_with(&suffix) {
            continue;
        }
        if !path.is_file() {
            log::trace!("Skipping {}: not a regular file", path.display());
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// Assemble the chart description for one parsed file.
pub fn build_spec(
    path: &Path,
    file: SeriesFile,
    source: LabelSource,
    colors: &mut ColorPicker,
) -> PlotSpec {
    let name = file_name(path);
    let (labels, title) = match source {
        LabelSource::Filename => (labels::resolve(&name), None),
        LabelSource::Header => (
            labels::resolve_with_header(&name, &file.header),
            file.header.title,
        ),
    };

    PlotSpec {
        series: file.series,
        labels,
        title: title.unwrap_or_else(|| format!("Plot of {name}")),
        color: colors.pick(),
        output: render::output_path(path),
    }
}

/// Parse, label and render a single file.
///
/// Returns the written image path, or `None` in window mode.
pub fn process_file(
    path: &Path,
    options: &Options,
    colors: &mut ColorPicker,
) -> Result<Option<PathBuf>, Error> {
    let file = loader::load_file(path).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match file.series.summary() {
        Some(s) => log::debug!(
            "{}: {} points, y in [{}, {}], mean {}",
            path.display(),
            s.count,
            s.min,
            s.max,
            s.mean
        ),
        None => log::warn!("{}: no data points", path.display()),
    }

    let spec = build_spec(path, file, options.labels, colors);
    let render_err = |source| Error::Render {
        path: path.to_path_buf(),
        source,
    };

    match options.mode {
        OutputMode::Png { size } => {
            render::render_png(&spec, size).map_err(render_err)?;
            Ok(Some(spec.output))
        }
        OutputMode::Window => {
            app::show(spec).map_err(render_err)?;
            Ok(None)
        }
    }
}

/// Process every eligible file in `options.dir`.
///
/// Only a discovery failure, or any failure under
/// [`FailurePolicy::FailFast`], returns `Err`.
pub fn run(options: &Options) -> Result<RunReport, Error> {
    let files = discover(&options.dir, &options.extension)?;
    if files.is_empty() {
        log::warn!(
            "No .{} files found in {}",
            options.extension,
            options.dir.display()
        );
    }

    let rng = options.seed.map_or_else(SimpleRng::from_clock, SimpleRng::new);
    let mut colors = ColorPicker::new(rng);
    let mut report = RunReport::default();

    for path in files {
        let name = file_name(&path);
        log::info!("Processing {name}...");

        match process_file(&path, options, &mut colors) {
            Ok(Some(output)) => {
                log::info!("Saved {}", output.display());
                report.outputs.push(output);
            }
            Ok(None) => log::info!("Closed {name}"),
            Err(e) if options.failure == FailurePolicy::FailFast => return Err(e),
            Err(e) => {
                let msg = format!("{:#}", anyhow::Error::new(e));
                log::error!("{msg}");
                report.failed.push((path.clone(), msg));
            }
        }
        report.processed += 1;
    }

    Ok(report)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_series;

    #[test]
    fn spec_for_energy_file() {
        let file = parse_series("@ x\n0 1\n".as_bytes()).unwrap();
        let mut colors = ColorPicker::seeded(1);
        let spec = build_spec(
            Path::new("/tmp/energy.xvg"),
            file,
            LabelSource::Filename,
            &mut colors,
        );
        assert_eq!(spec.title, "Plot of energy.xvg");
        assert_eq!(spec.labels.y, "Energy (kJ/mol)");
        assert_eq!(spec.output, PathBuf::from("/tmp/energy.png"));
        assert!(colors.palette().contains(&spec.color));
    }

    #[test]
    fn header_source_uses_declared_title_and_labels() {
        let text = "@    title \"Backbone RMSD\"\n@    yaxis  label \"RMSD (Å)\"\n0 1\n";
        let file = parse_series(text.as_bytes()).unwrap();
        let mut colors = ColorPicker::seeded(1);
        let spec = build_spec(Path::new("rmsd.xvg"), file, LabelSource::Header, &mut colors);
        assert_eq!(spec.title, "Backbone RMSD");
        assert_eq!(spec.labels.x, "Time (ps)");
        assert_eq!(spec.labels.y, "RMSD (Å)");
    }

    #[test]
    fn header_is_ignored_for_filename_source() {
        let file = parse_series("@ title \"T\"\n@ yaxis label \"Y\"\n".as_bytes()).unwrap();
        let mut colors = ColorPicker::seeded(1);
        let spec = build_spec(
            Path::new("weird123.xvg"),
            file,
            LabelSource::Filename,
            &mut colors,
        );
        assert_eq!(spec.title, "Plot of weird123.xvg");
        assert_eq!(spec.labels.y, "Y-axis");
    }
}
