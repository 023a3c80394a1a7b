use std::num::ParseIntError;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use xvg_plot::driver::{self, FailurePolicy, LabelSource, Options, OutputMode};

fn size_parser(size: &str) -> Result<(u32, u32), String> {
    let (w, h) = size
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{size}'"))?;
    let parse = |v: &str| -> Result<u32, String> {
        v.trim()
            .parse()
            .map_err(|e: ParseIntError| format!("'{v}': {e}"))
    };
    Ok((parse(w)?, parse(h)?))
}

/// Plot every .xvg file in a directory as a line chart.
///
/// Without arguments, every `*.xvg` in the current directory is written to
/// `<name>.png` next to it.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Directory to scan.
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Open an interactive window per file instead of writing images.
    #[arg(long)]
    show: bool,

    /// Input file extension, without the dot.
    #[arg(long, default_value = "xvg")]
    extension: String,

    /// Where axis labels come from.
    #[arg(long, value_enum, default_value_t = LabelSource::Filename)]
    labels: LabelSource,

    /// Seed for the chart color choice. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Image size as WIDTHxHEIGHT in pixels.
    #[arg(long, value_parser = size_parser, default_value = "1000x600")]
    size: (u32, u32),

    /// Stop at the first file that fails instead of logging and continuing.
    #[arg(long)]
    fail_fast: bool,
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        Options {
            dir: args.dir,
            extension: args.extension,
            mode: if args.show {
                OutputMode::Window
            } else {
                OutputMode::Png { size: args.size }
            },
            labels: args.labels,
            failure: if args.fail_fast {
                FailurePolicy::FailFast
            } else {
                FailurePolicy::Continue
            },
            seed: args.seed,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::from(Args::parse());

    let report = driver::run(&options)
        .with_context(|| format!("plotting files in {}", options.dir.display()))?;

    log::info!(
        "Done: {} file(s) processed, {} chart(s) written, {} failed",
        report.processed,
        report.outputs.len(),
        report.failed.len()
    );

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use xvg_plot::render::DEFAULT_SIZE;

    #[test]
    fn size_accepts_width_by_height() {
        assert_eq!(size_parser("800x600"), Ok((800, 600)));
        assert_eq!(size_parser("1024X768"), Ok((1024, 768)));
    }

    #[test]
    fn size_rejects_garbage() {
        assert!(size_parser("800").is_err());
        assert!(size_parser("axb").is_err());
    }

    #[test]
    fn no_arguments_means_png_in_cwd() {
        let options = Options::from(Args::parse_from(["xvg-plot"]));
        assert_eq!(options.dir, PathBuf::from("."));
        assert_eq!(options.extension, "xvg");
        assert_eq!(options.mode, OutputMode::Png { size: DEFAULT_SIZE });
        assert_eq!(options.labels, LabelSource::Filename);
        assert_eq!(options.failure, FailurePolicy::Continue);
    }

    #[test]
    fn show_selects_window_mode() {
        let args = Args::parse_from(["xvg-plot", "--show", "--fail-fast", "runs"]);
        let options = Options::from(args);
        assert_eq!(options.mode, OutputMode::Window);
        assert_eq!(options.failure, FailurePolicy::FailFast);
        assert_eq!(options.dir, PathBuf::from("runs"));
    }
}
