use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Failure while reading a series file.  Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("reading input")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected two columns, found {found}")]
    MissingColumn { line: usize, found: usize },

    #[error("line {line}: '{token}' is not a number")]
    InvalidNumber { line: usize, token: String },
}

/// Failure while drawing or saving a chart.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("output directory {} does not exist", .0.display())]
    OutputDir(PathBuf),

    #[error("drawing chart: {0}")]
    Draw(String),

    #[error("preview window: {0}")]
    Window(String),
}

/// Per-file or per-run failure reported by the driver.
#[derive(Debug, Error)]
pub enum Error {
    #[error("listing {}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("rendering {}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },
}
