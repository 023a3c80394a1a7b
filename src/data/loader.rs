use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::model::{DataSeries, SeriesHeader};
use crate::error::ParseError;

/// Parsed content of one series file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesFile {
    pub series: DataSeries,
    pub header: SeriesHeader,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a series file from disk.
pub fn load_file(path: &Path) -> Result<SeriesFile, ParseError> {
    let file = File::open(path)?;
    parse_series(BufReader::new(file))
}

/// Parse the series format from any line-oriented reader.
///
/// * lines starting with `@` are metadata; `title` and axis label directives
///   are kept in the [`SeriesHeader`], the rest is ignored
/// * lines starting with `#` are comments
/// * blank lines are skipped
/// * every other line must hold at least two numeric columns; the first is
///   x, the second y, anything after is ignored
pub fn parse_series<R: BufRead>(reader: R) -> Result<SeriesFile, ParseError> {
    let mut points = Vec::new();
    let mut header = SeriesHeader::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        if let Some(directive) = line.strip_prefix('@') {
            read_directive(directive, &mut header);
            continue;
        }
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        points.push(parse_point(&line, line_no)?);
    }

    Ok(SeriesFile {
        series: DataSeries::new(points),
        header,
    })
}

// ---------------------------------------------------------------------------
// Data lines
// ---------------------------------------------------------------------------

fn parse_point(line: &str, line_no: usize) -> Result<(f64, f64), ParseError> {
    let mut tokens = line.split_whitespace();
    let (Some(x), Some(y)) = (tokens.next(), tokens.next()) else {
        return Err(ParseError::MissingColumn {
            line: line_no,
            found: line.split_whitespace().count(),
        });
    };
    Ok((parse_number(x, line_no)?, parse_number(y, line_no)?))
}

fn parse_number(token: &str, line_no: usize) -> Result<f64, ParseError> {
    token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
        line: line_no,
        token: token.to_string(),
    })
}

// ---------------------------------------------------------------------------
// `@` directives
// ---------------------------------------------------------------------------

fn read_directive(directive: &str, header: &mut SeriesHeader) {
    if let Some(value) = strip_keywords(directive, &["title"]) {
        header.title = Some(unquote(value));
    } else if let Some(value) = strip_keywords(directive, &["xaxis", "label"]) {
        header.x_label = Some(unquote(value));
    } else if let Some(value) = strip_keywords(directive, &["yaxis", "label"]) {
        header.y_label = Some(unquote(value));
    }
}

/// Consume whitespace-separated `keywords` in order and return the trimmed
/// remainder.  A keyword must be followed by whitespace to match.
fn strip_keywords<'a>(mut rest: &'a str, keywords: &[&str]) -> Option<&'a str> {
    for kw in keywords {
        rest = rest.trim_start().strip_prefix(kw)?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
    }
    Some(rest.trim())
}

fn unquote(value: &str) -> String {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
        .to_string()
}
