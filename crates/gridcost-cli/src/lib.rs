//! Interactive front end: prompt for a grid, solve it, print the answer.
//!
//! Kept apart from `main.rs` so that the whole exchange can be driven with
//! in-memory readers and writers.

use std::fmt;
use std::io::{self, BufRead, Write};

use gridcost_core::{GridReader, Point, ReadError};
use gridcost_paths::{PathRange, Solution};

/// How the outcome is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Minimum path sum to last column = N` or `No path found.`
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Front-end switches.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Print the input prompts.
    pub prompt: bool,
    /// Print the cells of the cheapest path after the result.
    pub show_path: bool,
    pub format: OutputFormat,
}

/// JSON shape of an outcome; `cost` and `end` are `null` when there is no
/// path.
#[derive(Debug, serde::Serialize)]
struct Report<'a> {
    cost: Option<i64>,
    end: Option<Point>,
    path: &'a [Point],
}

/// Read a grid from `input`, solve it and write the outcome to `out`.
///
/// Returns the solution so callers can pick an exit status; "no path" is
/// not an error.
pub fn run<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    opts: &Options,
) -> Result<Option<Solution>, CliError> {
    let mut reader = GridReader::new(input);

    if opts.prompt {
        write!(out, "Enter rows and columns: ")?;
        out.flush()?;
    }
    let (rows, cols) = reader.dimensions()?;

    if opts.prompt {
        writeln!(out, "Enter matrix values:")?;
        out.flush()?;
    }
    let grid = reader.cells(rows, cols)?;
    log::info!("read a {}×{} grid", grid.rows(), grid.cols());

    let solution = PathRange::new(grid.range()).solve_to_last_column(&grid);
    write_outcome(out, solution.as_ref(), opts)?;
    Ok(solution)
}

fn write_outcome<W: Write>(
    out: &mut W,
    solution: Option<&Solution>,
    opts: &Options,
) -> Result<(), CliError> {
    match opts.format {
        OutputFormat::Json => {
            let path = match solution {
                Some(s) => s.path.as_slice(),
                None => &[],
            };
            let report = Report {
                cost: solution.map(|s| s.cost),
                end: solution.map(|s| s.end),
                path,
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => match solution {
            Some(s) => {
                writeln!(out, "Minimum path sum to last column = {}", s.cost)?;
                if opts.show_path {
                    let cells: Vec<String> = s.path.iter().map(Point::to_string).collect();
                    writeln!(out, "Path: {}", cells.join(" -> "))?;
                }
            }
            None => writeln!(out, "No path found.")?,
        },
    }
    out.flush()?;
    Ok(())
}

/// Errors surfaced by [`run`].
#[derive(Debug)]
pub enum CliError {
    /// The grid could not be read.
    Input(ReadError),
    /// Writing the output failed.
    Output(io::Error),
    /// The JSON report could not be written.
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "{e}"),
            Self::Output(e) => write!(f, "failed to write output: {e}"),
            Self::Json(e) => write!(f, "failed to write JSON report: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Output(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<ReadError> for CliError {
    fn from(e: ReadError) -> Self {
        Self::Input(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Output(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
