//! Reading a [`CostGrid`] from whitespace-separated integer tokens.
//!
//! The format is `R C` followed by `R × C` cell costs in row-major order.
//! Tokens may be split across lines in any way; anything after the last
//! cell is left unread.

use std::fmt;
use std::io::{self, BufRead};

use crate::grid::{CostGrid, GridError};

// ---------------------------------------------------------------------------
// GridReader
// ---------------------------------------------------------------------------

/// Pulls integer tokens out of a buffered reader, one line at a time.
///
/// Dimensions and cells are read in two steps so that an interactive caller
/// can prompt in between.
pub struct GridReader<R: BufRead> {
    reader: R,
    line: String,
    pos: usize,
    consumed: usize,
}

impl<R: BufRead> GridReader<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
            consumed: 0,
        }
    }

    /// Read the row and column counts.
    pub fn dimensions(&mut self) -> Result<(i64, i64), ReadError> {
        let rows = self.expect_int(2)?;
        let cols = self.expect_int(2)?;
        Ok((rows, cols))
    }

    /// Read `rows × cols` cell costs and build the grid.
    pub fn cells(&mut self, rows: i64, cols: i64) -> Result<CostGrid, ReadError> {
        if rows < 0 || cols < 0 {
            return Err(GridError::NegativeDimensions { rows, cols }.into());
        }
        let count = match (i32::try_from(rows), i32::try_from(cols)) {
            (Ok(r), Ok(c)) => (r as usize).checked_mul(c as usize),
            _ => None,
        };
        let Some(count) = count else {
            return Err(GridError::TooLarge { rows, cols }.into());
        };
        let total = self.consumed + count;
        let mut cells = Vec::with_capacity(count.min(1 << 16));
        for _ in 0..count {
            cells.push(self.expect_int(total)?);
        }
        Ok(CostGrid::from_row_major(rows, cols, cells)?)
    }

    /// Number of tokens consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Next token parsed as an integer, failing on end of input.
    /// `expected` is the total token count the caller is working towards.
    fn expect_int(&mut self, expected: usize) -> Result<i64, ReadError> {
        let index = self.consumed;
        let Some(token) = self.next_token()? else {
            return Err(ReadError::UnexpectedEof {
                expected,
                found: index,
            });
        };
        token
            .parse::<i64>()
            .map_err(|_| ReadError::InvalidToken { token, index })
    }

    /// Next whitespace-delimited token, or `None` at end of input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start();
            if !trimmed.is_empty() {
                let start = self.pos + (rest.len() - trimmed.len());
                let len = trimmed
                    .find(char::is_whitespace)
                    .unwrap_or(trimmed.len());
                self.pos = start + len;
                self.consumed += 1;
                return Ok(Some(self.line[start..start + len].to_string()));
            }
            self.line.clear();
            self.pos = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }
}

/// Read a whole grid (dimensions then cells) from `reader`.
pub fn read_grid<R: BufRead>(reader: R) -> Result<CostGrid, ReadError> {
    let mut gr = GridReader::new(reader);
    let (rows, cols) = gr.dimensions()?;
    gr.cells(rows, cols)
}

// ---------------------------------------------------------------------------
// ReadError
// ---------------------------------------------------------------------------

/// Errors that can occur while reading a grid.
#[derive(Debug)]
pub enum ReadError {
    /// The underlying reader failed.
    Io(io::Error),
    /// A token is not an integer. `index` is its 0-based position.
    InvalidToken { token: String, index: usize },
    /// Input ended after `found` tokens while `expected` were needed.
    UnexpectedEof { expected: usize, found: usize },
    /// The values read do not form a valid grid.
    Grid(GridError),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read input: {e}"),
            Self::InvalidToken { token, index } => {
                write!(f, "token #{} \u{201c}{token}\u{201d} is not an integer", index + 1)
            }
            Self::UnexpectedEof { expected, found } => write!(
                f,
                "unexpected end of input: expected {expected} integers, found {found}"
            ),
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for ReadError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
