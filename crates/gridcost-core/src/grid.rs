//! The [`CostGrid`] type: an immutable 2D grid of non-negative cell costs.

use std::fmt;

use crate::geom::{Point, Range};

/// Largest cost a single cell may carry.
///
/// Any path over fewer than 2^32 cells of this cost sums without overflowing
/// an `i64`.
pub const MAX_CELL_COST: i64 = i32::MAX as i64;

/// An R×C grid of cell costs, stored row-major.
///
/// Row `r`, column `c` lives at `Point { x: c, y: r }`. A grid with zero
/// rows or zero columns is valid but empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid", into = "RawGrid"))]
pub struct CostGrid {
    rows: i32,
    cols: i32,
    cells: Vec<i64>,
}

impl CostGrid {
    /// Build a grid from `rows × cols` values given in row-major order.
    pub fn from_row_major(rows: i64, cols: i64, cells: Vec<i64>) -> Result<Self, GridError> {
        if rows < 0 || cols < 0 {
            return Err(GridError::NegativeDimensions { rows, cols });
        }
        let (Ok(r), Ok(c)) = (i32::try_from(rows), i32::try_from(cols)) else {
            return Err(GridError::TooLarge { rows, cols });
        };
        let Some(expected) = (r as usize).checked_mul(c as usize) else {
            return Err(GridError::TooLarge { rows, cols });
        };
        if cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        for (i, &v) in cells.iter().enumerate() {
            if !(0..=MAX_CELL_COST).contains(&v) {
                let pos = Point::new((i % c as usize) as i32, (i / c as usize) as i32);
                return Err(GridError::InvalidCost { pos, value: v });
            }
        }
        Ok(Self {
            rows: r,
            cols: c,
            cells,
        })
    }

    /// Build a grid from a list of rows. All rows must have the same length.
    pub fn from_rows(rows: &[&[i64]]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: y,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Self::from_row_major(rows.len() as i64, cols as i64, cells)
    }

    /// Number of rows (R).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns (C).
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether the grid has no cells (and therefore no start cell).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The bounding range `[(0,0), (C,R))`.
    #[inline]
    pub fn range(&self) -> Range {
        Range::new(0, 0, self.cols, self.rows)
    }

    /// Whether `p` is a cell of this grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.range().contains(p)
    }

    /// Cost of the cell at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<i64> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[p.y as usize * self.cols as usize + p.x as usize])
    }

    /// Return a copy of the grid with the cell at `p` replaced by `value`.
    pub fn with_cell(&self, p: Point, value: i64) -> Result<Self, GridError> {
        if !self.contains(p) {
            return Err(GridError::OutOfBounds(p));
        }
        if !(0..=MAX_CELL_COST).contains(&value) {
            return Err(GridError::InvalidCost { pos: p, value });
        }
        let mut cells = self.cells.clone();
        cells[p.y as usize * self.cols as usize + p.x as usize] = value;
        Ok(Self { cells, ..*self })
    }

    /// The cells of row `y`, or an empty slice if out of range.
    pub fn row(&self, y: i32) -> &[i64] {
        if y < 0 || y >= self.rows {
            return &[];
        }
        let w = self.cols as usize;
        let start = y as usize * w;
        &self.cells[start..start + w]
    }

    /// Row-major iterator over `(Point, cost)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, i64)> + '_ {
        self.range().iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            let row: Vec<String> = self.row(y).iter().map(i64::to_string).collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawGrid {
    rows: i64,
    cols: i64,
    cells: Vec<i64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for CostGrid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        CostGrid::from_row_major(raw.rows, raw.cols, raw.cells)
    }
}

#[cfg(feature = "serde")]
impl From<CostGrid> for RawGrid {
    fn from(g: CostGrid) -> Self {
        RawGrid {
            rows: g.rows as i64,
            cols: g.cols as i64,
            cells: g.cells,
        }
    }
}

/// Errors that can occur when building a [`CostGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row or column count is negative.
    NegativeDimensions { rows: i64, cols: i64 },
    /// Dimensions do not fit in `i32` coordinates or the cell count
    /// overflows `usize`.
    TooLarge { rows: i64, cols: i64 },
    /// Number of values does not match `rows × cols`.
    CellCount { expected: usize, found: usize },
    /// A row has a different length than the first one.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell cost is negative or above [`MAX_CELL_COST`].
    InvalidCost { pos: Point, value: i64 },
    /// A point outside the grid was addressed.
    OutOfBounds(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeDimensions { rows, cols } => {
                write!(f, "grid dimensions must not be negative (got {rows}×{cols})")
            }
            Self::TooLarge { rows, cols } => write!(f, "grid of {rows}×{cols} cells is too large"),
            Self::CellCount { expected, found } => {
                write!(f, "expected {expected} cell values, found {found}")
            }
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::InvalidCost { pos, value } => write!(
                f,
                "cell {pos} has cost {value}, costs must be between 0 and {MAX_CELL_COST}"
            ),
            Self::OutOfBounds(p) => write!(f, "point {p} is outside the grid"),
        }
    }
}

impl std::error::Error for GridError {}
