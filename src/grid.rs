//! The fixed-size raster grid a barcode pattern lives on.
//!
//! [Grid] is the input for decoding and the output of encoding. It is a
//! plain 30×65 field of ink/blank cells with bounds-checked access:
//! reading outside the grid yields blank, writing outside it is a no-op.
//! The codec relies on this when it slides a pattern towards the lower
//! left corner during normalization.
use core::fmt;

use thiserror::Error;

/// Number of cell rows in a grid.
pub const HEIGHT: usize = 30;
/// Number of cell columns in a grid.
pub const WIDTH: usize = 65;

/// Character rendered for an ink cell.
pub(crate) const INK: char = '*';
/// Character rendered for a blank cell.
pub(crate) const BLANK: char = ' ';

/// Error cases of [`Grid::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// More input rows than the grid has cell rows.
    #[error("{rows} rows exceed the grid height of {max}", max = HEIGHT)]
    TooManyRows { rows: usize },
    /// An input row with more characters than the grid has cell columns.
    #[error("row {row} is {len} characters wide, the grid width is {max}", max = WIDTH)]
    RowTooWide { row: usize, len: usize },
}

/// A fixed-size grid of ink/blank cells.
///
/// The dimensions are [HEIGHT] by [WIDTH] and never change. Cloning a
/// grid yields a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[bool; WIDTH]; HEIGHT],
}

impl Grid {
    /// Create an entirely blank grid.
    pub fn new() -> Self {
        Self {
            cells: [[false; WIDTH]; HEIGHT],
        }
    }

    /// Build a grid from text rows, anchored to the bottom left corner.
    ///
    /// The last input row becomes the last grid row; missing rows at the
    /// top and missing characters at the end of a row stay blank. A space
    /// maps to a blank cell, any other character to an ink cell.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        if rows.len() > HEIGHT {
            return Err(GridError::TooManyRows { rows: rows.len() });
        }
        let mut grid = Self::new();
        let top = HEIGHT - rows.len();
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len > WIDTH {
                return Err(GridError::RowTooWide { row: i, len });
            }
            for (col, ch) in row.chars().enumerate() {
                grid.cells[top + i][col] = ch != BLANK;
            }
        }
        Ok(grid)
    }

    /// Like [`from_rows`](Self::from_rows), but any oversized input
    /// degrades to an entirely blank grid.
    ///
    /// This mirrors the historical reader behavior of silently dropping
    /// images that do not fit the canvas.
    pub fn from_rows_lossy<S: AsRef<str>>(rows: &[S]) -> Self {
        Self::from_rows(rows).unwrap_or_default()
    }

    /// Read the cell at `row`/`col`, blank for out-of-range coordinates.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < HEIGHT && col < WIDTH {
            self.cells[row][col]
        } else {
            false
        }
    }

    /// Write the cell at `row`/`col`.
    ///
    /// Returns whether the write happened; out-of-range coordinates
    /// leave the grid untouched.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> bool {
        if row < HEIGHT && col < WIDTH {
            self.cells[row][col] = value;
            true
        } else {
            false
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the full canvas, one `'*'`/`' '` line per grid row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &cell in row.iter() {
                f.write_str(if cell { "*" } else { " " })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn out_of_range_get_is_blank() {
        let grid = Grid::new();
        assert!(!grid.get(HEIGHT, 0));
        assert!(!grid.get(0, WIDTH));
        assert!(!grid.get(usize::MAX, usize::MAX));
    }

    #[test]
    fn out_of_range_set_is_rejected() {
        let mut grid = Grid::new();
        assert!(!grid.set(HEIGHT, 0, true));
        assert!(!grid.set(0, WIDTH, true));
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn set_then_get() {
        let mut grid = Grid::new();
        assert!(grid.set(HEIGHT - 1, WIDTH - 1, true));
        assert!(grid.get(HEIGHT - 1, WIDTH - 1));
        assert!(grid.set(HEIGHT - 1, WIDTH - 1, false));
        assert!(!grid.get(HEIGHT - 1, WIDTH - 1));
    }

    #[test]
    fn rows_are_bottom_anchored() {
        let grid = Grid::from_rows(&["*", " *"]).unwrap();
        assert!(grid.get(HEIGHT - 2, 0));
        assert!(grid.get(HEIGHT - 1, 1));
        assert!(!grid.get(HEIGHT - 1, 0));
        assert!(!grid.get(0, 0));
    }

    #[test]
    fn too_wide_row_is_an_error() {
        let wide = "x".repeat(WIDTH + 1);
        assert_eq!(
            Grid::from_rows(&[wide.as_str()]),
            Err(GridError::RowTooWide { row: 0, len: WIDTH + 1 })
        );
    }

    #[test]
    fn too_many_rows_is_an_error() {
        let rows: Vec<&str> = vec!["*"; HEIGHT + 1];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::TooManyRows { rows: HEIGHT + 1 })
        );
    }

    #[test]
    fn lossy_construction_degrades_to_blank() {
        let wide = "x".repeat(WIDTH + 1);
        assert_eq!(Grid::from_rows_lossy(&[wide.as_str()]), Grid::new());
        let rows: Vec<&str> = vec!["*"; HEIGHT + 1];
        assert_eq!(Grid::from_rows_lossy(&rows), Grid::new());
    }

    #[test]
    fn display_renders_every_row() {
        let mut grid = Grid::new();
        grid.set(HEIGHT - 1, 0, true);
        let rendered = grid.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), HEIGHT);
        assert!(lines[HEIGHT - 1].starts_with('*'));
        assert_eq!(lines[0].trim(), "");
    }
}
