//! The stateful codec between a barcode grid and its text.
//!
//! A [Codec] owns one [Grid] and one text buffer and converts between
//! them. Whichever representation was produced last is the current one;
//! encoding overwrites the grid, decoding overwrites the text.
//!
//! Adopting a grid (via [scan](Codec::scan)) normalizes it first: the
//! pattern is located inside the canvas and slid flush into the lower
//! left corner, then the signal extents are measured off the two spine
//! markers. Decoding only ever looks at the normalized pattern.
use thiserror::Error;

use crate::column::{self, BitRun, CELLS};
use crate::grid::{Grid, BLANK, HEIGHT, INK, WIDTH};

/// Longest text a single barcode can carry: one column per character
/// between the two spine columns.
pub const MAX_TEXT: usize = WIDTH - 2;

/// Error cases of [`Codec::read_text`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The text does not leave room for the two spine columns.
    #[error("text of {len} characters exceeds the {max} a barcode can carry", max = MAX_TEXT)]
    TextTooLong { len: usize },
    /// Only characters with 8-bit codes fit a data column.
    #[error("character {0:?} is outside the 8-bit range")]
    UnsupportedChar(char),
}

/// Converter between barcode grids and text.
#[derive(Debug, Clone)]
pub struct Codec {
    grid: Grid,
    text: String,
    signal_width: usize,
    signal_height: usize,
}

impl Codec {
    /// Create a codec holding a blank grid and empty text.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            text: String::new(),
            signal_width: 0,
            signal_height: 0,
        }
    }

    /// Create a codec from a scanned grid.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut codec = Self::new();
        codec.scan(grid);
        codec
    }

    /// Adopt a copy of `grid` as the current image.
    ///
    /// The copy is normalized and measured; the caller's grid is left
    /// untouched and can be mutated freely afterwards.
    pub fn scan(&mut self, grid: &Grid) {
        self.adopt(grid.clone());
    }

    /// Store `text` as the pending input for [encode](Self::encode).
    ///
    /// Rejects text longer than [MAX_TEXT] and characters above U+00FF;
    /// on rejection the pending text is cleared.
    pub fn read_text(&mut self, text: &str) -> Result<(), EncodeError> {
        self.text.clear();
        let len = text.chars().count();
        if len > MAX_TEXT {
            return Err(EncodeError::TextTooLong { len });
        }
        if let Some(ch) = text.chars().find(|&ch| ch as u32 > 0xFF) {
            return Err(EncodeError::UnsupportedChar(ch));
        }
        self.text.push_str(text);
        Ok(())
    }

    /// Build a fresh grid from the current text.
    ///
    /// A text of `L` characters becomes `L + 2` columns: the opening
    /// spine, one data column per character, and the closing spine. The
    /// new grid is adopted as if it had been scanned.
    pub fn encode(&mut self) {
        let mut columns = Vec::with_capacity(self.text.chars().count() + 2);
        columns.push(column::open_spine());
        for (i, ch) in self.text.chars().enumerate() {
            columns.push(column::pack(i + 1, ch as u8));
        }
        columns.push(column::close_spine());

        let rows: Vec<String> = (0..CELLS)
            .map(|cell| {
                columns
                    .iter()
                    .map(|col| if col[cell] { INK } else { BLANK })
                    .collect()
            })
            .collect();
        // at most MAX_TEXT + 2 columns and CELLS rows, always in bounds
        self.adopt(Grid::from_rows_lossy(&rows));
    }

    /// Read the current grid back into text and return it.
    ///
    /// Scans the data columns between the two spines. Garbage input
    /// yields garbage text, never an error; columns accumulating a
    /// value outside the valid scalar range decode as U+FFFD.
    pub fn decode(&mut self) -> &str {
        let mut text = String::new();
        for col in 1..self.signal_width.saturating_sub(1) {
            text.push(self.read_column(col));
        }
        self.text = text;
        &self.text
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current (normalized) grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Width of the pattern, measured from the bottom spine.
    pub fn signal_width(&self) -> usize {
        self.signal_width
    }

    /// Height of the pattern, measured from the opening spine.
    pub fn signal_height(&self) -> usize {
        self.signal_height
    }

    /// The bounding box of the pattern as text, topped by a dash border
    /// and framed by pipes on both sides.
    ///
    /// An empty pattern renders as the empty string.
    pub fn render_image(&self) -> String {
        if self.signal_height == 0 {
            return String::new();
        }
        let mut out = String::with_capacity((self.signal_height + 1) * (self.signal_width + 3));
        for _ in 0..self.signal_width + 2 {
            out.push('-');
        }
        out.push('\n');
        for row in HEIGHT - self.signal_height..HEIGHT {
            out.push('|');
            for col in 0..self.signal_width {
                out.push(if self.grid.get(row, col) { INK } else { BLANK });
            }
            out.push('|');
            out.push('\n');
        }
        out
    }

    fn adopt(&mut self, grid: Grid) {
        self.grid = grid;
        self.normalize();
        self.signal_width = measure_width(&self.grid);
        self.signal_height = measure_height(&self.grid);
    }

    /// Slide the pattern flush into the lower left corner.
    fn normalize(&mut self) {
        let left = self.left_column();
        let bottom = self.bottom_row(left);
        let down = HEIGHT - 1 - bottom;

        let mut moved = Grid::new();
        for row in down..HEIGHT {
            for col in 0..WIDTH {
                if self.grid.get(row - down, col + left) {
                    moved.set(row, col, true);
                }
            }
        }
        self.grid = moved;
    }

    /// Column of the first ink cell in scan order (top-to-bottom,
    /// left-to-right per row); the grid width if the canvas is blank.
    ///
    /// Note this is the column of the first hit, not the leftmost ink
    /// column overall. With the opening spine in place both agree.
    fn left_column(&self) -> usize {
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                if self.grid.get(row, col) {
                    return col;
                }
            }
        }
        WIDTH
    }

    /// Bottom-most ink row in the fixed `left` column, 0 if none.
    fn bottom_row(&self, left: usize) -> usize {
        (0..HEIGHT)
            .filter(|&row| self.grid.get(row, left))
            .last()
            .unwrap_or(0)
    }

    /// Decode one data column into its character.
    fn read_column(&self, col: usize) -> char {
        // data cells sit between the bottom spine row and the top
        // alignment row of the measured band
        let top = HEIGHT + 1 - self.signal_height;
        let mut bits = BitRun::new();
        for row in (top..=HEIGHT - 2).rev() {
            bits.push(self.grid.get(row, col));
        }
        char::from_u32(column::unpack(&bits)).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

/// Width of the ink run along the bottom spine row, starting at
/// column 0; the full grid width if the row never goes blank.
fn measure_width(grid: &Grid) -> usize {
    (0..WIDTH)
        .find(|&col| !grid.get(HEIGHT - 1, col))
        .unwrap_or(WIDTH)
}

/// Height of the ink run up the opening spine column, starting at the
/// bottom row; the full grid height if the column never goes blank.
fn measure_height(grid: &Grid) -> usize {
    (0..HEIGHT)
        .rev()
        .find(|&row| !grid.get(row, 0))
        .map(|row| HEIGHT - 1 - row)
        .unwrap_or(HEIGHT)
}
