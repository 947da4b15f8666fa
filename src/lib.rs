//! Encoding and decoding of spine-delimited column barcodes.
//!
//! A barcode is a pattern of ink and blank cells on a fixed 30×65
//! [Grid]. Each character of the text occupies one ten-cell vertical
//! column, framed by two marker columns: a solid "spine" on the left
//! and an alternating column on the right. The bottom row of the
//! pattern is a solid run of ink shared by all columns.
//!
//! Patterns do not have to sit in a particular corner of the canvas;
//! scanning locates them and slides them flush into the lower left
//! before reading them back.
//!
//! ```rust
//! let grid = spinebar::encode("Hello, World!").unwrap();
//! print!("{}", grid);
//! assert_eq!(spinebar::decode(&grid), "Hello, World!");
//! ```
//!
//! The [Codec] type gives access to the intermediate state: the
//! normalized grid, the measured pattern extents, and a framed
//! rendering of the pattern's bounding box.

mod codec;
mod column;
mod grid;

pub use codec::{Codec, EncodeError, MAX_TEXT};
pub use grid::{Grid, GridError, HEIGHT, WIDTH};

/// Encode the text as a barcode pattern.
///
/// The text may hold up to [MAX_TEXT] characters, each with a code in
/// the 8-bit range.
pub fn encode(text: &str) -> Result<Grid, EncodeError> {
    let mut codec = Codec::new();
    codec.read_text(text)?;
    codec.encode();
    Ok(codec.grid().clone())
}

/// Decode the pattern held by `grid` back into text.
///
/// Never fails: a grid without a recognizable pattern decodes to the
/// empty string, a damaged one to garbage text.
pub fn decode(grid: &Grid) -> String {
    let mut codec = Codec::from_grid(grid);
    codec.decode().to_owned()
}

#[test]
fn top_level_round_trip() {
    let grid = encode("What a great resume builder this is!").unwrap();
    assert_eq!(decode(&grid), "What a great resume builder this is!");
}

#[test]
fn top_level_rejects_long_text() {
    let text = "z".repeat(MAX_TEXT + 1);
    assert!(matches!(
        encode(&text),
        Err(EncodeError::TextTooLong { len }) if len == MAX_TEXT + 1
    ));
}
