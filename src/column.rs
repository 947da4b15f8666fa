//! Packing a character code into a ten-cell barcode column and back.
//!
//! Every character of the text occupies one vertical column. Counting
//! cells from the top, cell 9 continues the bottom spine, cells 1–8
//! hold the eight bits of the character code most significant first,
//! and cell 0 carries an alignment mark on every other column. The two
//! marker columns framing the data are fixed patterns.
use arrayvec::ArrayVec;

use crate::grid::HEIGHT;

/// Number of cells in an encoded column.
pub(crate) const CELLS: usize = 10;
/// Number of data bits in an encoded column (cells 1 through 8).
pub(crate) const DATA_BITS: usize = CELLS - 2;

pub(crate) type Column = [bool; CELLS];

/// The run of data cells read from one column during decoding,
/// lowest row first. Bounded by the grid height.
pub(crate) type BitRun = ArrayVec<bool, HEIGHT>;

/// The opening spine: a full-height run of ink.
pub(crate) fn open_spine() -> Column {
    [true; CELLS]
}

/// The closing spine: blank and ink cells alternating from the top,
/// ending in ink on the bottom spine row.
pub(crate) fn close_spine() -> Column {
    let mut column = [false; CELLS];
    for cell in (1..CELLS).step_by(2) {
        column[cell] = true;
    }
    column
}

/// Pack `code` into the data column at the 1-based `position`.
pub(crate) fn pack(position: usize, code: u8) -> Column {
    let mut column = [false; CELLS];
    column[CELLS - 1] = true;
    for bit in 0..DATA_BITS {
        column[1 + bit] = code & (1 << (DATA_BITS - 1 - bit)) != 0;
    }
    // alignment mark on every other column, lining up with the
    // opening spine's top cell
    column[0] = position % 2 == 0;
    column
}

/// Accumulate a column's data cells back into a code.
///
/// `bits` is ordered lowest row first, so each step doubles the weight.
/// Eight bits reconstruct the original byte; decoding a malformed
/// pattern may accumulate more and overflow the 8-bit range, which the
/// caller has to deal with.
pub(crate) fn unpack(bits: &[bool]) -> u32 {
    let mut value = 0;
    let mut weight = 1;
    for &bit in bits {
        if bit {
            value += weight;
        }
        weight *= 2;
    }
    value
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn data_bits(column: &Column) -> u32 {
        let mut run: Vec<bool> = column[1..=DATA_BITS].to_vec();
        run.reverse();
        unpack(&run)
    }

    #[test]
    fn packs_msb_first() {
        let column = pack(1, b'A');
        // 'A' = 0b0100_0001
        assert_eq!(
            &column[1..=DATA_BITS],
            &[false, true, false, false, false, false, false, true]
        );
        assert!(column[CELLS - 1]);
    }

    #[test]
    fn alignment_mark_on_even_positions() {
        assert!(!pack(1, 0)[0]);
        assert!(pack(2, 0)[0]);
        assert!(!pack(3, 0)[0]);
    }

    #[test]
    fn unpack_inverts_pack() {
        for code in [0u8, 1, b'A', b'z', 127, 128, 255] {
            assert_eq!(data_bits(&pack(1, code)), u32::from(code));
        }
    }

    #[test]
    fn unpack_of_nothing_is_zero() {
        assert_eq!(unpack(&[]), 0);
    }

    #[test]
    fn spine_shapes() {
        assert_eq!(open_spine(), [true; CELLS]);
        let close = close_spine();
        for (cell, &inked) in close.iter().enumerate() {
            assert_eq!(inked, cell % 2 == 1, "cell {}", cell);
        }
    }
}
