//! Seat identifiers.
//!
//! A seat is addressed by block, row, and column, and rendered as one
//! grid cell. The wire format is `block<1|2>-r<row>-c<col>` with
//! 1-based row and column indices.

use crate::constants::{BLOCKS, COLS_PER_BLOCK, ROWS, TOTAL_COLS};

/// Identifies one seat in the fixed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatId {
    /// Block number, 1 or 2.
    pub block: u8,
    /// Row index, 1-based from the top.
    pub row: u8,
    /// Column index within the block, 1-based.
    pub col: u8,
}

impl SeatId {
    /// Creates a seat id, validating it against the grid bounds.
    #[must_use]
    pub fn new(block: u8, row: u8, col: u8) -> Option<Self> {
        let id = Self { block, row, col };
        id.is_in_bounds().then_some(id)
    }

    /// Whether the id addresses a seat that exists in the grid.
    #[must_use]
    pub const fn is_in_bounds(self) -> bool {
        self.block >= 1
            && self.block <= BLOCKS
            && self.row >= 1
            && self.row <= ROWS
            && self.col >= 1
            && self.col <= COLS_PER_BLOCK
    }

    /// Builds a seat id from a full-span column index (1..=44),
    /// mapping columns past the first block into block 2.
    #[must_use]
    pub fn from_span_col(row: u8, span_col: u8) -> Option<Self> {
        if span_col == 0 || span_col > TOTAL_COLS {
            return None;
        }
        if span_col <= COLS_PER_BLOCK {
            Self::new(1, row, span_col)
        } else {
            Self::new(2, row, span_col - COLS_PER_BLOCK)
        }
    }

    /// The seat's column index within the full 44-column span.
    #[must_use]
    pub const fn span_col(self) -> u8 {
        if self.block == 1 {
            self.col
        } else {
            COLS_PER_BLOCK + self.col
        }
    }

    /// Parses the `block<N>-r<R>-c<C>` wire format.
    ///
    /// Returns `None` for malformed or out-of-bounds ids; remote blobs
    /// may reference seats this grid does not have.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let rest = s.strip_prefix("block")?;
        let mut parts = rest.split('-');
        let block = parts.next()?.parse().ok()?;
        let row = parts.next()?.strip_prefix('r')?.parse().ok()?;
        let col = parts.next()?.strip_prefix('c')?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Self::new(block, row, col)
    }

    /// Iterates every seat in row-major, block-major column order:
    /// for each row, block 1 columns left to right, then block 2.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=ROWS).flat_map(|row| (1..=TOTAL_COLS).filter_map(move |c| Self::from_span_col(row, c)))
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "block{}-r{}-c{}", self.block, self.row, self.col)
    }
}
