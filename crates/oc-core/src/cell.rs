//! Grid coordinate type.

use std::fmt;

/// A position on the floor plan, addressed by row and column.
///
/// Rows grow downwards and columns grow to the right, matching the order in
/// which layouts are written out as text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Straight-line distance between cell centres, in cells.
    pub fn distance(self, other: Cell) -> f32 {
        let dr = self.row as f32 - other.row as f32;
        let dc = self.col as f32 - other.col as f32;
        (dr * dr + dc * dc).sqrt()
    }

    /// Number of king moves between the two cells.
    #[inline]
    pub fn chebyshev(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// `true` if `other` is one of the eight cells surrounding `self`.
    #[inline]
    pub fn touches(self, other: Cell) -> bool {
        self.chebyshev(other) == 1
    }

    /// The cell displaced by `(dr, dc)`, or `None` if that would leave the
    /// non-negative quadrant.  Upper bounds are the caller's business.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Cell> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Cell { row, col })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
