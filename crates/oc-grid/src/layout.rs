//! Immutable floor-plan layout.
//!
//! A `Layout` is the already-parsed 2-D floor plan the simulation runs on.
//! Reading plans from their on-disk spreadsheet form is the job of an
//! external loader; this module only offers [`Layout::from_rows`] for loaders
//! and [`Layout::parse`] for compact text plans (built-in plans and tests).
//!
//! # Text format
//!
//! One line per row, one character per cell:
//!
//! | Symbol      | Cell              |
//! |-------------|-------------------|
//! | `#` or ` `  | [`CellKind::Wall`]  |
//! | `.`         | [`CellKind::Floor`] |
//! | `D`         | [`CellKind::Desk`]  |
//! | `T`         | [`CellKind::Task`]  |
//!
//! Each line is trimmed and blank lines are skipped, so plans can be written
//! as indented raw strings.  A space inside a row is a wall.

use oc_core::Cell;

use crate::{GridError, GridResult};

/// What a floor-plan cell is made of.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Wall,
    Floor,
    /// A seat an agent calls home.
    Desk,
    /// A shared amenity (printer, kitchen, …) agents visit between desk stints.
    Task,
}

impl CellKind {
    /// `true` for every kind an agent may stand on.
    #[inline]
    pub fn is_open(self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    fn from_symbol(symbol: char) -> Option<CellKind> {
        match symbol {
            '#' | ' ' => Some(CellKind::Wall),
            '.' => Some(CellKind::Floor),
            'D' => Some(CellKind::Desk),
            'T' => Some(CellKind::Task),
            _ => None,
        }
    }

    /// Symbol used by [`Layout::parse`] and [`Layout::to_text`].
    pub fn symbol(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Floor => '.',
            CellKind::Desk => 'D',
            CellKind::Task => 'T',
        }
    }
}

/// A rectangular floor plan, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    width:  u32,
    height: u32,
    cells:  Vec<CellKind>,
}

impl Layout {
    /// Build a layout from rows of cells.  All rows must have equal length.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> GridResult<Self> {
        let expected = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || expected == 0 {
            return Err(GridError::EmptyLayout);
        }
        let mut cells = Vec::with_capacity(rows.len() * expected);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != expected {
                return Err(GridError::RaggedRow { row, expected, got: line.len() });
            }
            cells.extend(line);
        }
        Ok(Self {
            width:  expected as u32,
            height: (cells.len() / expected) as u32,
            cells,
        })
    }

    /// Parse the text format described in the module docs.
    pub fn parse(text: &str) -> GridResult<Self> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, symbol)| {
                        CellKind::from_symbol(symbol)
                            .ok_or(GridError::UnknownSymbol { symbol, row, col })
                    })
                    .collect::<GridResult<Vec<_>>>()
            })
            .collect::<GridResult<Vec<_>>>()?;
        Self::from_rows(rows)
    }

    /// Render back into the text format.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(self.width as usize) {
            out.extend(row.iter().map(|k| k.symbol()));
            out.push('\n');
        }
        out
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Kind of `cell`.  Anything outside the plan counts as wall.
    #[inline]
    pub fn kind(&self, cell: Cell) -> CellKind {
        if self.contains(cell) {
            self.cells[(cell.row * self.width + cell.col) as usize]
        } else {
            CellKind::Wall
        }
    }

    /// Every cell of the given kind, in row-major order.
    pub fn positions_of(&self, kind: CellKind) -> Vec<Cell> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &k)| k == kind)
            .map(|(i, _)| Cell::new(i as u32 / self.width, i as u32 % self.width))
            .collect()
    }

    /// Number of desks, i.e. the largest population the plan can seat.
    pub fn desk_count(&self) -> usize {
        self.cells.iter().filter(|&&k| k == CellKind::Desk).count()
    }
}
