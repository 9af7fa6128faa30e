//! Signed traversability matrix.
//!
//! `TraversalMap` is the matrix pathfinding runs on.  The live occupancy
//! owned by [`Grid`](crate::Grid) is one; a distancing view is a throwaway
//! copy with extra cells zeroed.

use oc_core::{AgentId, Cell};

use crate::Layout;

/// Value written for an open, unoccupied cell.
pub const OPEN: i32 = 1;

/// Value written for a wall (or a cell closed off in a distancing view).
pub const BLOCKED: i32 = 0;

/// The eight king-move offsets, in the fixed order every adjacency query
/// uses.  Keeping the order fixed makes adjacency lists (and therefore
/// random fallback choices and path tie-breaks) reproducible.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Row-major `i32` matrix: `0` wall, `> 0` traversable, `< 0` agent marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraversalMap {
    width:  u32,
    height: u32,
    values: Vec<i32>,
}

impl TraversalMap {
    /// Open every non-wall cell of `layout`.
    pub fn from_layout(layout: &Layout) -> Self {
        let width = layout.width();
        let height = layout.height();
        let values = (0..height)
            .flat_map(|row| (0..width).map(move |col| Cell::new(row, col)))
            .map(|cell| if layout.kind(cell).is_open() { OPEN } else { BLOCKED })
            .collect();
        Self { width, height, values }
    }

    /// Build directly from rows of raw values (handy for hand-made test maps).
    ///
    /// # Panics
    /// Panics if the rows are empty or ragged.
    pub fn from_rows(rows: &[&[i32]]) -> Self {
        let width = rows.first().map_or(0, |r| r.len());
        assert!(width > 0, "traversal map needs at least one column");
        assert!(rows.iter().all(|r| r.len() == width), "ragged traversal map");
        Self {
            width:  width as u32,
            height: rows.len() as u32,
            values: rows.iter().flat_map(|r| r.iter().copied()).collect(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Flat index of `cell`, or `None` if it lies outside the matrix.
    #[inline]
    pub fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| (cell.row * self.width + cell.col) as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index as u32 / self.width, index as u32 % self.width)
    }

    /// Raw value at `cell`.  Out-of-bounds reads as a wall.
    #[inline]
    pub fn get(&self, cell: Cell) -> i32 {
        self.index(cell).map_or(BLOCKED, |i| self.values[i])
    }

    /// Overwrite the value at `cell`.
    ///
    /// # Panics
    /// Panics if `cell` is out of bounds.
    #[inline]
    pub fn set(&mut self, cell: Cell, value: i32) {
        let i = self.index(cell).expect("cell outside traversal map");
        self.values[i] = value;
    }

    /// `true` if an agent could step onto `cell` right now.
    #[inline]
    pub fn is_traversable(&self, cell: Cell) -> bool {
        self.get(cell) > 0
    }

    /// Agent standing on `cell`, if any.
    #[inline]
    pub fn agent_at(&self, cell: Cell) -> Option<AgentId> {
        AgentId::from_marker(self.get(cell))
    }

    /// In-bounds neighbours of `cell`, in [`NEIGHBOR_OFFSETS`] order.
    ///
    /// With `include_occupied == false` only traversable (`> 0`) cells are
    /// returned: walls and other agents are excluded.  With `true` every
    /// non-wall cell qualifies, agents included.
    pub fn adjacent(&self, cell: Cell, include_occupied: bool) -> Vec<Cell> {
        let mut out = Vec::with_capacity(NEIGHBOR_OFFSETS.len());
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let Some(next) = cell.offset(dr, dc) else { continue };
            let Some(i) = self.index(next) else { continue };
            let value = self.values[i];
            let qualifies = if include_occupied { value != BLOCKED } else { value > 0 };
            if qualifies {
                out.push(next);
            }
        }
        out
    }

    /// All values, row-major.
    #[inline]
    pub fn values(&self) -> &[i32] {
        &self.values
    }
}
