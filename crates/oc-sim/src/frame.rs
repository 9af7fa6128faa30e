//! Colour-coded grid snapshots, one per tick.
//!
//! A [`Frame`] is what a renderer needs to draw the office at the end of a
//! tick: the floor plan with every occupied cell replaced by the health of
//! the agent standing on it.
//!
//! | Category     | Code |
//! |--------------|------|
//! | `Wall`       | 0    |
//! | `Floor`      | 1    |
//! | `Desk`       | 2    |
//! | `Task`       | 3    |
//! | `Healthy`    | 22   |
//! | `Infected`   | 177  |
//! | `Contagious` | 237  |

use oc_agent::{AgentStore, HealthClass};
use oc_core::{Cell, Tick};
use oc_grid::{CellKind, Grid};

/// What a renderer should draw in one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellCategory {
    Wall,
    Floor,
    Desk,
    Task,
    /// Agent that has not been infected.
    Healthy,
    /// Secondary case.
    Infected,
    /// Initial carrier.
    Contagious,
}

impl CellCategory {
    /// Palette index used by the display front end.
    pub fn code(self) -> u8 {
        match self {
            CellCategory::Wall => 0,
            CellCategory::Floor => 1,
            CellCategory::Desk => 2,
            CellCategory::Task => 3,
            CellCategory::Healthy => 22,
            CellCategory::Infected => 177,
            CellCategory::Contagious => 237,
        }
    }

    /// `true` for the three agent categories.
    pub fn is_agent(self) -> bool {
        matches!(
            self,
            CellCategory::Healthy | CellCategory::Infected | CellCategory::Contagious
        )
    }

    fn of_kind(kind: CellKind) -> CellCategory {
        match kind {
            CellKind::Wall => CellCategory::Wall,
            CellKind::Floor => CellCategory::Floor,
            CellKind::Desk => CellCategory::Desk,
            CellKind::Task => CellCategory::Task,
        }
    }

    fn of_health(class: HealthClass) -> CellCategory {
        match class {
            HealthClass::Carrier => CellCategory::Contagious,
            HealthClass::Secondary => CellCategory::Infected,
            HealthClass::Susceptible => CellCategory::Healthy,
        }
    }
}

/// Snapshot of the whole floor at the end of one tick, row-major.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub tick: Tick,
    pub width: u32,
    pub height: u32,
    pub cells: Vec<CellCategory>,
}

impl Frame {
    /// Render the current grid and agent health.
    pub fn capture(tick: Tick, grid: &Grid, agents: &AgentStore) -> Self {
        let layout = grid.layout();
        let mut cells: Vec<CellCategory> = (0..grid.height())
            .flat_map(|row| (0..grid.width()).map(move |col| Cell::new(row, col)))
            .map(|cell| CellCategory::of_kind(layout.kind(cell)))
            .collect();

        let width = grid.width();
        for (agent, cell) in grid.agent_positions() {
            let i = (cell.row * width + cell.col) as usize;
            cells[i] = CellCategory::of_health(agents.health_class(agent));
        }

        Self { tick, width, height: grid.height(), cells }
    }

    /// Category at `cell`; outside the frame reads as wall.
    pub fn get(&self, cell: Cell) -> CellCategory {
        if cell.row < self.height && cell.col < self.width {
            self.cells[(cell.row * self.width + cell.col) as usize]
        } else {
            CellCategory::Wall
        }
    }

    /// Number of cells in `category`.
    pub fn count(&self, category: CellCategory) -> usize {
        self.cells.iter().filter(|&&c| c == category).count()
    }

    /// Number of agents drawn.
    pub fn agent_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_agent()).count()
    }

    /// Palette codes, one row per inner `Vec`.
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }
}
