//! The authoritative spatial state of a run.
//!
//! `Grid` owns three things:
//!
//! 1. the immutable [`Layout`] and the desk / task lists derived from it once;
//! 2. the live occupancy [`TraversalMap`], where each agent's cell holds the
//!    agent's marker (`-id`) so that other agents route around it;
//! 3. a position registry indexed by [`AgentId::slot`] for O(1) lookups.
//!
//! Occupancy and registry are only changed through [`Grid::place_agent`],
//! [`Grid::vacate`] and [`Grid::occupy`], which keep them in step.  Because
//! agents move one at a time, an agent that moves later in a tick always sees
//! where earlier agents went.

use oc_core::{AgentId, Cell};

use crate::matrix::{BLOCKED, OPEN};
use crate::{CellKind, Layout, TraversalMap};

#[derive(Clone, Debug)]
pub struct Grid {
    layout:    Layout,
    occupancy: TraversalMap,
    desks:     Vec<Cell>,
    tasks:     Vec<Cell>,
    /// Current cell per agent, indexed by `AgentId::slot()`.
    positions: Vec<Option<Cell>>,
}

impl Grid {
    /// Build an empty grid (no agents placed) over `layout`.
    pub fn new(layout: Layout) -> Self {
        let occupancy = TraversalMap::from_layout(&layout);
        let desks = layout.positions_of(CellKind::Desk);
        let tasks = layout.positions_of(CellKind::Task);
        Self {
            layout,
            occupancy,
            desks,
            tasks,
            positions: Vec::new(),
        }
    }

    // ── Static queries ────────────────────────────────────────────────────

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Desk seats in row-major order.  Agent `n` is given `desks()[n - 1]`.
    #[inline]
    pub fn desks(&self) -> &[Cell] {
        &self.desks
    }

    /// Task spots in row-major order.
    #[inline]
    pub fn tasks(&self) -> &[Cell] {
        &self.tasks
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.layout.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.layout.height()
    }

    // ── Occupancy queries ─────────────────────────────────────────────────

    /// The live occupancy matrix.
    #[inline]
    pub fn occupancy(&self) -> &TraversalMap {
        &self.occupancy
    }

    /// Agent standing on `cell`, if any.
    #[inline]
    pub fn agent_at(&self, cell: Cell) -> Option<AgentId> {
        self.occupancy.agent_at(cell)
    }

    /// Last recorded cell of `agent`.
    #[inline]
    pub fn position_of(&self, agent: AgentId) -> Option<Cell> {
        self.positions.get(agent.slot()).copied().flatten()
    }

    /// `(agent, cell)` for every placed agent, in ascending ID order.
    pub fn agent_positions(&self) -> impl Iterator<Item = (AgentId, Cell)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .filter_map(|(slot, pos)| pos.map(|cell| (AgentId::from_slot(slot), cell)))
    }

    /// Every cell currently holding an agent, in ascending agent ID order.
    pub fn occupied_cells(&self) -> Vec<Cell> {
        self.agent_positions().map(|(_, cell)| cell).collect()
    }

    /// Neighbours of `position`.
    ///
    /// `include_occupied == false` is pathfinding mode (only open cells);
    /// `true` is interaction mode (any non-wall cell, agents included).
    #[inline]
    pub fn adjacent_cells(&self, position: Cell, include_occupied: bool) -> Vec<Cell> {
        self.occupancy.adjacent(position, include_occupied)
    }

    /// Agents within two hops of `position`.
    ///
    /// Takes the first ring of non-wall neighbours, adds each of their own
    /// first rings, drops duplicates and the origin, and keeps the cells that
    /// hold an agent.  Walls stop the expansion; agents do not.  This is a
    /// local stand-in for a ~2-cell contact radius and must stay two-hop.
    pub fn find_proximate_pairs(&self, position: Cell) -> Vec<(AgentId, Cell)> {
        let first_ring = self.adjacent_cells(position, true);
        let mut reach = first_ring.clone();
        for &cell in &first_ring {
            reach.extend(self.adjacent_cells(cell, true));
        }
        reach.sort_unstable();
        reach.dedup();

        reach
            .into_iter()
            .filter(|&cell| cell != position)
            .filter_map(|cell| self.agent_at(cell).map(|agent| (agent, cell)))
            .collect()
    }

    /// A fresh traversability matrix for `exclude`'s distancing route.
    ///
    /// Starts from the live occupancy and closes every open cell next to any
    /// other placed agent, whatever kind of cell it is.  Built per move
    /// attempt and thrown away afterwards.
    pub fn distancing_view(&self, exclude: AgentId) -> TraversalMap {
        let mut view = self.occupancy.clone();
        for (agent, cell) in self.agent_positions() {
            if agent == exclude {
                continue;
            }
            for bubble in self.occupancy.adjacent(cell, false) {
                view.set(bubble, BLOCKED);
            }
        }
        view
    }

    // ── Mutation points ───────────────────────────────────────────────────

    /// Put `agent` on `cell` at population-instantiation time.
    pub fn place_agent(&mut self, agent: AgentId, cell: Cell) {
        if self.positions.len() <= agent.slot() {
            self.positions.resize(agent.slot() + 1, None);
        }
        debug_assert!(
            self.positions[agent.slot()].is_none(),
            "{agent} placed twice"
        );
        self.occupy(agent, cell);
    }

    /// Mark `agent`'s current cell as open so routes may pass through it.
    ///
    /// The registry keeps the old cell until [`occupy`](Self::occupy) is
    /// called; the agent is between cells only for the duration of one move
    /// attempt.
    pub fn vacate(&mut self, agent: AgentId) -> Option<Cell> {
        let cell = self.position_of(agent)?;
        debug_assert_eq!(
            self.occupancy.get(cell),
            agent.marker(),
            "{agent} registry and occupancy disagree at {cell}"
        );
        self.occupancy.set(cell, OPEN);
        Some(cell)
    }

    /// Mark `cell` as held by `agent` and record it in the registry.
    pub fn occupy(&mut self, agent: AgentId, cell: Cell) {
        debug_assert!(self.occupancy.contains(cell), "{agent} sent off-grid to {cell}");
        debug_assert!(
            self.occupancy.is_traversable(cell),
            "{agent} moved onto blocked cell {cell} (value {})",
            self.occupancy.get(cell)
        );
        self.occupancy.set(cell, agent.marker());
        self.positions[agent.slot()] = Some(cell);
    }

    /// Move `agent` straight to `to` in one step.
    ///
    /// Returns the cell it left.  `to` must be open once `agent` has left its
    /// own cell.
    pub fn relocate(&mut self, agent: AgentId, to: Cell) -> Option<Cell> {
        let from = self.vacate(agent)?;
        self.occupy(agent, to);
        Some(from)
    }

    /// Check that registry and occupancy describe the same placement and
    /// that no cell holds two agents.
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![false; self.occupancy.len()];
        for (agent, cell) in self.agent_positions() {
            let Some(i) = self.occupancy.index(cell) else { return false };
            if seen[i] || self.occupancy.get(cell) != agent.marker() {
                return false;
            }
            seen[i] = true;
        }
        let markers = self.occupancy.values().iter().filter(|&&v| v < 0).count();
        markers == self.agent_positions().count()
    }
}
