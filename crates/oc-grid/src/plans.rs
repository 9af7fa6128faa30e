//! Built-in office floor plans.
//!
//! Front ends pick a plan by [`PlanId`] and bound their population inputs
//! with [`FloorPlans::desk_count`] before a run starts.  Applications that
//! load their own plans register them with [`FloorPlans::insert`].

use std::collections::BTreeMap;

use oc_core::PlanId;

use crate::{GridError, GridResult, Layout};

/// Open-plan office: 12 desks, 4 task spots, a side kitchen.
const OPEN_PLAN: &str = "
####################
#..................#
#.D.D.D.D....T.....#
#..................#
#.D.D.D.D.D..#######
#............#.....#
#.D.D.D......#..T..#
#..................#
#..T...........T...#
####################
";

/// Cellular office: four eight-desk rooms off a central corridor.
const CELLULAR: &str = "
##########################
#DD.DD#.......#DD.DD#....#
#.....#...T...#.....#..T.#
#DD.DD#.......#DD.DD#....#
#.....#.......#.....#....#
###.######.####.#####.####
#........................#
#........................#
###.######.#####.#####.###
#DD.DD#T....T#DD.DD#.....#
#.....#......#.....#..T..#
#DD.DD#......#DD.DD#.....#
##########################
";

/// Dense open-plan floor: 44 desks in banks of four.
const DESK_BANKS: &str = "
##############################
#............................#
#.DDDD..DDDD..DDDD..DDDD.....#
#............................#
#.DDDD..DDDD..DDDD..DDDD..T..#
#............................#
#......................#######
#.DDDD..DDDD..DDDD.....#.....#
#......................#..T..#
#..T.........T.........#.....#
#............................#
##############################
";

/// Registry of floor plans keyed by [`PlanId`].
#[derive(Clone, Debug, Default)]
pub struct FloorPlans {
    plans: BTreeMap<PlanId, Layout>,
}

impl FloorPlans {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The three plans shipped with the simulator, as `PlanId(0..=2)`.
    pub fn builtin() -> GridResult<Self> {
        let mut plans = Self::new();
        for (id, text) in [OPEN_PLAN, CELLULAR, DESK_BANKS].into_iter().enumerate() {
            plans.insert(PlanId(id as u16), Layout::parse(text)?);
        }
        Ok(plans)
    }

    /// Register (or replace) a plan.
    pub fn insert(&mut self, id: PlanId, layout: Layout) {
        self.plans.insert(id, layout);
    }

    pub fn get(&self, id: PlanId) -> GridResult<&Layout> {
        self.plans.get(&id).ok_or(GridError::PlanNotFound(id))
    }

    /// Desks on plan `id`, the upper bound for `population_size`.
    pub fn desk_count(&self, id: PlanId) -> GridResult<usize> {
        self.get(id).map(Layout::desk_count)
    }

    /// Registered IDs in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = PlanId> + '_ {
        self.plans.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
