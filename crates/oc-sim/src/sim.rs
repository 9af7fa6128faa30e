//! The `Sim` struct and its tick loop.

use oc_agent::{AgentRngs, AgentStore};
use oc_core::{AgentId, SimParams, SimRng, Tick};
use oc_epi::{TransmissionModel, detect_interactions};
use oc_grid::{Grid, Pathfinder};
use oc_mobility::{MoveKind, MovementEngine, StepOutcome};

use crate::{Frame, SimError, SimObserver, SimResult, TickSummary};

/// Lifecycle of a run.  Strictly linear: a completed run cannot be resumed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimPhase {
    /// Built, no tick run yet.
    Initializing,
    /// The given tick has been run and more remain.
    Running(Tick),
    /// All `duration_ticks` ticks have been run.
    Completed,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<P>` owns all run state and drives the four-phase tick loop:
///
/// 1. **Move**: every agent, in ascending ID order, runs one step of its task
///    state machine.  The grid is updated after each agent.
/// 2. **Detect**: all pairs within two hops are collected.
/// 3. **Transmit**: one draw per carrier–susceptible pair.
/// 4. **Snapshot**: a [`Frame`] and a [`TickSummary`] are handed to the
///    observer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: Pathfinder> {
    /// Validated run parameters.
    pub params: SimParams,

    /// Floor plan, live occupancy and position registry.
    pub grid: Grid,

    /// Agent state (SoA arrays).
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Initial carriers, ascending.
    pub carriers: Vec<AgentId>,

    pub(crate) engine: MovementEngine<P>,
    pub(crate) transmission: TransmissionModel,

    /// Transmission draws.
    pub(crate) rng: SimRng,

    pub(crate) phase: SimPhase,
    pub(crate) next_tick: Tick,
}

impl<P: Pathfinder> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    #[inline]
    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// The tick the next call to [`step`](Self::step) will run.
    #[inline]
    pub fn next_tick(&self) -> Tick {
        self.next_tick
    }

    /// Frame of the current state, outside the tick loop (e.g. the seating
    /// before tick 0).
    pub fn snapshot(&self) -> Frame {
        Frame::capture(self.next_tick, &self.grid, &self.agents)
    }

    /// Run every remaining tick.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.ensure_not_completed()?;
        while self.phase != SimPhase::Completed {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Run exactly one tick and return its summary.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickSummary> {
        self.ensure_not_completed()?;
        if self.phase == SimPhase::Initializing {
            log::info!(
                "starting run: {} agents, {} carriers {:?}, {} ticks, seed {}",
                self.agents.count,
                self.carriers.len(),
                self.carriers,
                self.params.duration_ticks,
                self.params.seed,
            );
        }

        let now = self.next_tick;
        self.phase = SimPhase::Running(now);
        let summary = self.process_tick(now, observer);
        self.next_tick = now.next();

        if self.next_tick.0 >= self.params.duration_ticks {
            self.phase = SimPhase::Completed;
            log::info!(
                "run complete after {} ticks: {} of {} infected",
                self.next_tick.0,
                summary.infected,
                summary.population,
            );
            observer.on_sim_end(self.next_tick, &self.agents);
        }
        Ok(summary)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> TickSummary {
        observer.on_tick_start(now);

        // ── Phase 1: move, one agent at a time ───────────────────────────
        let mut stuck = 0usize;
        for slot in 0..self.agents.count {
            let agent = AgentId::from_slot(slot);
            let outcome = self.engine.step_agent(agent, &mut self.agents, &mut self.rngs, &mut self.grid);
            if outcome == StepOutcome::Moved(MoveKind::Stayed) {
                stuck += 1;
            }
        }
        debug_assert!(self.grid.is_consistent(), "occupancy out of sync at {now}");
        if stuck > 0 {
            log::trace!("{now}: {stuck} agents boxed in");
        }

        // ── Phase 2: detect ───────────────────────────────────────────────
        let interactions = detect_interactions(&self.grid);
        observer.on_interactions(now, &interactions);

        // ── Phase 3: transmit ─────────────────────────────────────────────
        let outcome = self.transmission.apply(&interactions, &mut self.agents, &mut self.rng);
        if outcome.any() {
            log::debug!("{now}: {} new infections", outcome.infections.len());
        }

        // ── Phase 4: snapshot ─────────────────────────────────────────────
        let frame = Frame::capture(now, &self.grid, &self.agents);
        observer.on_frame(&frame);

        let summary = TickSummary::collect(now, &self.agents, &interactions, &outcome);
        log::debug!(
            "{now}: {} infected, {} interactions, {} contagious contacts",
            summary.infected,
            summary.interactions,
            summary.contagious_contacts,
        );
        observer.on_tick_end(&summary);
        summary
    }

    fn ensure_not_completed(&self) -> SimResult<()> {
        if self.phase == SimPhase::Completed {
            return Err(SimError::Config(format!(
                "run already completed after {} ticks",
                self.params.duration_ticks
            )));
        }
        Ok(())
    }
}
