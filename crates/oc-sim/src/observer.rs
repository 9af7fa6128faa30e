//! Simulation observer trait for progress reporting and data collection.

use oc_agent::AgentStore;
use oc_core::Tick;
use oc_epi::Interaction;

use crate::{Frame, TickSummary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::step`][crate::Sim::step] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// Per tick the order is `on_tick_start`, `on_interactions`, `on_frame`,
/// `on_tick_end`.  `on_sim_end` follows the last tick.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         if summary.tick.0 % self.interval == 0 {
///             println!("{}: {} infected", summary.tick, summary.infected);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called with the tick's interaction set, after all agents have moved.
    fn on_interactions(&mut self, _tick: Tick, _interactions: &[Interaction]) {}

    /// Called with the display snapshot taken after transmission.
    fn on_frame(&mut self, _frame: &Frame) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called once after the final tick completes, with the final agent state.
    fn on_sim_end(&mut self, _final_tick: Tick, _agents: &AgentStore) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Keeps everything a run produces: frames, summaries and the interaction
/// history.
#[derive(Default)]
pub struct FrameRecorder {
    pub frames: Vec<Frame>,
    pub summaries: Vec<TickSummary>,
    /// One interaction set per tick.
    pub interactions: Vec<Vec<Interaction>>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SimObserver for FrameRecorder {
    fn on_interactions(&mut self, _tick: Tick, interactions: &[Interaction]) {
        self.interactions.push(interactions.to_vec());
    }

    fn on_frame(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.summaries.push(summary.clone());
    }
}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_tick_start(&mut self, tick: Tick) {
        (**self).on_tick_start(tick);
    }

    fn on_interactions(&mut self, tick: Tick, interactions: &[Interaction]) {
        (**self).on_interactions(tick, interactions);
    }

    fn on_frame(&mut self, frame: &Frame) {
        (**self).on_frame(frame);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        (**self).on_tick_end(summary);
    }

    fn on_sim_end(&mut self, final_tick: Tick, agents: &AgentStore) {
        (**self).on_sim_end(final_tick, agents);
    }
}

/// Forwards every callback to two observers in turn.
pub struct Tee<A, B>(pub A, pub B);

impl<A: SimObserver, B: SimObserver> SimObserver for Tee<A, B> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_interactions(&mut self, tick: Tick, interactions: &[Interaction]) {
        self.0.on_interactions(tick, interactions);
        self.1.on_interactions(tick, interactions);
    }

    fn on_frame(&mut self, frame: &Frame) {
        self.0.on_frame(frame);
        self.1.on_frame(frame);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.0.on_tick_end(summary);
        self.1.on_tick_end(summary);
    }

    fn on_sim_end(&mut self, final_tick: Tick, agents: &AgentStore) {
        self.0.on_sim_end(final_tick, agents);
        self.1.on_sim_end(final_tick, agents);
    }
}
