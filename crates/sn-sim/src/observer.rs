//! Simulation observer trait for progress reporting and event collection.

use sn_capture::{CapturePhase, GameOverNotifier};
use sn_core::{AgentId, TargetId, Tick};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — console reporter
///
/// ```rust,ignore
/// struct Reporter;
///
/// impl SimObserver for Reporter {
///     fn on_detection(&mut self, tick: Tick, agent: AgentId, target: TargetId) {
///         println!("{tick}: {agent} spotted {target}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.  `events` is the number of agent
    /// events (detections + phase changes) this tick produced.
    fn on_tick_end(&mut self, _tick: Tick, _events: usize) {}

    /// An agent's scan succeeded and its capture sequence began.
    fn on_detection(&mut self, _tick: Tick, _agent: AgentId, _target: TargetId) {}

    /// An agent's capture sequence entered a new phase.
    fn on_capture_phase(&mut self, _tick: Tick, _agent: AgentId, _phase: CapturePhase) {}

    /// An agent's capture resolved: the game-over notifier has fired.
    fn on_game_over(&mut self, _tick: Tick, _agent: AgentId) {}

    /// Called once after the final tick completes (end of configured run, or
    /// every agent terminated).
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`GameOverNotifier`] that swallows the notification.  Default for sims
/// whose driver watches agent lifecycles directly instead.
pub struct NoopGameOver;

impl GameOverNotifier for NoopGameOver {
    fn notify_game_over(&mut self) {}
}
