//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter; the mapping to seconds
//! lives in `SimClock`:
//!
//!   elapsed_secs = tick * tick_duration_secs
//!
//! The engine is a fixed-timestep simulation: every tick represents the same
//! `dt` and every duration (roar, wait timers, rush caps) is measured in
//! simulated seconds accumulated from that `dt`.  No behavior depends on an
//! implicit frame counter — the driver passes `dt` into each update
//! explicitly.
//!
//! The conventional tick duration is 0.05 s (20 Hz); applications needing
//! finer motion set a smaller value and the rest of the engine is agnostic.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at 20 Hz a u64 lasts ~29 billion years, so overflow is
/// not a practical concern.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and simulated seconds.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many simulated seconds one tick represents.
    pub tick_duration_secs: f32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_secs: f32) -> Self {
        Self { tick_duration_secs, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// The fixed timestep passed to every per-tick update.
    #[inline]
    pub fn dt(&self) -> f32 {
        self.tick_duration_secs
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.current_tick.0 as f32 * self.tick_duration_secs
    }

    /// How many ticks span `secs` simulated seconds? (rounds up — a phase
    /// never ends early)
    #[inline]
    pub fn ticks_for_secs(&self, secs: f32) -> u64 {
        if self.tick_duration_secs <= 0.0 {
            return 0;
        }
        (secs / self.tick_duration_secs).ceil().max(0.0) as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically constructed by the application crate (or deserialized from a
/// config file with the `serde` feature) and passed to the simulation
/// builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated seconds per tick.  0.05 (20 Hz) is the conventional value.
    pub tick_duration_secs: f32,

    /// Total ticks to simulate (exclusive upper bound for `run`).
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count for the parallel patrol phase.  `None` uses all
    /// logical cores.  Ignored without the `parallel` feature.
    pub num_threads: Option<usize>,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }
}
