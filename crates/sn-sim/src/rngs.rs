//! Per-agent RNG storage.
//!
//! Kept separate from the agent list so the tick loop can borrow
//! `&mut [SentinelAgent]` and `&mut [AgentRng]` simultaneously and zip them
//! — including with Rayon's indexed parallel iterators, where each worker
//! ends up with exclusive access to one agent and its RNG.

use sn_core::{AgentId, AgentRng};

/// A `Vec<AgentRng>` indexed by `AgentId`, seeded deterministically from the
/// run's global seed.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
