//! Fluent builder for constructing a [`Sim`].

use sn_agent::{SentinelAgent, SentinelConfig};
use sn_capture::{AnimationSink, CapabilityTable, GameOverNotifier, TargetHandle, ViewpointController};
use sn_core::{AgentId, Pose, SimConfig};
use sn_perception::{CandidateProvider, OcclusionTester, WeightProvider};
use sn_world::{RouteSet, WaypointGraph};

use crate::{AgentRngs, NoopGameOver, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<C, O>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, tick duration
/// - `C: CandidateProvider` + `O: OcclusionTester` — the spatial backends
/// - at least one [`spawn`](Self::spawn)ed agent
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                          |
/// |-----------------|----------------------------------|
/// | `.routes(r)`    | empty `RouteSet`                 |
/// | `.graph(g)`     | `WaypointGraph::empty()`         |
/// | `.weight(w)`    | none (zero carried weight)       |
/// | `.viewpoint(v)` | none (camera effects skipped)    |
/// | `.target(t)`    | none (target effects skipped)    |
/// | `.animation(a)` | none (triggers dropped)          |
/// | `.controls(c)`  | empty `CapabilityTable`          |
/// | `.game_over(g)` | [`NoopGameOver`]                 |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, candidate_index, obstructions)
///     .routes(routes)
///     .spawn(Pose::new(Vec3::ZERO, 0.0), sentinel_config)
///     .game_over(Box::new(scene_game_over))
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<C: CandidateProvider, O: OcclusionTester> {
    config: SimConfig,
    candidates: C,
    obstructions: O,
    spawns: Vec<(Pose, SentinelConfig)>,
    routes: Option<RouteSet>,
    graph: Option<WaypointGraph>,
    weight: Option<Box<dyn WeightProvider>>,
    viewpoint: Option<Box<dyn ViewpointController>>,
    target: Option<Box<dyn TargetHandle>>,
    animation: Option<Box<dyn AnimationSink>>,
    controls: Option<CapabilityTable>,
    game_over: Option<Box<dyn GameOverNotifier>>,
}

impl<C: CandidateProvider, O: OcclusionTester> SimBuilder<C, O> {
    /// Create a builder with all required inputs except agents.
    pub fn new(config: SimConfig, candidates: C, obstructions: O) -> Self {
        Self {
            config,
            candidates,
            obstructions,
            spawns: Vec::new(),
            routes: None,
            graph: None,
            weight: None,
            viewpoint: None,
            target: None,
            animation: None,
            controls: None,
            game_over: None,
        }
    }

    /// Add one sentinel at `spawn` with the given configuration.  Agents get
    /// sequential `AgentId`s in spawn order.
    pub fn spawn(mut self, spawn: Pose, config: SentinelConfig) -> Self {
        self.spawns.push((spawn, config));
        self
    }

    /// Supply the patrol routes referenced by loop/ping-pong modes.
    pub fn routes(mut self, routes: RouteSet) -> Self {
        self.routes = Some(routes);
        self
    }

    /// Supply the waypoint graph referenced by the random-walk mode.
    pub fn graph(mut self, graph: WaypointGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Supply the carried-weight query.
    pub fn weight(mut self, weight: Box<dyn WeightProvider>) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Supply the viewpoint the capture sequence commandeers.
    pub fn viewpoint(mut self, viewpoint: Box<dyn ViewpointController>) -> Self {
        self.viewpoint = Some(viewpoint);
        self
    }

    /// Supply the target actor handle (physics suspension, visibility).
    pub fn target(mut self, target: Box<dyn TargetHandle>) -> Self {
        self.target = Some(target);
        self
    }

    /// Supply the animation trigger sink.
    pub fn animation(mut self, animation: Box<dyn AnimationSink>) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Supply the capability table of disable-able external controls.
    pub fn controls(mut self, controls: CapabilityTable) -> Self {
        self.controls = Some(controls);
        self
    }

    /// Supply the game-over notifier.
    pub fn game_over(mut self, game_over: Box<dyn GameOverNotifier>) -> Self {
        self.game_over = Some(game_over);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<C, O>> {
        if !(self.config.tick_duration_secs > 0.0) {
            return Err(SimError::Config(format!(
                "tick_duration_secs must be positive, got {}",
                self.config.tick_duration_secs
            )));
        }
        if self.spawns.is_empty() {
            return Err(SimError::Config("no agents spawned".to_string()));
        }

        let rngs = AgentRngs::new(self.spawns.len(), self.config.seed);
        let agents: Vec<SentinelAgent> = self
            .spawns
            .into_iter()
            .enumerate()
            .map(|(i, (pose, cfg))| SentinelAgent::new(AgentId(i as u32), pose, cfg))
            .collect();

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            agents,
            rngs,
            routes: self.routes.unwrap_or_default(),
            graph: self.graph.unwrap_or_else(WaypointGraph::empty),
            candidates: self.candidates,
            obstructions: self.obstructions,
            weight: self.weight,
            viewpoint: self.viewpoint,
            target: self.target,
            animation: self.animation,
            controls: self.controls.unwrap_or_default(),
            game_over: self.game_over.unwrap_or_else(|| Box::new(NoopGameOver)),
        })
    }
}
