//! Patrol routes: ordered waypoint position lists.
//!
//! Routes feed the loop and ping-pong patrol modes.  Like the waypoint
//! graph, they are owned by the world and read-only to agents — a
//! `RouteId` that resolves to nothing (or to an empty route) makes the
//! referencing agent stand still rather than fail.

use sn_core::{RouteId, Vec3};

// ── PatrolRoute ───────────────────────────────────────────────────────────────

/// An ordered list of patrol points.
#[derive(Clone, Debug, PartialEq)]
pub struct PatrolRoute {
    name: String,
    points: Vec<Vec3>,
}

impl PatrolRoute {
    pub fn new(name: impl Into<String>, points: Vec<Vec3>) -> Self {
        Self { name: name.into(), points }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`, or `None` past the end.
    #[inline]
    pub fn point(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }
}

// ── RouteSet ──────────────────────────────────────────────────────────────────

/// All patrol routes of one scene, keyed by `RouteId` in insertion order.
#[derive(Default)]
pub struct RouteSet {
    routes: Vec<PatrolRoute>,
}

impl RouteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route and return its `RouteId` (sequential from 0).
    pub fn insert(&mut self, route: PatrolRoute) -> RouteId {
        let id = RouteId(self.routes.len() as u16);
        self.routes.push(route);
        id
    }

    /// Route for `id`, or `None` for an invalid ID.
    #[inline]
    pub fn get(&self, id: RouteId) -> Option<&PatrolRoute> {
        self.routes.get(id.index())
    }

    /// Find a route by name (configuration-time lookup).
    pub fn find(&self, name: &str) -> Option<RouteId> {
        self.routes
            .iter()
            .position(|r| r.name() == name)
            .map(|i| RouteId(i as u16))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
