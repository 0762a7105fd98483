//! CSV loaders for waypoint graphs and patrol routes.
//!
//! # Graph CSV format
//!
//! One row per waypoint.  `links` is a `;`-separated list of neighbor names;
//! each listed link is inserted in **both** directions, so it is enough to
//! list every corridor once.
//!
//! ```csv
//! name,x,y,z,links
//! hall,0,0,0,door;alcove
//! door,4,0,0,
//! alcove,0,0,4,
//! ```
//!
//! # Route CSV format
//!
//! One row per route point.  Points are ordered by `seq` within each route;
//! routes keep their first-appearance order in the resulting [`RouteSet`].
//!
//! ```csv
//! route,seq,x,y,z
//! east-wing,0,0,0,0
//! east-wing,1,6,0,0
//! east-wing,2,6,0,6
//! ```
//!
//! Both loaders have `*_reader` variants accepting any `Read` source —
//! useful for tests (pass a `std::io::Cursor`) or embedded scene data.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sn_core::Vec3;

use crate::graph::{WaypointGraph, WaypointGraphBuilder};
use crate::route::{PatrolRoute, RouteSet};
use crate::WorldError;

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct GraphRecord {
    name: String,
    x: f32,
    y: f32,
    z: f32,
    #[serde(default)]
    links: String,
}

#[derive(Deserialize)]
struct RouteRecord {
    route: String,
    seq: u32,
    x: f32,
    y: f32,
    z: f32,
}

// ── Graph loading ─────────────────────────────────────────────────────────────

/// Load a [`WaypointGraph`] from a CSV file.
pub fn load_graph_csv(path: &Path) -> Result<WaypointGraph, WorldError> {
    let file = std::fs::File::open(path).map_err(WorldError::Io)?;
    load_graph_reader(file)
}

/// Like [`load_graph_csv`] but accepts any `Read` source.
pub fn load_graph_reader<R: Read>(reader: R) -> Result<WaypointGraph, WorldError> {
    // ── Parse rows ────────────────────────────────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows: Vec<GraphRecord> = Vec::new();
    for result in csv_reader.deserialize::<GraphRecord>() {
        rows.push(result.map_err(|e| WorldError::Parse(e.to_string()))?);
    }

    // ── First pass: create waypoints, reject duplicate names ──────────────
    let mut builder = WaypointGraphBuilder::with_capacity(rows.len(), rows.len() * 2);
    let mut by_name = HashMap::with_capacity(rows.len());
    for row in &rows {
        let id = builder.add_waypoint(row.name.clone(), Vec3::new(row.x, row.y, row.z));
        if by_name.insert(row.name.clone(), id).is_some() {
            return Err(WorldError::DuplicateWaypoint(row.name.clone()));
        }
    }

    // ── Second pass: resolve links by name ────────────────────────────────
    for row in &rows {
        let from = by_name[&row.name];
        for link in row.links.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            let to = by_name
                .get(link)
                .copied()
                .ok_or_else(|| WorldError::UnknownWaypoint(link.to_string()))?;
            builder.add_link(from, to);
        }
    }

    Ok(builder.build())
}

// ── Route loading ─────────────────────────────────────────────────────────────

/// Load a [`RouteSet`] from a CSV file.
pub fn load_routes_csv(path: &Path) -> Result<RouteSet, WorldError> {
    let file = std::fs::File::open(path).map_err(WorldError::Io)?;
    load_routes_reader(file)
}

/// Like [`load_routes_csv`] but accepts any `Read` source.
pub fn load_routes_reader<R: Read>(reader: R) -> Result<RouteSet, WorldError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    // Buffer points per route; track first-appearance order separately
    // because HashMap iteration order is unspecified.
    let mut by_route: HashMap<String, Vec<(u32, Vec3)>> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for result in csv_reader.deserialize::<RouteRecord>() {
        let row = result.map_err(|e| WorldError::Parse(e.to_string()))?;
        let entry = by_route.entry(row.route.clone()).or_default();
        if entry.is_empty() {
            order.push(row.route.clone());
        }
        entry.push((row.seq, Vec3::new(row.x, row.y, row.z)));
    }

    let mut routes = RouteSet::new();
    for name in order {
        let mut points = by_route.remove(&name).unwrap_or_default();
        points.sort_by_key(|&(seq, _)| seq);
        routes.insert(PatrolRoute::new(name, points.into_iter().map(|(_, p)| p).collect()));
    }
    Ok(routes)
}
