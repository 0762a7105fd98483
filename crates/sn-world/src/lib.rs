//! `sn-world` — externally-owned world data consumed by sentinel agents.
//!
//! Everything in this crate is read-only from an agent's point of view:
//! agents hold IDs into these structures (weak references), never the data
//! itself, and a missing or empty lookup degrades the owning behavior to a
//! no-op rather than erroring.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`graph`]       | `WaypointGraph` (CSR adjacency) + builder               |
//! | [`route`]       | `PatrolRoute` ordered point lists, `RouteSet`           |
//! | [`obstruction`] | `Aabb`, `ObstructionSet` — the stock occlusion tester   |
//! | [`candidates`]  | `CandidateIndex` — R-tree candidate provider            |
//! | [`loader`]      | CSV loaders for graphs and routes                       |
//! | [`error`]       | `WorldError`, `WorldResult`                             |

pub mod candidates;
pub mod error;
pub mod graph;
pub mod loader;
pub mod obstruction;
pub mod route;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use candidates::CandidateIndex;
pub use error::{WorldError, WorldResult};
pub use graph::{WaypointGraph, WaypointGraphBuilder};
pub use loader::{load_graph_csv, load_graph_reader, load_routes_csv, load_routes_reader};
pub use obstruction::{Aabb, ObstructionSet};
pub use route::{PatrolRoute, RouteSet};
