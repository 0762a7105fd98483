//! R-tree candidate index — the stock [`CandidateProvider`].
//!
//! Targets move, so the index is rebuilt (bulk-loaded) by the driver
//! whenever target positions change — typically once per tick.  Bulk load
//! is O(N log N) and target counts are tiny (usually one intruder plus a few
//! neutrals), so rebuilding wholesale beats incremental maintenance.
//!
//! Queries run in the XZ ground plane: the coarse perception filter is a
//! ground-position test by contract, with heights handled by the sensor's
//! fine checks.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use sn_core::Vec3;
use sn_perception::{Candidate, CandidateProvider};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the spatial index: a 2-D `[x, z]` ground point with the
/// full candidate payload.
#[derive(Clone)]
struct TargetEntry {
    point: [f32; 2], // [x, z]
    candidate: Candidate,
}

impl RTreeObject for TargetEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for TargetEntry {
    /// Squared Euclidean ground distance.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dz = self.point[1] - point[1];
        dx * dx + dz * dz
    }
}

// ── CandidateIndex ────────────────────────────────────────────────────────────

/// Spatial index over the scene's potential targets.
#[derive(Default)]
pub struct CandidateIndex {
    tree: RTree<TargetEntry>,
}

impl CandidateIndex {
    /// An empty index; every query returns nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_candidates(candidates: &[Candidate]) -> Self {
        let mut index = Self::new();
        index.rebuild(candidates);
        index
    }

    /// Replace the index contents with the current target positions.
    pub fn rebuild(&mut self, candidates: &[Candidate]) {
        let entries: Vec<TargetEntry> = candidates
            .iter()
            .map(|&candidate| TargetEntry {
                point: [candidate.position.x, candidate.position.z],
                candidate,
            })
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl CandidateProvider for CandidateIndex {
    /// Candidates within `radius` of `center` on the ground plane,
    /// nearest-first.
    ///
    /// The sort makes "first surviving candidate wins" mean "nearest valid
    /// target wins" and keeps the result independent of tree shape.
    fn candidates_within(&self, center: Vec3, radius: f32, out: &mut Vec<Candidate>) {
        out.clear();
        let origin = [center.x, center.z];
        out.extend(
            self.tree
                .locate_within_distance(origin, radius * radius)
                .map(|e| e.candidate),
        );
        out.sort_by(|a, b| {
            let da = center.ground_distance(a.position);
            let db = center.ground_distance(b.position);
            da.total_cmp(&db).then(a.id.cmp(&b.id))
        });
    }
}
