//! Obstruction geometry and the stock line-of-sight tester.
//!
//! Obstructions are axis-aligned boxes; the segment test is the standard
//! slab method.  A handful of boxes per scene is typical, so the set is a
//! plain `Vec` scanned linearly — the coarse radius filter has already cut
//! the candidate count before any segment test runs.

use sn_core::Vec3;
use sn_perception::OcclusionTester;

// ── Aabb ──────────────────────────────────────────────────────────────────────

/// An axis-aligned box.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Build from two corners in any order; components are sorted per axis.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: Vec3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Vec3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self::new(center - half, center + half)
    }

    pub fn contains(&self, p: Vec3) -> bool {
        (self.min.x..=self.max.x).contains(&p.x)
            && (self.min.y..=self.max.y).contains(&p.y)
            && (self.min.z..=self.max.z).contains(&p.z)
    }

    /// Slab test: does the segment `a → b` pass through this box?
    ///
    /// Endpoints inside the box count as intersecting.
    pub fn segment_intersects(&self, a: Vec3, b: Vec3) -> bool {
        let dir = b - a;
        let mut t_min = 0.0f32;
        let mut t_max = 1.0f32;

        for axis in 0..3 {
            let (origin, delta, lo, hi) = match axis {
                0 => (a.x, dir.x, self.min.x, self.max.x),
                1 => (a.y, dir.y, self.min.y, self.max.y),
                _ => (a.z, dir.z, self.min.z, self.max.z),
            };

            if delta.abs() < 1e-8 {
                // Segment parallel to this slab: misses unless the origin
                // lies between the planes.
                if origin < lo || origin > hi {
                    return false;
                }
            } else {
                let inv = 1.0 / delta;
                let (t0, t1) = {
                    let t0 = (lo - origin) * inv;
                    let t1 = (hi - origin) * inv;
                    if t0 <= t1 { (t0, t1) } else { (t1, t0) }
                };
                t_min = t_min.max(t0);
                t_max = t_max.min(t1);
                if t_min > t_max {
                    return false;
                }
            }
        }
        true
    }
}

// ── ObstructionSet ────────────────────────────────────────────────────────────

/// All sight-blocking geometry of one scene.
///
/// Implements [`OcclusionTester`], making it the stock occlusion
/// collaborator for the perception sensor.
#[derive(Default)]
pub struct ObstructionSet {
    boxes: Vec<Aabb>,
}

impl ObstructionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, aabb: Aabb) {
        self.boxes.push(aabb);
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl OcclusionTester for ObstructionSet {
    fn segment_blocked(&self, from: Vec3, to: Vec3) -> bool {
        self.boxes.iter().any(|b| b.segment_intersects(from, to))
    }
}
