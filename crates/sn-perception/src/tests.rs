//! Unit tests for the perception sensor.

use sn_core::{Pose, TargetId, Vec3};

use crate::{
    Candidate, CandidateProvider, Detection, NoCandidates, NoObstructions, OcclusionTester,
    PerceptionConfig, PerceptionSensor, TargetTag,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A provider backed by a plain list, filtering by ground distance the way
/// the stock spatial index does.
struct ListProvider(Vec<Candidate>);

impl CandidateProvider for ListProvider {
    fn candidates_within(&self, center: Vec3, radius: f32, out: &mut Vec<Candidate>) {
        out.clear();
        out.extend(
            self.0
                .iter()
                .filter(|c| center.ground_distance(c.position) <= radius)
                .copied(),
        );
    }
}

/// Blocks every segment.
struct Wall;

impl OcclusionTester for Wall {
    fn segment_blocked(&self, _from: Vec3, _to: Vec3) -> bool {
        true
    }
}

fn intruder(id: u32, x: f32, z: f32) -> Candidate {
    Candidate {
        id: TargetId(id),
        position: Vec3::new(x, 0.0, z),
        tag: TargetTag::Intruder,
    }
}

/// The reference configuration from the detection scenario: agent at the
/// origin facing +Z, half-angle 45°, radius 5, eye height 1.
fn reference_sensor() -> (PerceptionSensor, Pose) {
    let sensor = PerceptionSensor::new(PerceptionConfig {
        base_radius: 5.0,
        half_angle_deg: 45.0,
        eye_height: 1.0,
        weight_sensitivity: 0.0,
    });
    (sensor, Pose::new(Vec3::ZERO, 0.0))
}

fn scan_one(sensor: &mut PerceptionSensor, pose: &Pose, c: Candidate) -> Option<Detection> {
    sensor.scan(pose, 0.0, &ListProvider(vec![c]), &NoObstructions)
}

// ── Effective radius ──────────────────────────────────────────────────────────

#[cfg(test)]
mod radius {
    use super::*;

    #[test]
    fn weight_bonus_is_monotonic() {
        let (sensor, _) = reference_sensor();
        let sensor = PerceptionSensor::new(PerceptionConfig {
            weight_sensitivity: 0.5,
            ..*sensor.config()
        });
        let mut last = 0.0;
        for w in 0..20 {
            let r = sensor.effective_radius(w as f32);
            assert!(r >= last, "radius shrank from {last} to {r} at weight {w}");
            last = r;
        }
    }

    #[test]
    fn never_below_base_radius() {
        let sensor = PerceptionSensor::new(PerceptionConfig {
            base_radius: 5.0,
            half_angle_deg: 45.0,
            eye_height: 1.0,
            weight_sensitivity: 2.0,
        });
        assert_eq!(sensor.effective_radius(-10.0), 5.0);
        assert_eq!(sensor.effective_radius(0.0), 5.0);
        assert_eq!(sensor.effective_radius(3.0), 11.0);
    }

    #[test]
    fn negative_config_clamps_to_zero() {
        let sensor = PerceptionSensor::new(PerceptionConfig {
            base_radius: -4.0,
            half_angle_deg: -10.0,
            eye_height: -1.0,
            weight_sensitivity: -0.5,
        });
        let cfg = sensor.config();
        assert_eq!(cfg.base_radius, 0.0);
        assert_eq!(cfg.half_angle_deg, 0.0);
        assert_eq!(cfg.eye_height, 0.0);
        assert_eq!(cfg.weight_sensitivity, 0.0);
    }

    #[test]
    fn weight_extends_detection_range() {
        // Base radius 5 misses a target at 6 m; 4 kg at 0.5 m/kg reaches it.
        let mut sensor = PerceptionSensor::new(PerceptionConfig {
            base_radius: 5.0,
            half_angle_deg: 45.0,
            eye_height: 1.0,
            weight_sensitivity: 0.5,
        });
        let pose = Pose::new(Vec3::ZERO, 0.0);
        let target = intruder(0, 0.0, 6.0);
        assert!(scan_one(&mut sensor, &pose, target).is_none());
        assert!(
            sensor
                .scan(&pose, 4.0, &ListProvider(vec![target]), &NoObstructions)
                .is_some()
        );
    }
}

// ── Scan scenarios ────────────────────────────────────────────────────────────

#[cfg(test)]
mod scan {
    use super::*;

    #[test]
    fn reference_scenario() {
        // Target at (0, 0, 4.9), chest at 0.8 m: detected.
        // Moved to (0, 0, 5.1): outside the radius.
        // Behind a wall at 3 m: blocked.
        let (mut sensor, pose) = reference_sensor();

        let near = scan_one(&mut sensor, &pose, intruder(1, 0.0, 4.9));
        assert_eq!(near.map(|d| d.target), Some(TargetId(1)));

        assert!(scan_one(&mut sensor, &pose, intruder(1, 0.0, 5.1)).is_none());

        let blocked = sensor.scan(
            &pose,
            0.0,
            &ListProvider(vec![intruder(1, 0.0, 3.0)]),
            &Wall,
        );
        assert!(blocked.is_none());
    }

    #[test]
    fn exact_radius_boundary_rejected() {
        // Eye height 0 puts eye and chest on the ground plane, so the
        // eye-to-chest distance equals the configured radius exactly.
        let mut sensor = PerceptionSensor::new(PerceptionConfig {
            base_radius: 5.0,
            half_angle_deg: 45.0,
            eye_height: 0.0,
            weight_sensitivity: 0.0,
        });
        let pose = Pose::new(Vec3::ZERO, 0.0);
        assert!(scan_one(&mut sensor, &pose, intruder(0, 0.0, 5.0)).is_none());
        assert!(scan_one(&mut sensor, &pose, intruder(0, 0.0, 4.999)).is_some());
    }

    #[test]
    fn cone_edge_divides_seen_from_unseen() {
        // Flat geometry; the cone is ±45° around +Z.  Just past the edge is
        // rejected, just inside is seen, behind is far outside.
        let mut sensor = PerceptionSensor::new(PerceptionConfig {
            base_radius: 10.0,
            half_angle_deg: 45.0,
            eye_height: 0.0,
            weight_sensitivity: 0.0,
        });
        let pose = Pose::new(Vec3::ZERO, 0.0);
        assert!(scan_one(&mut sensor, &pose, intruder(0, 3.1, 3.0)).is_none());
        assert!(scan_one(&mut sensor, &pose, intruder(0, 2.9, 3.1)).is_some());
        assert!(scan_one(&mut sensor, &pose, intruder(0, 0.0, -3.0)).is_none());
    }

    #[test]
    fn neutral_tag_is_ignored() {
        let (mut sensor, pose) = reference_sensor();
        let prop = Candidate {
            id: TargetId(9),
            position: Vec3::new(0.0, 0.0, 3.0),
            tag: TargetTag::Neutral,
        };
        assert!(
            sensor
                .scan(&pose, 0.0, &ListProvider(vec![prop]), &NoObstructions)
                .is_none()
        );
    }

    #[test]
    fn first_surviving_candidate_wins() {
        let (mut sensor, pose) = reference_sensor();
        let provider = ListProvider(vec![
            intruder(3, 0.0, 4.0),
            intruder(7, 0.0, 2.0), // closer, but listed second
        ]);
        let hit = sensor.scan(&pose, 0.0, &provider, &NoObstructions).unwrap();
        assert_eq!(hit.target, TargetId(3));
    }

    #[test]
    fn empty_world_never_detects() {
        let (mut sensor, pose) = reference_sensor();
        assert!(sensor.scan(&pose, 0.0, &NoCandidates, &NoObstructions).is_none());
    }

    #[test]
    fn zero_radius_short_circuits() {
        let mut sensor = PerceptionSensor::new(PerceptionConfig {
            base_radius: 0.0,
            half_angle_deg: 45.0,
            eye_height: 1.0,
            weight_sensitivity: 0.0,
        });
        let pose = Pose::new(Vec3::ZERO, 0.0);
        assert!(scan_one(&mut sensor, &pose, intruder(0, 0.0, 0.1)).is_none());
    }

    #[test]
    fn detection_reports_distance_and_position() {
        let (mut sensor, pose) = reference_sensor();
        let d = scan_one(&mut sensor, &pose, intruder(4, 0.0, 4.0)).unwrap();
        assert_eq!(d.position, Vec3::new(0.0, 0.0, 4.0));
        // Eye (0,1,0) → chest (0,0.8,4): slightly longer than 4 m on the ground.
        assert!((d.distance - (16.0f32 + 0.04).sqrt()).abs() < 1e-4);
    }
}
