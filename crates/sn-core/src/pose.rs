//! Agent pose: position plus yaw orientation.

use crate::angle;
use crate::Vec3;

/// A position and a yaw (heading) around +Y.
///
/// Yaw `0` faces +Z; positive yaw turns toward +X.  Pitch and roll do not
/// exist in this engine — agents stay upright and the perception cone uses
/// the horizontal forward vector as its axis.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position: Vec3,
    /// Heading in radians, wrapped to `(-π, π]`.
    pub yaw: f32,
}

impl Pose {
    #[inline]
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw: angle::wrap_pi(yaw) }
    }

    /// Unit forward vector on the ground plane.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    /// Yaw that would face `point` from this position (height ignored).
    ///
    /// Returns the current yaw when `point` is directly above/below, so
    /// facing a coincident target is a no-op rather than a spin to 0.
    pub fn yaw_to(&self, point: Vec3) -> f32 {
        let dx = point.x - self.position.x;
        let dz = point.z - self.position.z;
        if dx.abs() < 1e-6 && dz.abs() < 1e-6 {
            self.yaw
        } else {
            dx.atan2(dz)
        }
    }

    /// Snap the yaw to face `point` (yaw only — position unchanged).
    #[inline]
    pub fn face(&mut self, point: Vec3) {
        self.yaw = self.yaw_to(point);
    }

    /// Rotate toward `target_yaw` by at most `max_step` radians.
    #[inline]
    pub fn turn_towards(&mut self, target_yaw: f32, max_step: f32) {
        self.yaw = angle::turn_towards(self.yaw, target_yaw, max_step);
    }

    /// The perception origin: position raised by `eye_height`.
    #[inline]
    pub fn eye_point(&self, eye_height: f32) -> Vec3 {
        self.position + Vec3::UP * eye_height
    }
}

impl std::fmt::Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} yaw {:.1}°", self.position, self.yaw.to_degrees())
    }
}
