//! 3-D vector type for agent positions and directions.
//!
//! `Vec3` uses `f32` throughout.  Patrol geometry spans tens of metres, so
//! single precision leaves ~1 µm of resolution — far below the arrival
//! epsilons used by the motion engine — while keeping the per-agent state
//! small.
//!
//! The simulation ground plane is XZ; Y is up.  Several helpers come in
//! ground-plane variants (`ground_distance`, `flattened`) because coarse
//! range tests deliberately ignore height differences.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 3-D vector / point with `f32` components.  Y is up.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    /// Unit up vector (+Y).
    pub const UP: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    // ── Magnitude and distance ────────────────────────────────────────────

    #[inline]
    pub fn length_sq(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_sq().sqrt()
    }

    #[inline]
    pub fn distance(self, other: Vec3) -> f32 {
        (other - self).length()
    }

    #[inline]
    pub fn distance_sq(self, other: Vec3) -> f32 {
        (other - self).length_sq()
    }

    /// Distance projected onto the XZ ground plane (height ignored).
    ///
    /// The perception sensor's coarse candidate filter is a ground-position
    /// test; eye heights only enter the fine checks.
    #[inline]
    pub fn ground_distance(self, other: Vec3) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    // ── Direction ─────────────────────────────────────────────────────────

    #[inline]
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Unit vector in the direction of `self`, or `None` for (near-)zero
    /// vectors.  The cutoff is well below any meaningful movement delta.
    pub fn try_normalized(self) -> Option<Vec3> {
        let len = self.length();
        if len < 1e-6 {
            None
        } else {
            Some(self * (1.0 / len))
        }
    }

    /// Angle in radians between `self` and `other`, in `[0, π]`.
    ///
    /// Returns `π` (maximally apart) if either vector is zero, so that a
    /// degenerate direction never passes an angular gate by accident.
    pub fn angle_between(self, other: Vec3) -> f32 {
        match (self.try_normalized(), other.try_normalized()) {
            (Some(a), Some(b)) => a.dot(b).clamp(-1.0, 1.0).acos(),
            _ => std::f32::consts::PI,
        }
    }

    // ── Interpolation ─────────────────────────────────────────────────────

    /// Step from `self` toward `target` by at most `max_step`, never
    /// overshooting.  `max_step <= 0` returns `self` unchanged.
    pub fn move_towards(self, target: Vec3, max_step: f32) -> Vec3 {
        if max_step <= 0.0 {
            return self;
        }
        let delta = target - self;
        let dist = delta.length();
        if dist <= max_step || dist < 1e-6 {
            target
        } else {
            self + delta * (max_step / dist)
        }
    }

    #[inline]
    pub fn lerp(self, other: Vec3, t: f32) -> Vec3 {
        self + (other - self) * t
    }

    // ── Component helpers ─────────────────────────────────────────────────

    /// Copy of `self` with the Y component replaced.
    #[inline]
    pub fn with_y(self, y: f32) -> Vec3 {
        Vec3 { y, ..self }
    }

    /// Projection onto the ground plane (`y = 0`).
    #[inline]
    pub fn flattened(self) -> Vec3 {
        self.with_y(0.0)
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
