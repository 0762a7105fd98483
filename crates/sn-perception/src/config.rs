//! Perception sensor configuration.

/// Immutable per-agent perception parameters.
///
/// Construct with [`PerceptionConfig::sanitized`] (the sensor does this for
/// you): out-of-range values are clamped rather than rejected, because a
/// sentinel with a degenerate sensor is a safe no-op while a construction
/// error would abort the scene.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerceptionConfig {
    /// Detection radius in metres before any weight bonus.
    pub base_radius: f32,

    /// Half of the full cone angle, in degrees.  A target must lie strictly
    /// inside this angle from the forward vector to be seen.
    pub half_angle_deg: f32,

    /// Vertical offset from the agent's ground position to its eye, metres.
    /// Also scales the perceived chest point on targets.
    pub eye_height: f32,

    /// Radius bonus per unit of carried weight.  `0` disables weight scaling.
    pub weight_sensitivity: f32,
}

impl PerceptionConfig {
    /// Clamp every field into its valid range.
    ///
    /// - radii, heights, and sensitivities are non-negative;
    /// - the half angle is limited to `[0, 180]` degrees (180 = full sphere).
    pub fn sanitized(self) -> Self {
        Self {
            base_radius: self.base_radius.max(0.0),
            half_angle_deg: self.half_angle_deg.clamp(0.0, 180.0),
            eye_height: self.eye_height.max(0.0),
            weight_sensitivity: self.weight_sensitivity.max(0.0),
        }
    }

    /// The half angle in radians.
    #[inline]
    pub fn half_angle_rad(&self) -> f32 {
        self.half_angle_deg.to_radians()
    }
}
