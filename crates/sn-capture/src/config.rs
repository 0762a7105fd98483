//! Capture sequence configuration.

/// Parameters of the capture state machine.  All durations are simulated
/// seconds, distances metres, speeds metres per second.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaptureConfig {
    /// How long the alerted (roar) phase holds before the rush starts.
    pub roar_secs: f32,

    /// Rush movement speed — typically well above any patrol speed.
    pub rush_speed: f32,

    /// Distance to the target at which the rush ends in a bite.
    pub rush_arrive_dist: f32,

    /// Hard cap on the rush phase.  The bite happens at the cap even if the
    /// agent somehow never closes the distance.
    pub rush_timeout_secs: f32,

    /// Delay between the bite trigger firing and the game-over notification.
    pub bite_delay_secs: f32,

    /// The visual scale grows toward `base_scale * scale_multiplier` during
    /// the rush.
    pub scale_multiplier: f32,

    /// Exponential smoothing rate for the scale growth, 1/seconds.
    pub scale_smoothing: f32,

    /// The captured viewpoint sits this far above the target's ground
    /// position.
    pub viewpoint_eye_offset: f32,

    /// Height of the agent's head — the point the viewpoint is forced to
    /// track during the rush.
    pub head_height: f32,

    /// Animation trigger fired on the alert form when the bite starts.
    pub bite_trigger: String,

    /// Capability names disabled on capture entry (target movement, camera
    /// look, and whatever else the scene registers).  Names with no
    /// registered capability are silently ignored.
    pub disable_controls: Vec<String>,
}

impl CaptureConfig {
    /// Clamp all numeric fields into their valid ranges.
    pub fn sanitized(self) -> Self {
        Self {
            roar_secs: self.roar_secs.max(0.0),
            rush_speed: self.rush_speed.max(0.0),
            rush_arrive_dist: self.rush_arrive_dist.max(0.0),
            rush_timeout_secs: self.rush_timeout_secs.max(0.0),
            bite_delay_secs: self.bite_delay_secs.max(0.0),
            scale_multiplier: self.scale_multiplier.max(0.0),
            scale_smoothing: self.scale_smoothing.max(0.0),
            viewpoint_eye_offset: self.viewpoint_eye_offset.max(0.0),
            head_height: self.head_height.max(0.0),
            ..self
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            roar_secs: 1.2,
            rush_speed: 6.0,
            rush_arrive_dist: 0.6,
            rush_timeout_secs: 5.0,
            bite_delay_secs: 0.8,
            scale_multiplier: 1.6,
            scale_smoothing: 4.0,
            viewpoint_eye_offset: 1.5,
            head_height: 1.8,
            bite_trigger: "bite".to_string(),
            disable_controls: Vec::new(),
        }
    }
}
