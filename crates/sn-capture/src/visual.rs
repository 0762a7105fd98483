//! The agent's visual representation state.
//!
//! Pure data: what form is showing and at what scale.  A renderer reads it;
//! the capture sequence writes it (form swap on entry, exponential scale
//! growth during the rush).

/// Which representation is showing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisualForm {
    Patrol,
    Alert,
}

/// Form + scale of one agent's visuals.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualState {
    pub form: VisualForm,
    /// The at-rest scale; the rush grows toward `base_scale * multiplier`.
    pub base_scale: f32,
    pub scale: f32,
}

impl VisualState {
    pub fn new(base_scale: f32) -> Self {
        let base_scale = base_scale.max(0.0);
        Self { form: VisualForm::Patrol, base_scale, scale: base_scale }
    }

    /// Back to the patrol form at the at-rest scale.
    pub fn reset(&mut self) {
        self.form = VisualForm::Patrol;
        self.scale = self.base_scale;
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::new(1.0)
    }
}
