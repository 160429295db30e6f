use crate::{Color, PullState};

/// Read-only projection of the control state handed to the renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PullViewModel {
    pub phase: PullState,
    pub drag_offset: f32,
    /// `drag_offset / trigger_distance`, clamped to `[0, 1]`.
    pub pull_progress: f32,
    pub haptic_fired: bool,
    pub edge_offset: f32,
    pub color: Color,
    pub dirty: bool,
}
