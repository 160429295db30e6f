use crate::config::{ConfigError, PullConfig};
use crate::view_model::PullViewModel;

/// Discrete phase of the pull gesture. `Idle` is both initial and terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullState {
    #[default]
    Idle,
    Drag,
    Armed,
    Refreshing,
    Done,
}

/// Per-gesture data; only exists while the phase is not `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSession {
    pub drag_offset: f32,
    pub haptic_fired: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PullControlState {
    config: PullConfig,
    phase: PullState,
    session: Option<GestureSession>,
    dirty: bool,
}

impl PullControlState {
    pub fn new(config: PullConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &PullConfig {
        &self.config
    }

    pub fn phase(&self) -> PullState {
        self.phase
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn drag_offset(&self) -> f32 {
        self.session.map_or(0.0, |s| s.drag_offset)
    }

    pub fn haptic_fired(&self) -> bool {
        self.session.is_some_and(|s| s.haptic_fired)
    }

    /// A refresh has been invoked and has not reported completion yet.
    pub fn refresh_in_flight(&self) -> bool {
        self.phase == PullState::Refreshing
    }

    pub fn view(&self) -> PullViewModel {
        let drag_offset = self.drag_offset();
        PullViewModel {
            phase: self.phase,
            drag_offset,
            pull_progress: (drag_offset / self.config.trigger_distance).clamp(0.0, 1.0),
            haptic_fired: self.haptic_fired(),
            edge_offset: self.config.edge_offset,
            color: self.config.color,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything observable changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn begin_session(&mut self, phase: PullState, drag_offset: f32) {
        self.phase = phase;
        self.session = Some(GestureSession {
            drag_offset,
            haptic_fired: false,
        });
        self.dirty = true;
    }

    pub(crate) fn set_phase(&mut self, phase: PullState) {
        if self.phase != phase {
            self.phase = phase;
            self.dirty = true;
        }
    }

    pub(crate) fn set_drag_offset(&mut self, drag_offset: f32) {
        if let Some(session) = self.session.as_mut() {
            if session.drag_offset != drag_offset {
                session.drag_offset = drag_offset;
                self.dirty = true;
            }
        }
    }

    /// Marks the haptic as fired; returns `false` if it already fired this session.
    pub(crate) fn mark_haptic_fired(&mut self) -> bool {
        match self.session.as_mut() {
            Some(session) if !session.haptic_fired => {
                session.haptic_fired = true;
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn clear_haptic(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.haptic_fired {
                session.haptic_fired = false;
                self.dirty = true;
            }
        }
    }

    pub(crate) fn end_session(&mut self) {
        self.phase = PullState::Idle;
        self.session = None;
        self.dirty = true;
    }
}
