//! Visual parameters of the refresh indicator.
//!
//! [`visual_state`] is the pure mapping from a view model and clock readings
//! to what gets drawn. [`IndicatorRenderer`] owns the clocks feeding it: the
//! fade clock for opacity and the free-running spin clock used while
//! refreshing. Pull progress needs no clock of its own, it follows the drag
//! offset directly.

use std::time::Duration;

use crate::clock::{AnimationClock, FadeClock, FadeDirection};
use crate::{AnimationTiming, Color, Effect, Msg, PullState, PullViewModel};

/// Indicator scale at zero pull progress; full pull reaches 1.0.
pub const MIN_SCALE: f32 = 0.6;
/// Arc sweep while refreshing, as a fraction of the full circle.
pub const REFRESH_ARC_SWEEP: f32 = 0.75;
/// Glow intensity reached at full pull progress.
pub const PULL_GLOW_MAX: f32 = 0.6;
pub const REFRESH_GLOW: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorVisualState {
    /// Distance of the indicator from the top of the scroll region.
    pub offset_y: f32,
    pub pull_progress: f32,
    pub scale: f32,
    /// Fraction of the circle covered by the arc.
    pub arc_sweep: f32,
    /// Always within `[0, 360)`.
    pub rotation_degrees: f32,
    pub glow_intensity: f32,
    pub opacity: f32,
    pub color: Color,
    pub glow_color: Color,
}

/// Maps the control's view to indicator parameters. `None` while idle.
pub fn visual_state(
    view: &PullViewModel,
    rotation_degrees: f32,
    opacity: f32,
) -> Option<IndicatorVisualState> {
    let progress = view.pull_progress.clamp(0.0, 1.0);
    let (scale, arc_sweep, glow_intensity) = match view.phase {
        PullState::Idle => return None,
        PullState::Drag | PullState::Armed => (
            MIN_SCALE + (1.0 - MIN_SCALE) * progress,
            REFRESH_ARC_SWEEP * progress,
            PULL_GLOW_MAX * progress,
        ),
        PullState::Refreshing | PullState::Done => (1.0, REFRESH_ARC_SWEEP, REFRESH_GLOW),
    };

    Some(IndicatorVisualState {
        offset_y: view.edge_offset + view.drag_offset,
        pull_progress: progress,
        scale,
        arc_sweep,
        rotation_degrees: rotation_degrees.rem_euclid(360.0),
        glow_intensity,
        opacity: opacity.clamp(0.0, 1.0),
        color: view.color,
        glow_color: view.color.scale_alpha(glow_intensity),
    })
}

#[derive(Debug, Clone)]
pub struct IndicatorRenderer {
    timing: AnimationTiming,
    spin: AnimationClock,
    fade: FadeClock,
    reduce_motion: bool,
}

impl IndicatorRenderer {
    pub fn new(timing: AnimationTiming) -> Self {
        Self {
            timing,
            spin: AnimationClock::new(),
            fade: FadeClock::new(),
            reduce_motion: false,
        }
    }

    /// Follows the platform's reduced-motion setting. Turning it on while a
    /// fade-out runs completes the fade immediately.
    pub fn set_reduce_motion(&mut self, enabled: bool) -> Option<Msg> {
        self.reduce_motion = enabled;
        if !enabled {
            return None;
        }
        self.spin.stop();
        self.spin.reset();
        self.fade.finish();
        self.take_fade_out_completed()
    }

    pub fn reduce_motion(&self) -> bool {
        self.reduce_motion
    }

    /// Starts or stops clocks for an effect emitted by the state machine.
    pub fn apply(&mut self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::FadeIn => self.start_fade(FadeDirection::In, self.timing.fade_in),
            Effect::FadeOut => self.start_fade(FadeDirection::Out, self.timing.fade_out),
            Effect::StartSpin => {
                self.spin.reset();
                if !self.reduce_motion {
                    self.spin.start();
                }
                None
            }
            Effect::StopSpin => {
                self.spin.stop();
                None
            }
            Effect::FireHaptic | Effect::InvokeRefresh => None,
        }
    }

    /// Advances both clocks by one frame.
    pub fn advance(&mut self, dt: Duration) -> Option<Msg> {
        self.spin.advance(dt);
        self.fade.advance(dt);
        self.take_fade_out_completed()
    }

    pub fn rotation_degrees(&self) -> f32 {
        if self.reduce_motion {
            return 0.0;
        }
        let turns = self.spin.elapsed().as_secs_f32() / self.timing.spin_period.as_secs_f32();
        turns.fract() * 360.0
    }

    pub fn opacity(&self) -> f32 {
        self.fade.opacity()
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_running()
    }

    /// Whether a clock is running, i.e. the next frame will differ.
    pub fn is_animating(&self) -> bool {
        self.spin.is_running() || self.fade.is_running()
    }

    pub fn frame(&self, view: &PullViewModel) -> Option<IndicatorVisualState> {
        visual_state(view, self.rotation_degrees(), self.opacity())
    }

    /// Stops and zeroes every clock; the renderer can be reused afterwards.
    pub fn dispose(&mut self) {
        self.spin.stop();
        self.spin.reset();
        self.fade.reset();
    }

    fn start_fade(&mut self, direction: FadeDirection, duration: Duration) -> Option<Msg> {
        self.fade.start(direction, duration);
        if self.reduce_motion {
            self.fade.finish();
        }
        self.take_fade_out_completed()
    }

    fn take_fade_out_completed(&mut self) -> Option<Msg> {
        self.fade
            .take_out_completed()
            .then_some(Msg::FadeOutCompleted)
    }
}
