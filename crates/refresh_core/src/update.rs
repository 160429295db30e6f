use refresh_logging::{refresh_debug, refresh_info, refresh_trace, refresh_warn};

use crate::{Effect, Msg, PullControlState, PullState, RefreshOutcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PullControlState, msg: Msg) -> (PullControlState, Vec<Effect>) {
    let before = state.phase();
    let effects = match msg {
        Msg::OverscrollChanged(overscroll) => apply_overscroll(&mut state, overscroll),
        Msg::ScrollEnded => apply_release(&mut state),
        Msg::RefreshCompleted { outcome } => {
            if state.phase() != PullState::Refreshing {
                refresh_debug!("ignoring refresh completion in {:?}", state.phase());
                return (state, Vec::new());
            }
            if outcome == RefreshOutcome::Failed {
                // Failures look exactly like success to the user; the caller
                // owns any error UX inside its refresh operation.
                refresh_warn!("refresh operation failed; finishing as if it succeeded");
            }
            state.set_phase(PullState::Done);
            vec![Effect::StopSpin, Effect::FadeOut]
        }
        Msg::FadeOutCompleted => {
            if state.phase() != PullState::Done {
                return (state, Vec::new());
            }
            state.end_session();
            Vec::new()
        }
        Msg::ShowRequested => {
            if state.phase() != PullState::Idle {
                refresh_debug!("ignoring show request in {:?}", state.phase());
                return (state, Vec::new());
            }
            let resting = state.config().resting_offset();
            state.begin_session(PullState::Refreshing, resting);
            refresh_info!("refresh requested programmatically");
            vec![Effect::FadeIn, Effect::InvokeRefresh, Effect::StartSpin]
        }
        Msg::NoOp => Vec::new(),
    };

    if state.phase() != before {
        refresh_debug!(
            "pull {:?} -> {:?} (offset {:.1})",
            before,
            state.phase(),
            state.drag_offset()
        );
    }
    (state, effects)
}

fn apply_overscroll(state: &mut PullControlState, overscroll: f32) -> Vec<Effect> {
    let offset = state.config().clamp_offset(overscroll);
    match state.phase() {
        PullState::Idle => {
            if offset <= 0.0 {
                return Vec::new();
            }
            state.begin_session(PullState::Drag, offset);
            let mut effects = vec![Effect::FadeIn];
            effects.extend(apply_threshold(state));
            effects
        }
        PullState::Drag | PullState::Armed => {
            if offset <= 0.0 {
                // Scrolled back within bounds: the gesture is cancelled.
                state.end_session();
                return vec![Effect::FadeOut];
            }
            state.set_drag_offset(offset);
            apply_threshold(state)
        }
        PullState::Refreshing | PullState::Done => {
            refresh_trace!("pinned in {:?}; overscroll {} dropped", state.phase(), overscroll);
            Vec::new()
        }
    }
}

/// Same threshold both ways: `>=` arms, `<` disarms.
fn apply_threshold(state: &mut PullControlState) -> Vec<Effect> {
    let offset = state.drag_offset();
    let trigger = state.config().trigger_distance;
    match state.phase() {
        PullState::Drag if offset >= trigger => {
            state.set_phase(PullState::Armed);
            if state.mark_haptic_fired() {
                vec![Effect::FireHaptic]
            } else {
                Vec::new()
            }
        }
        PullState::Armed if offset < trigger => {
            state.set_phase(PullState::Drag);
            state.clear_haptic();
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn apply_release(state: &mut PullControlState) -> Vec<Effect> {
    match state.phase() {
        PullState::Drag => {
            state.end_session();
            vec![Effect::FadeOut]
        }
        PullState::Armed => {
            let resting = state.config().resting_offset();
            state.set_phase(PullState::Refreshing);
            state.set_drag_offset(resting);
            refresh_info!("released while armed; starting refresh");
            vec![Effect::InvokeRefresh, Effect::StartSpin]
        }
        PullState::Idle | PullState::Refreshing | PullState::Done => Vec::new(),
    }
}
