use std::sync::Once;

use pretty_assertions::assert_eq;
use refresh_core::{update, Effect, Msg, PullConfig, PullControlState, PullState, RefreshOutcome};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(refresh_logging::initialize_for_tests);
}

fn pull(state: PullControlState, px: f32) -> (PullControlState, Vec<Effect>) {
    update(state, Msg::OverscrollChanged(px))
}

fn armed_state() -> PullControlState {
    let (state, _) = pull(PullControlState::default(), 50.0);
    let (state, _) = pull(state, 120.0);
    assert_eq!(state.phase(), PullState::Armed);
    state
}

#[test]
fn first_overscroll_starts_drag_and_fades_in() {
    init_logging();
    let (mut state, effects) = pull(PullControlState::default(), 20.0);

    assert_eq!(state.phase(), PullState::Drag);
    assert_eq!(state.drag_offset(), 20.0);
    assert!(!state.haptic_fired());
    assert_eq!(effects, vec![Effect::FadeIn]);
    assert!(state.consume_dirty());
}

#[test]
fn zero_overscroll_while_idle_is_ignored() {
    init_logging();
    let (mut state, effects) = pull(PullControlState::default(), 0.0);

    assert_eq!(state.phase(), PullState::Idle);
    assert!(state.session().is_none());
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn drag_below_trigger_never_arms() {
    init_logging();
    let mut state = PullControlState::default();
    for px in [10.0, 35.0, 70.0, 99.0, 99.99, 42.0] {
        let (next, effects) = pull(state, px);
        state = next;
        assert_eq!(state.phase(), PullState::Drag);
        assert!(!effects.contains(&Effect::FireHaptic));
    }
    assert!(!state.haptic_fired());
}

#[test]
fn reaching_trigger_exactly_arms_and_fires_haptic() {
    init_logging();
    let (state, _) = pull(PullControlState::default(), 60.0);
    let (state, effects) = pull(state, 100.0);

    assert_eq!(state.phase(), PullState::Armed);
    assert!(state.haptic_fired());
    assert_eq!(effects, vec![Effect::FireHaptic]);
}

#[test]
fn haptic_fires_once_while_staying_armed() {
    init_logging();
    let mut state = armed_state();
    for px in [125.0, 140.0, 100.0, 150.0, 300.0] {
        let (next, effects) = pull(state, px);
        state = next;
        assert_eq!(state.phase(), PullState::Armed);
        assert!(effects.is_empty());
    }
    assert!(state.haptic_fired());
}

#[test]
fn jumping_past_trigger_from_idle_arms_immediately() {
    init_logging();
    let (state, effects) = pull(PullControlState::default(), 130.0);

    assert_eq!(state.phase(), PullState::Armed);
    assert_eq!(effects, vec![Effect::FadeIn, Effect::FireHaptic]);
}

#[test]
fn dropping_below_trigger_disarms_and_clears_haptic() {
    init_logging();
    let (state, effects) = pull(armed_state(), 99.0);

    assert_eq!(state.phase(), PullState::Drag);
    assert!(!state.haptic_fired());
    assert!(effects.is_empty());
}

#[test]
fn release_from_drag_returns_to_idle_without_refresh() {
    init_logging();
    let (state, _) = pull(PullControlState::default(), 80.0);
    let (state, effects) = update(state, Msg::ScrollEnded);

    assert_eq!(state.phase(), PullState::Idle);
    assert_eq!(state.drag_offset(), 0.0);
    assert!(state.session().is_none());
    assert_eq!(effects, vec![Effect::FadeOut]);
}

#[test]
fn release_while_armed_starts_refresh_and_pins_offset() {
    init_logging();
    let (state, effects) = update(armed_state(), Msg::ScrollEnded);

    assert_eq!(state.phase(), PullState::Refreshing);
    assert_eq!(state.drag_offset(), state.config().displacement);
    assert!(state.haptic_fired());
    assert!(state.refresh_in_flight());
    assert_eq!(effects, vec![Effect::InvokeRefresh, Effect::StartSpin]);
}

#[test]
fn scroll_input_is_ignored_while_refreshing() {
    init_logging();
    let (state, _) = update(armed_state(), Msg::ScrollEnded);
    let pinned = state.drag_offset();

    let (state, effects) = pull(state, 140.0);
    assert!(effects.is_empty());
    let (state, effects) = pull(state, 0.0);
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::ScrollEnded);
    assert!(effects.is_empty());

    assert_eq!(state.phase(), PullState::Refreshing);
    assert_eq!(state.drag_offset(), pinned);
}

#[test]
fn failed_refresh_finishes_like_success() {
    init_logging();
    let (state, _) = update(armed_state(), Msg::ScrollEnded);
    let (state, effects) = update(
        state,
        Msg::RefreshCompleted {
            outcome: RefreshOutcome::Failed,
        },
    );

    assert_eq!(state.phase(), PullState::Done);
    assert_eq!(effects, vec![Effect::StopSpin, Effect::FadeOut]);

    let (state, effects) = update(state, Msg::FadeOutCompleted);
    assert_eq!(state.phase(), PullState::Idle);
    assert_eq!(state.drag_offset(), 0.0);
    assert!(!state.haptic_fired());
    assert!(effects.is_empty());
}

#[test]
fn scroll_input_is_ignored_while_done() {
    init_logging();
    let (state, _) = update(armed_state(), Msg::ScrollEnded);
    let (state, _) = update(
        state,
        Msg::RefreshCompleted {
            outcome: RefreshOutcome::Succeeded,
        },
    );

    let (state, effects) = pull(state, 130.0);
    assert_eq!(state.phase(), PullState::Done);
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::ScrollEnded);
    assert_eq!(state.phase(), PullState::Done);
    assert!(effects.is_empty());
}

#[test]
fn stale_completions_are_ignored() {
    init_logging();
    let (state, effects) = update(
        PullControlState::default(),
        Msg::RefreshCompleted {
            outcome: RefreshOutcome::Succeeded,
        },
    );
    assert_eq!(state.phase(), PullState::Idle);
    assert!(effects.is_empty());

    let (state, effects) = update(armed_state(), Msg::FadeOutCompleted);
    assert_eq!(state.phase(), PullState::Armed);
    assert!(effects.is_empty());
}

#[test]
fn scrolling_back_within_bounds_cancels_the_gesture() {
    init_logging();
    let (state, effects) = pull(armed_state(), 0.0);

    assert_eq!(state.phase(), PullState::Idle);
    assert!(state.session().is_none());
    assert_eq!(effects, vec![Effect::FadeOut]);
}

#[test]
fn show_request_refreshes_without_haptic() {
    init_logging();
    let (state, effects) = update(PullControlState::default(), Msg::ShowRequested);

    assert_eq!(state.phase(), PullState::Refreshing);
    assert_eq!(state.drag_offset(), 40.0);
    assert!(!state.haptic_fired());
    assert_eq!(
        effects,
        vec![Effect::FadeIn, Effect::InvokeRefresh, Effect::StartSpin]
    );

    let (state, effects) = update(state, Msg::ShowRequested);
    assert_eq!(state.phase(), PullState::Refreshing);
    assert!(effects.is_empty());
}

#[test]
fn custom_thresholds_are_respected() {
    init_logging();
    let config = PullConfig {
        trigger_distance: 60.0,
        max_drag_distance: 80.0,
        displacement: 24.0,
        ..PullConfig::default()
    };
    let state = PullControlState::new(config).expect("valid config");

    let (state, effects) = pull(state, 65.0);
    assert_eq!(state.phase(), PullState::Armed);
    assert_eq!(effects, vec![Effect::FadeIn, Effect::FireHaptic]);

    let (state, _) = pull(state, 500.0);
    assert_eq!(state.drag_offset(), 80.0);

    let (state, _) = update(state, Msg::ScrollEnded);
    assert_eq!(state.drag_offset(), 24.0);
}
