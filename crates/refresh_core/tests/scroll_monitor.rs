use pretty_assertions::assert_eq;
use refresh_core::{
    update, Msg, PullControlState, PullSignal, PullState, ScrollNotification, ScrollPhysicsMonitor,
};

#[test]
fn negative_position_reports_overscroll() {
    let mut monitor = ScrollPhysicsMonitor::new();

    assert_eq!(
        monitor.observe(ScrollNotification::Update { pixels: -42.0 }),
        PullSignal::Overscroll(42.0)
    );
    assert_eq!(
        monitor.observe(ScrollNotification::Update { pixels: 0.0 }),
        PullSignal::Overscroll(0.0)
    );
    assert_eq!(
        monitor.observe(ScrollNotification::Update { pixels: 310.0 }),
        PullSignal::Overscroll(0.0)
    );
}

#[test]
fn separate_overscroll_accumulates_only_downward_pulls() {
    let mut monitor = ScrollPhysicsMonitor::new();

    monitor.observe(ScrollNotification::Overscroll { delta: -30.0 });
    monitor.observe(ScrollNotification::Overscroll { delta: -25.0 });
    let bounce = monitor.observe(ScrollNotification::Overscroll { delta: 12.0 });

    assert_eq!(bounce, PullSignal::Overscroll(55.0));
    assert_eq!(monitor.overscroll(), 55.0);
}

#[test]
fn scroll_end_releases_and_resets() {
    let mut monitor = ScrollPhysicsMonitor::new();
    monitor.observe(ScrollNotification::Overscroll { delta: -70.0 });

    assert_eq!(monitor.observe(ScrollNotification::End), PullSignal::Released);
    assert_eq!(monitor.overscroll(), 0.0);
    assert_eq!(
        monitor.observe(ScrollNotification::Overscroll { delta: -5.0 }),
        PullSignal::Overscroll(5.0)
    );
}

#[test]
fn returning_within_bounds_clears_accumulated_overscroll() {
    let mut monitor = ScrollPhysicsMonitor::new();
    monitor.observe(ScrollNotification::Overscroll { delta: -70.0 });
    monitor.observe(ScrollNotification::Update { pixels: 3.0 });

    assert_eq!(
        monitor.observe(ScrollNotification::Overscroll { delta: -10.0 }),
        PullSignal::Overscroll(10.0)
    );
}

#[test]
fn clamping_platform_pull_drives_a_refresh() {
    let mut monitor = ScrollPhysicsMonitor::new();
    let mut state = PullControlState::default();
    let notifications = [
        ScrollNotification::Update { pixels: 0.0 },
        ScrollNotification::Overscroll { delta: -40.0 },
        ScrollNotification::Overscroll { delta: -40.0 },
        ScrollNotification::Overscroll { delta: -40.0 },
        ScrollNotification::End,
    ];

    for notification in notifications {
        let msg: Msg = monitor.observe(notification).into();
        let (next, _) = update(state, msg);
        state = next;
    }

    assert_eq!(state.phase(), PullState::Refreshing);
}
