#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    /// Current overscroll past the top edge, in logical px (0 = within bounds).
    OverscrollChanged(f32),
    /// The host reported the end of the scroll gesture.
    ScrollEnded,
    /// The refresh operation finished, successfully or not.
    RefreshCompleted { outcome: RefreshOutcome },
    /// The indicator finished fading out after a refresh.
    FadeOutCompleted,
    /// Start a refresh without a gesture, e.g. on first load.
    ShowRequested,
    /// Fallback for placeholder wiring.
    NoOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Succeeded,
    Failed,
}
