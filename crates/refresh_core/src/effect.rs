#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Begin fading the indicator in.
    FadeIn,
    /// Begin fading the indicator out.
    FadeOut,
    /// Trigger the platform haptic once.
    FireHaptic,
    /// Run the caller's refresh operation.
    InvokeRefresh,
    StartSpin,
    StopSpin,
}
