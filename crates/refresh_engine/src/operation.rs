use std::future::Future;

use crate::RefreshError;

/// The caller-supplied work behind a pull-to-refresh, e.g. reloading plans.
#[async_trait::async_trait]
pub trait RefreshOperation: Send + Sync {
    async fn refresh(&self) -> Result<(), RefreshError>;
}

/// Adapts an async closure into a [`RefreshOperation`].
pub struct FnRefresh<F> {
    func: F,
}

pub fn refresh_fn<F, Fut>(func: F) -> FnRefresh<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), RefreshError>> + Send + 'static,
{
    FnRefresh { func }
}

#[async_trait::async_trait]
impl<F, Fut> RefreshOperation for FnRefresh<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), RefreshError>> + Send + 'static,
{
    async fn refresh(&self) -> Result<(), RefreshError> {
        (self.func)().await
    }
}

/// Platform haptic trigger. Fire-and-forget: nothing is returned or awaited.
pub trait HapticFeedback: Send {
    fn fire(&self);
}

/// Haptics for hosts without a vibration motor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl HapticFeedback for NoopHaptics {
    fn fire(&self) {}
}
