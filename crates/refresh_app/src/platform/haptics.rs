use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use refresh_engine::HapticFeedback;
use refresh_logging::refresh_info;

/// Desktop stand-in for the device haptic: logs a "tick" per fire.
#[derive(Debug, Clone, Default)]
pub(crate) struct LogHaptics {
    fired: Arc<AtomicU64>,
}

impl LogHaptics {
    /// Shared counter of fires, readable after the haptics are boxed away.
    pub fn counter(&self) -> Arc<AtomicU64> {
        self.fired.clone()
    }
}

impl HapticFeedback for LogHaptics {
    fn fire(&self) {
        let count = self.fired.fetch_add(1, Ordering::Relaxed) + 1;
        refresh_info!("haptic tick #{}", count);
    }
}
