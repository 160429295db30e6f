use std::sync::Arc;

use refresh_core::{Effect, Msg, RefreshOutcome};
use refresh_engine::{
    AdapterError, HapticFeedback, RefreshCallbackAdapter, RefreshEvent, RefreshOperation,
    RefreshStatus,
};
use refresh_logging::{refresh_debug, refresh_error};

/// Executes the effects that leave the UI thread: haptics and the refresh
/// operation. Clock effects are handled by the renderer.
pub(crate) struct EffectRunner {
    adapter: RefreshCallbackAdapter,
    haptics: Box<dyn HapticFeedback>,
}

impl EffectRunner {
    pub fn new(
        operation: Arc<dyn RefreshOperation>,
        haptics: Box<dyn HapticFeedback>,
    ) -> Result<Self, AdapterError> {
        Ok(Self {
            adapter: RefreshCallbackAdapter::new(operation)?,
            haptics,
        })
    }

    /// Runs one effect; may return a message to feed back immediately.
    pub fn run(&mut self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::FireHaptic => {
                self.haptics.fire();
                None
            }
            Effect::InvokeRefresh => {
                if self.adapter.invoke() {
                    return None;
                }
                if self.adapter.is_in_flight() {
                    // The running call's completion will finish this refresh.
                    refresh_debug!("refresh already in flight; waiting for it");
                    None
                } else {
                    refresh_error!("refresh could not be started; finishing the gesture");
                    Some(Msg::RefreshCompleted {
                        outcome: RefreshOutcome::Failed,
                    })
                }
            }
            Effect::FadeIn | Effect::FadeOut | Effect::StartSpin | Effect::StopSpin => None,
        }
    }

    /// Drains completions reported by the adapter since the last poll.
    pub fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.adapter.try_recv() {
            match event {
                RefreshEvent::Completed { status, .. } => inbox.push(Msg::RefreshCompleted {
                    outcome: map_status(status),
                }),
            }
        }
        inbox
    }

    pub fn refresh_in_flight(&self) -> bool {
        self.adapter.is_in_flight()
    }
}

fn map_status(status: RefreshStatus) -> RefreshOutcome {
    match status {
        RefreshStatus::Succeeded => RefreshOutcome::Succeeded,
        RefreshStatus::Failed | RefreshStatus::Panicked => RefreshOutcome::Failed,
    }
}
