use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use futures_util::FutureExt;
use refresh_logging::{refresh_debug, refresh_error, refresh_info, refresh_warn};

use crate::{AdapterError, InvocationId, RefreshEvent, RefreshOperation, RefreshStatus};

enum AdapterCommand {
    Invoke { invocation: InvocationId },
}

/// Runs the caller's refresh operation off the UI thread.
///
/// At most one invocation is in flight. Every invocation produces exactly one
/// [`RefreshEvent::Completed`], whether the operation succeeded, returned an
/// error or panicked. Dropping the adapter shuts its runtime down.
pub struct RefreshCallbackAdapter {
    cmd_tx: mpsc::Sender<AdapterCommand>,
    event_rx: mpsc::Receiver<RefreshEvent>,
    in_flight: Arc<AtomicBool>,
    last_invocation: InvocationId,
}

impl RefreshCallbackAdapter {
    pub fn new(operation: Arc<dyn RefreshOperation>) -> Result<Self, AdapterError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let in_flight = Arc::new(AtomicBool::new(false));

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("refresh-worker")
            .enable_time()
            .build()?;

        let worker_flag = in_flight.clone();
        thread::Builder::new()
            .name("refresh-adapter".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let operation = operation.clone();
                    let event_tx = event_tx.clone();
                    let in_flight = worker_flag.clone();
                    runtime.spawn(async move {
                        handle_command(operation.as_ref(), command, &in_flight, event_tx).await;
                    });
                }
                refresh_debug!("refresh adapter closed");
            })?;

        Ok(Self {
            cmd_tx,
            event_rx,
            in_flight,
            last_invocation: 0,
        })
    }

    /// Starts the operation unless one is already running.
    /// Returns `false` when the call was a no-op.
    pub fn invoke(&mut self) -> bool {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            refresh_debug!(
                "refresh #{} still in flight; ignoring invoke",
                self.last_invocation
            );
            return false;
        }

        let invocation = self.last_invocation + 1;
        if self
            .cmd_tx
            .send(AdapterCommand::Invoke { invocation })
            .is_err()
        {
            self.in_flight.store(false, Ordering::Release);
            refresh_error!("refresh adapter thread is gone; invoke dropped");
            return false;
        }
        self.last_invocation = invocation;
        refresh_info!("refresh #{} started", invocation);
        true
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn last_invocation(&self) -> InvocationId {
        self.last_invocation
    }

    pub fn try_recv(&self) -> Option<RefreshEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<RefreshEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    operation: &dyn RefreshOperation,
    command: AdapterCommand,
    in_flight: &AtomicBool,
    event_tx: mpsc::Sender<RefreshEvent>,
) {
    match command {
        AdapterCommand::Invoke { invocation } => {
            let status = run_operation(operation, invocation).await;
            // Cleared before publishing so the next gesture may invoke again.
            in_flight.store(false, Ordering::Release);
            let _ = event_tx.send(RefreshEvent::Completed { invocation, status });
        }
    }
}

async fn run_operation(operation: &dyn RefreshOperation, invocation: InvocationId) -> RefreshStatus {
    match AssertUnwindSafe(operation.refresh()).catch_unwind().await {
        Ok(Ok(())) => {
            refresh_info!("refresh #{} succeeded", invocation);
            RefreshStatus::Succeeded
        }
        Ok(Err(err)) => {
            refresh_warn!("refresh #{} failed: {}", invocation, err);
            RefreshStatus::Failed
        }
        Err(_) => {
            refresh_warn!("refresh #{} panicked", invocation);
            RefreshStatus::Panicked
        }
    }
}
