//! Refresh engine: runs the caller's async refresh operation for the control.
mod adapter;
mod operation;
mod types;

pub use adapter::RefreshCallbackAdapter;
pub use operation::{refresh_fn, FnRefresh, HapticFeedback, NoopHaptics, RefreshOperation};
pub use types::{AdapterError, InvocationId, RefreshError, RefreshEvent, RefreshStatus};
