use std::fmt;
use std::io;

use thiserror::Error;

/// Sequence number of a refresh invocation, starting at 1.
pub type InvocationId = u64;

/// Error a refresh operation may return. The adapter logs it and reports
/// [`RefreshStatus::Failed`]; it is never handed back to the control.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("refresh failed: {0}")]
    Failed(String),
    #[error("refresh timed out")]
    Timeout,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl RefreshError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("failed to start refresh runtime: {0}")]
    Runtime(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStatus {
    Succeeded,
    Failed,
    Panicked,
}

impl RefreshStatus {
    pub fn is_success(self) -> bool {
        self == Self::Succeeded
    }
}

impl fmt::Display for RefreshStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshStatus::Succeeded => write!(f, "succeeded"),
            RefreshStatus::Failed => write!(f, "failed"),
            RefreshStatus::Panicked => write!(f, "panicked"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshEvent {
    Completed {
        invocation: InvocationId,
        status: RefreshStatus,
    },
}
