use thiserror::Error;

use crate::core::monitor::MonitorType;

pub const EINVAL: i32 = 22;
pub const ENOTSUP: i32 = 95;

/// Opaque failure code reported by a monitor backend
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("backend failed with code {code}")]
pub struct BackendError {
    pub code: i32,
}

impl BackendError {
    pub fn new(code: i32) -> Self {
        BackendError { code }
    }
}

/// Custom error type for the monitor layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonError {
    #[error("Monitor already initialized")]
    AlreadyInitialized,

    #[error("Monitor type {0:?} not supported by this build")]
    NotSupported(MonitorType),

    #[error("Monitor backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Result type alias for the monitor layer
pub type Result<T> = std::result::Result<T, MonError>;

impl MonError {
    /// Create a backend error from a raw code
    pub fn backend(code: i32) -> Self {
        MonError::Backend(BackendError::new(code))
    }

    /// errno-style code for callers that speak numeric status
    pub fn code(&self) -> i32 {
        match self {
            MonError::AlreadyInitialized => EINVAL,
            MonError::NotSupported(_) => ENOTSUP,
            MonError::Backend(e) => e.code,
        }
    }
}
