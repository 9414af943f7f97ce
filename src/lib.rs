// nicmon Library - Public API

// Re-export error types
pub mod error;
pub use error::{BackendError, MonError, Result};

// Module declarations
pub mod core;
pub mod platform;

// Re-export commonly used types
pub use crate::core::config::NicConfig;
pub use crate::core::monitor::{BackendKind, BackendRegistry, MonitorBackend, MonitorType, Nic};
#[cfg(feature = "mon-stats")]
pub use crate::core::monitor::{DmaRegion, StatId, StatState, StatValue, StatValues};

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
