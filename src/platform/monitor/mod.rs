//! Monitor backends implemented in this crate.
//!
//! Sensor-chip and firmware backends talk to hardware the enclosing driver
//! owns, so the driver registers them itself. Only the no-op monitor is
//! built in.

#[cfg(feature = "mon-null")]
mod nullmon;

#[cfg(feature = "mon-null")]
pub use nullmon::NullMonitor;

use crate::core::monitor::MonitorBackend;

/// Backends every device gets without driver help
pub fn builtin_backends() -> Vec<Box<dyn MonitorBackend>> {
    #[allow(unused_mut)]
    let mut backends: Vec<Box<dyn MonitorBackend>> = Vec::new();

    #[cfg(feature = "mon-null")]
    backends.push(Box::new(NullMonitor::new()));

    backends
}
