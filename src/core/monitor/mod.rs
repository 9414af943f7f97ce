//! Hardware monitor abstraction.
//!
//! Selects one monitor backend per device from the configured
//! [`MonitorType`], drives its reset/reconfigure lifecycle and forwards
//! stats reads to it.

mod backend;
mod lifecycle;
#[cfg(feature = "names")]
mod names;
mod registry;
#[cfg(feature = "mon-stats")]
mod stats;
mod types;

pub use backend::MonitorBackend;
pub use lifecycle::{ModFlags, MonitorState, Nic};
pub use registry::BackendRegistry;
#[cfg(all(feature = "mon-stats", feature = "names"))]
pub use stats::StatReading;
#[cfg(feature = "mon-stats")]
pub use stats::{DmaRegion, StatId, StatState, StatValue, StatValues};
pub use types::{BackendKind, MonitorType};
