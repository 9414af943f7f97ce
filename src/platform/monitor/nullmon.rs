use crate::core::monitor::{BackendKind, MonitorBackend};

#[cfg(feature = "mon-stats")]
use crate::core::monitor::{DmaRegion, StatValues};
#[cfg(feature = "mon-stats")]
use crate::error::BackendError;

/// Monitor for boards with no sensors fitted
#[derive(Debug, Default)]
pub struct NullMonitor;

impl NullMonitor {
    pub fn new() -> Self {
        NullMonitor
    }
}

impl MonitorBackend for NullMonitor {
    fn kind(&self) -> BackendKind {
        BackendKind::Null
    }

    #[cfg(feature = "mon-stats")]
    fn read_stats(
        &mut self,
        _region: &mut DmaRegion,
        values: &mut StatValues,
    ) -> Result<(), BackendError> {
        values.clear();
        Ok(())
    }
}
