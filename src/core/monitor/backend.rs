use super::types::BackendKind;
use crate::error::BackendError;

#[cfg(feature = "mon-stats")]
use super::stats::{DmaRegion, StatValues};

/// Trait for hardware monitor backends
///
/// Each backend drives one kind of sensor chip or firmware monitor. The
/// register protocol or firmware messaging lives behind this trait; the
/// monitor layer only sequences the calls.
///
/// `reset` and `reconfigure` are optional. A backend that does not need
/// them leaves `has_reset`/`has_reconfigure` at `false` and they are never
/// called.
pub trait MonitorBackend: Send {
    /// Backend kind implemented
    fn kind(&self) -> BackendKind;

    fn has_reset(&self) -> bool {
        false
    }

    /// Return the monitor to its power-on state
    fn reset(&mut self) -> Result<(), BackendError> {
        Ok(())
    }

    fn has_reconfigure(&self) -> bool {
        false
    }

    /// Program limits and sampling for this board
    fn reconfigure(&mut self) -> Result<(), BackendError> {
        Ok(())
    }

    /// Fill `values` with the readings this backend supports.
    ///
    /// Slots the backend does not provide must be left marked not present,
    /// so implementations usually start with `values.clear()`. `region` is
    /// scratch space for bulk transfers.
    #[cfg(feature = "mon-stats")]
    fn read_stats(
        &mut self,
        region: &mut DmaRegion,
        values: &mut StatValues,
    ) -> Result<(), BackendError>;
}
