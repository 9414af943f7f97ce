//! Diagnostic names for monitor types and stat slots.

use super::types::MonitorType;

#[cfg(feature = "mon-stats")]
use super::stats::{StatId, STAT_NAMES};

static MON_NAMES: [&str; MonitorType::NTYPES as usize] =
    ["", "nullmon", "lm87", "max6647", "sfx90x0", "sfx91x0"];

impl MonitorType {
    /// Diagnostic name of a configured monitor.
    ///
    /// Panics on `Invalid`: there is nothing fitted to name.
    pub fn name(self) -> &'static str {
        assert!(self.is_valid(), "no name for the invalid monitor type");
        MON_NAMES[self.raw() as usize]
    }
}

#[cfg(feature = "mon-stats")]
impl StatId {
    pub fn name(self) -> &'static str {
        STAT_NAMES[self.index()]
    }
}
