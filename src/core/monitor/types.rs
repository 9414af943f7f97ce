use serde::{Deserialize, Serialize};

/// Hardware monitor fitted to a board, as reported by device configuration.
///
/// Raw values follow the configuration encoding: `Invalid` is 0 and every
/// other type counts up from 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum MonitorType {
    #[default]
    #[serde(rename = "invalid")]
    Invalid = 0,
    #[serde(rename = "nullmon")]
    Null = 1,
    #[serde(rename = "lm87")]
    Lm87 = 2,
    #[serde(rename = "max6647")]
    Max6647 = 3,
    #[serde(rename = "sfx90x0")]
    Sfx90x0 = 4,
    #[serde(rename = "sfx91x0")]
    Sfx91x0 = 5,
}

impl MonitorType {
    /// Number of raw values, sentinel included
    pub const NTYPES: u32 = 6;

    pub const ALL: [MonitorType; 6] = [
        MonitorType::Invalid,
        MonitorType::Null,
        MonitorType::Lm87,
        MonitorType::Max6647,
        MonitorType::Sfx90x0,
        MonitorType::Sfx91x0,
    ];

    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }

    pub fn raw(self) -> u32 {
        self as u32
    }

    pub fn is_valid(self) -> bool {
        self != MonitorType::Invalid
    }

    /// Backend kind that drives this monitor type in the current build.
    ///
    /// Both Solarflare controller generations expose their sensors through
    /// the management controller, so they share the MCDI backend.
    pub fn backend_kind(self) -> Option<BackendKind> {
        match self {
            #[cfg(feature = "mon-null")]
            MonitorType::Null => Some(BackendKind::Null),
            #[cfg(feature = "mon-lm87")]
            MonitorType::Lm87 => Some(BackendKind::Lm87),
            #[cfg(feature = "mon-max6647")]
            MonitorType::Max6647 => Some(BackendKind::Max6647),
            #[cfg(feature = "mon-mcdi")]
            MonitorType::Sfx90x0 | MonitorType::Sfx91x0 => Some(BackendKind::Mcdi),
            _ => None,
        }
    }
}

/// Backend implementations compiled into this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    #[cfg(feature = "mon-null")]
    Null,
    #[cfg(feature = "mon-lm87")]
    Lm87,
    #[cfg(feature = "mon-max6647")]
    Max6647,
    #[cfg(feature = "mon-mcdi")]
    Mcdi,
}
