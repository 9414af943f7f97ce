//! Per-device monitor lifecycle.
//!
//! A [`Nic`] owns its monitor state and the backends it may select from.
//! The enclosing driver serializes every call on one device, so nothing
//! here locks.

use super::registry::BackendRegistry;
use super::types::{BackendKind, MonitorType};
use crate::core::config::NicConfig;
use crate::error::{MonError, Result};

#[cfg(feature = "mon-stats")]
use super::stats::{DmaRegion, StatValues};

/// Module state flags of a device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModFlags {
    probe: bool,
    mon: bool,
}

impl ModFlags {
    pub fn is_probed(&self) -> bool {
        self.probe
    }

    pub fn is_mon_active(&self) -> bool {
        self.mon
    }
}

/// Monitor sub-record of a device.
///
/// `active` is set only between a successful init and the matching fini,
/// and only while `mon_type` is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorState {
    mon_type: MonitorType,
    active: Option<BackendKind>,
}

impl MonitorState {
    pub fn mon_type(&self) -> MonitorType {
        self.mon_type
    }

    pub fn active_kind(&self) -> Option<BackendKind> {
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

/// Device record as seen by the monitor layer
#[derive(Debug)]
pub struct Nic {
    config: NicConfig,
    mod_flags: ModFlags,
    mon: MonitorState,
    registry: BackendRegistry,
}

impl Nic {
    /// Create a device with the built-in backends only
    pub fn new(config: NicConfig) -> Self {
        Self::with_registry(config, BackendRegistry::builtin())
    }

    pub fn with_registry(config: NicConfig, registry: BackendRegistry) -> Self {
        Self {
            config,
            mod_flags: ModFlags::default(),
            mon: MonitorState::default(),
            registry,
        }
    }

    pub fn config(&self) -> &NicConfig {
        &self.config
    }

    pub fn mod_flags(&self) -> ModFlags {
        self.mod_flags
    }

    pub fn monitor(&self) -> &MonitorState {
        &self.mon
    }

    pub fn registry(&self) -> &BackendRegistry {
        &self.registry
    }

    /// Mark device probing complete; monitor init requires it
    pub fn probe(&mut self) {
        log::debug!("{}: probe done", self.config.board);
        self.mod_flags.probe = true;
    }

    pub fn unprobe(&mut self) {
        assert!(
            !self.mod_flags.mon,
            "unprobe with the monitor module still active"
        );
        self.mod_flags.probe = false;
    }

    /// Bring up the configured hardware monitor.
    ///
    /// On any failure the device is left with the module flag clear and the
    /// monitor type invalid, so a later attempt starts fresh.
    pub fn mon_init(&mut self) -> Result<()> {
        assert!(self.mod_flags.probe, "monitor init before probe");

        if self.mod_flags.mon {
            log::warn!("{}: monitor already initialized", self.config.board);
            return Err(MonError::AlreadyInitialized);
        }

        self.mod_flags.mon = true;
        self.mon.mon_type = self.config.mon_type;

        match bring_up(&mut self.registry, self.mon.mon_type) {
            Ok(kind) => {
                log::debug!(
                    "{}: monitor {:?} active on {:?} backend",
                    self.config.board,
                    self.mon.mon_type,
                    kind
                );
                self.mon.active = Some(kind);
                Ok(())
            }
            Err(e) => {
                log::warn!(
                    "{}: monitor {:?} init failed: {}",
                    self.config.board,
                    self.mon.mon_type,
                    e
                );
                self.mon.mon_type = MonitorType::Invalid;
                self.mod_flags.mon = false;
                Err(e)
            }
        }
    }

    /// Tear the monitor down. Backend errors are logged, never returned.
    pub fn mon_fini(&mut self) {
        assert!(self.mod_flags.probe, "monitor fini without probe");
        assert!(self.mod_flags.mon, "monitor fini without init");

        if let Some(kind) = self.mon.active.take() {
            if let Some(backend) = self.registry.get_mut(kind) {
                if backend.has_reset() {
                    if let Err(e) = backend.reset() {
                        log::error!(
                            "{}: monitor reset during fini failed: {}",
                            self.config.board,
                            e
                        );
                    }
                }
            }
        }

        self.mon.mon_type = MonitorType::Invalid;
        self.mod_flags.mon = false;
        log::debug!("{}: monitor stopped", self.config.board);
    }

    /// Read all sensors of the active backend into `values`
    #[cfg(feature = "mon-stats")]
    pub fn mon_read_stats(
        &mut self,
        region: &mut DmaRegion,
        values: &mut StatValues,
    ) -> Result<()> {
        assert!(self.mod_flags.mon, "monitor stats read without init");

        let backend = match self.mon.active {
            Some(kind) => self.registry.get_mut(kind),
            None => None,
        };
        let Some(backend) = backend else {
            panic!("monitor module active without a backend");
        };

        backend.read_stats(region, values).map_err(MonError::from)
    }

    /// Diagnostic name of the active monitor
    #[cfg(feature = "names")]
    pub fn mon_name(&self) -> &'static str {
        self.config.mon_type.name()
    }
}

/// Reset then reconfigure the selected backend. A failed reconfigure is
/// followed by one more reset, whose result is dropped.
fn bring_up(registry: &mut BackendRegistry, mon_type: MonitorType) -> Result<BackendKind> {
    let backend = registry.resolve_mut(mon_type)?;

    if backend.has_reset() {
        backend.reset()?;
    }

    if backend.has_reconfigure() {
        if let Err(e) = backend.reconfigure() {
            if backend.has_reset() {
                let _ = backend.reset();
            }
            return Err(e.into());
        }
    }

    Ok(backend.kind())
}
