use super::backend::MonitorBackend;
use super::types::{BackendKind, MonitorType};
use crate::error::{MonError, Result};

/// Backends available to one device, at most one per kind
pub struct BackendRegistry {
    backends: Vec<Box<dyn MonitorBackend>>,
}

impl BackendRegistry {
    /// Registry with no backends at all
    pub fn empty() -> Self {
        Self {
            backends: Vec::new(),
        }
    }

    /// Registry holding the backends this crate implements itself
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for backend in crate::platform::monitor::builtin_backends() {
            registry.register(backend);
        }
        registry
    }

    /// Add a backend, replacing and returning any previous one of the same kind
    pub fn register(
        &mut self,
        backend: Box<dyn MonitorBackend>,
    ) -> Option<Box<dyn MonitorBackend>> {
        let kind = backend.kind();
        match self.backends.iter().position(|b| b.kind() == kind) {
            Some(pos) => Some(std::mem::replace(&mut self.backends[pos], backend)),
            None => {
                self.backends.push(backend);
                None
            }
        }
    }

    pub fn with_backend(mut self, backend: Box<dyn MonitorBackend>) -> Self {
        self.register(backend);
        self
    }

    pub fn contains(&self, kind: BackendKind) -> bool {
        self.backends.iter().any(|b| b.kind() == kind)
    }

    pub fn kinds(&self) -> Vec<BackendKind> {
        self.backends.iter().map(|b| b.kind()).collect()
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    pub fn get(&self, kind: BackendKind) -> Option<&(dyn MonitorBackend + 'static)> {
        self.backends
            .iter()
            .find(|b| b.kind() == kind)
            .map(|b| &**b)
    }

    pub fn get_mut(&mut self, kind: BackendKind) -> Option<&mut (dyn MonitorBackend + 'static)> {
        self.backends
            .iter_mut()
            .find(|b| b.kind() == kind)
            .map(|b| &mut **b)
    }

    /// Select the backend for a configured monitor type.
    ///
    /// Fails with `NotSupported` for the invalid type, for types whose
    /// backend kind is compiled out, and for kinds nobody registered.
    pub fn resolve(&self, mon_type: MonitorType) -> Result<&(dyn MonitorBackend + 'static)> {
        mon_type
            .backend_kind()
            .and_then(|kind| self.get(kind))
            .ok_or(MonError::NotSupported(mon_type))
    }

    pub fn resolve_mut(
        &mut self,
        mon_type: MonitorType,
    ) -> Result<&mut (dyn MonitorBackend + 'static)> {
        let kind = mon_type
            .backend_kind()
            .ok_or(MonError::NotSupported(mon_type))?;
        self.get_mut(kind).ok_or(MonError::NotSupported(mon_type))
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
