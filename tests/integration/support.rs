// Recording backend used to observe what the monitor layer calls

use nicmon::core::monitor::{BackendKind, DmaRegion, MonitorBackend, StatId, StatState, StatValues};
use nicmon::BackendError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Calls {
    reset: AtomicUsize,
    reconfigure: AtomicUsize,
    read_stats: AtomicUsize,
}

impl Calls {
    pub fn reset(&self) -> usize {
        self.reset.load(Ordering::SeqCst)
    }

    pub fn reconfigure(&self) -> usize {
        self.reconfigure.load(Ordering::SeqCst)
    }

    pub fn read_stats(&self) -> usize {
        self.read_stats.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> usize {
        self.reset() + self.reconfigure() + self.read_stats()
    }
}

pub struct RecordingBackend {
    kind: BackendKind,
    calls: Arc<Calls>,
    has_reset: bool,
    has_reconfigure: bool,
    /// (first failing reset call, code)
    reset_failure: Option<(usize, i32)>,
    reconfigure_failure: Option<i32>,
    read_failure: Option<i32>,
    readings: Vec<(StatId, u16)>,
}

impl RecordingBackend {
    pub fn new(kind: BackendKind) -> (Self, Arc<Calls>) {
        let calls = Arc::new(Calls::default());
        let backend = Self {
            kind,
            calls: calls.clone(),
            has_reset: true,
            has_reconfigure: true,
            reset_failure: None,
            reconfigure_failure: None,
            read_failure: None,
            readings: Vec::new(),
        };
        (backend, calls)
    }

    pub fn without_reset(mut self) -> Self {
        self.has_reset = false;
        self
    }

    pub fn without_reconfigure(mut self) -> Self {
        self.has_reconfigure = false;
        self
    }

    pub fn failing_reset(self, code: i32) -> Self {
        self.failing_reset_from(0, code)
    }

    /// Resets succeed until call number `first` (zero-based), then fail
    pub fn failing_reset_from(mut self, first: usize, code: i32) -> Self {
        self.reset_failure = Some((first, code));
        self
    }

    pub fn failing_reconfigure(mut self, code: i32) -> Self {
        self.reconfigure_failure = Some(code);
        self
    }

    pub fn failing_read(mut self, code: i32) -> Self {
        self.read_failure = Some(code);
        self
    }

    pub fn with_readings(mut self, readings: &[(StatId, u16)]) -> Self {
        self.readings = readings.to_vec();
        self
    }

    pub fn boxed(self) -> Box<dyn MonitorBackend> {
        Box::new(self)
    }
}

impl MonitorBackend for RecordingBackend {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn has_reset(&self) -> bool {
        self.has_reset
    }

    fn reset(&mut self) -> Result<(), BackendError> {
        let call = self.calls.reset.fetch_add(1, Ordering::SeqCst);
        match self.reset_failure {
            Some((first, code)) if call >= first => Err(BackendError::new(code)),
            _ => Ok(()),
        }
    }

    fn has_reconfigure(&self) -> bool {
        self.has_reconfigure
    }

    fn reconfigure(&mut self) -> Result<(), BackendError> {
        self.calls.reconfigure.fetch_add(1, Ordering::SeqCst);
        match self.reconfigure_failure {
            Some(code) => Err(BackendError::new(code)),
            None => Ok(()),
        }
    }

    fn read_stats(
        &mut self,
        region: &mut DmaRegion,
        values: &mut StatValues,
    ) -> Result<(), BackendError> {
        self.calls.read_stats.fetch_add(1, Ordering::SeqCst);
        if let Some(code) = self.read_failure {
            return Err(BackendError::new(code));
        }

        values.clear();
        for (id, value) in &self.readings {
            values.set(*id, *value, StatState::Ok);
        }

        // leave a marker so callers can see the region reached us
        if let Some(first) = region.as_mut_slice().first_mut() {
            *first = 0xa5;
        }
        Ok(())
    }
}
