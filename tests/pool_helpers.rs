//! Shared test double implementing the pool capability set

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use vitals::{GaugeError, PoolResource};

/// Configurable fake pool for aggregation tests.
///
/// Gauge values are fixed at construction; termination and failure modes can
/// be flipped at runtime to exercise pruning and the defensive boundary.
#[derive(Debug)]
pub struct TestPool {
    active: u64,
    core: u64,
    max: u64,
    current: u64,
    peak: u64,
    terminated: AtomicBool,
    liveness_fails: AtomicBool,
    gauges_fail: AtomicBool,
}

impl TestPool {
    pub fn with_gauges(active: u64, core: u64, max: u64, current: u64, peak: u64) -> Arc<Self> {
        Arc::new(Self {
            active,
            core,
            max,
            current,
            peak,
            terminated: AtomicBool::new(false),
            liveness_fails: AtomicBool::new(false),
            gauges_fail: AtomicBool::new(false),
        })
    }

    /// Pool whose every gauge reads `size`.
    pub fn sized(size: u64) -> Arc<Self> {
        Self::with_gauges(size, size, size, size, size)
    }

    pub fn terminate(&self) {
        self.terminated.store(true, Ordering::Relaxed);
    }

    /// Make `is_terminated` return an error from now on.
    pub fn break_liveness(&self) {
        self.liveness_fails.store(true, Ordering::Relaxed);
    }

    /// Make every gauge return an error from now on.
    pub fn break_gauges(&self) {
        self.gauges_fail.store(true, Ordering::Relaxed);
    }

    fn gauge(&self, value: u64) -> Result<u64, GaugeError> {
        if self.gauges_fail.load(Ordering::Relaxed) {
            return Err(GaugeError("gauge read failed".to_string()));
        }
        Ok(value)
    }
}

impl PoolResource for TestPool {
    fn is_terminated(&self) -> Result<bool, GaugeError> {
        if self.liveness_fails.load(Ordering::Relaxed) {
            return Err(GaugeError("liveness probe failed".to_string()));
        }
        Ok(self.terminated.load(Ordering::Relaxed))
    }

    fn active_count(&self) -> Result<u64, GaugeError> {
        self.gauge(self.active)
    }

    fn core_size(&self) -> Result<u64, GaugeError> {
        self.gauge(self.core)
    }

    fn max_size(&self) -> Result<u64, GaugeError> {
        self.gauge(self.max)
    }

    fn current_size(&self) -> Result<u64, GaugeError> {
        self.gauge(self.current)
    }

    fn peak_size(&self) -> Result<u64, GaugeError> {
        self.gauge(self.peak)
    }
}
