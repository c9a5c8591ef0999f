//! Thread-pool gauge collector

use super::{Collector, DeltaTracker, Sample, counter_value};
use crate::monitor::ThreadPoolMonitor;
use std::sync::Arc;

/// Emits thread-pool gauges plus the per-interval rejection delta.
///
/// Gauges are reported as-is each invocation, including the −1 aggregation-
/// failure sentinel; only `{family}_rejected_count` is delta-based.
#[derive(Debug)]
pub struct ThreadPoolCollector {
    family: String,
    monitor: Arc<ThreadPoolMonitor>,
    rejected: DeltaTracker,
}

impl ThreadPoolCollector {
    #[must_use]
    pub fn new(family: impl Into<String>, monitor: Arc<ThreadPoolMonitor>) -> Self {
        Self {
            family: family.into(),
            monitor,
            rejected: DeltaTracker::new(),
        }
    }
}

impl Collector for ThreadPoolCollector {
    fn family(&self) -> &str {
        &self.family
    }

    fn collect(&mut self) -> Vec<Sample> {
        let rejected = self.rejected.advance(self.monitor.rejected_count());

        vec![
            Sample::prefixed(&self.family, "active_count", self.monitor.active_count()),
            Sample::prefixed(&self.family, "core_size", self.monitor.core_size()),
            Sample::prefixed(&self.family, "max_size", self.monitor.max_size()),
            Sample::prefixed(&self.family, "current_size", self.monitor.current_size()),
            Sample::prefixed(&self.family, "peak_size", self.monitor.peak_size()),
            Sample::prefixed(&self.family, "rejected_count", counter_value(rejected)),
        ]
    }
}
