//! Compression byte-savings collector

use super::{Collector, DeltaTracker, Sample, counter_value};
use crate::monitor::CompressionMonitor;
use std::sync::Arc;

/// Emits the bytes saved by compression during each sampling interval.
///
/// Reads the cumulative pre/post byte counters of one
/// [`CompressionMonitor`], derives the cumulative savings
/// `pre_compressed_bytes − compressed_bytes`, and reports its growth since
/// the previous invocation as `{family}_reduce_bytes`.
#[derive(Debug)]
pub struct CompressionCollector {
    family: String,
    monitor: Arc<CompressionMonitor>,
    reduced: DeltaTracker,
}

impl CompressionCollector {
    #[must_use]
    pub fn new(family: impl Into<String>, monitor: Arc<CompressionMonitor>) -> Self {
        Self {
            family: family.into(),
            monitor,
            reduced: DeltaTracker::new(),
        }
    }
}

impl Collector for CompressionCollector {
    fn family(&self) -> &str {
        &self.family
    }

    fn collect(&mut self) -> Vec<Sample> {
        let reduced = self
            .monitor
            .pre_compressed_bytes()
            .saturating_sub(self.monitor.compressed_bytes());
        let delta = self.reduced.advance(reduced);
        vec![Sample::prefixed(
            &self.family,
            "reduce_bytes",
            counter_value(delta),
        )]
    }
}
