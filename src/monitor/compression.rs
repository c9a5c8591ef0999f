//! Compression monitor
//!
//! Tracks cumulative byte totals before and after a compression transform so
//! collectors can derive per-interval savings.

use crate::counter::SafeCounter;
use crate::registry::MonitorRegistry;
use std::sync::{Arc, LazyLock};

static REGISTRY: LazyLock<MonitorRegistry<CompressionMonitor>> =
    LazyLock::new(MonitorRegistry::new);

/// Accumulates pre- and post-compression byte totals for one stream family.
///
/// Both counters are monotonically increasing cumulatives; the source of
/// truth is never reset. [`crate::collect::CompressionCollector`] keeps its
/// own last-observed value to derive interval deltas.
#[derive(Debug)]
pub struct CompressionMonitor {
    name: String,
    pre_compressed_bytes: SafeCounter,
    compressed_bytes: SafeCounter,
}

impl CompressionMonitor {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            pre_compressed_bytes: SafeCounter::new(),
            compressed_bytes: SafeCounter::new(),
        }
    }

    /// Process-wide singleton monitor for `name`, created on first use.
    pub fn get(name: &str) -> Arc<CompressionMonitor> {
        REGISTRY.get_with(name, CompressionMonitor::new)
    }

    /// Snapshot of every registered compression monitor.
    #[must_use]
    pub fn get_all() -> Vec<Arc<CompressionMonitor>> {
        REGISTRY.all()
    }

    /// Record one compression event: `pre` input bytes became `post` output
    /// bytes.
    #[inline]
    pub fn on_compressed(&self, pre: u64, post: u64) {
        self.pre_compressed_bytes.add(pre);
        self.compressed_bytes.add(post);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cumulative bytes fed into the compressor.
    #[must_use]
    pub fn pre_compressed_bytes(&self) -> u64 {
        self.pre_compressed_bytes.get()
    }

    /// Cumulative bytes produced by the compressor.
    #[must_use]
    pub fn compressed_bytes(&self) -> u64 {
        self.compressed_bytes.get()
    }
}
