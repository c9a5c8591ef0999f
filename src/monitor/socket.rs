//! Socket I/O monitor
//!
//! Tracks read/write operation counts and byte totals per remote host.

use crate::counter::SafeCounter;
use crate::registry::MonitorRegistry;
use std::sync::{Arc, LazyLock};

static REGISTRY: LazyLock<MonitorRegistry<SocketMonitor>> = LazyLock::new(MonitorRegistry::new);

/// Accumulates socket read/write counters for one remote host.
///
/// Safe to share across any number of threads; all updates are lock-free.
#[derive(Debug)]
pub struct SocketMonitor {
    host: String,
    read_count: SafeCounter,
    read_bytes: SafeCounter,
    written_count: SafeCounter,
    written_bytes: SafeCounter,
}

impl SocketMonitor {
    fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
            read_count: SafeCounter::new(),
            read_bytes: SafeCounter::new(),
            written_count: SafeCounter::new(),
            written_bytes: SafeCounter::new(),
        }
    }

    /// Process-wide singleton monitor for `host`, created on first use.
    pub fn get(host: &str) -> Arc<SocketMonitor> {
        REGISTRY.get_with(host, SocketMonitor::new)
    }

    /// Snapshot of every registered socket monitor.
    #[must_use]
    pub fn get_all() -> Vec<Arc<SocketMonitor>> {
        REGISTRY.all()
    }

    /// Record one completed read of `bytes` bytes.
    #[inline]
    pub fn on_read(&self, bytes: u64) {
        self.read_count.add(1);
        self.read_bytes.add(bytes);
    }

    /// Record one completed write of `bytes` bytes.
    #[inline]
    pub fn on_written(&self, bytes: u64) {
        self.written_count.add(1);
        self.written_bytes.add(bytes);
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn read_count(&self) -> u64 {
        self.read_count.get()
    }

    #[must_use]
    pub fn read_bytes(&self) -> u64 {
        self.read_bytes.get()
    }

    #[must_use]
    pub fn written_count(&self) -> u64 {
        self.written_count.get()
    }

    #[must_use]
    pub fn written_bytes(&self) -> u64 {
        self.written_bytes.get()
    }
}
