//! Socket I/O collector

use super::{Collector, DeltaTracker, Sample, counter_value};
use crate::monitor::SocketMonitor;
use std::sync::Arc;

/// Emits per-interval socket read/write deltas for one monitored host.
///
/// Sample names: `{family}_read_count`, `{family}_read_bytes`,
/// `{family}_written_count`, `{family}_written_bytes`.
#[derive(Debug)]
pub struct SocketCollector {
    family: String,
    monitor: Arc<SocketMonitor>,
    read_count: DeltaTracker,
    read_bytes: DeltaTracker,
    written_count: DeltaTracker,
    written_bytes: DeltaTracker,
}

impl SocketCollector {
    #[must_use]
    pub fn new(family: impl Into<String>, monitor: Arc<SocketMonitor>) -> Self {
        Self {
            family: family.into(),
            monitor,
            read_count: DeltaTracker::new(),
            read_bytes: DeltaTracker::new(),
            written_count: DeltaTracker::new(),
            written_bytes: DeltaTracker::new(),
        }
    }
}

impl Collector for SocketCollector {
    fn family(&self) -> &str {
        &self.family
    }

    fn collect(&mut self) -> Vec<Sample> {
        let read_count = self.read_count.advance(self.monitor.read_count());
        let read_bytes = self.read_bytes.advance(self.monitor.read_bytes());
        let written_count = self.written_count.advance(self.monitor.written_count());
        let written_bytes = self.written_bytes.advance(self.monitor.written_bytes());

        vec![
            Sample::prefixed(&self.family, "read_count", counter_value(read_count)),
            Sample::prefixed(&self.family, "read_bytes", counter_value(read_bytes)),
            Sample::prefixed(&self.family, "written_count", counter_value(written_count)),
            Sample::prefixed(&self.family, "written_bytes", counter_value(written_bytes)),
        ]
    }
}
