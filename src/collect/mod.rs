//! Collector protocol: periodic sampling of monitors into named values
//!
//! A collector adapts one monitor into a batch of named samples. An external
//! scheduler owns each collector instance and invokes [`Collector::collect`]
//! on a fixed cadence; the collector keeps the "last observed" state needed
//! to turn cumulative counters into per-interval deltas. Transport of the
//! resulting samples to any backend is the scheduler's concern.

mod compression;
mod socket;
mod thread_pool;

pub use compression::CompressionCollector;
pub use socket::SocketCollector;
pub use thread_pool::ThreadPoolCollector;

use serde::Serialize;

/// One named value produced by a collector invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub name: String,
    pub value: i64,
}

impl Sample {
    /// Build a sample named `{family}_{name}`.
    ///
    /// The family prefix namespaces samples from different collector
    /// instances monitoring different resources.
    #[must_use]
    pub fn prefixed(family: &str, name: &str, value: i64) -> Self {
        Self {
            name: format!("{family}_{name}"),
            value,
        }
    }
}

/// Periodic sampling contract, one instance per metric family.
///
/// The scheduler serializes invocations of a given instance; calling
/// [`collect`](Collector::collect) on the same instance from multiple
/// threads concurrently is a caller contract violation, not a runtime-
/// checked error. `&mut self` encodes that single-caller assumption.
///
/// Implementations read concurrently-mutated monitors but confine side
/// effects to their own private state — they never mutate the monitor.
pub trait Collector {
    /// Stable metric-family identifier prefixed onto every sample name.
    fn family(&self) -> &str;

    /// Produce this interval's samples. Never "null": an empty vec means
    /// nothing to report.
    fn collect(&mut self) -> Vec<Sample>;
}

/// Cumulative-to-delta state for one monotonically increasing series.
#[derive(Debug, Default)]
pub struct DeltaTracker {
    last_observed: u64,
}

impl DeltaTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self { last_observed: 0 }
    }

    /// Delta since the previous observation; stores `current` as the new
    /// baseline.
    ///
    /// A `current` below the previous observation means the underlying
    /// counter was reset (process restart). The tracker re-baselines and
    /// returns 0 rather than a negative that would corrupt future deltas.
    pub fn advance(&mut self, current: u64) -> u64 {
        let delta = current.saturating_sub(self.last_observed);
        self.last_observed = current;
        delta
    }
}

/// Clamp an unsigned counter value into the exported sample range.
pub(crate) fn counter_value(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
