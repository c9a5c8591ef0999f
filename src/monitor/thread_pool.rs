//! Thread-pool aggregation monitor
//!
//! Tracks a dynamic set of externally-owned pools and sums their live gauges
//! on demand. Handles are non-owning (`Weak`): the application keeps
//! ownership of its pools, and a pool that terminates or is dropped is
//! excluded from aggregates and pruned from the tracked set as a side effect
//! of the next aggregation pass.

use crate::counter::SafeCounter;
use crate::registry::MonitorRegistry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock, Weak};
use thiserror::Error;
use tracing::error;

/// Sentinel returned by the aggregation methods when introspecting a tracked
/// pool failed. Valid aggregates are always non-negative, so −1 is never a
/// legitimate total — in particular it does not mean "no pools registered"
/// (an empty tracked set aggregates to 0).
pub const AGGREGATION_FAILED: i64 = -1;

/// Introspection failure reported by a [`PoolResource`] implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("pool introspection failed: {0}")]
pub struct GaugeError(pub String);

/// Capability set a resource must expose to be aggregated.
///
/// Any pool-shaped resource satisfying this trait can be registered — thread
/// pools, connection pools — the monitor never depends on a concrete type.
/// Gauges are fallible because introspection crosses into externally-owned
/// state; the monitor is the defensive boundary that keeps those failures
/// from reaching callers.
pub trait PoolResource: Send + Sync + std::fmt::Debug {
    /// Whether the pool has shut down. Terminated pools are excluded from
    /// aggregates and pruned on the next pass.
    fn is_terminated(&self) -> Result<bool, GaugeError>;

    /// Approximate number of workers currently running tasks.
    fn active_count(&self) -> Result<u64, GaugeError>;

    /// Configured minimum pool size.
    fn core_size(&self) -> Result<u64, GaugeError>;

    /// Configured maximum pool size.
    fn max_size(&self) -> Result<u64, GaugeError>;

    /// Current number of workers in the pool.
    fn current_size(&self) -> Result<u64, GaugeError>;

    /// Largest size the pool has reached.
    fn peak_size(&self) -> Result<u64, GaugeError>;
}

static REGISTRY: LazyLock<MonitorRegistry<ThreadPoolMonitor>> =
    LazyLock::new(MonitorRegistry::new);

/// Aggregates live gauges across a dynamic set of registered pools.
///
/// Safe to share across any number of threads. Registration and rejection
/// recording are lock-free writes; each aggregation read iterates the
/// tracked set once and tolerates entries disappearing concurrently.
#[derive(Debug)]
pub struct ThreadPoolMonitor {
    name: String,
    // Keyed by a registration id, not by pool identity: duplicate
    // registration is permitted and doubles that pool's contribution.
    pools: DashMap<u64, Weak<dyn PoolResource>>,
    next_registration: AtomicU64,
    rejected_count: SafeCounter,
}

impl ThreadPoolMonitor {
    /// Standalone monitor, for callers that manage their own instances.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pools: DashMap::new(),
            next_registration: AtomicU64::new(0),
            rejected_count: SafeCounter::new(),
        }
    }

    /// Process-wide singleton monitor for `name`, created on first use.
    pub fn get(name: &str) -> Arc<ThreadPoolMonitor> {
        REGISTRY.get_with(name, |n| ThreadPoolMonitor::new(n))
    }

    /// Snapshot of every registered thread-pool monitor.
    #[must_use]
    pub fn get_all() -> Vec<Arc<ThreadPoolMonitor>> {
        REGISTRY.all()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Start tracking `pool`.
    ///
    /// The monitor holds only a weak handle; the caller keeps ownership.
    /// Once the pool terminates (or its last `Arc` is dropped) it stops
    /// contributing to aggregates and is pruned on the next pass. Duplicate
    /// registration is not deduplicated: registering the same pool twice
    /// doubles its contribution.
    pub fn register<R: PoolResource + 'static>(&self, pool: &Arc<R>) {
        let id = self.next_registration.fetch_add(1, Ordering::Relaxed);
        let handle = Arc::downgrade(pool);
        let handle: Weak<dyn PoolResource> = handle;
        self.pools.insert(id, handle);
    }

    /// Record one rejected task submission.
    ///
    /// Independent of the tracked set: rejections stay counted even after
    /// the pool that issued them is pruned.
    #[inline]
    pub fn on_rejected(&self) {
        self.rejected_count.add(1);
    }

    /// Total rejected task submissions since process start.
    #[must_use]
    pub fn rejected_count(&self) -> u64 {
        self.rejected_count.get()
    }

    /// Sum of [`PoolResource::active_count`] across live tracked pools, or
    /// [`AGGREGATION_FAILED`] if introspection failed.
    pub fn active_count(&self) -> i64 {
        self.aggregate("active_count", |pool| pool.active_count())
    }

    /// Sum of [`PoolResource::core_size`] across live tracked pools, or
    /// [`AGGREGATION_FAILED`] if introspection failed.
    pub fn core_size(&self) -> i64 {
        self.aggregate("core_size", |pool| pool.core_size())
    }

    /// Sum of [`PoolResource::max_size`] across live tracked pools, or
    /// [`AGGREGATION_FAILED`] if introspection failed.
    pub fn max_size(&self) -> i64 {
        self.aggregate("max_size", |pool| pool.max_size())
    }

    /// Sum of [`PoolResource::current_size`] across live tracked pools, or
    /// [`AGGREGATION_FAILED`] if introspection failed.
    pub fn current_size(&self) -> i64 {
        self.aggregate("current_size", |pool| pool.current_size())
    }

    /// Sum of [`PoolResource::peak_size`] across live tracked pools, or
    /// [`AGGREGATION_FAILED`] if introspection failed.
    ///
    /// Pools may have peaked at different times; the sum is indicative only.
    pub fn peak_size(&self) -> i64 {
        self.aggregate("peak_size", |pool| pool.peak_size())
    }

    /// One aggregation pass: sum `gauge` over live pools, prune dead ones.
    ///
    /// Failures never propagate; they are logged with the tracked-set
    /// contents and surfaced as [`AGGREGATION_FAILED`].
    fn aggregate(
        &self,
        gauge_name: &str,
        gauge: impl Fn(&dyn PoolResource) -> Result<u64, GaugeError>,
    ) -> i64 {
        match self.try_aggregate(gauge) {
            Ok(total) => i64::try_from(total).unwrap_or(i64::MAX),
            Err(err) => {
                error!(
                    monitor = %self.name,
                    gauge = gauge_name,
                    tracked_pools = ?self.tracked_set(),
                    %err,
                    "thread pool aggregation failed"
                );
                AGGREGATION_FAILED
            }
        }
    }

    fn try_aggregate(
        &self,
        gauge: impl Fn(&dyn PoolResource) -> Result<u64, GaugeError>,
    ) -> Result<u64, GaugeError> {
        let mut total: u64 = 0;
        let mut dead: Vec<u64> = Vec::new();

        for entry in self.pools.iter() {
            let Some(pool) = entry.value().upgrade() else {
                dead.push(*entry.key());
                continue;
            };
            if pool.is_terminated()? {
                dead.push(*entry.key());
                continue;
            }
            total = total.saturating_add(gauge(pool.as_ref())?);
        }

        // Prune outside the iteration: removing a key whose shard is locked
        // by a live iterator would deadlock.
        for id in dead {
            self.pools.remove(&id);
        }

        Ok(total)
    }

    /// Debug rendering of the tracked set, for failure logging.
    fn tracked_set(&self) -> Vec<String> {
        self.pools
            .iter()
            .map(|entry| match entry.value().upgrade() {
                Some(pool) => format!("{pool:?}"),
                None => "<dropped>".to_string(),
            })
            .collect()
    }

    /// Number of registrations currently tracked, including not-yet-pruned
    /// dead entries.
    #[must_use]
    pub fn tracked_len(&self) -> usize {
        self.pools.len()
    }
}
