//! Process-wide monitor registry with create-once semantics
//!
//! Each monitor kind keeps one `MonitorRegistry` in a `LazyLock` static so
//! that a name always resolves to the same monitor instance for the life of
//! the process. Entries are never removed; a metrics registry is intentional
//! long-lived state, not a leak.

use dashmap::DashMap;
use std::sync::Arc;

/// Thread-safe name → monitor map guaranteeing one instance per name.
#[derive(Debug, Default)]
pub struct MonitorRegistry<M> {
    monitors: DashMap<String, Arc<M>>,
}

impl<M> MonitorRegistry<M> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            monitors: DashMap::new(),
        }
    }

    /// Return the singleton monitor for `name`, creating it on first call.
    ///
    /// Concurrent first-time lookups for the same name all observe the same
    /// instance: the entry API runs `init` at most once per name, under the
    /// shard write lock. `init` must not call back into this registry.
    /// Lookups after creation take the sharded-read fast path.
    pub fn get_with(&self, name: &str, init: impl FnOnce(&str) -> M) -> Arc<M> {
        // Fast path: no write lock once the entry exists.
        if let Some(monitor) = self.monitors.get(name) {
            return Arc::clone(&monitor);
        }
        Arc::clone(
            &self
                .monitors
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(init(name))),
        )
    }

    /// Snapshot of all registered monitors.
    ///
    /// The returned vec is a defensive copy: registrations that happen after
    /// this call returns are not reflected in it.
    #[must_use]
    pub fn all(&self) -> Vec<Arc<M>> {
        self.monitors
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    /// Number of registered monitors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy {
        name: String,
    }

    #[test]
    fn test_same_name_same_instance() {
        let registry = MonitorRegistry::new();
        let a = registry.get_with("x", |n| Dummy { name: n.to_string() });
        let b = registry.get_with("x", |n| Dummy { name: n.to_string() });
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.name, "x");
    }

    #[test]
    fn test_distinct_names_distinct_instances() {
        let registry = MonitorRegistry::new();
        let a = registry.get_with("a", |n| Dummy { name: n.to_string() });
        let b = registry.get_with("b", |n| Dummy { name: n.to_string() });
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_concurrent_first_access_creates_once() {
        let registry = MonitorRegistry::new();
        let threads = 16;

        let handles: Vec<Arc<Dummy>> = std::thread::scope(|scope| {
            let workers: Vec<_> = (0..threads)
                .map(|_| {
                    scope.spawn(|| registry.get_with("shared", |n| Dummy { name: n.to_string() }))
                })
                .collect();
            workers
                .into_iter()
                .map(|worker| worker.join().expect("worker panicked"))
                .collect()
        });

        let first = &handles[0];
        for handle in &handles {
            assert!(Arc::ptr_eq(first, handle));
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_snapshot_isolation() {
        let registry = MonitorRegistry::new();
        registry.get_with("a", |n| Dummy { name: n.to_string() });

        let snapshot = registry.all();
        registry.get_with("b", |n| Dummy { name: n.to_string() });

        assert_eq!(snapshot.len(), 1);
        assert_eq!(registry.all().len(), 2);
    }
}
