//! In-process runtime metrics: lock-free monitors and delta-based collectors
//!
//! This crate provides thread-safe monitors that accumulate runtime counters
//! (socket I/O, thread-pool saturation, compression ratios) and a collector
//! protocol that turns the accumulated state into periodic, delta-based
//! samples for export to a time-series backend.
//!
//! Monitors are mutated concurrently from hot paths by any number of
//! application threads; a single external scheduler thread per collector
//! reads them on a fixed cadence. Writers never block on the reader and vice
//! versa — counters are atomics, the registries and tracked-resource sets
//! are sharded concurrent maps, and the only synchronized section is
//! first-time monitor creation.
//!
//! # Example
//!
//! ```rust
//! use vitals::{Collector, CompressionCollector, CompressionMonitor};
//!
//! // Hot path: record compression events on the process-wide monitor.
//! let monitor = CompressionMonitor::get("wire");
//! monitor.on_compressed(150, 120);
//!
//! // Scheduler thread: sample the per-interval savings.
//! let mut collector = CompressionCollector::new("wire_compression", monitor);
//! let samples = collector.collect();
//! assert_eq!(samples[0].name, "wire_compression_reduce_bytes");
//! assert_eq!(samples[0].value, 30);
//! ```

pub mod collect;
pub mod counter;
pub mod monitor;
pub mod registry;

pub use collect::{
    Collector, CompressionCollector, DeltaTracker, Sample, SocketCollector, ThreadPoolCollector,
};
pub use counter::SafeCounter;
pub use monitor::{
    AGGREGATION_FAILED, CompressionMonitor, GaugeError, PoolResource, SocketMonitor,
    ThreadPoolMonitor,
};
pub use registry::MonitorRegistry;
