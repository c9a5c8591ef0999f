//! Thread-safe monitors accumulating runtime counters
//!
//! A monitor is a process-wide accumulator for one subsystem (sockets,
//! compression, thread pools). Application code increments its counters from
//! hot paths; collectors in [`crate::collect`] read them periodically.

pub mod compression;
pub mod socket;
pub mod thread_pool;

pub use compression::CompressionMonitor;
pub use socket::SocketMonitor;
pub use thread_pool::{AGGREGATION_FAILED, GaugeError, PoolResource, ThreadPoolMonitor};
