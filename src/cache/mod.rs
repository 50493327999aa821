//! Cache Module
//!
//! Provides an in-memory cache of raw response bodies with fixed-interval expiry.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::Cache;

pub(crate) use store::WeakCache;
