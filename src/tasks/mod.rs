//! Background Tasks Module
//!
//! Contains background tasks that run periodically for the lifetime of a cache.
//!
//! # Tasks
//! - Sweep: Removes stale cache entries once per cache interval

mod sweeper;

pub(crate) use sweeper::spawn_sweeper;
