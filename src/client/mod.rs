//! Client Module
//!
//! Everything between the commands and the network.
//!
//! # Layers
//! - `Fetch` - raw bytes for a URL
//! - `HttpFetcher` - `Fetch` over reqwest
//! - `CachedFetcher` - `Fetch` that consults the expiring cache first
//! - `PokeApi` - typed endpoints decoded from whatever `Fetch` returns

pub mod api;
pub mod fetcher;

pub use api::PokeApi;
pub use fetcher::{CachedFetcher, Fetch, HttpFetcher};
