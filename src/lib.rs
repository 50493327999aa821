//! Pokedex - An interactive PokeAPI explorer
//!
//! Lookups go through an in-memory cache whose entries expire on a fixed
//! interval, so repeating a command shortly after the first call does not hit
//! the network again.

pub mod cache;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
mod tasks;

pub use cache::Cache;
pub use client::{CachedFetcher, Fetch, HttpFetcher, PokeApi};
pub use commands::{Command, Flow, Session};
pub use config::Config;
pub use error::{PokedexError, Result};
