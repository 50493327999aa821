//! PokeAPI response models
//!
//! Typed views over the JSON payloads that the cache stores as raw bytes.
//! Only the fields the commands use are declared; everything else is ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, StatSlot, TypeSlot};
