//! Pokemon model
//!
//! Shape of `GET /pokemon/{name}`.

use serde::Deserialize;

use crate::models::NamedResource;

/// A pokemon as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Some forms have no base experience in the API (`null`)
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl Pokemon {
    /// Percent chance, out of 100, that a single throw catches this pokemon.
    ///
    /// Stronger pokemon (higher base experience) are harder to catch; at 100
    /// base experience or more the chance is zero.
    pub fn catch_chance(&self) -> u32 {
        100u32.saturating_sub(self.base_experience.unwrap_or(0))
    }
}
