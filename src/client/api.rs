//! PokeAPI endpoints
//!
//! Builds request URLs and decodes the bodies returned by a [`Fetch`].

use serde::de::DeserializeOwned;

use crate::client::Fetch;
use crate::config::Config;
use crate::error::Result;
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Typed access to the handful of PokeAPI endpoints the Pokedex uses.
#[derive(Debug, Clone)]
pub struct PokeApi<F> {
    fetcher: F,
    base_url: String,
    page_size: usize,
}

impl<F: Fetch> PokeApi<F> {
    pub fn new(fetcher: F, base_url: impl Into<String>, page_size: usize) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
            page_size,
        }
    }

    /// Creates the API with the base URL and page size from `config`.
    pub fn from_config(fetcher: F, config: &Config) -> Self {
        Self::new(fetcher, config.api_base_url.clone(), config.page_size)
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// URL of the first page of the location-area listing.
    pub fn first_location_page_url(&self) -> String {
        format!(
            "{}/location-area?offset=0&limit={}",
            self.base_url, self.page_size
        )
    }

    /// Fetches one page of location areas. `url` is either the first page URL
    /// or a `next`/`previous` link from an earlier page.
    pub async fn location_page(&self, url: &str) -> Result<LocationAreaPage> {
        self.get_json(url).await
    }

    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        self.get_json(&url).await
    }

    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetcher.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PokedexError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves fixed bodies and records requested URLs.
    #[derive(Default)]
    struct StubFetcher {
        bodies: HashMap<String, &'static str>,
        requested: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn with(mut self, url: &str, body: &'static str) -> Self {
            self.bodies.insert(url.to_string(), body);
            self
        }
    }

    impl Fetch for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            self.requested.lock().unwrap().push(url.to_string());
            self.bodies
                .get(url)
                .map(|body| body.as_bytes().to_vec())
                .ok_or_else(|| PokedexError::Status {
                    url: url.to_string(),
                    status: 404,
                })
        }
    }

    const BASE: &str = "http://pokeapi.test/api/v2";

    #[test]
    fn test_first_location_page_url() {
        let api = PokeApi::new(StubFetcher::default(), BASE, 20);
        assert_eq!(
            api.first_location_page_url(),
            "http://pokeapi.test/api/v2/location-area?offset=0&limit=20"
        );
    }

    #[test]
    fn test_from_config_uses_page_size() {
        let config = Config {
            page_size: 5,
            ..Config::default()
        };
        let api = PokeApi::from_config(StubFetcher::default(), &config);
        assert_eq!(
            api.first_location_page_url(),
            "https://pokeapi.co/api/v2/location-area?offset=0&limit=5"
        );
    }

    #[tokio::test]
    async fn test_pokemon_endpoint() {
        let stub = StubFetcher::default().with(
            "http://pokeapi.test/api/v2/pokemon/pidgey",
            r#"{"name": "pidgey", "base_experience": 50}"#,
        );
        let api = PokeApi::new(stub, BASE, 20);

        let pokemon = api.pokemon("pidgey").await.unwrap();
        assert_eq!(pokemon.name, "pidgey");
        assert_eq!(pokemon.catch_chance(), 50);
    }

    #[tokio::test]
    async fn test_location_area_endpoint() {
        let stub = StubFetcher::default().with(
            "http://pokeapi.test/api/v2/location-area/pastoria-city-area",
            r#"{"name": "pastoria-city-area", "pokemon_encounters": [{"pokemon": {"name": "tentacool"}}]}"#,
        );
        let api = PokeApi::new(stub, BASE, 20);

        let area = api.location_area("pastoria-city-area").await.unwrap();
        assert_eq!(area.pokemon_names().collect::<Vec<_>>(), vec!["tentacool"]);
        assert_eq!(
            api.fetcher().requested.lock().unwrap().as_slice(),
            ["http://pokeapi.test/api/v2/location-area/pastoria-city-area"]
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let stub = StubFetcher::default().with("http://pokeapi.test/api/v2/pokemon/glitch", "<html>");
        let api = PokeApi::new(stub, BASE, 20);

        let err = api.pokemon("glitch").await.unwrap_err();
        assert!(matches!(err, PokedexError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unknown_name_is_not_found() {
        let api = PokeApi::new(StubFetcher::default(), BASE, 20);

        let err = api.pokemon("missingno").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
