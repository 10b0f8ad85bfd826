use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::pokemon::Pokemon;

const SPECIES_PATH: &str = "pokemon-species";

/// Language tag of the flavor text kept as description
const DESCRIPTION_LANGUAGE: &str = "en";

/// Errors while looking up a species
#[derive(Debug, Error)]
pub enum PokeApiError {
    /// Upstream answered 404
    #[error("pokemon not found")]
    NotFound,

    #[error("unexpected status code {0} from pokeapi")]
    UnexpectedStatus(StatusCode),

    #[error("request to pokeapi failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed pokeapi response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl PokeApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PokeApiError::NotFound)
    }
}

/// Looks up Pokemon by name
#[async_trait]
pub trait SpeciesLookup: Send + Sync {
    /// Fetches the species with the given name and projects it into a [`Pokemon`]
    async fn pokemon_by_name(&self, name: &str) -> Result<Pokemon, PokeApiError>;
}

/// [`SpeciesLookup`] backed by the pokeapi.co `pokemon-species` endpoint
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Self::with_client(super::http_client(timeout)?, base_url)
    }

    /// Builds the client on top of an already configured [`reqwest::Client`]
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: super::parse_base_url(base_url)?,
        })
    }

    /// The URL of the species resource for `name`
    pub fn species_url(&self, name: &str) -> Url {
        super::join_segments(&self.base_url, &[SPECIES_PATH, name])
    }
}

#[async_trait]
impl SpeciesLookup for PokeApiClient {
    async fn pokemon_by_name(&self, name: &str) -> Result<Pokemon, PokeApiError> {
        let url = self.species_url(name);
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(PokeApiError::NotFound),
            status => return Err(PokeApiError::UnexpectedStatus(status)),
        }

        let body = response.text().await?;
        let species: PokemonSpecies = serde_json::from_str(&body)?;
        Ok(species.into())
    }
}

/// Partial representation of the pokeapi `PokemonSpecies` resource
///
/// Reference: https://pokeapi.co/docs/v2#pokemonspecies
#[derive(Deserialize, Debug)]
pub(crate) struct PokemonSpecies {
    name: String,
    #[serde(default)]
    flavor_text_entries: Vec<FlavorText>,
    /// null for species introduced after generation 3
    #[serde(default)]
    habitat: Option<NamedResource>,
    #[serde(default)]
    is_legendary: bool,
}

/// Partial representation of the pokeapi `FlavorText` type
#[derive(Deserialize, Debug)]
struct FlavorText {
    flavor_text: String,
    language: NamedResource,
}

#[derive(Deserialize, Debug)]
struct NamedResource {
    name: String,
}

impl PokemonSpecies {
    /// The first flavor text in English, in upstream order
    fn english_description(&self) -> Option<&str> {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == DESCRIPTION_LANGUAGE)
            .map(|entry| entry.flavor_text.as_str())
    }
}

impl From<PokemonSpecies> for Pokemon {
    fn from(species: PokemonSpecies) -> Self {
        let description = species.english_description().unwrap_or_default().to_string();
        Pokemon {
            name: species.name,
            description,
            habitat: species.habitat.map(|h| h.name).unwrap_or_default(),
            is_legendary: species.is_legendary,
        }
    }
}
