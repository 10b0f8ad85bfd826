/// HTTP endpoints serving Pokemon records
pub mod endpoints;

use serde::{Deserialize, Serialize};

/// Habitat whose Pokemon get their description translated by Yoda
pub const CAVE_HABITAT: &str = "cave";

/// Represents a Pokemon as served by this API, a small projection of the
/// upstream species payload
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    /// The name of the Pokemon
    pub name: String,

    /// The first English flavor text of the species, empty if there is none
    pub description: String,

    /// The habitat of the species, empty if upstream has none
    pub habitat: String,

    /// Whether the species is legendary
    pub is_legendary: bool,
}

impl Pokemon {
    pub fn lives_in_cave(&self) -> bool {
        self.habitat == CAVE_HABITAT
    }
}
