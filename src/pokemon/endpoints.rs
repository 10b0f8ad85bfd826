use log::{error, info, warn};
use rocket::{State, http::Status, serde::json::Json};

use crate::{clients::pokeapi::PokeApiError, pokedex::Pokedex, pokemon::Pokemon};

/// Endpoint for getting a Pokemon with its upstream description.
#[get("/pokemon/<name>")]
pub async fn get_pokemon(name: &str, pokedex: &State<Pokedex>) -> Result<Json<Pokemon>, Status> {
    info!("Request to /pokemon/{}", name);
    let pokemon = pokedex
        .pokemon(name)
        .await
        .map_err(|e| lookup_failure(name, e))?;
    Ok(Json(pokemon))
}

/// Endpoint for getting a Pokemon with a translated description.
/// Falls back to the upstream description when translation fails
#[get("/pokemon/translated/<name>")]
pub async fn get_translated_pokemon(
    name: &str,
    pokedex: &State<Pokedex>,
) -> Result<Json<Pokemon>, Status> {
    info!("Request to /pokemon/translated/{}", name);
    let pokemon = pokedex
        .translated_pokemon(name)
        .await
        .map_err(|e| lookup_failure(name, e))?;
    Ok(Json(pokemon))
}

/// `/pokemon/translated` with no name. Takes precedence over
/// [`get_pokemon`] so the prefix is never looked up as a Pokemon
#[get("/pokemon/translated")]
pub fn get_translated_without_name() -> Status {
    info!("Request to /pokemon/translated without a name");
    Status::NotFound
}

/// Logs a failed lookup and picks the status the catchers render
pub(crate) fn lookup_failure(name: &str, error: PokeApiError) -> Status {
    if error.is_not_found() {
        warn!("Pokemon {} not found", name);
        Status::NotFound
    } else {
        error!("Error retrieving pokemon {}: {}", name, error);
        Status::InternalServerError
    }
}

#[catch(404)]
pub fn not_found() -> &'static str {
    "Not Found"
}

#[catch(500)]
pub fn internal_error() -> &'static str {
    "Internal Server Error"
}
