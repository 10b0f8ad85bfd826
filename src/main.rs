mod clients;
mod config;
mod pokedex;
mod pokemon;

use std::sync::Arc;

use anyhow::{Result, anyhow};
use clients::{funtranslations::FunTranslationsClient, pokeapi::PokeApiClient};
use config::Config;
use log::info;
use pokedex::Pokedex;
use rocket::{Build, Rocket};
use rocket_cors::{AllowedMethods, AllowedOrigins, CorsOptions};

#[macro_use]
extern crate rocket;

#[cfg(test)]
mod tests;

fn make_cors() -> CorsOptions {
    // both endpoints are read-only
    let allowed_methods: AllowedMethods = [rocket::http::Method::Get]
        .into_iter()
        .map(From::from)
        .collect();

    CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_methods(allowed_methods)
        .allow_credentials(true)
}

/// Assembles the server around a [`Pokedex`], without binding anything yet
fn build_rocket(config: &Config, pokedex: Pokedex) -> Result<Rocket<Build>> {
    let cors = make_cors()
        .to_cors()
        .map_err(|e| anyhow!("Error creating CORS fairing: {}", e))?;

    Ok(rocket::custom(config.figment())
        .attach(cors)
        .manage(pokedex)
        .mount(
            "/",
            routes![
                pokemon::endpoints::get_pokemon,
                pokemon::endpoints::get_translated_pokemon,
                pokemon::endpoints::get_translated_without_name
            ],
        )
        .register(
            "/",
            catchers![
                pokemon::endpoints::not_found,
                pokemon::endpoints::internal_error
            ],
        ))
}

#[rocket::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load()?;
    let upstream = &config.upstream;

    let pokedex = Pokedex::new(
        Arc::new(PokeApiClient::new(&upstream.pokeapi_url, upstream.timeout())?),
        Arc::new(FunTranslationsClient::new(
            &upstream.funtranslations_url,
            upstream.timeout(),
        )?),
        log::logger(),
    );

    info!("Starting server on port {}", config.port);
    build_rocket(&config, pokedex)?
        .launch()
        .await
        .map_err(|e| anyhow!("Server error: {}", e))?;
    info!("Server shut down");

    Ok(())
}
