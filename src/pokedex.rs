use log::{Level, Log, Record};
use std::{fmt, sync::Arc};

use crate::{
    clients::{
        funtranslations::{FunTranslate, TranslatorKind},
        pokeapi::{PokeApiError, SpeciesLookup},
    },
    pokemon::Pokemon,
};

/// Looks Pokemon up and, on request, translates their description.
/// Shared by every request handler
pub struct Pokedex {
    species: Arc<dyn SpeciesLookup>,
    translator: Arc<dyn FunTranslate>,
    logger: &'static dyn Log,
}

/// Picks the translator for a Pokemon: Yoda for legendary or cave
/// dwelling Pokemon, Shakespeare for everybody else
pub fn select_translator(pokemon: &Pokemon) -> TranslatorKind {
    if pokemon.is_legendary || pokemon.lives_in_cave() {
        TranslatorKind::Yoda
    } else {
        TranslatorKind::Shakespeare
    }
}

impl Pokedex {
    /// `logger` receives the translation outcomes, `log::logger()` in production
    pub fn new(
        species: Arc<dyn SpeciesLookup>,
        translator: Arc<dyn FunTranslate>,
        logger: &'static dyn Log,
    ) -> Self {
        Self {
            species,
            translator,
            logger,
        }
    }

    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.logger.log(
            &Record::builder()
                .level(level)
                .target(module_path!())
                .module_path_static(Some(module_path!()))
                .args(args)
                .build(),
        );
    }

    /// Fetches the Pokemon as upstream describes it
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon, PokeApiError> {
        self.species.pokemon_by_name(name).await
    }

    /// Fetches the Pokemon and replaces its description with a translation.
    /// A failed translation is logged and the original description kept
    pub async fn translated_pokemon(&self, name: &str) -> Result<Pokemon, PokeApiError> {
        let mut pokemon = self.species.pokemon_by_name(name).await?;
        let translator = select_translator(&pokemon);

        match self
            .translator
            .translate(translator, &pokemon.description)
            .await
        {
            Ok(translated) => {
                self.log(
                    Level::Info,
                    format_args!("Translated description of {} with {}", pokemon.name, translator),
                );
                pokemon.description = translated;
            }
            Err(e) => self.log(
                Level::Warn,
                format_args!(
                    "Could not translate description of {} with {}: {}",
                    pokemon.name, translator, e
                ),
            ),
        }

        Ok(pokemon)
    }
}
