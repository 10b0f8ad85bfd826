mod config;

use std::sync::Arc;

use crate::{build_rocket, pokedex::Pokedex};
use doubles::{StubSpecies, StubTranslator, test_config};

/// Test if rocket can be built
#[test]
fn test_rocket() {
    let pokedex = Pokedex::new(
        Arc::new(StubSpecies::not_found()),
        Arc::new(StubTranslator::failing()),
        log::logger(),
    );
    let _rocket = build_rocket(&test_config(), pokedex).expect("Rocket should build");
    // no panic = success
}
