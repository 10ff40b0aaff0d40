//! # VR Combat Simulator
//!
//! A turn-based combat encounter resolver with a JSON host boundary.
//!
//! ## Overview
//!
//! One player-controlled combatant faces one or more groups of
//! computer-controlled opponents. The engine resolves the whole encounter
//! in a single call: opponents are built from archetype parameters, each
//! round resolves one player action (attack, potion or flee attempt) and
//! one volley from every living opponent, and the terminal state settles
//! experience and currency. The returned log is deterministic for a given
//! seed, so an encounter can be replayed byte for byte.
//!
//! ## Architecture
//!
//! The combat core ([`encounter`], [`dice`], [`combatant`], [`settlement`])
//! is pure data in, data out; the only non-determinism is the injected
//! [`dice::DieSource`]. The Rocket surface in [`endpoints`] exposes the
//! same contract over HTTP with OpenAPI documentation.

// Rocket makes this a bit tricky to support
#![allow(clippy::module_name_repetitions)]
#[macro_use]
extern crate rocket;

use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};

pub mod archetype;
pub mod combatant;
pub mod dice;
pub mod encounter;
pub mod endpoints;
pub mod error;
pub mod settlement;
pub mod status_messages;
pub mod types;

pub use crate::archetype::Archetype;
pub use crate::dice::{DieSource, ScriptedDice, SeededDice};
pub use crate::encounter::{run_encounter, simulate_encounter};
pub use crate::error::EncounterError;
pub use crate::types::{
    CombatResult, EncounterConfig, EncounterOutcome, EncounterRequest, EnemyGroupSpec,
    PenaltyPolicy, PlayerCombatant, TargetStrategy,
};

/// Initializes and configures the Rocket web server with all routes and OpenAPI documentation.
///
/// # Returns
///
/// A configured Rocket instance ready to be launched.
///
/// # Example
///
/// ```no_run
/// use vr_combat_sim::rocket_initialize;
///
/// #[rocket::main]
/// async fn main() {
///     rocket_initialize().launch().await.expect("Failed to launch rocket");
/// }
/// ```
pub fn rocket_initialize() -> rocket::Rocket<rocket::Build> {
    use crate::endpoints::okapi_add_operation_for_list_archetypes_;
    use crate::endpoints::okapi_add_operation_for_resolve_encounter_;
    use crate::endpoints::{list_archetypes, resolve_encounter};

    #[allow(clippy::no_effect_underscore_binding)]
    let _ = env_logger::try_init();

    rocket::build()
        .mount("/", openapi_get_routes![resolve_encounter, list_archetypes])
        .mount("/swagger", make_swagger_ui(&get_docs()))
}

fn get_docs() -> SwaggerUIConfig {
    SwaggerUIConfig {
        url: "/openapi.json".to_string(),
        ..Default::default()
    }
}
