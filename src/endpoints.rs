//! Host-facing Rocket surface: the encounter resolver endpoint and the
//! archetype table lookup.

use rocket::response::status::BadRequest;
use rocket::serde::json::Json;
use rocket::serde::Serialize;
use rocket_okapi::{openapi, JsonSchema};

use crate::archetype::{Archetype, StatModifiers};
use crate::encounter::simulate_encounter;
use crate::status_messages::{new_status, Status};
use crate::types::{CombatResult, EncounterConfig, EncounterRequest};

/// Resolve one encounter to completion.
///
/// The request carries the player record and enemy group specs; the
/// response carries the event log, the updated player record and the
/// terminal flags. Configuration errors come back as 400 with a message.
#[openapi]
#[post("/encounter", format = "json", data = "<request>")]
pub async fn resolve_encounter(
    request: Json<EncounterRequest>,
) -> Result<Json<CombatResult>, BadRequest<Json<Status>>> {
    let request = request.into_inner();
    let seed = request.seed.unwrap_or_else(rand::random);
    log::info!(
        "resolving encounter: {} group(s), strategy {:?}, seed {}",
        request.enemies.len(),
        request.target_strategy,
        seed
    );
    match simulate_encounter(&request, &EncounterConfig::default(), seed) {
        Ok(result) => {
            log::debug!("encounter finished: {:?}", result.outcome);
            Ok(Json(result))
        }
        Err(e) => Err(BadRequest(new_status(e.to_string()))),
    }
}

/// One row of the archetype table as shown to hosts.
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct ArchetypeEntry {
    pub archetype: Archetype,
    pub modifiers: StatModifiers,
    pub xp_multiplier: f64,
}

/// The immutable archetype multiplier table, for host display.
#[openapi]
#[get("/archetypes")]
pub async fn list_archetypes() -> Json<Vec<ArchetypeEntry>> {
    Json(
        Archetype::all()
            .into_iter()
            .map(|archetype| ArchetypeEntry {
                archetype,
                modifiers: archetype.modifiers(),
                xp_multiplier: archetype.xp_multiplier(),
            })
            .collect(),
    )
}
