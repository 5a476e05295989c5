//! Timer-driven spawning.
//!
//! 1. `spawn_new_turtle` (Requests): on each timer firing, take the next name,
//!    sample a pose, wait for the service and issue the spawn call.
//! 2. `resolve_spawn_calls` (Completions): registers accepted turtles and
//!    publishes a snapshot per registration.

use std::f64::consts::TAU;

use bevy_ecs::entity::Entity;
use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::system::{Commands, Query, Res, ResMut};
use rand::Rng;

use crate::config::SpawnerConfig;
use crate::ecs::events::{AliveTurtlesPublished, SpawnTimerFired};
use crate::ecs::pending::PendingSpawn;
use crate::ecs::resources::{AliveRegistry, CallSequence, SpawnClient, SpawnerRng, TurtleNames};
use crate::model::SpawnRequest;
use crate::services::wait_for;

/// Spawn coordinates are sampled from `[SPAWN_MIN, SPAWN_MAX]` on both axes.
pub const SPAWN_MIN: f64 = 0.0;
pub const SPAWN_MAX: f64 = 11.0;

/// Random pose for a new turtle: `x, y` in `[0, 11]`, `theta` in `[0, 2π)`.
pub fn sample_spawn_request(name: String, rng: &mut impl Rng) -> SpawnRequest {
    SpawnRequest {
        name,
        x: rng.random_range(SPAWN_MIN..=SPAWN_MAX),
        y: rng.random_range(SPAWN_MIN..=SPAWN_MAX),
        theta: rng.random_range(0.0..TAU),
    }
}

pub fn spawn_new_turtle(
    mut fired: MessageReader<SpawnTimerFired>,
    config: Res<SpawnerConfig>,
    mut names: ResMut<TurtleNames>,
    mut rng: ResMut<SpawnerRng>,
    spawn: Res<SpawnClient>,
    mut sequence: ResMut<CallSequence>,
    mut commands: Commands,
) {
    for event in fired.read() {
        let name = names.0.next_name();
        tracing::debug!(tick = event.tick, "Spawn timer fired, requesting {name}");
        let request = sample_spawn_request(name, &mut rng.0);

        if let Err(err) = wait_for(spawn.0.as_ref(), &config.service_wait) {
            tracing::error!("Dropping spawn of {}: {err}", request.name);
            continue;
        }

        let call = spawn.0.call_async(request.clone());
        commands.spawn(PendingSpawn {
            seq: sequence.0.next_id(),
            request,
            call,
        });
    }
}

pub fn resolve_spawn_calls(
    mut commands: Commands,
    mut pending: Query<(Entity, &mut PendingSpawn)>,
    mut registry: ResMut<AliveRegistry>,
    mut published: MessageWriter<AliveTurtlesPublished>,
) {
    let mut ready = Vec::new();
    for (entity, mut spawn) in &mut pending {
        if let Some(result) = spawn.call.try_take() {
            commands.entity(entity).despawn();
            ready.push((spawn.seq, spawn.request.clone(), result));
        }
    }
    ready.sort_by_key(|(seq, ..)| *seq);

    for (_, request, result) in ready {
        match result {
            Ok(response) if response.is_rejected() => {
                tracing::warn!("Failed to spawn turtle {}", request.name);
            }
            Ok(response) => {
                let name = response.name;
                if registry.register(request.into_turtle(name.clone())) {
                    tracing::info!("New alive turtle: {name}");
                    published.write(AliveTurtlesPublished(registry.snapshot()));
                } else {
                    tracing::warn!("Spawn service granted `{name}`, which is already alive");
                }
            }
            Err(err) => {
                tracing::error!("Spawn service call failed for {}: {err}", request.name);
            }
        }
    }
}
