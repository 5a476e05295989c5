use bevy_app::{App, Plugin};
use bevy_ecs::schedule::IntoScheduleConfigs;

use super::schedule::{SpawnerPhase, SpawnerTick};
use super::systems::catch::serve_catch_requests;
use super::systems::kill::resolve_kill_calls;
use super::systems::publish::publish_alive_turtles;
use super::systems::spawn::{resolve_spawn_calls, spawn_new_turtle};
use super::systems::timer::tick_spawn_timer;

/// Installs the spawner's systems into `SpawnerTick`.
///
/// Expects the resources and messages set up by `build_spawner_app`.
pub struct SpawnerPlugin;

impl Plugin for SpawnerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(SpawnerTick, tick_spawn_timer.in_set(SpawnerPhase::Timers));
        app.add_systems(
            SpawnerTick,
            (spawn_new_turtle, serve_catch_requests)
                .chain()
                .in_set(SpawnerPhase::Requests),
        );
        app.add_systems(
            SpawnerTick,
            (resolve_spawn_calls, resolve_kill_calls)
                .chain()
                .in_set(SpawnerPhase::Completions),
        );
        app.add_systems(
            SpawnerTick,
            publish_alive_turtles.in_set(SpawnerPhase::Publish),
        );
    }
}
