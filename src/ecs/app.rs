use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::IntoScheduleConfigs;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::clock::{SpawnTimer, SpawnerClock};
use super::events::{AliveTurtlesPublished, SpawnTimerFired};
use super::plugin::SpawnerPlugin;
use super::resources::{
    AliveRegistry, CallSequence, CatchInbox, FeedSinks, KillClient, SpawnClient, SpawnerRng,
    TurtleNames,
};
use super::schedule::{SpawnerPhase, configure_spawner_schedule};
use crate::config::SpawnerConfig;
use crate::error::ConfigError;
use crate::id::NameGenerator;
use crate::model::{KillRequest, KillResponse, SpawnRequest, SpawnResponse};
use crate::services::ServiceClient;

/// Build a headless Bevy app running the spawner against the given spawn
/// and kill services.
///
/// The configuration is validated and consumed here; the spawn period and
/// name prefix are fixed for the life of the app.
///
/// Manual tick control:
/// ```no_run
/// # use std::time::Duration;
/// # use turtle_spawner::config::SpawnerConfig;
/// # use turtle_spawner::ecs::{build_spawner_app, SpawnerClock, SpawnerTick};
/// # use turtle_spawner::services::LocalTurtlesim;
/// let sim = LocalTurtlesim::new();
/// let mut app =
///     build_spawner_app(SpawnerConfig::default(), sim.spawn_client(), sim.kill_client()).unwrap();
/// for _ in 0..10 {
///     app.world_mut().resource_mut::<SpawnerClock>().begin_tick(Duration::from_millis(100));
///     app.world_mut().run_schedule(SpawnerTick);
/// }
/// ```
pub fn build_spawner_app(
    config: SpawnerConfig,
    spawn: impl ServiceClient<SpawnRequest, SpawnResponse> + 'static,
    kill: impl ServiceClient<KillRequest, KillResponse> + 'static,
) -> Result<App, ConfigError> {
    config.validate()?;

    let rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut app = App::empty();

    // Core resources
    app.insert_resource(SpawnerClock::default());
    app.insert_resource(SpawnTimer::new(config.spawn_period()));
    app.insert_resource(TurtleNames(NameGenerator::new(config.name_prefix.clone())));
    app.insert_resource(AliveRegistry::new());
    app.insert_resource(SpawnerRng(rng));
    app.insert_resource(CallSequence::default());
    app.insert_resource(CatchInbox::default());
    app.insert_resource(FeedSinks::default());

    // External services
    app.insert_resource(SpawnClient(Box::new(spawn)));
    app.insert_resource(KillClient(Box::new(kill)));

    app.insert_resource(config);

    // Register message types
    MessageRegistry::register_message::<SpawnTimerFired>(app.world_mut());
    MessageRegistry::register_message::<AliveTurtlesPublished>(app.world_mut());

    let mut schedule = configure_spawner_schedule();
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(SpawnerPhase::PreUpdate));
    app.add_schedule(schedule);
    app.add_plugins(SpawnerPlugin);
    Ok(app)
}
