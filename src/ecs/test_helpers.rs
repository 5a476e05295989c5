use std::time::Duration;

use bevy_app::App;

use crate::config::SpawnerConfig;
use crate::ecs::app::build_spawner_app;
use crate::ecs::clock::SpawnerClock;
use crate::ecs::pending::PendingSpawn;
use crate::ecs::resources::{AliveRegistry, CatchInbox, CatchTurtleClient, FeedSinks};
use crate::ecs::schedule::SpawnerTick;
use crate::feed::RecordingFeed;
use crate::model::{KillRequest, KillResponse, SpawnRequest, SpawnResponse};
use crate::services::ScriptedService;

/// Run one tick of `delta`.
pub fn tick(app: &mut App, delta: Duration) {
    app.world_mut()
        .resource_mut::<SpawnerClock>()
        .begin_tick(delta);
    app.world_mut().run_schedule(SpawnerTick);
}

/// Run `n` one-second ticks.
pub fn tick_seconds(app: &mut App, n: u32) {
    for _ in 0..n {
        tick(app, Duration::from_secs(1));
    }
}

/// A seeded spawner wired to scripted services and a recording feed.
pub struct ScriptedApp {
    pub app: App,
    pub spawn: ScriptedService<SpawnRequest, SpawnResponse>,
    pub kill: ScriptedService<KillRequest, KillResponse>,
    pub feed: RecordingFeed,
    pub catch: CatchTurtleClient,
}

impl ScriptedApp {
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    pub fn with_config(edit: impl FnOnce(&mut SpawnerConfig)) -> Self {
        let mut config = SpawnerConfig {
            seed: Some(42),
            ..SpawnerConfig::default()
        };
        edit(&mut config);

        let spawn = ScriptedService::new("spawn");
        let kill = ScriptedService::new("kill");
        let mut app = build_spawner_app(config, spawn.clone(), kill.clone()).unwrap();

        let feed = RecordingFeed::new();
        app.world_mut()
            .resource_mut::<FeedSinks>()
            .0
            .push(Box::new(feed.clone()));
        let catch = app.world().resource::<CatchInbox>().client();

        Self {
            app,
            spawn,
            kill,
            feed,
            catch,
        }
    }

    pub fn registry(&self) -> AliveRegistry {
        self.app.world().resource::<AliveRegistry>().clone()
    }

    pub fn pending_spawns(&mut self) -> usize {
        let world = self.app.world_mut();
        let mut query = world.query::<&PendingSpawn>();
        query.iter(world).count()
    }
}
