pub mod app;
pub mod clock;
pub mod events;
pub mod pending;
pub mod plugin;
pub mod resources;
pub mod schedule;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use app::build_spawner_app;
pub use clock::{SpawnTimer, SpawnerClock};
pub use events::{AliveTurtlesPublished, SpawnTimerFired};
pub use pending::{PendingKill, PendingSpawn};
pub use plugin::SpawnerPlugin;
pub use resources::{
    AliveRegistry, CallSequence, CatchCall, CatchInbox, CatchTurtleClient, FeedSinks, KillClient,
    SpawnClient, SpawnerRng, TurtleNames,
};
pub use schedule::{SpawnerPhase, SpawnerTick, configure_spawner_schedule};
