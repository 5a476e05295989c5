use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

use super::clock::advance_clock;

/// Schedule label for one pass of the spawner's event loop.
/// Run manually each tick via `app.world_mut().run_schedule(SpawnerTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpawnerTick;

/// Ordered phases within each tick.
///
/// Phases run in declaration order:
/// PreUpdate < Timers < Requests < Completions < Publish < Last.
///
/// - `Timers`: the spawn timer decides whether it fires this tick.
/// - `Requests`: spawn calls and inbound catch requests are issued.
/// - `Completions`: resolved service calls are handled and the registry mutated.
/// - `Publish`: snapshots produced this tick are handed to the feed sinks.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpawnerPhase {
    PreUpdate,
    Timers,
    Requests,
    Completions,
    Publish,
    Last,
}

/// Build the `SpawnerTick` schedule with phase ordering.
///
/// Always single-threaded: systems stand in for the node's callbacks and
/// must never overlap.
pub fn configure_spawner_schedule() -> Schedule {
    let mut schedule = Schedule::new(SpawnerTick);
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.configure_sets(
        (
            SpawnerPhase::PreUpdate,
            SpawnerPhase::Timers,
            SpawnerPhase::Requests,
            SpawnerPhase::Completions,
            SpawnerPhase::Publish,
            SpawnerPhase::Last,
        )
            .chain(),
    );
    schedule.add_systems(advance_clock.in_set(SpawnerPhase::Last));
    schedule
}
