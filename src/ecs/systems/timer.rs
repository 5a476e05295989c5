use bevy_ecs::message::MessageWriter;
use bevy_ecs::system::{Res, ResMut};

use crate::ecs::clock::{SpawnTimer, SpawnerClock};
use crate::ecs::events::SpawnTimerFired;

/// Advance the spawn timer by this tick's delta and signal when it fires.
pub fn tick_spawn_timer(
    clock: Res<SpawnerClock>,
    mut timer: ResMut<SpawnTimer>,
    mut fired: MessageWriter<SpawnTimerFired>,
) {
    if timer.advance(clock.delta) {
        fired.write(SpawnTimerFired {
            tick: clock.tick_count,
        });
    }
}
