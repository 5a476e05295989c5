use std::time::Duration;

use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Loop clock: total elapsed time and the length of the tick in progress.
///
/// The runner sets `delta` before each tick; `advance_clock` folds it into
/// `elapsed` at the end of the tick (in `SpawnerPhase::Last`), so systems
/// see the time at which the tick started.
#[derive(Resource, Debug, Default)]
pub struct SpawnerClock {
    pub elapsed: Duration,
    pub delta: Duration,
    pub tick_count: u64,
}

impl SpawnerClock {
    pub fn begin_tick(&mut self, delta: Duration) {
        self.delta = delta;
    }

    pub fn advance(&mut self) {
        self.elapsed += self.delta;
        self.tick_count += 1;
    }
}

pub fn advance_clock(mut clock: ResMut<SpawnerClock>) {
    clock.advance();
}

/// Periodic timer driving spawn attempts.
///
/// Fires at most once per tick. When a tick overshoots by more than one
/// period the missed firings are dropped and the remainder is kept, so the
/// timer stays on its original phase.
#[derive(Resource, Debug)]
pub struct SpawnTimer {
    period: Duration,
    since_fire: Duration,
    fired: u64,
}

impl SpawnTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            since_fire: Duration::ZERO,
            fired: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Accumulate `delta`; returns true if the timer fires.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.since_fire = self.since_fire.saturating_add(delta);
        if self.since_fire < self.period {
            return false;
        }
        let period = self.period.as_nanos();
        let remainder = if period == 0 {
            0
        } else {
            self.since_fire.as_nanos() % period
        };
        // remainder < period, so the whole seconds fit in a u64
        self.since_fire = Duration::new(
            (remainder / NANOS_PER_SEC) as u64,
            (remainder % NANOS_PER_SEC) as u32,
        );
        self.fired += 1;
        true
    }
}
