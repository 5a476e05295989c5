use std::thread;
use std::time::{Duration, Instant};

use bevy_app::App;

use crate::config::SpawnerConfig;
use crate::ecs::{
    AliveRegistry, CatchInbox, CatchTurtleClient, FeedSinks, SpawnerClock, SpawnerTick,
    TurtleNames, build_spawner_app,
};
use crate::error::ConfigError;
use crate::feed::FeedSink;
use crate::model::{AliveTurtles, KillRequest, KillResponse, SpawnRequest, SpawnResponse};
use crate::services::ServiceClient;

/// A running spawner: the app plus the loop that drives it.
pub struct SpawnerNode {
    app: App,
}

impl SpawnerNode {
    pub fn new(
        config: SpawnerConfig,
        spawn: impl ServiceClient<SpawnRequest, SpawnResponse> + 'static,
        kill: impl ServiceClient<KillRequest, KillResponse> + 'static,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            app: build_spawner_app(config, spawn, kill)?,
        })
    }

    /// Handle for sending catch requests to this node.
    pub fn catch_client(&self) -> CatchTurtleClient {
        self.app.world().resource::<CatchInbox>().client()
    }

    /// Subscribe a sink to the alive-turtles feed.
    pub fn add_feed_sink(&mut self, sink: impl FeedSink + 'static) {
        self.app
            .world_mut()
            .resource_mut::<FeedSinks>()
            .0
            .push(Box::new(sink));
    }

    /// Run one tick, treating `delta` as the time since the previous one.
    pub fn spin_once(&mut self, delta: Duration) {
        self.app
            .world_mut()
            .resource_mut::<SpawnerClock>()
            .begin_tick(delta);
        self.app.world_mut().run_schedule(SpawnerTick);
    }

    /// Tick in real time every `step` until `duration` has passed.
    pub fn spin_for(&mut self, duration: Duration, step: Duration) {
        let start = Instant::now();
        self.spin_while(step, |_| start.elapsed() < duration);
    }

    /// Tick in real time every `step` for as long as `keep_going` holds.
    pub fn spin_while(&mut self, step: Duration, mut keep_going: impl FnMut(&Self) -> bool) {
        let mut last = Instant::now();
        while keep_going(self) {
            thread::sleep(step);
            let now = Instant::now();
            self.spin_once(now - last);
            last = now;
        }
    }

    pub fn alive_turtles(&self) -> AliveTurtles {
        self.app.world().resource::<AliveRegistry>().snapshot()
    }

    /// How many turtle names have been handed out, including failed spawns.
    pub fn names_issued(&self) -> u64 {
        self.app.world().resource::<TurtleNames>().0.issued()
    }

    pub fn elapsed(&self) -> Duration {
        self.app.world().resource::<SpawnerClock>().elapsed
    }

    pub fn app(&self) -> &App {
        &self.app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::RecordingFeed;
    use crate::services::LocalTurtlesim;

    fn local_node() -> (SpawnerNode, LocalTurtlesim) {
        let sim = LocalTurtlesim::new();
        let config = SpawnerConfig {
            seed: Some(1),
            ..SpawnerConfig::default()
        };
        let node = SpawnerNode::new(config, sim.spawn_client(), sim.kill_client()).unwrap();
        (node, sim)
    }

    #[test]
    fn spin_once_advances_clock() {
        let (mut node, _sim) = local_node();
        node.spin_once(Duration::from_millis(400));
        node.spin_once(Duration::from_millis(400));
        assert_eq!(node.elapsed(), Duration::from_millis(800));
        assert_eq!(node.names_issued(), 0);
    }

    #[test]
    fn spawn_and_catch_round_trip() {
        let (mut node, sim) = local_node();
        let feed = RecordingFeed::new();
        node.add_feed_sink(feed.clone());

        node.spin_once(Duration::from_secs(1));
        node.spin_once(Duration::ZERO);
        assert_eq!(node.alive_turtles().names(), vec!["turtle1"]);

        let mut response = node.catch_client().catch("turtle1");
        node.spin_once(Duration::ZERO);
        node.spin_once(Duration::ZERO);
        assert!(response.try_take().unwrap().unwrap().success);
        assert!(node.alive_turtles().is_empty());
        assert!(sim.names().is_empty());
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn spin_while_stops_when_told() {
        let (mut node, _sim) = local_node();
        let mut remaining = 3;
        node.spin_while(Duration::from_millis(1), |_| {
            remaining -= 1;
            remaining >= 0
        });
        assert_eq!(
            node.app().world().resource::<SpawnerClock>().tick_count,
            3
        );
    }
}
