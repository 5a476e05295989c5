#![allow(dead_code)]

use std::time::Duration;

use turtle_spawner::feed::RecordingFeed;
use turtle_spawner::services::ScriptedService;
use turtle_spawner::{
    KillRequest, KillResponse, SpawnRequest, SpawnResponse, SpawnerConfig, SpawnerNode,
};

pub struct Harness {
    pub node: SpawnerNode,
    pub spawn: ScriptedService<SpawnRequest, SpawnResponse>,
    pub kill: ScriptedService<KillRequest, KillResponse>,
    pub feed: RecordingFeed,
}

pub fn harness_with(config: SpawnerConfig) -> Harness {
    let spawn = ScriptedService::new("spawn");
    let kill = ScriptedService::new("kill");
    let mut node = SpawnerNode::new(config, spawn.clone(), kill.clone()).unwrap();
    let feed = RecordingFeed::new();
    node.add_feed_sink(feed.clone());
    Harness {
        node,
        spawn,
        kill,
        feed,
    }
}

pub fn harness() -> Harness {
    harness_with(SpawnerConfig {
        seed: Some(2024),
        ..SpawnerConfig::default()
    })
}

impl Harness {
    /// Let the 1 Hz spawn timer fire once.
    pub fn fire_timer(&mut self) {
        self.node.spin_once(Duration::from_secs(1));
    }

    /// Run a tick without advancing the timer, so completions get handled.
    pub fn settle(&mut self) {
        self.node.spin_once(Duration::ZERO);
    }

    pub fn alive_names(&self) -> Vec<String> {
        self.node
            .alive_turtles()
            .turtles
            .into_iter()
            .map(|t| t.name)
            .collect()
    }
}
