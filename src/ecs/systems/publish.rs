use bevy_ecs::message::MessageReader;
use bevy_ecs::system::ResMut;

use crate::ecs::events::AliveTurtlesPublished;
use crate::ecs::resources::FeedSinks;

/// Hand every snapshot published this tick to every feed sink, in order.
pub fn publish_alive_turtles(
    mut published: MessageReader<AliveTurtlesPublished>,
    mut sinks: ResMut<FeedSinks>,
) {
    for AliveTurtlesPublished(snapshot) in published.read() {
        for sink in sinks.0.iter_mut() {
            if let Err(err) = sink.publish(snapshot) {
                tracing::error!("Failed to publish alive turtles: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::time::Duration;

    use super::*;
    use crate::ecs::test_helpers::{ScriptedApp, tick, tick_seconds};
    use crate::feed::{FeedSink, RecordingFeed};
    use crate::model::{AliveTurtles, SpawnResponse};

    struct BrokenSink;

    impl FeedSink for BrokenSink {
        fn publish(&mut self, _snapshot: &AliveTurtles) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }
    }

    #[test]
    fn no_mutation_no_broadcast() {
        let mut harness = ScriptedApp::new();
        tick_seconds(&mut harness.app, 5);
        assert!(harness.feed.is_empty());
    }

    #[test]
    fn failing_sink_does_not_starve_others() {
        let mut harness = ScriptedApp::new();
        let second = RecordingFeed::new();
        {
            let mut sinks = harness.app.world_mut().resource_mut::<FeedSinks>();
            sinks.0.insert(0, Box::new(BrokenSink));
            sinks.0.push(Box::new(second.clone()));
        }

        tick_seconds(&mut harness.app, 1);
        harness.spawn.succeed_next(SpawnResponse::accepted("turtle1"));
        tick(&mut harness.app, Duration::ZERO);

        assert_eq!(harness.feed.len(), 1);
        assert_eq!(second.len(), 1);
    }
}
