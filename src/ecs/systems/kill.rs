use bevy_ecs::entity::Entity;
use bevy_ecs::message::MessageWriter;
use bevy_ecs::system::{Commands, Query, ResMut};

use crate::ecs::events::AliveTurtlesPublished;
use crate::ecs::pending::PendingKill;
use crate::ecs::resources::AliveRegistry;
use crate::model::CatchTurtleResponse;

/// Handle resolved kill calls, oldest call first.
///
/// A successful kill removes the first registry entry with the target name
/// and publishes a snapshot; if no such entry exists nothing changes. A
/// failed kill is logged and leaves the registry alone. Deferred catch
/// requests are answered with the kill's outcome.
pub fn resolve_kill_calls(
    mut commands: Commands,
    mut pending: Query<(Entity, &mut PendingKill)>,
    mut registry: ResMut<AliveRegistry>,
    mut published: MessageWriter<AliveTurtlesPublished>,
) {
    let mut ready = Vec::new();
    for (entity, mut kill) in &mut pending {
        if let Some(result) = kill.call.try_take() {
            commands.entity(entity).despawn();
            let target = std::mem::take(&mut kill.target);
            ready.push((kill.seq, target, kill.responder.take(), result));
        }
    }
    ready.sort_by_key(|(seq, ..)| *seq);

    for (_, target, responder, result) in ready {
        let success = result.is_ok();
        match result {
            Ok(_) => match registry.remove_first(&target) {
                Some(_) => {
                    tracing::info!("Removed turtle {target}");
                    published.write(AliveTurtlesPublished(registry.snapshot()));
                }
                None => tracing::debug!("Killed turtle {target} was not registered"),
            },
            Err(err) => tracing::error!("Kill service call failed for {target}: {err}"),
        }
        if let Some(responder) = responder {
            responder.succeed(CatchTurtleResponse { success });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::CatchAck;
    use crate::ecs::test_helpers::{ScriptedApp, tick, tick_seconds};
    use crate::model::{KillResponse, SpawnResponse};

    /// Spawn and register `count` turtles named turtle1..turtleN.
    fn with_turtles(harness: &mut ScriptedApp, count: u32) {
        tick_seconds(&mut harness.app, count);
        for i in 1..=count {
            harness
                .spawn
                .succeed_next(SpawnResponse::accepted(format!("turtle{i}")));
        }
        tick(&mut harness.app, Duration::ZERO);
    }

    #[test]
    fn successful_kill_removes_turtle_and_publishes() {
        let mut harness = ScriptedApp::new();
        with_turtles(&mut harness, 3);
        let published_before = harness.feed.len();

        let _response = harness.catch.catch("turtle2");
        tick(&mut harness.app, Duration::ZERO);
        harness.kill.succeed_next(KillResponse {});
        tick(&mut harness.app, Duration::ZERO);

        assert_eq!(
            harness.registry().snapshot().names(),
            vec!["turtle1", "turtle3"]
        );
        assert_eq!(harness.feed.len(), published_before + 1);
        assert_eq!(harness.feed.last().unwrap().names(), vec!["turtle1", "turtle3"]);
    }

    #[test]
    fn kill_of_unregistered_name_publishes_nothing() {
        let mut harness = ScriptedApp::new();
        with_turtles(&mut harness, 2);
        let before = harness.registry().snapshot();
        let published_before = harness.feed.len();

        let _response = harness.catch.catch("turtle9");
        tick(&mut harness.app, Duration::ZERO);
        harness.kill.succeed_next(KillResponse {});
        tick(&mut harness.app, Duration::ZERO);

        assert_eq!(harness.registry().snapshot(), before);
        assert_eq!(harness.feed.len(), published_before);
    }

    #[test]
    fn failed_kill_keeps_turtle() {
        let mut harness = ScriptedApp::new();
        with_turtles(&mut harness, 1);

        let _response = harness.catch.catch("turtle1");
        tick(&mut harness.app, Duration::ZERO);
        harness.kill.fail_next("simulator refused");
        tick(&mut harness.app, Duration::ZERO);

        assert_eq!(harness.registry().snapshot().names(), vec!["turtle1"]);
        assert_eq!(harness.feed.len(), 1);
    }

    #[test]
    fn dropped_kill_call_keeps_turtle() {
        let mut harness = ScriptedApp::new();
        with_turtles(&mut harness, 1);
        let _response = harness.catch.catch("turtle1");
        tick(&mut harness.app, Duration::ZERO);
        harness.kill.drop_next();
        tick(&mut harness.app, Duration::ZERO);
        assert_eq!(harness.registry().len(), 1);
    }

    #[test]
    fn spawn_completions_handled_before_kills_in_same_tick() {
        let mut harness = ScriptedApp::new();
        with_turtles(&mut harness, 1);

        let _response = harness.catch.catch("turtle1");
        tick(&mut harness.app, Duration::ZERO);
        tick_seconds(&mut harness.app, 1);
        harness.kill.succeed_next(KillResponse {});
        harness.spawn.succeed_next(SpawnResponse::accepted("turtle2"));
        tick(&mut harness.app, Duration::ZERO);

        let names: Vec<Vec<String>> = harness
            .feed
            .snapshots()
            .iter()
            .map(|s| s.names().into_iter().map(String::from).collect())
            .collect();
        assert_eq!(
            names,
            vec![
                vec!["turtle1".to_string()],
                vec!["turtle1".to_string(), "turtle2".to_string()],
                vec!["turtle2".to_string()],
            ]
        );
    }

    #[test]
    fn deferred_ack_reports_success_after_removal() {
        let mut harness = ScriptedApp::with_config(|config| {
            config.catch_ack = CatchAck::AfterRemoval;
        });
        with_turtles(&mut harness, 1);

        let mut response = harness.catch.catch("turtle1");
        tick(&mut harness.app, Duration::ZERO);
        assert!(response.try_take().is_none());

        harness.kill.succeed_next(KillResponse {});
        tick(&mut harness.app, Duration::ZERO);
        assert_eq!(
            response.try_take(),
            Some(Ok(CatchTurtleResponse { success: true }))
        );
        assert!(harness.registry().is_empty());
    }
}
