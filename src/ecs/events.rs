use bevy_ecs::message::Message;

use crate::model::AliveTurtles;

/// The spawn timer fired during this tick.
#[derive(Message, Clone, Debug)]
pub struct SpawnTimerFired {
    pub tick: u64,
}

/// One registry mutation's worth of the alive-turtles feed.
///
/// Written by the completion handlers right after each append or removal,
/// carrying a copy of the registry as it stood after that single change.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct AliveTurtlesPublished(pub AliveTurtles);
