use bevy_ecs::resource::Resource;
use rand::rngs::SmallRng;

use crate::feed::FeedSink;
use crate::id::{IdGenerator, NameGenerator};
use crate::services::{KillService, SpawnService};

/// Spawn counter and name derivation. Lives for the whole process.
#[derive(Resource, Debug)]
pub struct TurtleNames(pub NameGenerator);

/// RNG used to sample spawn poses.
#[derive(Resource)]
pub struct SpawnerRng(pub SmallRng);

/// Issue order of outstanding service calls. Completions of one call kind
/// that land in the same tick are handled in the order those calls were made;
/// spawn completions are always handled before kill completions.
#[derive(Resource, Debug, Default)]
pub struct CallSequence(pub IdGenerator);

#[derive(Resource)]
pub struct SpawnClient(pub Box<SpawnService>);

#[derive(Resource)]
pub struct KillClient(pub Box<KillService>);

/// Everything subscribed to the alive-turtles feed.
#[derive(Resource, Default)]
pub struct FeedSinks(pub Vec<Box<dyn FeedSink>>);
