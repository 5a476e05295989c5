//! A turtle spawner: periodically asks a simulator to spawn turtles at random
//! poses, tracks which are alive, publishes that list on every change, and
//! kills turtles on request through its `catch_turtle` service.
//!
//! The event loop is a headless single-threaded Bevy app (see [`ecs`]);
//! [`node::SpawnerNode`] drives it in real time.

pub mod config;
pub mod ecs;
pub mod error;
pub mod feed;
pub mod id;
pub mod model;
pub mod node;
pub mod services;

pub use config::{CatchAck, SpawnerConfig};
pub use error::{ConfigError, ServiceError};
pub use id::{IdGenerator, NameGenerator};
pub use model::{
    AliveTurtles, CatchTurtleRequest, CatchTurtleResponse, KillRequest, KillResponse,
    SpawnRequest, SpawnResponse, Turtle,
};
pub use node::SpawnerNode;
