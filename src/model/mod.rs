pub mod srv;
pub mod turtle;

pub use srv::{
    CatchTurtleRequest, CatchTurtleResponse, KillRequest, KillResponse, SpawnRequest,
    SpawnResponse,
};
pub use turtle::{AliveTurtles, Turtle};
