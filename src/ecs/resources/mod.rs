pub mod inbox;
pub mod registry;
pub mod spawner_resources;

pub use inbox::{CatchCall, CatchInbox, CatchTurtleClient};
pub use registry::AliveRegistry;
pub use spawner_resources::{CallSequence, FeedSinks, KillClient, SpawnClient, SpawnerRng, TurtleNames};
