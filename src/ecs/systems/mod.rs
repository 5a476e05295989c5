//! The spawner's callbacks, one module per concern.
//!
//! ```text
//! Timers:       tick_spawn_timer
//! Requests:     spawn_new_turtle, serve_catch_requests
//! Completions:  resolve_spawn_calls → resolve_kill_calls
//! Publish:      publish_alive_turtles
//! ```

pub mod catch;
pub mod kill;
pub mod publish;
pub mod spawn;
pub mod timer;
