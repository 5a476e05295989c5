//! Clients for the external services the spawner depends on.
//!
//! Calls are asynchronous: `call_async` returns a [`PendingCall`] that the
//! event loop polls once per tick. Availability is checked separately with
//! [`wait_for`] before each call.

pub mod call;
pub mod scripted;
pub mod turtlesim;
pub mod wait;

use std::time::Duration;

pub use call::{CallCompleter, PendingCall, pending_call};
pub use scripted::ScriptedService;
pub use turtlesim::LocalTurtlesim;
pub use wait::{ServiceWait, wait_for};

use crate::model::{KillRequest, KillResponse, SpawnRequest, SpawnResponse};

/// Client side of a request/response service.
pub trait ServiceClient<Req, Resp>: Send + Sync {
    /// Service name, used in log lines.
    fn name(&self) -> &str;

    /// Block for up to `timeout` waiting for the service to become reachable.
    fn wait_for_service(&self, timeout: Duration) -> bool;

    /// Issue a request without waiting for the answer.
    fn call_async(&self, request: Req) -> PendingCall<Resp>;
}

/// Client of the simulator's spawn service.
pub type SpawnService = dyn ServiceClient<SpawnRequest, SpawnResponse>;

/// Client of the simulator's kill service.
pub type KillService = dyn ServiceClient<KillRequest, KillResponse>;
