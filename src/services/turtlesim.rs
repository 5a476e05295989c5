use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::error::ServiceError;
use crate::model::{KillRequest, KillResponse, SpawnRequest, SpawnResponse};

use super::ServiceClient;
use super::call::PendingCall;

/// In-process stand-in for the turtle simulator.
///
/// Tracks which turtle names exist and answers spawn and kill calls
/// immediately. A spawn is refused (empty name) when the name is empty or
/// already taken; a kill of an unknown name fails.
#[derive(Clone, Default)]
pub struct LocalTurtlesim {
    turtles: Arc<Mutex<BTreeSet<String>>>,
}

impl LocalTurtlesim {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the simulator with a turtle the spawner did not create.
    pub fn with_turtle(self, name: impl Into<String>) -> Self {
        self.turtles().insert(name.into());
        self
    }

    fn turtles(&self) -> MutexGuard<'_, BTreeSet<String>> {
        self.turtles.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.turtles().contains(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.turtles().iter().cloned().collect()
    }

    pub fn spawn_client(&self) -> TurtlesimSpawn {
        TurtlesimSpawn { sim: self.clone() }
    }

    pub fn kill_client(&self) -> TurtlesimKill {
        TurtlesimKill { sim: self.clone() }
    }
}

pub struct TurtlesimSpawn {
    sim: LocalTurtlesim,
}

impl ServiceClient<SpawnRequest, SpawnResponse> for TurtlesimSpawn {
    fn name(&self) -> &str {
        "spawn"
    }

    fn wait_for_service(&self, _timeout: Duration) -> bool {
        true
    }

    fn call_async(&self, request: SpawnRequest) -> PendingCall<SpawnResponse> {
        let mut turtles = self.sim.turtles();
        let response = if request.name.is_empty() || !turtles.insert(request.name.clone()) {
            SpawnResponse::rejected()
        } else {
            SpawnResponse::accepted(request.name)
        };
        PendingCall::resolved(Ok(response))
    }
}

pub struct TurtlesimKill {
    sim: LocalTurtlesim,
}

impl ServiceClient<KillRequest, KillResponse> for TurtlesimKill {
    fn name(&self) -> &str {
        "kill"
    }

    fn wait_for_service(&self, _timeout: Duration) -> bool {
        true
    }

    fn call_async(&self, request: KillRequest) -> PendingCall<KillResponse> {
        let removed = self.sim.turtles().remove(&request.name);
        if removed {
            PendingCall::resolved(Ok(KillResponse {}))
        } else {
            PendingCall::resolved(Err(ServiceError::Failed(format!(
                "no turtle named `{}`",
                request.name
            ))))
        }
    }
}
