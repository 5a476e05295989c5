//! Request/response payloads of the services the spawner talks to.
//!
//! `Spawn` and `Kill` are consumed from the simulator; `CatchTurtle` is
//! served by the spawner itself.

use serde::{Deserialize, Serialize};

use super::turtle::Turtle;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpawnRequest {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub theta: f64,
}

impl SpawnRequest {
    /// The turtle this request describes, under the name the service granted.
    /// Coordinates always come from the request, never from the response.
    pub fn into_turtle(self, granted_name: String) -> Turtle {
        Turtle {
            name: granted_name,
            x: self.x,
            y: self.y,
            theta: self.theta,
        }
    }
}

/// An empty `name` means the simulator refused the spawn.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpawnResponse {
    pub name: String,
}

impl SpawnResponse {
    pub fn accepted(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn rejected() -> Self {
        Self::default()
    }

    pub fn is_rejected(&self) -> bool {
        self.name.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KillRequest {
    pub name: String,
}

/// Carries no fields; its arrival is the success signal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct KillResponse {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatchTurtleRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatchTurtleResponse {
    pub success: bool,
}
