use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use bevy_ecs::resource::Resource;

use crate::model::{CatchTurtleRequest, CatchTurtleResponse};
use crate::services::{CallCompleter, PendingCall, ServiceClient, pending_call};

/// An inbound catch request together with the means to answer it.
pub struct CatchCall {
    pub request: CatchTurtleRequest,
    pub responder: CallCompleter<CatchTurtleResponse>,
}

/// Queue of catch requests waiting for the next tick.
#[derive(Resource)]
pub struct CatchInbox {
    tx: Sender<CatchCall>,
    // Mutex only to make the receiver `Sync`; drained through `get_mut`.
    rx: Mutex<Receiver<CatchCall>>,
}

impl Default for CatchInbox {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx: Mutex::new(rx),
        }
    }
}

impl CatchInbox {
    pub fn client(&self) -> CatchTurtleClient {
        CatchTurtleClient {
            tx: self.tx.clone(),
        }
    }

    /// Take every request received so far, in arrival order.
    pub fn drain(&mut self) -> Vec<CatchCall> {
        self.rx
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .try_iter()
            .collect()
    }
}

/// Caller-side handle of the spawner's `catch_turtle` service.
///
/// Cheap to clone and usable from any thread. Requests are picked up on the
/// spawner's next tick.
#[derive(Clone)]
pub struct CatchTurtleClient {
    tx: Sender<CatchCall>,
}

impl CatchTurtleClient {
    pub fn catch(&self, name: impl Into<String>) -> PendingCall<CatchTurtleResponse> {
        self.call_async(CatchTurtleRequest { name: name.into() })
    }
}

impl ServiceClient<CatchTurtleRequest, CatchTurtleResponse> for CatchTurtleClient {
    fn name(&self) -> &str {
        "catch_turtle"
    }

    fn wait_for_service(&self, _timeout: Duration) -> bool {
        true
    }

    fn call_async(&self, request: CatchTurtleRequest) -> PendingCall<CatchTurtleResponse> {
        let (responder, call) = pending_call();
        // If the spawner is gone the responder is dropped with the unsent
        // call, and the caller sees `ServiceError::Dropped`.
        let _ = self.tx.send(CatchCall { request, responder });
        call
    }
}
