use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::error::ServiceError;

type CallResult<T> = Result<T, ServiceError>;

/// Create a linked completer / pending-call pair.
pub fn pending_call<T>() -> (CallCompleter<T>, PendingCall<T>) {
    let (tx, rx) = mpsc::channel();
    (
        CallCompleter { tx },
        PendingCall {
            rx: Mutex::new(rx),
            taken: false,
        },
    )
}

/// The caller's half of an outstanding service call.
///
/// Yields its result exactly once. A completer dropped without answering
/// resolves the call as [`ServiceError::Dropped`].
pub struct PendingCall<T> {
    // Mutex only to make the receiver `Sync` for ECS storage; always
    // accessed through `get_mut`.
    rx: Mutex<Receiver<CallResult<T>>>,
    taken: bool,
}

impl<T> PendingCall<T> {
    /// A call that has already resolved.
    pub fn resolved(result: CallResult<T>) -> Self {
        let (completer, call) = pending_call();
        completer.complete(result);
        call
    }

    /// Non-blocking: the result if it has arrived and was not taken yet.
    pub fn try_take(&mut self) -> Option<CallResult<T>> {
        if self.taken {
            return None;
        }
        let rx = self.rx.get_mut().unwrap_or_else(PoisonError::into_inner);
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(ServiceError::Dropped),
        };
        self.taken = true;
        Some(result)
    }

    pub fn is_taken(&self) -> bool {
        self.taken
    }
}

/// The service's half of an outstanding call.
pub struct CallCompleter<T> {
    tx: Sender<CallResult<T>>,
}

impl<T> CallCompleter<T> {
    /// Deliver the result. Ignored if the caller has gone away.
    pub fn complete(self, result: CallResult<T>) {
        let _ = self.tx.send(result);
    }

    pub fn succeed(self, response: T) {
        self.complete(Ok(response));
    }

    pub fn fail(self, reason: impl Into<String>) {
        self.complete(Err(ServiceError::Failed(reason.into())));
    }
}
