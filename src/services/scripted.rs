use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::error::ServiceError;

use super::ServiceClient;
use super::call::{CallCompleter, PendingCall, pending_call};

type Responder<Req, Resp> = Box<dyn Fn(&Req) -> Result<Resp, ServiceError> + Send + Sync>;

struct ScriptedState<Req, Resp> {
    requests: Vec<Req>,
    outstanding: VecDeque<CallCompleter<Resp>>,
    responder: Option<Responder<Req, Resp>>,
    unavailable_for: u32,
    availability_checks: u32,
}

/// In-memory service whose answers are driven by the caller.
///
/// Every request is recorded. Calls stay outstanding until completed with
/// [`complete_next`](Self::complete_next) and friends (oldest first) or
/// [`complete_newest`](Self::complete_newest), unless
/// a responder was installed with [`respond_with`](Self::respond_with).
/// Availability checks never sleep. Clones share state, so a test can keep
/// one handle while the app owns another.
pub struct ScriptedService<Req, Resp> {
    name: String,
    state: Arc<Mutex<ScriptedState<Req, Resp>>>,
}

impl<Req, Resp> Clone for ScriptedService<Req, Resp> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<Req, Resp> ScriptedService<Req, Resp> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Arc::new(Mutex::new(ScriptedState {
                requests: Vec::new(),
                outstanding: VecDeque::new(),
                responder: None,
                unavailable_for: 0,
                availability_checks: 0,
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, ScriptedState<Req, Resp>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Answer every future call immediately with `responder`.
    pub fn respond_with(
        &self,
        responder: impl Fn(&Req) -> Result<Resp, ServiceError> + Send + Sync + 'static,
    ) {
        self.state().responder = Some(Box::new(responder));
    }

    /// Fail the next `checks` availability checks.
    pub fn set_unavailable_for(&self, checks: u32) {
        self.state().unavailable_for = checks;
    }

    pub fn availability_checks(&self) -> u32 {
        self.state().availability_checks
    }

    /// Number of calls issued and not yet completed.
    pub fn outstanding(&self) -> usize {
        self.state().outstanding.len()
    }

    pub fn request_count(&self) -> usize {
        self.state().requests.len()
    }

    /// Complete the oldest outstanding call. Returns false if none is outstanding.
    pub fn complete_next(&self, result: Result<Resp, ServiceError>) -> bool {
        let completer = self.state().outstanding.pop_front();
        match completer {
            Some(completer) => {
                completer.complete(result);
                true
            }
            None => false,
        }
    }

    /// Complete the most recently issued outstanding call.
    pub fn complete_newest(&self, result: Result<Resp, ServiceError>) -> bool {
        let completer = self.state().outstanding.pop_back();
        match completer {
            Some(completer) => {
                completer.complete(result);
                true
            }
            None => false,
        }
    }

    pub fn succeed_newest(&self, response: Resp) -> bool {
        self.complete_newest(Ok(response))
    }

    pub fn succeed_next(&self, response: Resp) -> bool {
        self.complete_next(Ok(response))
    }

    pub fn fail_next(&self, reason: impl Into<String>) -> bool {
        self.complete_next(Err(ServiceError::Failed(reason.into())))
    }

    /// Drop the oldest outstanding call without answering it.
    pub fn drop_next(&self) -> bool {
        self.state().outstanding.pop_front().is_some()
    }
}

impl<Req: Clone, Resp> ScriptedService<Req, Resp> {
    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<Req> {
        self.state().requests.clone()
    }
}

impl<Req, Resp> ServiceClient<Req, Resp> for ScriptedService<Req, Resp>
where
    Req: Send,
    Resp: Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn wait_for_service(&self, _timeout: Duration) -> bool {
        let mut state = self.state();
        state.availability_checks += 1;
        if state.unavailable_for > 0 {
            state.unavailable_for -= 1;
            return false;
        }
        true
    }

    fn call_async(&self, request: Req) -> PendingCall<Resp> {
        let mut state = self.state();
        let immediate = state.responder.as_ref().map(|respond| respond(&request));
        state.requests.push(request);
        if let Some(result) = immediate {
            return PendingCall::resolved(result);
        }
        let (completer, call) = pending_call();
        state.outstanding.push_back(completer);
        call
    }
}
