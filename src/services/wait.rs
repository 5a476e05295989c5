use std::time::Duration;

use crate::error::ServiceError;

use super::ServiceClient;

/// How long to wait for a service before issuing a call.
///
/// Each failed availability check logs a warning. With `max_attempts` unset
/// the wait never gives up, and because it runs inside a system it stalls
/// the whole event loop until the service appears. That mirrors the
/// single-threaded node this replaces; bound it to keep the loop live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceWait {
    /// Timeout handed to each availability check.
    pub interval: Duration,
    /// Give up after this many failed checks.
    pub max_attempts: Option<u32>,
}

impl Default for ServiceWait {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: None,
        }
    }
}

impl ServiceWait {
    pub fn bounded(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts: Some(max_attempts),
        }
    }
}

/// Block until `client` reports itself available, per `policy`.
pub fn wait_for<Req, Resp, C>(client: &C, policy: &ServiceWait) -> Result<(), ServiceError>
where
    C: ServiceClient<Req, Resp> + ?Sized,
{
    let mut failed = 0u32;
    while !client.wait_for_service(policy.interval) {
        failed += 1;
        tracing::warn!("Waiting for {} service...", client.name());
        if policy.max_attempts.is_some_and(|max| failed >= max) {
            return Err(ServiceError::Unavailable(client.name().to_string()));
        }
    }
    Ok(())
}
