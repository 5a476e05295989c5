use bevy_ecs::component::Component;

use crate::model::{CatchTurtleResponse, KillResponse, SpawnRequest, SpawnResponse};
use crate::services::{CallCompleter, PendingCall};

/// An outstanding spawn call. Despawned once its completion is handled.
#[derive(Component)]
pub struct PendingSpawn {
    /// Position in the overall call issue order.
    pub seq: u64,
    /// Kept so the registered turtle uses the requested pose.
    pub request: SpawnRequest,
    pub call: PendingCall<SpawnResponse>,
}

/// An outstanding kill call issued on behalf of a catch request.
#[derive(Component)]
pub struct PendingKill {
    pub seq: u64,
    pub target: String,
    pub call: PendingCall<KillResponse>,
    /// Set when the catch request is answered only after removal.
    pub responder: Option<CallCompleter<CatchTurtleResponse>>,
}
