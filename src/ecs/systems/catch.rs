//! The spawner's `catch_turtle` service.
//!
//! Each inbound request becomes a kill call for the named turtle. Under
//! `CatchAck::Immediate` the caller is told `success: true` right away,
//! whatever later happens to the kill; under `CatchAck::AfterRemoval` the
//! answer is deferred to `resolve_kill_calls`.

use bevy_ecs::system::{Commands, Res, ResMut};

use crate::config::{CatchAck, SpawnerConfig};
use crate::ecs::pending::PendingKill;
use crate::ecs::resources::{CallSequence, CatchInbox, KillClient};
use crate::model::{CatchTurtleResponse, KillRequest};
use crate::services::wait_for;

pub fn serve_catch_requests(
    mut inbox: ResMut<CatchInbox>,
    config: Res<SpawnerConfig>,
    kill: Res<KillClient>,
    mut sequence: ResMut<CallSequence>,
    mut commands: Commands,
) {
    for call in inbox.drain() {
        let target = call.request.name;
        let responder = call.responder;

        if let Err(err) = wait_for(kill.0.as_ref(), &config.service_wait) {
            tracing::error!("Dropping kill of {target}: {err}");
            responder.succeed(CatchTurtleResponse {
                success: config.catch_ack == CatchAck::Immediate,
            });
            continue;
        }

        let kill_call = kill.0.call_async(KillRequest {
            name: target.clone(),
        });
        let responder = match config.catch_ack {
            CatchAck::Immediate => {
                responder.succeed(CatchTurtleResponse { success: true });
                None
            }
            CatchAck::AfterRemoval => Some(responder),
        };

        commands.spawn(PendingKill {
            seq: sequence.0.next_id(),
            target,
            call: kill_call,
            responder,
        });
    }
}
