pub mod admin;
pub mod assets;
pub mod catalog;
pub mod collaborators;
pub mod events;
pub mod licenses;
pub mod revenue;
pub mod versions;

use trackvault_core::{CallContext, Principal, Registry, RegistryResult};
use trackvault_events::RegistryEvent;

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Run one mutating registry operation under the sequencer lock.
///
/// The closure receives the registry and the freshly drawn call context. It
/// may read records back after mutating so the response reflects the exact
/// state the call produced. On success `announce` builds the event for the
/// call, which is published before the lock is released so bus order always
/// matches sequence order.
pub(crate) async fn execute<T>(
    state: &AppState,
    caller: Principal,
    op: impl FnOnce(&mut Registry, &CallContext) -> RegistryResult<T>,
    announce: impl FnOnce(&T, &CallContext) -> RegistryEvent,
) -> AppResult<(T, CallContext)> {
    let mut sequencer = state.sequencer.lock().await;
    let ctx = sequencer.next_context(caller);

    match op(sequencer.registry_mut(), &ctx) {
        Ok(value) => {
            state.event_bus.publish(announce(&value, &ctx));
            Ok((value, ctx))
        }
        Err(err) => {
            tracing::debug!(
                caller = %ctx.caller,
                sequence = ctx.sequence,
                code = err.code(),
                error = %err,
                "Registry call rejected",
            );
            Err(err.into())
        }
    }
}

/// Run a read-only registry query under the sequencer lock.
pub(crate) async fn read<T>(
    state: &AppState,
    op: impl FnOnce(&Registry) -> RegistryResult<T>,
) -> AppResult<T> {
    let sequencer = state.sequencer.lock().await;
    Ok(op(sequencer.registry())?)
}

/// Start an event for a call that just succeeded.
pub(crate) fn event(ctx: &CallContext, event_type: &str) -> RegistryEvent {
    RegistryEvent::new(event_type, ctx.caller.clone(), ctx.sequence)
}
