//! The execution environment the registry runs inside.
//!
//! [`Sequencer`] owns the [`Registry`] together with the sequence counter.
//! It is stored behind a single async mutex in [`AppState`](crate::state::AppState):
//! a handler locks it, draws one [`CallContext`], runs exactly one registry
//! operation and releases it, so operations apply strictly one at a time.
//!
//! The counter advances for every mutating call, accepted or rejected, in the
//! same way a block height keeps moving regardless of transaction outcome.

use trackvault_core::{CallContext, Principal, Registry, Sequence};

#[derive(Debug)]
pub struct Sequencer {
    registry: Registry,
    sequence: Sequence,
}

impl Sequencer {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            sequence: 0,
        }
    }

    /// Advance the counter and build the context for the next call.
    pub fn next_context(&mut self, caller: Principal) -> CallContext {
        self.sequence += 1;
        CallContext::new(caller, self.sequence)
    }

    /// The sequence value of the most recent call.
    pub fn current_sequence(&self) -> Sequence {
        self.sequence
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }
}
