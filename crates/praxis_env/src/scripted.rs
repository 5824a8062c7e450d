//! A scripted two-choice sequence source.
//!
//! The source rewards alternation: attempting family `e1` pays off with
//! `e1r2` only when the previous outcome was already an `e1` and the one
//! before that was an `e2` (or absent), and symmetrically for `e2`.
//! From the agent's point of view this makes both experiments
//! non-deterministic, which is exactly what the enacted-history correction
//! in anticipation exists for.

use praxis_core::{Environment, InteractionId, InteractionStore};

#[derive(Debug, Default)]
pub struct ScriptedSequence {
    history: [Option<InteractionId>; 2],
}

impl ScriptedSequence {
    pub fn new() -> Self {
        Self::default()
    }

    fn ready(&self, store: &InteractionStore, same: &str, other: &str) -> bool {
        let latest_matches = match self.history[1] {
            Some(prev) => store.label(prev).contains(same),
            None => false,
        };
        let earlier_differs = match self.history[0] {
            Some(prev) => store.label(prev).contains(other),
            None => true,
        };
        latest_matches && earlier_differs
    }
}

impl Environment for ScriptedSequence {
    fn perform(&mut self, store: &mut InteractionStore, intended: InteractionId) -> InteractionId {
        let outcome = if store.label(intended).contains("e1") {
            if self.ready(store, "e1", "e2") {
                "e1r2"
            } else {
                "e1r1"
            }
        } else if self.ready(store, "e2", "e1") {
            "e2r2"
        } else {
            "e2r1"
        };

        let enacted = store.get_or_create_primitive(outcome, 0);
        self.history = [self.history[1], Some(enacted)];
        tracing::trace!(outcome, "scripted outcome");
        enacted
    }
}
