//! A stateless pulse source for timer-driven runs.
//!
//! Echoes the outcome matching the attempted family: intending `eNrM`
//! always senses `eNrN`. Useful when the driving loop, not the
//! environment, provides the dynamics (an interval-paced run).

use praxis_core::{Environment, InteractionId, InteractionStore};

#[derive(Debug, Default)]
pub struct PulseSource;

impl PulseSource {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for PulseSource {
    fn perform(&mut self, store: &mut InteractionStore, intended: InteractionId) -> InteractionId {
        let family = store.label(intended).chars().nth(1).unwrap_or('1');
        let outcome = format!("e{family}r{family}");
        store.get_or_create_primitive(&outcome, 0)
    }
}
