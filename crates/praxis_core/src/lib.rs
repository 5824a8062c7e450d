//! praxis_core: a minimal enactive interaction-learning and
//! action-selection engine.
//!
//! The agent has no built-in goal except to predict and prefer the felt
//! quality (valence) of its own sensorimotor interactions. Each `step()` it
//! scores its known experiments against a two-step memory, greedily enacts
//! the most promising one against an [`Environment`], and learns weighted
//! temporal pairings from whatever actually happened, including partial
//! failures truncated at the first prediction mismatch.

pub mod agent;
pub mod anticipation;
pub mod config;
pub mod enactment;
pub mod error;
pub mod experiment;
pub mod interaction;
pub mod learning;
pub mod selection;

pub use agent::{Agent, Memory, Mood, StepOutcome};
pub use anticipation::{Anticipation, SeedPolicy};
pub use config::{AgentConfig, PrimitiveSpec};
pub use error::CoreError;
pub use experiment::{Experiment, ExperimentId, ExperimentRegistry};
pub use interaction::{Association, Interaction, InteractionId, InteractionKind, InteractionStore};

/// The one interface the core consumes. `perform` receives a primitive
/// intent and reports what was actually sensed, which may differ. Outcomes
/// must be resolved through the agent's store so that identity comparison
/// against predictions is meaningful; the store parameter is that interning
/// path. Implementations may hold arbitrary private state and are called
/// synchronously, one attempt at a time.
pub trait Environment {
    fn perform(&mut self, store: &mut InteractionStore, intended: InteractionId) -> InteractionId;
}
