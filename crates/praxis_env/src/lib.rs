//! Reference environments for the praxis enactive agent.
//!
//! Each implements the core's [`praxis_core::Environment`] contract: hold
//! whatever private state you like, but resolve every outcome through the
//! agent's interaction store so identities stay comparable.

pub mod maze;
pub mod pulse;
pub mod scripted;

pub use maze::Maze;
pub use pulse::PulseSource;
pub use scripted::ScriptedSequence;
