//! The agent: owner of the store and registry, and the `step()` loop that
//! ties anticipation, selection, enactment, and learning together.

use crate::anticipation::{self, Anticipation, SeedPolicy};
use crate::config::AgentConfig;
use crate::enactment::enact;
use crate::error::CoreError;
use crate::experiment::{ExperimentId, ExperimentRegistry};
use crate::interaction::{InteractionId, InteractionStore};
use crate::selection::select;
use crate::{learning, Environment};
use std::fmt;

/// The two most recently enacted interactions: `(prior-prior, prior)`.
/// Overwritten every step, used only as activation context.
pub type Memory = (Option<InteractionId>, Option<InteractionId>);

/// Coarse felt classification of the latest enacted interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Pleased,
    Pained,
}

impl Mood {
    pub fn from_valence(valence: i32) -> Self {
        if valence >= 0 {
            Mood::Pleased
        } else {
            Mood::Pained
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mood::Pleased => write!(f, "pleased"),
            Mood::Pained => write!(f, "pained"),
        }
    }
}

/// What one `step()` produced.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub step: usize,
    pub experiment: ExperimentId,
    pub intended: InteractionId,
    pub enacted: InteractionId,
    pub enacted_label: String,
    pub valence: i32,
    pub mood: Mood,
}

impl StepOutcome {
    /// The observable trace line: `"{step:02}: {enacted_label} {mood}"`.
    pub fn trace_line(&self) -> String {
        format!("{:02}: {} {}", self.step, self.enacted_label, self.mood)
    }
}

/// An enactive agent. It has no goal beyond predicting and preferring the
/// felt quality of its own interactions: each step it scores every known
/// experiment against its two-step memory, greedily attempts the most
/// promising one, and folds whatever actually happened back into its store.
///
/// The agent exclusively owns its store and registry; both grow
/// monotonically for its lifetime. Stores are never shared between agents.
#[derive(Debug)]
pub struct Agent {
    store: InteractionStore,
    registry: ExperimentRegistry,
    memory: Memory,
    mood: Option<Mood>,
    seed_policy: SeedPolicy,
    clock: usize,
}

impl Agent {
    /// Build an agent from configuration: intern the declared primitives,
    /// then register an experiment for each declared intent.
    pub fn new(config: &AgentConfig) -> Result<Self, CoreError> {
        let mut store = InteractionStore::new();
        let mut registry = ExperimentRegistry::new();

        for primitive in &config.primitives {
            store.get_or_create_primitive(&primitive.label, primitive.valence);
        }
        for label in &config.experiments {
            let intended = store.lookup(label).ok_or_else(|| CoreError::UnknownIntent {
                label: label.clone(),
            })?;
            registry.get_or_create(&mut store, intended);
        }

        Ok(Self {
            store,
            registry,
            memory: (None, None),
            mood: None,
            seed_policy: config.seed_policy,
            clock: 0,
        })
    }

    pub fn store(&self) -> &InteractionStore {
        &self.store
    }

    pub fn registry(&self) -> &ExperimentRegistry {
        &self.registry
    }

    pub fn memory(&self) -> Memory {
        self.memory
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    /// The anticipations the agent would act on right now. Recomputed on
    /// every call; useful for inspection and tests.
    pub fn anticipations(&self) -> Vec<Anticipation> {
        let context = anticipation::activation_context(&self.store, self.memory);
        let active = anticipation::active_pairings(&self.store, &context);
        anticipation::anticipate(&self.store, &self.registry, &active, self.seed_policy)
    }

    /// Run one complete sense-act-learn cycle against the environment.
    /// Synchronous and run-to-completion; the store and registry are only
    /// ever mutated from here.
    pub fn step(&mut self, env: &mut dyn Environment) -> Result<StepOutcome, CoreError> {
        let context = anticipation::activation_context(&self.store, self.memory);
        let active = anticipation::active_pairings(&self.store, &context);
        let anticipations =
            anticipation::anticipate(&self.store, &self.registry, &active, self.seed_policy);
        let experiment = select(&self.registry, &anticipations)?;

        let intended = self.registry.get(experiment).intended();
        let enacted = enact(&mut self.store, &mut self.registry, env, intended);

        tracing::debug!(
            intended = %self.store.label(intended),
            enacted = %self.store.label(enacted),
            valence = self.store.valence(enacted),
            "enacted",
        );

        if enacted != intended {
            self.registry.record_outcome(experiment, enacted);
        }

        let valence = self.store.valence(enacted);
        let mood = Mood::from_valence(valence);
        self.mood = Some(mood);

        self.memory = learning::integrate(&mut self.store, &mut self.registry, self.memory, enacted);

        let step = self.clock;
        self.clock += 1;

        Ok(StepOutcome {
            step,
            experiment,
            intended,
            enacted,
            enacted_label: self.store.label(enacted).to_string(),
            valence,
            mood,
        })
    }
}
