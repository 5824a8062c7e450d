//! Experiments: named intents to enact an interaction.
//!
//! An experiment is what the selection policy chooses between. Its label is
//! the "abstract" form of the intended interaction's label, distinguishing
//! the intent from the sensed outcome, and each experiment carries the
//! history of outcomes that diverged from its intent so anticipation can
//! correct for non-deterministic environments.

use crate::interaction::{InteractionId, InteractionStore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Arena index of an experiment. Identity equality, like `InteractionId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExperimentId(u32);

impl ExperimentId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Turn an interaction label into the abstract experiment label:
/// outcomes read lowercase, intents read uppercase, and the closing
/// bracket of a composite becomes a bar.
pub fn abstract_label(interaction_label: &str) -> String {
    interaction_label
        .replace('e', "E")
        .replace('r', "R")
        .replace('>', "|")
}

#[derive(Debug, Clone)]
pub struct Experiment {
    label: String,
    intended: InteractionId,
    enacted_history: Vec<InteractionId>,
}

impl Experiment {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn intended(&self) -> InteractionId {
        self.intended
    }

    /// Outcomes observed when this experiment was attempted and the
    /// environment diverged. Append-only, unbounded, duplicates kept:
    /// repeat observations are what weights the correction.
    pub fn enacted_history(&self) -> &[InteractionId] {
        &self.enacted_history
    }
}

/// Interning registry mapping interactions to their experiments, one per
/// distinct abstract label. This is the anticipation/selection universe.
#[derive(Debug, Clone, Default)]
pub struct ExperimentRegistry {
    arena: Vec<Experiment>,
    by_label: HashMap<String, ExperimentId>,
}

impl ExperimentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn get(&self, id: ExperimentId) -> &Experiment {
        &self.arena[id.index()]
    }

    /// Ids in registration order. Anticipation seeds in this order, which
    /// is what makes tie-breaking in selection deterministic.
    pub fn ids(&self) -> impl Iterator<Item = ExperimentId> + '_ {
        (0..self.arena.len() as u32).map(ExperimentId)
    }

    /// Intern the experiment for `intended` and set the back-reference on
    /// the interaction. Every interaction usable as an intent resolves to
    /// exactly one experiment.
    pub fn get_or_create(
        &mut self,
        store: &mut InteractionStore,
        intended: InteractionId,
    ) -> ExperimentId {
        let label = abstract_label(store.label(intended));
        let id = match self.by_label.get(&label) {
            Some(&id) => id,
            None => {
                let id = ExperimentId(self.arena.len() as u32);
                tracing::trace!(label = %label, "registered experiment");
                self.arena.push(Experiment {
                    label: label.clone(),
                    intended,
                    enacted_history: Vec::new(),
                });
                self.by_label.insert(label, id);
                id
            }
        };
        store.set_experiment(intended, id);
        id
    }

    /// Record an outcome that differed from this experiment's intent.
    pub fn record_outcome(&mut self, id: ExperimentId, enacted: InteractionId) {
        self.arena[id.index()].enacted_history.push(enacted);
    }
}
