//! The interaction data model and its interning store.
//!
//! Every sensorimotor event the agent can think about is an `Interaction`,
//! either a primitive act/outcome pair with an intrinsic valence or a
//! learned, weighted pairing of two earlier interactions. All of them live
//! in a single arena owned by the agent and are addressed by `InteractionId`,
//! so identity comparison is id comparison and the composite graph stays a
//! DAG without any owning pointers.

use crate::experiment::ExperimentId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Arena index of an interaction. Post-interning, two interactions are the
/// same entity iff their ids are equal; structural equality is never used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InteractionId(u32);

impl InteractionId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Whether a learning call created a new association or strengthened an
/// existing one. Collaborators log the two transitions differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Association {
    Formed,
    Strengthened,
}

#[derive(Debug, Clone)]
pub struct Interaction {
    label: String,
    /// Back-reference set by the experiment registry when this interaction
    /// is first used as an intent.
    experiment: Option<ExperimentId>,
    kind: InteractionKind,
}

#[derive(Debug, Clone)]
pub enum InteractionKind {
    Primitive {
        valence: i32,
    },
    Composite {
        anterior: InteractionId,
        posterior: InteractionId,
        weight: u32,
    },
}

impl Interaction {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn experiment(&self) -> Option<ExperimentId> {
        self.experiment
    }

    pub fn kind(&self) -> &InteractionKind {
        &self.kind
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, InteractionKind::Primitive { .. })
    }
}

/// Interning registry of every interaction the agent knows, keyed by the
/// derived label. Grows monotonically; nothing is ever pruned.
#[derive(Debug, Clone, Default)]
pub struct InteractionStore {
    arena: Vec<Interaction>,
    by_label: HashMap<String, InteractionId>,
}

impl InteractionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn get(&self, id: InteractionId) -> &Interaction {
        &self.arena[id.index()]
    }

    pub fn label(&self, id: InteractionId) -> &str {
        &self.arena[id.index()].label
    }

    pub fn lookup(&self, label: &str) -> Option<InteractionId> {
        self.by_label.get(label).copied()
    }

    /// Ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = InteractionId> + '_ {
        (0..self.arena.len() as u32).map(InteractionId)
    }

    /// `(anterior, posterior, weight)` for composites, `None` for primitives.
    pub fn composite_parts(
        &self,
        id: InteractionId,
    ) -> Option<(InteractionId, InteractionId, u32)> {
        match self.arena[id.index()].kind {
            InteractionKind::Composite {
                anterior,
                posterior,
                weight,
            } => Some((anterior, posterior, weight)),
            InteractionKind::Primitive { .. } => None,
        }
    }

    /// Felt quality of an interaction: intrinsic for a primitive, the sum
    /// over the subtree for a composite. Always recomputed; never stored.
    /// Walks with an explicit stack since nesting depth grows with the
    /// agent's learning history.
    pub fn valence(&self, id: InteractionId) -> i32 {
        let mut total = 0;
        let mut pending = vec![id];
        while let Some(id) = pending.pop() {
            match self.arena[id.index()].kind {
                InteractionKind::Primitive { valence } => total += valence,
                InteractionKind::Composite {
                    anterior, posterior, ..
                } => {
                    pending.push(anterior);
                    pending.push(posterior);
                }
            }
        }
        total
    }

    /// Intern a primitive. On a hit the supplied valence is ignored: the
    /// label is the identity and the first registration wins.
    pub fn get_or_create_primitive(&mut self, label: &str, valence: i32) -> InteractionId {
        if let Some(&id) = self.by_label.get(label) {
            return id;
        }
        let id = InteractionId(self.arena.len() as u32);
        self.arena.push(Interaction {
            label: label.to_string(),
            experiment: None,
            kind: InteractionKind::Primitive { valence },
        });
        self.by_label.insert(label.to_string(), id);
        tracing::trace!(label, valence, "interned primitive interaction");
        id
    }

    /// Intern a temporal pairing. A hit strengthens the existing pairing
    /// (weight += 1); a miss forms a new one with weight 1. The caller is
    /// told which happened.
    pub fn get_or_create_composite(
        &mut self,
        anterior: InteractionId,
        posterior: InteractionId,
    ) -> (InteractionId, Association) {
        let label = format!("<{}{}>", self.label(anterior), self.label(posterior));
        if let Some(&id) = self.by_label.get(&label) {
            if let InteractionKind::Composite { weight, .. } = &mut self.arena[id.index()].kind {
                *weight += 1;
            } else {
                debug_assert!(false, "composite label interned as primitive: {label}");
            }
            tracing::debug!(
                label = %self.arena[id.index()].label,
                valence = self.valence(id),
                weight = self.composite_parts(id).map(|(_, _, w)| w).unwrap_or(0),
                "strengthened association",
            );
            return (id, Association::Strengthened);
        }

        let id = InteractionId(self.arena.len() as u32);
        self.arena.push(Interaction {
            label: label.clone(),
            experiment: None,
            kind: InteractionKind::Composite {
                anterior,
                posterior,
                weight: 1,
            },
        });
        self.by_label.insert(label, id);
        tracing::debug!(
            label = %self.arena[id.index()].label,
            valence = self.valence(id),
            "formed association",
        );
        (id, Association::Formed)
    }

    pub(crate) fn set_experiment(&mut self, id: InteractionId, experiment: ExperimentId) {
        self.arena[id.index()].experiment = Some(experiment);
    }
}
