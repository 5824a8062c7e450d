//! The anticipation engine: scoring every known experiment by how pleasant
//! attempting it next is expected to feel, given the two-step memory.
//!
//! Recomputed from scratch every step; nothing here is persisted.

use crate::agent::Memory;
use crate::experiment::{ExperimentId, ExperimentRegistry};
use crate::interaction::{InteractionId, InteractionStore};
use serde::{Deserialize, Serialize};

/// A scored prediction for one experiment. Step-scoped and ephemeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anticipation {
    pub experiment: ExperimentId,
    pub proclivity: i64,
}

/// Baseline proclivity for primitive-rooted experiments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// Seed every primitive-rooted experiment at zero.
    Neutral,
    /// Seed with the intended primitive's own valence.
    #[default]
    IntendedValence,
}

impl SeedPolicy {
    fn baseline(self, store: &InteractionStore, intended: InteractionId) -> i64 {
        match self {
            SeedPolicy::Neutral => 0,
            SeedPolicy::IntendedValence => store.valence(intended) as i64,
        }
    }
}

/// The interactions that count as "just happened" for activation purposes:
/// the non-null memory entries, plus one level of unfolding of the latest
/// entry's posterior when it is itself a pairing, so a freshly completed
/// composite immediately exposes its tail as context.
pub fn activation_context(store: &InteractionStore, memory: Memory) -> Vec<InteractionId> {
    let (m0, m1) = memory;
    let mut context = Vec::new();
    if let Some(m0) = m0 {
        context.push(m0);
    }
    if let Some(m1) = m1 {
        context.push(m1);
        if let Some((_, posterior, _)) = store.composite_parts(m1) {
            context.push(posterior);
        }
    }
    context
}

/// Every pairing whose anterior is in the activation context, in store
/// order. These are the learned associations that bear on the next step.
pub fn active_pairings(store: &InteractionStore, context: &[InteractionId]) -> Vec<InteractionId> {
    let mut active = Vec::new();
    for id in store.ids() {
        if let Some((anterior, _, _)) = store.composite_parts(id) {
            if context.contains(&anterior) {
                tracing::trace!(label = %store.label(id), "activated");
                active.push(id);
            }
        }
    }
    active
}

/// Score the selection universe.
///
/// Seeds one anticipation per primitive-rooted experiment, adds each active
/// pairing's `weight * posterior.valence` to the posterior's experiment
/// (merging repeat contributions), then corrects every anticipation with
/// the weighted valence of outcomes its experiment has historically
/// produced instead of its intent.
pub fn anticipate(
    store: &InteractionStore,
    registry: &ExperimentRegistry,
    active: &[InteractionId],
    policy: SeedPolicy,
) -> Vec<Anticipation> {
    let mut anticipations: Vec<Anticipation> = registry
        .ids()
        .filter(|&e| store.get(registry.get(e).intended()).is_primitive())
        .map(|e| Anticipation {
            experiment: e,
            proclivity: policy.baseline(store, registry.get(e).intended()),
        })
        .collect();

    for &pairing in active {
        let Some((_, posterior, weight)) = store.composite_parts(pairing) else {
            continue;
        };
        // Posteriors never used as an intent carry no experiment and
        // therefore propose nothing.
        let Some(experiment) = store.get(posterior).experiment() else {
            continue;
        };
        let contribution = weight as i64 * store.valence(posterior) as i64;
        match anticipations.iter_mut().find(|a| a.experiment == experiment) {
            Some(existing) => existing.proclivity += contribution,
            None => anticipations.push(Anticipation {
                experiment,
                proclivity: contribution,
            }),
        }
    }

    for anticipation in anticipations.iter_mut() {
        let mut correction = 0i64;
        for &outcome in registry.get(anticipation.experiment).enacted_history() {
            for &pairing in active {
                if let Some((_, posterior, weight)) = store.composite_parts(pairing) {
                    if posterior == outcome {
                        correction += weight as i64 * store.valence(outcome) as i64;
                    }
                }
            }
        }
        anticipation.proclivity += correction;
    }

    anticipations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::reinforce;

    fn two_primitives() -> (InteractionStore, ExperimentRegistry, InteractionId, InteractionId) {
        let mut store = InteractionStore::new();
        let mut registry = ExperimentRegistry::new();
        let a = store.get_or_create_primitive("e1r1", -1);
        let b = store.get_or_create_primitive("e1r2", 3);
        registry.get_or_create(&mut store, a);
        registry.get_or_create(&mut store, b);
        (store, registry, a, b)
    }

    #[test]
    fn seeds_follow_the_policy_and_registration_order() {
        let (store, registry, a, b) = two_primitives();

        let neutral = anticipate(&store, &registry, &[], SeedPolicy::Neutral);
        assert_eq!(neutral.len(), 2);
        assert!(neutral.iter().all(|x| x.proclivity == 0));

        let valenced = anticipate(&store, &registry, &[], SeedPolicy::IntendedValence);
        assert_eq!(valenced[0].experiment, store.get(a).experiment().unwrap());
        assert_eq!(valenced[0].proclivity, -1);
        assert_eq!(valenced[1].experiment, store.get(b).experiment().unwrap());
        assert_eq!(valenced[1].proclivity, 3);
    }

    #[test]
    fn context_unfolds_the_latest_pairing_once() {
        let (mut store, mut registry, a, b) = two_primitives();
        let (ab, _) = reinforce(&mut store, &mut registry, a, b);

        let context = activation_context(&store, (None, Some(ab)));
        assert_eq!(context, vec![ab, b]);

        // The anterior is not unfolded, and m0 is never unfolded.
        let context = activation_context(&store, (Some(ab), Some(a)));
        assert_eq!(context, vec![ab, a]);
    }

    #[test]
    fn pairings_activate_on_anterior_identity() {
        let (mut store, mut registry, a, b) = two_primitives();
        let (ab, _) = reinforce(&mut store, &mut registry, a, b);
        let (ba, _) = reinforce(&mut store, &mut registry, b, a);

        assert_eq!(active_pairings(&store, &[a]), vec![ab]);
        assert_eq!(active_pairings(&store, &[b]), vec![ba]);
        assert_eq!(active_pairings(&store, &[a, b]), vec![ab, ba]);
        assert!(active_pairings(&store, &[]).is_empty());
    }

    #[test]
    fn active_pairings_propose_their_posterior_experiment() {
        let (mut store, mut registry, a, b) = two_primitives();
        // <ab> has valence 2 and gets an abstract experiment on creation.
        let (ab, _) = reinforce(&mut store, &mut registry, a, b);
        let (pairing, _) = reinforce(&mut store, &mut registry, b, ab);

        let anticipations = anticipate(&store, &registry, &[pairing], SeedPolicy::Neutral);
        let composite_rooted = store.get(ab).experiment().unwrap();
        let found = anticipations
            .iter()
            .find(|x| x.experiment == composite_rooted)
            .expect("composite experiment surfaced");
        assert_eq!(found.proclivity, 2);
    }

    #[test]
    fn repeat_contributions_merge_into_one_total() {
        let (mut store, mut registry, a, b) = two_primitives();
        let (ab, _) = reinforce(&mut store, &mut registry, a, b);
        let (p1, _) = reinforce(&mut store, &mut registry, b, ab);
        let (p2, _) = reinforce(&mut store, &mut registry, a, ab);
        reinforce(&mut store, &mut registry, a, ab); // weight 2

        let anticipations = anticipate(&store, &registry, &[p1, p2], SeedPolicy::Neutral);
        let composite_rooted = store.get(ab).experiment().unwrap();
        let merged: Vec<_> = anticipations
            .iter()
            .filter(|x| x.experiment == composite_rooted)
            .collect();
        assert_eq!(merged.len(), 1);
        // 1 * valence(<ab>) from p1 plus 2 * valence(<ab>) from p2.
        assert_eq!(merged[0].proclivity, 2 + 4);
    }

    #[test]
    fn history_corrects_non_deterministic_experiments() {
        let (mut store, mut registry, a, b) = two_primitives();
        let experiment = store.get(b).experiment().unwrap();
        // Attempting `b` has produced `a` twice.
        registry.record_outcome(experiment, a);
        registry.record_outcome(experiment, a);

        // An active pairing ending in `a` makes that history bear on the score.
        let (pairing, _) = reinforce(&mut store, &mut registry, b, a);

        let anticipations = anticipate(&store, &registry, &[pairing], SeedPolicy::IntendedValence);
        let scored = anticipations
            .iter()
            .find(|x| x.experiment == experiment)
            .unwrap();
        // Baseline 3, corrected by 2 history entries * weight 1 * valence -1.
        assert_eq!(scored.proclivity, 3 - 2);
    }
}
