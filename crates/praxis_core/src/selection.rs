//! Greedy selection over the step's anticipations.

use crate::anticipation::Anticipation;
use crate::error::CoreError;
use crate::experiment::{ExperimentId, ExperimentRegistry};

/// Pick the experiment with the highest proclivity. The sort is stable, so
/// ties go to whichever anticipation was enumerated first; there is no
/// exploration and no randomness.
pub fn select(
    registry: &ExperimentRegistry,
    anticipations: &[Anticipation],
) -> Result<ExperimentId, CoreError> {
    let mut ranked: Vec<&Anticipation> = anticipations.iter().collect();
    ranked.sort_by_key(|a| std::cmp::Reverse(a.proclivity));

    for proposed in ranked.iter().take(5) {
        tracing::debug!(
            experiment = %registry.get(proposed.experiment).label(),
            proclivity = proposed.proclivity,
            "propose",
        );
    }

    ranked
        .first()
        .map(|a| a.experiment)
        .ok_or(CoreError::NoAnticipations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::InteractionStore;

    fn registry_with(labels: &[(&str, i32)]) -> (ExperimentRegistry, Vec<ExperimentId>) {
        let mut store = InteractionStore::new();
        let mut registry = ExperimentRegistry::new();
        let ids = labels
            .iter()
            .map(|&(label, valence)| {
                let i = store.get_or_create_primitive(label, valence);
                registry.get_or_create(&mut store, i)
            })
            .collect();
        (registry, ids)
    }

    #[test]
    fn picks_the_highest_proclivity() {
        let (registry, e) = registry_with(&[("e1r1", -1), ("e1r2", 3), ("e2r1", -1)]);
        let anticipations = vec![
            Anticipation { experiment: e[0], proclivity: -1 },
            Anticipation { experiment: e[1], proclivity: 7 },
            Anticipation { experiment: e[2], proclivity: 4 },
        ];
        assert_eq!(select(&registry, &anticipations).unwrap(), e[1]);
    }

    #[test]
    fn ties_go_to_the_earlier_enumeration() {
        let (registry, e) = registry_with(&[("e1r1", 0), ("e1r2", 0)]);
        let anticipations = vec![
            Anticipation { experiment: e[0], proclivity: 5 },
            Anticipation { experiment: e[1], proclivity: 5 },
        ];
        assert_eq!(select(&registry, &anticipations).unwrap(), e[0]);

        let reversed = vec![
            Anticipation { experiment: e[1], proclivity: 5 },
            Anticipation { experiment: e[0], proclivity: 5 },
        ];
        assert_eq!(select(&registry, &reversed).unwrap(), e[1]);
    }

    #[test]
    fn empty_set_is_an_invariant_violation() {
        let (registry, _) = registry_with(&[]);
        assert!(matches!(
            select(&registry, &[]),
            Err(CoreError::NoAnticipations)
        ));
    }
}
