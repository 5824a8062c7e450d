//! Learning and reinforcement: turning a freshly enacted interaction and
//! the rolling two-step memory into new or strengthened associations.

use crate::agent::Memory;
use crate::experiment::ExperimentRegistry;
use crate::interaction::{Association, InteractionId, InteractionStore};

/// Learn or strengthen the pairing `(anterior, posterior)`. A pairing
/// learned for the first time also gets its abstract experiment registered,
/// so every composite is immediately selectable.
pub fn reinforce(
    store: &mut InteractionStore,
    registry: &mut ExperimentRegistry,
    anterior: InteractionId,
    posterior: InteractionId,
) -> (InteractionId, Association) {
    let (id, association) = store.get_or_create_composite(anterior, posterior);
    if association == Association::Formed {
        registry.get_or_create(store, id);
    }
    (id, association)
}

/// Fold the step's enacted interaction into memory.
///
/// With memory `(m0, m1)`: pair `m1` with the enacted interaction, then link
/// the step before that in two ways, through `m0`'s anterior to the fresh
/// pairing and from `m0` directly to the enacted interaction. Returns the
/// advanced memory `(pairing, enacted)`.
pub fn integrate(
    store: &mut InteractionStore,
    registry: &mut ExperimentRegistry,
    memory: Memory,
    enacted: InteractionId,
) -> Memory {
    let (m0, m1) = memory;

    let mut pairing = None;
    if let Some(m1) = m1 {
        pairing = Some(reinforce(store, registry, m1, enacted).0);
    }

    if let (Some(m0), Some(pairing)) = (m0, pairing) {
        // m0 is always a pairing from a previous integrate call.
        if let Some((anterior, _, _)) = store.composite_parts(m0) {
            reinforce(store, registry, anterior, pairing);
        }
        reinforce(store, registry, m0, enacted);
    }

    (pairing, Some(enacted))
}
