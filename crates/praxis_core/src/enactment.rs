//! The enactment executor: driving a chosen interaction against the
//! environment, one primitive at a time.
//!
//! Composites accumulate indefinitely over an agent's lifetime, so nesting
//! depth is unbounded and the traversal uses an explicit frame stack rather
//! than the call stack.

use crate::experiment::ExperimentRegistry;
use crate::interaction::{InteractionId, InteractionStore};
use crate::learning::reinforce;
use crate::Environment;

enum Pending {
    /// Waiting for the anterior half to resolve.
    Anterior,
    /// Anterior confirmed; waiting for the posterior half.
    Posterior { anterior: InteractionId },
}

struct Frame {
    expected_anterior: InteractionId,
    posterior: InteractionId,
    pending: Pending,
}

/// Attempt `intended` against the environment and return what actually
/// happened, as a store-interned interaction.
///
/// A primitive intent is handed straight to the environment, which may
/// confirm it or report something else entirely. A composite intent enacts
/// its anterior first; if the outcome is not the predicted anterior the
/// whole composite is abandoned and the mismatched outcome is returned as
/// is. A sequence that starts wrong is never forced to continue. When the
/// anterior confirms, the posterior is enacted and whatever pair actually
/// occurred is learned or strengthened and returned.
pub fn enact(
    store: &mut InteractionStore,
    registry: &mut ExperimentRegistry,
    env: &mut dyn Environment,
    intended: InteractionId,
) -> InteractionId {
    let mut stack: Vec<Frame> = Vec::new();
    let mut current = intended;

    'descend: loop {
        // Walk down anterior edges to the first primitive to attempt.
        while let Some((anterior, posterior, _)) = store.composite_parts(current) {
            stack.push(Frame {
                expected_anterior: anterior,
                posterior,
                pending: Pending::Anterior,
            });
            current = anterior;
        }

        let mut outcome = env.perform(store, current);

        // Unwind until a frame needs another descent or the stack empties.
        while let Some(frame) = stack.pop() {
            match frame.pending {
                Pending::Anterior => {
                    if outcome == frame.expected_anterior {
                        stack.push(Frame {
                            pending: Pending::Posterior { anterior: outcome },
                            ..frame
                        });
                        current = frame.posterior;
                        continue 'descend;
                    }
                    // Mismatch: truncate here. Outer frames compare this
                    // same outcome against their own anteriors and
                    // truncate in turn.
                    tracing::debug!(
                        expected = %store.label(frame.expected_anterior),
                        actual = %store.label(outcome),
                        "anterior mismatch, truncating",
                    );
                }
                Pending::Posterior { anterior } => {
                    outcome = reinforce(store, registry, anterior, outcome).0;
                }
            }
        }

        return outcome;
    }
}
