//! End-to-end step-loop scenarios against small in-test environments.

use praxis_core::{
    Agent, AgentConfig, Environment, InteractionId, InteractionStore, Mood, PrimitiveSpec,
    SeedPolicy,
};

fn config(primitives: &[(&str, i32)], experiments: &[&str], seed_policy: SeedPolicy) -> AgentConfig {
    AgentConfig {
        seed_policy,
        primitives: primitives
            .iter()
            .map(|&(label, valence)| PrimitiveSpec {
                label: label.to_string(),
                valence,
            })
            .collect(),
        experiments: experiments.iter().map(|s| s.to_string()).collect(),
    }
}

/// Always reports the same outcome, whatever was intended.
struct Always(&'static str);

impl Environment for Always {
    fn perform(&mut self, store: &mut InteractionStore, _intended: InteractionId) -> InteractionId {
        store.get_or_create_primitive(self.0, 0)
    }
}

/// Alternates between two outcomes on every attempt.
struct Alternator {
    outcomes: [&'static str; 2],
    next: usize,
}

impl Environment for Alternator {
    fn perform(&mut self, store: &mut InteractionStore, _intended: InteractionId) -> InteractionId {
        let outcome = self.outcomes[self.next];
        self.next = 1 - self.next;
        store.get_or_create_primitive(outcome, 0)
    }
}

/// The agent intends the unpleasant `e1r1` (its only experiment) but the
/// environment always delivers the pleasant `e1r2`. Five steps must stay
/// pleased throughout, and the pairing of consecutive outcomes must be
/// reinforced once per step after the first, ending at weight 4.
#[test]
fn divergent_but_pleasant_environment() {
    let cfg = config(&[("e1r1", -1), ("e1r2", 1)], &["e1r1"], SeedPolicy::Neutral);
    let mut agent = Agent::new(&cfg).unwrap();
    let mut env = Always("e1r2");

    for step in 0..5 {
        let outcome = agent.step(&mut env).unwrap();
        assert_eq!(outcome.mood, Mood::Pleased, "step {step}");
        assert_eq!(outcome.enacted_label, "e1r2");
    }

    let pairing = agent.store().lookup("<e1r2e1r2>").expect("pairing learned");
    let (_, _, weight) = agent.store().composite_parts(pairing).unwrap();
    assert_eq!(weight, 4);

    // Every attempt diverged from the intent, so all five landed in the
    // experiment's history.
    let experiment = agent.registry().ids().next().unwrap();
    assert_eq!(agent.registry().get(experiment).enacted_history().len(), 5);
}

/// A non-deterministic environment: the experiment's history must
/// accumulate both observed outcomes, and its anticipation must blend them.
#[test]
fn alternating_outcomes_blend_into_anticipation() {
    let cfg = config(
        &[("e1r0", 0), ("e1r1", -1), ("e1r2", 1)],
        &["e1r0"],
        SeedPolicy::Neutral,
    );
    let mut agent = Agent::new(&cfg).unwrap();
    let mut env = Alternator {
        outcomes: ["e1r1", "e1r2"],
        next: 0,
    };

    let moods: Vec<Mood> = (0..3).map(|_| agent.step(&mut env).unwrap().mood).collect();
    assert_eq!(moods, vec![Mood::Pained, Mood::Pleased, Mood::Pained]);

    let experiment = agent.registry().ids().next().unwrap();
    let history: Vec<&str> = agent
        .registry()
        .get(experiment)
        .enacted_history()
        .iter()
        .map(|&i| agent.store().label(i))
        .collect();
    assert_eq!(history, vec!["e1r1", "e1r2", "e1r1"]);

    // Activation now covers the learned <e1r1e1r2> pairing, so the single
    // pleasant outcome in the history credits the experiment: a blended
    // score rather than the bare zero baseline.
    let anticipations = agent.anticipations();
    let scored = anticipations
        .iter()
        .find(|a| a.experiment == experiment)
        .expect("experiment is always anticipated");
    assert_eq!(scored.proclivity, 1);
}

/// Trace lines follow the `"{step:02}: {label} {mood}"` contract across a
/// run.
#[test]
fn trace_lines_are_stable_across_a_run() {
    let cfg = config(&[("e1r1", -1), ("e1r2", 1)], &["e1r1"], SeedPolicy::Neutral);
    let mut agent = Agent::new(&cfg).unwrap();
    let mut env = Always("e1r2");

    let lines: Vec<String> = (0..12)
        .map(|_| agent.step(&mut env).unwrap().trace_line())
        .collect();
    assert_eq!(lines[0], "00: e1r2 pleased");
    assert_eq!(lines[9], "09: e1r2 pleased");
    assert_eq!(lines[10], "10: e1r2 pleased");
}
