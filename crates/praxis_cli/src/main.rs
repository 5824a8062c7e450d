use anyhow::Result;
use clap::{Parser, ValueEnum};
use praxis_core::{Agent, AgentConfig, Environment};
use praxis_env::{Maze, PulseSource, ScriptedSequence};
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Drive an enactive agent against a reference environment", long_about = None)]
struct Args {
    /// Environment to enact against
    #[arg(short, long, value_enum, default_value_t = EnvKind::Scripted)]
    env: EnvKind,

    /// Number of steps to run
    #[arg(short, long, default_value_t = 26)]
    steps: usize,

    /// Agent configuration file (TOML); defaults to the environment's preset
    #[arg(short, long)]
    config: Option<String>,

    /// Pace the loop with a timer interval, in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Print the maze after every step
    #[arg(long)]
    render: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EnvKind {
    Maze,
    Scripted,
    Pulse,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AgentConfig::load(path)?,
        None => match args.env {
            EnvKind::Maze => AgentConfig::maze(),
            EnvKind::Scripted => AgentConfig::scripted(),
            EnvKind::Pulse => AgentConfig::pulse(),
        },
    };

    info!(env = ?args.env, steps = args.steps, "starting agent");
    let mut agent = Agent::new(&config)?;
    let interval = args.interval_ms.map(Duration::from_millis);

    match args.env {
        EnvKind::Maze => {
            let mut env = Maze::new();
            let render = args.render;
            run(&mut agent, &mut env, args.steps, interval, |env| {
                render.then(|| env.render())
            })
            .await
        }
        EnvKind::Scripted => {
            let mut env = ScriptedSequence::new();
            run(&mut agent, &mut env, args.steps, interval, |_| None).await
        }
        EnvKind::Pulse => {
            let mut env = PulseSource::new();
            run(&mut agent, &mut env, args.steps, interval, |_| None).await
        }
    }
}

/// Step the agent a bounded number of times, printing one trace line per
/// step and an optional environment frame, optionally paced by a timer.
async fn run<E: Environment>(
    agent: &mut Agent,
    env: &mut E,
    steps: usize,
    interval: Option<Duration>,
    frame: impl Fn(&E) -> Option<String>,
) -> Result<()> {
    let mut ticker = interval.map(tokio::time::interval);

    for _ in 0..steps {
        if let Some(ticker) = ticker.as_mut() {
            ticker.tick().await;
        }
        let outcome = agent.step(env)?;
        println!("{}", outcome.trace_line());
        if let Some(frame) = frame(env) {
            println!("{frame}");
        }
    }

    Ok(())
}
