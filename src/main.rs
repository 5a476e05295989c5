use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use turtle_spawner::feed::{JsonlFeed, LogFeed};
use turtle_spawner::services::LocalTurtlesim;
use turtle_spawner::{SpawnerConfig, SpawnerNode};

#[derive(Parser, Debug)]
#[command(
    name = "turtle-spawner",
    version,
    about = "Spawn turtles into an in-process simulator and publish the alive list"
)]
struct Cli {
    /// Parameter override as `key:=value` (repeatable), e.g. `spawn_frequency:=2.0`.
    #[arg(short = 'p', long = "param", value_name = "KEY:=VALUE")]
    params: Vec<String>,

    /// Stop after this many seconds; runs until killed when omitted.
    #[arg(long)]
    duration: Option<f64>,

    /// Also write every alive-turtles snapshot to this JSONL file.
    #[arg(long, value_name = "PATH")]
    feed_jsonl: Option<PathBuf>,

    /// Event loop tick interval in milliseconds.
    #[arg(long, default_value_t = 10)]
    step_ms: u64,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = SpawnerConfig::from_params(&cli.params).context("invalid parameters")?;
    info!(
        prefix = %config.name_prefix,
        frequency = config.spawn_frequency,
        "Starting turtle spawner"
    );

    let sim = LocalTurtlesim::new();
    let mut node = SpawnerNode::new(config, sim.spawn_client(), sim.kill_client())?;
    node.add_feed_sink(LogFeed);
    if let Some(path) = &cli.feed_jsonl {
        let feed = JsonlFeed::create(path)
            .with_context(|| format!("cannot create feed file {}", path.display()))?;
        node.add_feed_sink(feed);
    }

    let step = Duration::from_millis(cli.step_ms.max(1));
    match cli.duration {
        Some(secs) => {
            let duration = Duration::try_from_secs_f64(secs).context("invalid --duration")?;
            node.spin_for(duration, step);
        }
        None => node.spin_while(step, |_| true),
    }

    info!(
        alive = node.alive_turtles().len(),
        issued = node.names_issued(),
        "Turtle spawner stopped"
    );
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
