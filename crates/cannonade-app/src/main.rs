use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cannonade_app::config::resolve_config;
use cannonade_app::game_loop::spawn_game_loop;
use cannonade_app::ipc::spawn_input_reader;
use cannonade_app::state::LoopOptions;

#[derive(Parser)]
#[command(name = "cannonade")]
#[command(about = "Headless artillery simulation: JSON input lines in, JSON snapshots out")]
struct Args {
    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many ticks
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Run as fast as possible instead of at the tick rate
    #[arg(long)]
    unpaced: bool,

    /// Do not write snapshots to stdout
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = resolve_config(args.config.as_deref(), args.seed)?;
    let options = LoopOptions {
        max_ticks: args.ticks,
        paced: !args.unpaced,
        emit_snapshots: !args.quiet,
    };

    let (cmd_tx, game_loop) = spawn_game_loop(config, options, BufWriter::new(io::stdout()))?;
    // Detached: it blocks on stdin and ends with the process.
    let _reader = spawn_input_reader(BufReader::new(io::stdin()), cmd_tx.clone())?;

    let summary = game_loop
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))??;
    drop(cmd_tx);

    info!(
        ticks = summary.ticks,
        total = summary.score.score(),
        ai_shots = summary.score.ai_shots,
        "finished"
    );
    Ok(())
}
