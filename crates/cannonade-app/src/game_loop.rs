//! Game loop thread: runs the simulation engine at the field's tick rate
//! and writes a snapshot after every tick.
//!
//! The engine is created inside the thread. Commands arrive via an `mpsc`
//! channel and are drained at each tick boundary.

use std::io::Write;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;

use cannonade_sim::{SimConfig, SimulationEngine};

use crate::ipc;
use crate::state::{GameLoopCommand, LoopOptions, LoopSummary, StopReason};

/// Nominal duration of one tick at `tick_rate` Hz.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)))
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle yielding the loop's summary.
pub fn spawn_game_loop<W>(
    config: SimConfig,
    options: LoopOptions,
    mut sink: W,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<Result<LoopSummary>>)>
where
    W: Write + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("cannonade-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(config);
            run_game_loop(engine, &cmd_rx, options, &mut sink)
        })
        .context("failed to spawn game loop thread")?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until quit, the tick limit, a Shutdown command or
/// channel disconnect.
pub fn run_game_loop<W: Write>(
    mut engine: SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    options: LoopOptions,
    sink: &mut W,
) -> Result<LoopSummary> {
    let period = tick_duration(engine.config().field.tick_rate);
    let mut next_tick_time = Instant::now();
    info!(seed = engine.config().seed, ?period, paced = options.paced, "game loop started");

    let reason = loop {
        // 1. Drain all pending commands
        if let Some(reason) = drain_commands(&mut engine, cmd_rx) {
            break reason;
        }

        // 2. Advance one tick
        let quit = engine.tick();

        // 3. Emit snapshot
        if options.emit_snapshots {
            ipc::write_snapshot(sink, &engine.snapshot())?;
        }

        if quit {
            break StopReason::Quit;
        }
        if options
            .max_ticks
            .is_some_and(|limit| engine.time().tick >= limit)
        {
            break StopReason::TickLimit;
        }

        // 4. Sleep until next tick
        if options.paced {
            next_tick_time += period;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > period * 2 {
                // Too far behind; reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    };

    let summary = LoopSummary {
        ticks: engine.time().tick,
        waves: engine.wave(),
        score: *engine.score(),
        reason,
    };
    info!(
        ticks = summary.ticks,
        waves = summary.waves,
        destroyed = summary.score.destroyed,
        shots_used = summary.score.shots_used,
        reason = ?summary.reason,
        "game loop stopped"
    );
    Ok(summary)
}

/// Apply every pending command. Returns a stop reason on Shutdown or disconnect.
fn drain_commands(
    engine: &mut SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
) -> Option<StopReason> {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Input(event)) => engine.queue_input(event),
            Ok(GameLoopCommand::Pointer(pointer)) => engine.set_pointer(pointer),
            Ok(GameLoopCommand::Shutdown) => return Some(StopReason::Shutdown),
            Err(mpsc::TryRecvError::Empty) => return None,
            Err(mpsc::TryRecvError::Disconnected) => return Some(StopReason::Shutdown),
        }
    }
}
