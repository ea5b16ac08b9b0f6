//! Line-delimited JSON protocol over stdio.
//!
//! Every inbound line is either an input event
//! (`{"type":"MouseButtonDown","button":"Left"}`) or a pointer update
//! (`{"pointer":{"focused":true,"position":[400.0,300.0]}}`). Every
//! outbound line is one `FrameSnapshot`.

use std::io::{BufRead, Write};
use std::sync::mpsc;
use std::thread::JoinHandle;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use cannonade_core::commands::{InputEvent, PointerState};
use cannonade_core::state::FrameSnapshot;

use crate::state::GameLoopCommand;

/// One inbound line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InboundMessage {
    Pointer { pointer: PointerState },
    Input(InputEvent),
}

impl From<InboundMessage> for GameLoopCommand {
    fn from(message: InboundMessage) -> Self {
        match message {
            InboundMessage::Pointer { pointer } => GameLoopCommand::Pointer(pointer),
            InboundMessage::Input(event) => GameLoopCommand::Input(event),
        }
    }
}

/// Parse one inbound line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<GameLoopCommand>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let message: InboundMessage = serde_json::from_str(line)?;
    Ok(Some(message.into()))
}

/// Write one snapshot as a single JSON line and flush.
pub fn write_snapshot<W: Write>(out: &mut W, snapshot: &FrameSnapshot) -> Result<()> {
    serde_json::to_writer(&mut *out, snapshot).context("failed to serialize snapshot")?;
    out.write_all(b"\n").context("failed to write snapshot")?;
    out.flush().context("failed to flush snapshot")?;
    Ok(())
}

/// Forward every line of `reader` to the game loop.
///
/// Malformed lines are logged and skipped. Returns the number of commands
/// forwarded once the reader is exhausted or the loop has gone away.
pub fn forward_lines<R: BufRead>(reader: R, tx: &mpsc::Sender<GameLoopCommand>) -> usize {
    let mut forwarded = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!(%err, "input stream failed");
                break;
            }
        };
        match parse_line(&line) {
            Ok(Some(command)) => {
                if tx.send(command).is_err() {
                    break;
                }
                forwarded += 1;
            }
            Ok(None) => {}
            Err(err) => warn!(line = index + 1, %err, "skipping malformed input line"),
        }
    }
    info!(forwarded, "input closed");
    forwarded
}

/// Read input lines on a background thread.
pub fn spawn_input_reader<R>(
    reader: R,
    tx: mpsc::Sender<GameLoopCommand>,
) -> Result<JoinHandle<usize>>
where
    R: BufRead + Send + 'static,
{
    std::thread::Builder::new()
        .name("cannonade-input".into())
        .spawn(move || forward_lines(reader, &tx))
        .context("failed to spawn input reader thread")
}
