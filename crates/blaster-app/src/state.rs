//! State shared between the runner and the frame loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use blaster_core::commands::SessionCommand;
use blaster_core::state::FrameSnapshot;

/// Commands sent from the runner to the frame loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A session command to forward to the engine.
    Session(SessionCommand),
    /// Stop the frame loop after the current frame.
    Shutdown,
}

/// Shared runner state.
///
/// The sender sits behind a `Mutex` because `mpsc::Sender` is not `Sync`.
#[derive(Default)]
pub struct AppState {
    /// Channel into the frame loop. `None` until the loop is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Latest snapshot, written by the frame loop after each frame.
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a command to the loop. Returns false if the loop is gone
    /// or was never started.
    pub fn send(&self, command: LoopCommand) -> bool {
        match self.command_tx.lock() {
            Ok(tx) => tx.as_ref().is_some_and(|tx| tx.send(command).is_ok()),
            Err(_) => false,
        }
    }

    /// Clone of the latest snapshot, if any frame has run.
    pub fn latest(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }
}

/// End-of-run report printed by the binary.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub elapsed_secs: f64,
    pub score: i64,
    pub display: String,
    pub shots_fired: u32,
    pub hits: u32,
}

impl RunSummary {
    pub fn from_snapshot(snapshot: &FrameSnapshot) -> Self {
        Self {
            frames: snapshot.time.frame,
            elapsed_secs: snapshot.time.wall_secs,
            score: snapshot.score.value,
            display: snapshot.score.display.clone(),
            shots_fired: snapshot.score.shots_fired,
            hits: snapshot.score.hits,
        }
    }

    /// Fraction of shots that scored, or 0 when nothing was fired.
    pub fn accuracy(&self) -> f64 {
        if self.shots_fired == 0 {
            0.0
        } else {
            self.hits as f64 / self.shots_fired as f64
        }
    }
}
