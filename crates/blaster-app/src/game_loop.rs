//! Frame loop thread: drives the session engine at the display rate.
//!
//! The engine and host are created inside this thread because it's cleaner
//! for ownership. Commands arrive via `mpsc` channel. Snapshots are stored
//! in shared state for polling; the final one comes back in the report.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use blaster_core::commands::SessionCommand;
use blaster_core::config::SessionConfig;
use blaster_core::constants::FRAME_RATE;
use blaster_core::state::FrameSnapshot;
use blaster_sim::SessionEngine;

use crate::host::{HostStats, LoggingHost};
use crate::script::InputSource;
use crate::state::LoopCommand;

#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    /// Frames per second.
    pub frame_rate: u32,
    /// Stop on its own after this many frames.
    pub max_frames: Option<u64>,
    /// Pace frames against the wall clock. When false, frames run back to
    /// back and time advances by exactly one frame duration per frame.
    pub realtime: bool,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            frame_rate: FRAME_RATE,
            max_frames: None,
            realtime: true,
        }
    }
}

impl LoopSettings {
    /// Nominal duration of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.frame_rate.max(1)))
    }
}

/// What the loop hands back when it stops.
#[derive(Debug, Clone, Default)]
pub struct LoopReport {
    pub frames: u64,
    pub last_snapshot: Option<FrameSnapshot>,
    pub host_stats: HostStats,
}

/// Spawns the frame loop in a new thread.
///
/// Returns the command sender and the handle to join for the report.
pub fn spawn_game_loop<I>(
    config: SessionConfig,
    settings: LoopSettings,
    input: I,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> io::Result<(mpsc::Sender<LoopCommand>, JoinHandle<LoopReport>)>
where
    I: InputSource + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("blaster-frame-loop".into())
        .spawn(move || run_game_loop(config, settings, input, cmd_rx, &latest_snapshot))?;

    Ok((cmd_tx, handle))
}

/// The frame loop. Runs until Shutdown, channel disconnect or `max_frames`.
pub fn run_game_loop<I: InputSource>(
    config: SessionConfig,
    settings: LoopSettings,
    mut input: I,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) -> LoopReport {
    let frame_duration = settings.frame_duration();
    let mut engine = SessionEngine::new(config);
    let mut host = LoggingHost::new();
    engine.setup_scene(&mut host);

    let start = Instant::now();
    let mut next_frame_time = start;
    let mut last_secs = 0.0;
    let mut frames = 0u64;
    let mut previous: Option<FrameSnapshot> = None;

    info!(frame_rate = settings.frame_rate, "frame loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Session(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) => return finish(frames, previous, &host),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    return finish(frames, previous, &host);
                }
            }
        }

        // 2. Headless loads finish as soon as they are requested
        engine.queue_commands(
            host.take_requested_assets()
                .into_iter()
                .map(|asset| SessionCommand::AssetReady { asset }),
        );

        // 3. Advance one frame
        let now_secs = if settings.realtime {
            start.elapsed().as_secs_f64()
        } else {
            frames as f64 * frame_duration.as_secs_f64()
        };
        let delta_secs = now_secs - last_secs;
        last_secs = now_secs;

        let frame_input = input.next_input(frames, previous.as_ref());
        let snapshot = engine.on_frame(delta_secs, now_secs, &frame_input, &mut host);
        frames += 1;

        for event in &snapshot.events {
            debug!(?event, "frame event");
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }
        previous = Some(snapshot);

        if settings.max_frames.is_some_and(|max| frames >= max) {
            return finish(frames, previous, &host);
        }

        // 5. Sleep until next frame
        if settings.realtime {
            next_frame_time += frame_duration;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame_duration * 2 {
                // Too far behind; reset to avoid catch-up spiral
                next_frame_time = now;
            }
        }
    }
}

fn finish(frames: u64, last_snapshot: Option<FrameSnapshot>, host: &LoggingHost) -> LoopReport {
    info!(frames, score = host.score_text(), "frame loop stopped");
    LoopReport {
        frames,
        last_snapshot,
        host_stats: host.stats(),
    }
}
