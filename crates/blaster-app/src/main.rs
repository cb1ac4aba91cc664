//! Headless range session.
//!
//! Usage:
//!   cargo run -p blaster-app -- --seconds 20 --fire-every 12
//!   RUST_LOG=blaster_sim=debug cargo run -p blaster-app -- --fast

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use glam::DVec3;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blaster_app::game_loop::{spawn_game_loop, LoopSettings};
use blaster_app::script::ScriptedController;
use blaster_app::state::{AppState, LoopCommand, RunSummary};
use blaster_core::config::SessionConfig;
use blaster_core::constants::FRAME_RATE;

/// Where the scripted player holds the blaster.
const MUZZLE: DVec3 = DVec3::new(0.0, 1.2, 0.0);

#[derive(Parser)]
#[command(name = "blaster-range")]
#[command(about = "Run a headless target range session with a scripted player")]
struct Args {
    /// Session config JSON; built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// How long to run, in session seconds
    #[arg(long, default_value_t = 10.0)]
    seconds: f64,
    /// Frames per second
    #[arg(long, default_value_t = FRAME_RATE)]
    frame_rate: u32,
    /// Pull the trigger every N frames
    #[arg(long, default_value_t = 18)]
    fire_every: u64,
    /// Override the config's RNG seed
    #[arg(long)]
    seed: Option<u64>,
    /// Run frames back to back instead of at wall-clock pace
    #[arg(long)]
    fast: bool,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let budget = watchdog_budget(args.seconds)?;
    if args.frame_rate == 0 {
        bail!("--frame-rate must be positive");
    }

    let mut config = match &args.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SessionConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate().context("invalid session config")?;

    let max_frames = (args.seconds * f64::from(args.frame_rate)).ceil() as u64;
    let settings = LoopSettings {
        frame_rate: args.frame_rate,
        max_frames: Some(max_frames),
        realtime: !args.fast,
    };
    info!(seed = config.seed, max_frames, realtime = settings.realtime, "starting session");

    let state = AppState::new();
    let script = ScriptedController::new(config.wielding_hand, MUZZLE, args.fire_every);
    let (tx, handle) = spawn_game_loop(config, settings, script, state.latest_snapshot.clone())
        .context("failed to spawn frame loop")?;
    *state
        .command_tx
        .lock()
        .map_err(|_| anyhow!("command channel lock poisoned"))? = Some(tx);

    // The loop stops itself after max_frames; the deadline only matters when
    // it falls behind the wall clock.
    let deadline = Instant::now()
        .checked_add(budget)
        .with_context(|| format!("--seconds {} is too large", args.seconds))?;
    while !handle.is_finished() {
        std::thread::sleep(Duration::from_millis(250));
        if Instant::now() >= deadline {
            info!("deadline reached, shutting down");
            state.send(LoopCommand::Shutdown);
            break;
        }
    }

    let report = handle
        .join()
        .map_err(|_| anyhow!("frame loop thread panicked"))?;
    let snapshot = report
        .last_snapshot
        .or_else(|| state.latest())
        .context("session ended before the first frame")?;
    let summary = RunSummary::from_snapshot(&snapshot);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!();
        println!("=== RANGE RESULTS ===");
        println!("  Score:      {}", summary.display);
        println!("  Raw score:  {}", summary.score);
        println!("  Shots:      {}", summary.shots_fired);
        println!("  Hits:       {}", summary.hits);
        println!("  Accuracy:   {:.1}%", summary.accuracy() * 100.0);
        println!(
            "  Frames:     {} ({:.1}s)",
            summary.frames, summary.elapsed_secs
        );
        println!("  Cues:       {}", report.host_stats.cues_played);
    }
    Ok(())
}

/// Wall-clock allowance for a run of `seconds`: twice the session length
/// plus one second.
fn watchdog_budget(seconds: f64) -> Result<Duration> {
    if !seconds.is_finite() || seconds <= 0.0 {
        bail!("--seconds must be a positive number, got {seconds}");
    }
    Duration::try_from_secs_f64(seconds * 2.0 + 1.0)
        .with_context(|| format!("--seconds {seconds} is too large"))
}
