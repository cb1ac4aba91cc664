//! Session engine: the core of the shooting range.
//!
//! `SessionEngine` owns the hecs ECS world, processes host commands, runs
//! all systems once per rendered frame, and produces `FrameSnapshot`s.
//! Completely headless: every side effect goes through the `Host` traits,
//! enabling deterministic testing.

use std::collections::{HashSet, VecDeque};

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use blaster_core::commands::SessionCommand;
use blaster_core::config::SessionConfig;
use blaster_core::enums::{AssetKind, AudioCue};
use blaster_core::events::FrameEvent;
use blaster_core::input::FrameInput;
use blaster_core::state::FrameSnapshot;
use blaster_core::types::{SimTime, Transform};

use crate::host::Host;
use crate::scoring::Scorer;
use crate::systems;
use crate::systems::input_gate::{GateAssets, InputGate};
use crate::systems::respawn::RespawnSchedule;
use crate::world_setup;

/// The session engine. Owns the ECS world and all session state.
pub struct SessionEngine {
    world: World,
    config: SessionConfig,
    time: SimTime,
    rng: ChaCha8Rng,
    command_queue: VecDeque<SessionCommand>,
    loaded_assets: HashSet<AssetKind>,
    targets_spawned: bool,
    input_gate: InputGate,
    scorer: Scorer,
    respawns: RespawnSchedule,
    despawn_buffer: Vec<Entity>,
    events: Vec<FrameEvent>,
}

impl SessionEngine {
    /// Create a new session with the given config.
    ///
    /// The config must pass `SessionConfig::validate`; an empty placement
    /// range or a zero speed is not checked again here. Debug builds assert it.
    pub fn new(config: SessionConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "SessionEngine::new given an invalid config: {:?}",
            config.validate()
        );
        Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            time: SimTime::default(),
            command_queue: VecDeque::new(),
            loaded_assets: HashSet::new(),
            targets_spawned: false,
            input_gate: InputGate::new(),
            scorer: Scorer::new(),
            respawns: RespawnSchedule::default(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Ask the host to load every asset and show the initial score.
    /// Call once, before the first frame.
    pub fn setup_scene<H: Host + ?Sized>(&mut self, host: &mut H) {
        for asset in AssetKind::ALL {
            if !self.loaded_assets.contains(&asset) {
                host.request_asset(asset);
            }
        }
        self.scorer.push_display(host);
    }

    /// Queue a host command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SessionCommand>) {
        self.command_queue.extend(commands);
    }

    /// Run one frame and return the resulting snapshot.
    ///
    /// `delta_secs` is the time since the previous frame; negative values
    /// are treated as zero. `absolute_secs` is the host's real-time clock
    /// and only drives target respawns.
    pub fn on_frame<H: Host + ?Sized>(
        &mut self,
        delta_secs: f64,
        absolute_secs: f64,
        input: &FrameInput,
        host: &mut H,
    ) -> FrameSnapshot {
        let delta_secs = delta_secs.max(0.0);

        self.process_commands(host);
        self.run_systems(delta_secs, absolute_secs, input, host);
        self.time.advance(delta_secs, absolute_secs);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, &self.scorer, events)
    }

    /// Fire any target respawns due at `now_secs`.
    ///
    /// `on_frame` calls this itself; hosts with their own timer may also call
    /// it between frames. Returns the number of targets shown.
    pub fn poll_respawns<H: Host + ?Sized>(&mut self, now_secs: f64, host: &mut H) -> u32 {
        systems::respawn::run(
            &mut self.world,
            host,
            &mut self.rng,
            &self.config,
            &mut self.respawns,
            now_secs,
            &mut self.events,
        )
    }

    /// Spawn a projectile at `emitter`, bypassing the input gate.
    pub fn spawn_projectile<H: Host + ?Sized>(&mut self, emitter: &Transform, host: &mut H) -> Entity {
        self.scorer.record_shot();
        systems::projectiles::spawn(&mut self.world, host, emitter, &self.config)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get the current session time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Number of respawns waiting to fire.
    pub fn pending_respawns(&self) -> usize {
        self.respawns.pending()
    }

    pub fn is_asset_ready(&self, asset: AssetKind) -> bool {
        self.loaded_assets.contains(&asset)
    }

    /// Whether the buffer behind `cue` has loaded.
    pub fn is_cue_ready(&self, cue: AudioCue) -> bool {
        self.is_asset_ready(cue.asset())
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for tests that stage entities).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands<H: Host + ?Sized>(&mut self, host: &mut H) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, host);
        }
    }

    /// Handle a single host command.
    fn handle_command<H: Host + ?Sized>(&mut self, command: SessionCommand, host: &mut H) {
        match command {
            SessionCommand::AssetReady { asset } => {
                if !self.loaded_assets.insert(asset) {
                    return;
                }
                debug!(?asset, "asset ready");
                if asset == AssetKind::TargetModel && !self.targets_spawned {
                    world_setup::spawn_targets(&mut self.world, host, &mut self.rng, &self.config);
                    self.targets_spawned = true;
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems<H: Host + ?Sized>(
        &mut self,
        delta_secs: f64,
        absolute_secs: f64,
        input: &FrameInput,
        host: &mut H,
    ) {
        // 1. Due respawns (real-time clock)
        self.poll_respawns(absolute_secs, host);

        // 2. Input gate
        let assets = GateAssets {
            blaster: self.is_asset_ready(AssetKind::BlasterModel),
            laser: self.is_cue_ready(AudioCue::Laser),
        };
        let pull =
            systems::input_gate::run(&mut self.input_gate, input, &self.config, assets, host);

        // 3. Spawn
        if let Some(pull) = pull {
            match pull.emitter {
                Some(emitter) => {
                    self.spawn_projectile(&emitter, host);
                    self.events.push(FrameEvent::ProjectileFired {
                        hand: pull.hand,
                        position: emitter.position,
                        velocity: emitter.forward() * self.config.projectile_speed,
                    });
                }
                None => self.events.push(FrameEvent::MisFire { hand: pull.hand }),
            }
        }

        // 4. Kinematic integration
        systems::projectiles::advance(&mut self.world, delta_secs);

        // 5. Lifetime pruning (before collision: expired shots never score)
        systems::projectiles::prune(
            &mut self.world,
            host,
            &mut self.despawn_buffer,
            &mut self.events,
        );

        // 6. Collision, scoring, respawn scheduling
        let score_cue_ready = self.is_cue_ready(AudioCue::Score);
        systems::collision::run(
            &mut self.world,
            host,
            &self.config,
            &mut self.scorer,
            &mut self.respawns,
            absolute_secs,
            score_cue_ready,
            &mut self.events,
        );

        // 7. Scene sync for survivors
        systems::projectiles::sync_scene(&self.world, host);
    }
}
