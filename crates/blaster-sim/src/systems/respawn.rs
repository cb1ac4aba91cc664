//! Respawn system: brings hit targets back after a fixed real-time delay.
//!
//! Due times are measured on the host's absolute clock, never on summed
//! frame deltas, so a stalled or slowed frame loop does not stretch the
//! hidden window. Each entry carries the target's hit generation; an entry
//! whose generation no longer matches is dropped without touching the target.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use blaster_core::components::TargetSlot;
use blaster_core::config::SessionConfig;
use blaster_core::enums::ScaleEffect;
use blaster_core::events::FrameEvent;
use blaster_core::types::Position;

use crate::host::{SceneGraph, TweenEffects};
use crate::world_setup;

/// A single pending respawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledRespawn {
    pub slot: usize,
    /// Target generation at the time of the hit.
    pub generation: u32,
    /// Host absolute time at which the target comes back (seconds).
    pub due_at_secs: f64,
}

/// All pending respawns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RespawnSchedule {
    pub entries: Vec<ScheduledRespawn>,
}

impl RespawnSchedule {
    /// Queue a respawn for `slot`. Any earlier entry for the same slot is
    /// superseded, since its generation can no longer match.
    pub fn schedule(&mut self, slot: usize, generation: u32, due_at_secs: f64) {
        self.entries.retain(|e| e.slot != slot);
        self.entries.push(ScheduledRespawn {
            slot,
            generation,
            due_at_secs,
        });
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fire every respawn due at `now_secs`. Returns the number of targets shown.
pub fn run<H>(
    world: &mut World,
    host: &mut H,
    rng: &mut ChaCha8Rng,
    config: &SessionConfig,
    schedule: &mut RespawnSchedule,
    now_secs: f64,
    events: &mut Vec<FrameEvent>,
) -> u32
where
    H: SceneGraph + TweenEffects + ?Sized,
{
    let mut shown = 0;
    let mut due = Vec::new();
    schedule.entries.retain(|entry| {
        if entry.due_at_secs <= now_secs {
            due.push(*entry);
            false
        } else {
            true
        }
    });

    for entry in due {
        let target = world
            .query_mut::<(&mut TargetSlot, &mut Position)>()
            .into_iter()
            .find(|(_, (target, _))| target.slot == entry.slot);

        let Some((_entity, (target, pos))) = target else {
            trace!(slot = entry.slot, "respawn for unknown slot dropped");
            continue;
        };

        if target.generation != entry.generation || target.visible {
            trace!(slot = entry.slot, "stale respawn dropped");
            continue;
        }

        let position = world_setup::random_target_position(rng, config, entry.slot);
        pos.0 = position;
        target.visible = true;

        host.place_target(entry.slot, position, true);
        host.animate_scale(entry.slot, ScaleEffect::Grow, 1.0, config.grow_secs);
        events.push(FrameEvent::TargetRespawned {
            slot: entry.slot,
            position,
        });
        debug!(slot = entry.slot, ?position, "target respawned");
        shown += 1;
    }
    shown
}
