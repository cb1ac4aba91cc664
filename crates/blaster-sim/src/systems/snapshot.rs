//! Snapshot system: queries the ECS world and builds a complete FrameSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use blaster_core::components::{Lifetime, Projectile, TargetSlot};
use blaster_core::enums::TargetState;
use blaster_core::events::FrameEvent;
use blaster_core::state::{FrameSnapshot, ProjectileView, TargetView};
use blaster_core::types::{Position, SimTime, Velocity};

use crate::scoring::Scorer;

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    scorer: &Scorer,
    events: Vec<FrameEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        projectiles: build_projectiles(world),
        targets: build_targets(world),
        score: scorer.view(),
        events,
    }
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position, &Velocity, &Lifetime)>()
        .iter()
        .map(|(_, (_, pos, vel, lifetime))| ProjectileView {
            position: pos.0,
            velocity: vel.0,
            remaining_secs: lifetime.remaining_secs,
        })
        .collect()
}

/// Targets sorted by slot.
fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&TargetSlot, &Position)>()
        .iter()
        .map(|(_, (target, pos))| TargetView {
            slot: target.slot,
            position: pos.0,
            state: if target.visible {
                TargetState::Visible
            } else {
                TargetState::Hidden
            },
        })
        .collect();
    targets.sort_by_key(|t| t.slot);
    targets
}
