//! Collision system: checks projectile-target proximity and scores hits.
//!
//! Hits are first-writer-wins: the target is hidden, in the world and in the
//! host scene, the moment a hit is registered, so later projectiles in the same pass (and in later frames,
//! until the respawn fires) skip it. A projectile is consumed by its first
//! hit and can score at most once.

use hecs::{Entity, World};
use tracing::debug;

use blaster_core::components::{Projectile, TargetSlot};
use blaster_core::config::SessionConfig;
use blaster_core::enums::{AudioCue, ScaleEffect};
use blaster_core::events::FrameEvent;
use blaster_core::types::Position;

use crate::host::Host;
use crate::scoring::Scorer;
use crate::systems::projectiles;
use crate::systems::respawn::RespawnSchedule;

/// Run the collision test for every live projectile against every visible
/// target. Returns the number of hits registered.
#[allow(clippy::too_many_arguments)]
pub fn run<H: Host + ?Sized>(
    world: &mut World,
    host: &mut H,
    config: &SessionConfig,
    scorer: &mut Scorer,
    respawns: &mut RespawnSchedule,
    now_secs: f64,
    score_cue_ready: bool,
    events: &mut Vec<FrameEvent>,
) -> u32 {
    // Fixed order for this pass; removals below never disturb it.
    let shots: Vec<(Entity, Position)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect();

    let mut targets: Vec<(Entity, usize, Position)> = world
        .query::<(&TargetSlot, &Position)>()
        .iter()
        .map(|(entity, (target, pos))| (entity, target.slot, *pos))
        .collect();
    targets.sort_by_key(|&(_, slot, _)| slot);

    let mut hits = 0;
    for (shot, shot_pos) in shots {
        for &(target_entity, slot, target_pos) in &targets {
            if target_pos.range_to(&shot_pos) >= config.hit_radius {
                continue;
            }

            let generation = match world.get::<&mut TargetSlot>(target_entity) {
                Ok(mut target) if target.visible => {
                    target.visible = false;
                    target.generation = target.generation.wrapping_add(1);
                    target.generation
                }
                _ => continue,
            };

            projectiles::despawn(world, host, shot);

            host.place_target(slot, target_pos.0, false);
            host.animate_scale(slot, ScaleEffect::Shrink, 0.0, config.shrink_secs);
            respawns.schedule(slot, generation, now_secs + config.respawn_delay_secs);

            scorer.record_hit(config.points_per_hit);
            scorer.push_display(host);
            if score_cue_ready {
                host.restart(AudioCue::Score);
            }

            events.push(FrameEvent::TargetHit {
                slot,
                score: scorer.score(),
            });
            debug!(slot, score = scorer.score(), "target hit");
            hits += 1;
            break;
        }
    }
    hits
}
