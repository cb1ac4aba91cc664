//! Entity spawn factories for setting up the shooting range.
//!
//! Targets are spawned once, when the host reports the target model is
//! loaded, and are only ever repositioned afterwards.

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use blaster_core::components::TargetSlot;
use blaster_core::config::SessionConfig;
use blaster_core::types::Position;

use crate::host::SceneGraph;

/// Spawn every target slot at a fresh random position, visible.
pub fn spawn_targets<S: SceneGraph + ?Sized>(
    world: &mut World,
    scene: &mut S,
    rng: &mut ChaCha8Rng,
    config: &SessionConfig,
) -> Vec<Entity> {
    (0..config.target_count)
        .map(|slot| spawn_target(world, scene, rng, config, slot))
        .collect()
}

/// Spawn a single visible target in `slot`.
pub fn spawn_target<S: SceneGraph + ?Sized>(
    world: &mut World,
    scene: &mut S,
    rng: &mut ChaCha8Rng,
    config: &SessionConfig,
    slot: usize,
) -> Entity {
    let position = random_target_position(rng, config, slot);
    scene.place_target(slot, position, true);

    world.spawn((
        TargetSlot {
            slot,
            visible: true,
            generation: 0,
        },
        Position(position),
    ))
}

/// Pick a placement for `slot`.
///
/// X is drawn from `[x_min, x_max)`, Z from `(z_min, z_max]` (measured back
/// from the near edge), and Y is fixed per slot so targets never stack.
pub fn random_target_position(rng: &mut ChaCha8Rng, config: &SessionConfig, slot: usize) -> DVec3 {
    let [x_min, x_max] = config.target_x_range;
    let [z_min, z_max] = config.target_z_range;

    let x = rng.gen_range(x_min..x_max);
    let depth = rng.gen_range(0.0..(z_max - z_min));
    let y = config.target_base_y + slot as f64 * config.target_y_spacing;

    DVec3::new(x, y, z_max - depth)
}
