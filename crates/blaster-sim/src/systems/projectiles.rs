//! Projectile field: spawning, kinematic integration and lifetime pruning.
//!
//! Every projectile is a hecs entity, so its `Entity` is a generation-safe
//! key: a despawned projectile's key is never handed back to a new one.
//! Removal from the world is always paired with removal from the host scene.

use hecs::{Entity, World};
use tracing::debug;

use blaster_core::components::{Lifetime, Projectile};
use blaster_core::config::SessionConfig;
use blaster_core::constants::FORWARD;
use blaster_core::events::FrameEvent;
use blaster_core::types::{Position, Transform, Velocity};

use crate::host::SceneGraph;

/// Spawn a projectile at the emitter transform with a full lifetime.
///
/// Velocity is the forward axis rotated by the emitter orientation, scaled
/// to the configured speed.
pub fn spawn<S: SceneGraph + ?Sized>(
    world: &mut World,
    scene: &mut S,
    emitter: &Transform,
    config: &SessionConfig,
) -> Entity {
    let velocity = emitter.orientation * FORWARD * config.projectile_speed;
    let handle = scene.add_projectile(emitter);

    let entity = world.spawn((
        Projectile { handle },
        Position(emitter.position),
        Velocity(velocity),
        Lifetime {
            remaining_secs: config.projectile_lifetime_secs,
        },
    ));
    debug!(?entity, position = ?emitter.position, ?velocity, "projectile spawned");
    entity
}

/// Advance every projectile by `delta_secs`: burn lifetime, then move.
pub fn advance(world: &mut World, delta_secs: f64) {
    for (_entity, (_projectile, pos, vel, lifetime)) in
        world.query_mut::<(&Projectile, &mut Position, &Velocity, &mut Lifetime)>()
    {
        lifetime.remaining_secs -= delta_secs;
        pos.0 += vel.0 * delta_secs;
    }
}

/// Remove every projectile whose lifetime has gone negative.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
/// Returns the number of projectiles removed.
pub fn prune<S: SceneGraph + ?Sized>(
    world: &mut World,
    scene: &mut S,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<FrameEvent>,
) -> usize {
    despawn_buffer.clear();

    for (entity, (_projectile, lifetime)) in world.query_mut::<(&Projectile, &Lifetime)>() {
        if lifetime.remaining_secs < 0.0 {
            despawn_buffer.push(entity);
        }
    }

    let mut removed = 0;
    for entity in despawn_buffer.drain(..) {
        let position = world.get::<&Position>(entity).map(|p| p.0).unwrap_or_default();
        if despawn(world, scene, entity) {
            events.push(FrameEvent::ProjectileExpired { position });
            removed += 1;
        }
    }
    removed
}

/// Remove one projectile from the field and its node from the scene.
/// Returns false if `entity` is not a live projectile.
pub fn despawn<S: SceneGraph + ?Sized>(world: &mut World, scene: &mut S, entity: Entity) -> bool {
    let handle = match world.get::<&Projectile>(entity) {
        Ok(projectile) => projectile.handle,
        Err(_) => return false,
    };
    if world.despawn(entity).is_err() {
        return false;
    }
    scene.remove_projectile(handle);
    true
}

/// Push every surviving projectile's position to its scene node.
pub fn sync_scene<S: SceneGraph + ?Sized>(world: &World, scene: &mut S) {
    for (_entity, (projectile, pos)) in world.query::<(&Projectile, &Position)>().iter() {
        scene.move_projectile(projectile.handle, pos.0);
    }
}

/// Number of live projectiles.
pub fn count(world: &World) -> usize {
    world.query::<&Projectile>().iter().count()
}
