use glam::Vec3;
use hecs::{Entity, World};
use log::{debug, trace};

use crate::{
    components::{pawn::get_pawn_entity, GlobalTransform, LocalTransform, Pawn, Teleport},
    config::PawnConfig,
    contexts::{InputContext, PhysicsContext},
    util::origin_and_forward,
    Engine,
};

/// Teleport system
/// When the teleport action fires, moves the pawn to wherever the player is looking.
///
/// Returns where the pawn ended up, if it moved.
pub fn teleport_system(engine: &mut Engine) -> Option<Vec3> {
    teleport_system_inner(
        &mut engine.world,
        &engine.input_context,
        &engine.physics_context,
        &engine.config,
    )
}

pub fn teleport_system_inner(
    world: &mut World,
    input_context: &InputContext,
    physics_context: &PhysicsContext,
    config: &PawnConfig,
) -> Option<Vec3> {
    if !input_context.action_fired(&config.bindings.teleport) {
        return None;
    }

    let pawn_entity = get_pawn_entity(world)?;
    teleport(world, physics_context, pawn_entity, config.teleport_distance)
}

/// Cast a ray `distance` long from the pawn's camera along the direction it's facing. If it hits something, move the
/// pawn so that it stands above the hit point, at the height it's at now.
///
/// Keeping the height means the pawn never ends up floating or falling. There's no check that the destination is
/// somewhere the pawn can actually stand, and no fade: the move is instant.
///
/// Returns the pawn's new position, or `None` if nothing was hit (in which case the pawn hasn't moved).
pub fn teleport(
    world: &mut World,
    physics_context: &PhysicsContext,
    pawn_entity: Entity,
    distance: f32,
) -> Option<Vec3> {
    let camera = world.get::<&Pawn>(pawn_entity).ok()?.camera;
    let global_from_camera = world.get::<&GlobalTransform>(camera).ok()?.0;
    let (origin, forward) = origin_and_forward(&global_from_camera);

    let Some(hit) = physics_context.cast_ray(origin, forward, distance) else {
        trace!("Teleport ray from {origin:?} along {forward:?} hit nothing");
        return None;
    };

    let destination = {
        let mut local_transform = world.get::<&mut LocalTransform>(pawn_entity).ok()?;
        local_transform.translation = Vec3::new(
            hit.point.x,
            local_transform.translation.y,
            hit.point.z,
        );
        local_transform.translation
    };
    world.insert_one(pawn_entity, Teleport {}).ok()?;

    debug!(
        "Teleported {pawn_entity:?} to {destination:?}, after hitting {:?} at {:?}",
        hit.entity, hit.point
    );
    Some(destination)
}
