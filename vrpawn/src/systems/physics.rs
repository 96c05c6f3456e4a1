use hecs::World;
use log::trace;

use crate::{
    components::{GlobalTransform, LocalTransform, Parent, RigidBody, Teleport},
    contexts::PhysicsContext,
    Engine,
};

/// Physics system
/// Pushes the positions of game controlled entities into the physics simulation, steps the simulation,
/// then pulls the positions of physics controlled entities back out.
pub fn physics_system(engine: &mut Engine) {
    physics_system_inner(&mut engine.physics_context, &mut engine.world);
}

pub fn physics_system_inner(physics_context: &mut PhysicsContext, world: &mut World) {
    // Game -> physics
    let mut teleported = Vec::new();
    for (entity, (rigid_body, global_transform, teleport)) in world
        .query::<(&RigidBody, &GlobalTransform, Option<&Teleport>)>()
        .iter()
    {
        let Some(body) = physics_context.rigid_bodies.get_mut(rigid_body.handle) else {
            continue;
        };
        let position = global_transform.to_isometry();

        if teleport.is_some() {
            trace!("Teleporting {entity:?} to {:?}", position.translation);
            body.set_position(position, true);
            teleported.push(entity);
        } else if body.is_kinematic() {
            body.set_next_kinematic_position(position);
        }
    }

    for entity in teleported {
        let _ = world.remove_one::<Teleport>(entity);
    }

    physics_context.update();

    // Physics -> game
    for (_, (rigid_body, local_transform, global_transform)) in world
        .query::<(&RigidBody, &mut LocalTransform, &mut GlobalTransform)>()
        .without::<&Parent>()
        .iter()
    {
        let Some(body) = physics_context.rigid_bodies.get(rigid_body.handle) else {
            continue;
        };
        if body.is_dynamic() {
            local_transform.update_from_isometry(body.position());
            global_transform.0 = local_transform.to_affine();
        }
    }
}
