use crate::{components::Collider, contexts::PhysicsContext, util::entity_from_user_data, Engine};
use hecs::World;

/// Collision system
/// Walks through each collider and checks if it has overlapped any other entity
/// If overlaps are detected they are added to `collisions_this_frame` for ease of reference.
pub fn collision_system(engine: &mut Engine) {
    let world = &mut engine.world;
    let physics_context = &mut engine.physics_context;
    collision_system_inner(world, physics_context);
}

pub fn collision_system_inner(world: &mut World, physics_context: &PhysicsContext) {
    for (_, collider) in world.query::<&mut Collider>().iter() {
        // Clear out any collisions from previous frames.
        collider.collisions_this_frame.clear();
        for (a, b, intersecting) in physics_context
            .narrow_phase
            .intersections_with(collider.handle)
        {
            if intersecting {
                let other = if a == collider.handle { b } else { a };
                let Some(other_entity) = physics_context
                    .colliders
                    .get(other)
                    .and_then(|c| entity_from_user_data(c.user_data))
                else {
                    continue;
                };
                collider.collisions_this_frame.push(other_entity);
            }
        }
    }
}
