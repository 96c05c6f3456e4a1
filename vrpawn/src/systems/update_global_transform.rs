use crate::{
    components::{GlobalTransform, LocalTransform, Parent},
    Engine,
};
use hecs::World;

/// Update global transform system
/// Walks through each LocalTransform on an entity with no parent, and applies it to the entity's GlobalTransform
pub fn update_global_transform_system(engine: &mut Engine) {
    update_global_transform_system_inner(&mut engine.world);
}

pub fn update_global_transform_system_inner(world: &mut World) {
    for (_, (local_transform, global_transform)) in world
        .query::<(&LocalTransform, &mut GlobalTransform)>()
        .without::<&Parent>()
        .iter()
    {
        global_transform.0 = local_transform.to_affine();
    }
}
