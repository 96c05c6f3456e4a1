use crate::{
    components::{GlobalTransform, Parent},
    Engine,
};
use hecs::World;

/// Update global transform with parent transform system
/// Walks through each entity that has a Parent and builds a hierarchy
/// Then transforms each entity based on the hierarchy
pub fn update_global_transform_with_parent_system(engine: &mut Engine) {
    let world = &mut engine.world;
    update_global_transform_with_parent_system_inner(world);
}

pub fn update_global_transform_with_parent_system_inner(world: &mut World) {
    // Construct a view for efficient random access into the set of all entities that have
    // parents. Views allow work like dynamic borrow checking or component storage look-up to be
    // done once rather than per-entity as in `World::get`.
    let mut parents = world.query::<&Parent>();
    let parents = parents.view();

    // View of entities that don't have parents, i.e. roots of the transform hierarchy
    let mut roots = world.query::<&GlobalTransform>().without::<&Parent>();
    let roots = roots.view();

    // This query can coexist with the `roots` view without illegal aliasing of `GlobalTransform`
    // references because the inclusion of `&Parent` in the query, and its exclusion from the view,
    // guarantees that they will never overlap. Similarly, it can coexist with `parents` because
    // that view does not reference `GlobalTransform`s at all.
    for (_entity, (parent, absolute)) in world.query::<(&Parent, &mut GlobalTransform)>().iter() {
        // Walk the hierarchy from this entity to the root, accumulating the entity's absolute
        // transform.
        let mut relative = parent.from_child;
        let mut ancestor = parent.entity;
        while let Some(next) = parents.get(ancestor) {
            relative = next.from_child * relative;
            ancestor = next.entity;
        }
        // The root may have been despawned out from under us. Leave the child where it was.
        if let Some(root) = roots.get(ancestor) {
            absolute.0 = root.0 * relative;
        }
    }
}
