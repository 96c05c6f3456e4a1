use glam::Vec3;
use hecs::{Entity, World};
use rapier3d::prelude::{ColliderBuilder, RigidBodyBuilder, SharedShape};

use crate::{
    components::{
        Drawer, GasMask, GlobalTransform, Info, Interaction, LocalTransform, Parent,
        ProximitySphere, StaticMesh, Tags,
    },
    config::GasMaskConfig,
    contexts::{physics_context::DEFAULT_COLLISION_GROUP, PhysicsContext},
    util::na_vector_from_glam,
    VrPawnResult, DRAWER_TAG, PICKABLE_TAG,
};

fn spawn_at(world: &mut World, name: &str, position: Vec3) -> Entity {
    let local_transform = LocalTransform::from_translation(position);
    world.spawn((
        Info::new(name),
        local_transform,
        GlobalTransform::from(local_transform),
    ))
}

/// Add a fixed floor, `half_extent` metres in each direction, whose top surface sits at `height`.
pub fn add_floor(
    world: &mut World,
    physics_context: &mut PhysicsContext,
    half_extent: f32,
    height: f32,
) -> VrPawnResult<Entity> {
    const HALF_THICKNESS: f32 = 0.1;
    let position = Vec3::new(0., height - HALF_THICKNESS, 0.);
    let entity = spawn_at(world, "Floor", position);

    let rigid_body = RigidBodyBuilder::fixed()
        .translation(na_vector_from_glam(position))
        .build();
    let collider = ColliderBuilder::cuboid(half_extent, HALF_THICKNESS, half_extent).build();
    let components = physics_context.create_rigid_body_and_collider(
        entity,
        rigid_body,
        collider,
        DEFAULT_COLLISION_GROUP,
    );
    world.insert(entity, components)?;

    Ok(entity)
}

/// Add a box that simulates physics and can be picked up by the pawn.
pub fn add_pickable(
    world: &mut World,
    physics_context: &mut PhysicsContext,
    name: &str,
    position: Vec3,
    half_extents: Vec3,
) -> VrPawnResult<Entity> {
    let entity = spawn_at(world, name, position);

    let rigid_body = RigidBodyBuilder::dynamic()
        .translation(na_vector_from_glam(position))
        .build();
    let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z).build();
    let components = physics_context.create_rigid_body_and_collider(
        entity,
        rigid_body,
        collider,
        DEFAULT_COLLISION_GROUP,
    );
    world.insert(
        entity,
        (
            components.0,
            components.1,
            Tags::single(PICKABLE_TAG),
            StaticMesh::new(name),
        ),
    )?;

    Ok(entity)
}

/// Add a drawer that slides `open_offset` (in its own space) when the pawn interacts with it, and back again the
/// next time.
pub fn add_drawer(
    world: &mut World,
    physics_context: &mut PhysicsContext,
    position: Vec3,
    half_extents: Vec3,
    open_offset: Vec3,
) -> VrPawnResult<Entity> {
    let entity = spawn_at(world, "Drawer", position);

    let rigid_body = RigidBodyBuilder::kinematic_position_based()
        .translation(na_vector_from_glam(position))
        .build();
    let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z).build();
    let components = physics_context.create_rigid_body_and_collider(
        entity,
        rigid_body,
        collider,
        DEFAULT_COLLISION_GROUP,
    );
    world.insert(
        entity,
        (
            components.0,
            components.1,
            Tags::single(DRAWER_TAG),
            Interaction::new(Drawer::new(open_offset)),
            StaticMesh::new("Drawer"),
        ),
    )?;

    Ok(entity)
}

/// Add a gas mask at `position`, returning the mask entity.
///
/// The mask has a `HeadCollision` child carrying a [`ProximitySphere`] sensor that records everything within
/// `config.proximity_radius`.
pub fn add_gas_mask(
    world: &mut World,
    physics_context: &mut PhysicsContext,
    config: &GasMaskConfig,
    position: Vec3,
) -> VrPawnResult<Entity> {
    let mask = spawn_at(world, "MaskMesh", position);
    world.insert(mask, (GasMask::default(), StaticMesh::new("MaskMesh")))?;

    let head_collision = world.spawn((
        Info::new("HeadCollision"),
        ProximitySphere {
            radius: config.proximity_radius,
        },
        Parent::new(mask),
        GlobalTransform::from(LocalTransform::from_translation(position)),
    ));
    let components =
        physics_context.create_sensor(head_collision, SharedShape::ball(config.proximity_radius));
    world.insert(head_collision, components)?;
    physics_context
        .get_rigid_body(world, head_collision)?
        .set_translation(na_vector_from_glam(position), true);

    Ok(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        components::Collider,
        systems::{
            collision::collision_system_inner, physics::physics_system_inner,
            update_global_transform_with_parent::update_global_transform_with_parent_system_inner,
        },
    };

    #[test]
    pub fn test_add_props() {
        let mut world = World::new();
        let mut physics_context = PhysicsContext::default();

        let floor = add_floor(&mut world, &mut physics_context, 10., 0.).unwrap();
        let pickable = add_pickable(
            &mut world,
            &mut physics_context,
            "Cube",
            [0., 1., -1.].into(),
            Vec3::splat(0.1),
        )
        .unwrap();
        let drawer = add_drawer(
            &mut world,
            &mut physics_context,
            [1., 1., -1.].into(),
            Vec3::splat(0.2),
            [0., 0., 0.3].into(),
        )
        .unwrap();

        assert!(!physics_context.is_simulating_physics(&world, floor).unwrap());
        assert!(physics_context
            .is_simulating_physics(&world, pickable)
            .unwrap());
        assert!(world.get::<&Tags>(pickable).unwrap().has(PICKABLE_TAG));
        assert!(world.get::<&Tags>(drawer).unwrap().has(DRAWER_TAG));
        assert!(world.get::<&Interaction>(drawer).is_ok());
        assert!(!physics_context
            .is_simulating_physics(&world, drawer)
            .unwrap());
    }

    #[test]
    pub fn test_gas_mask_proximity() {
        let mut world = World::new();
        let mut physics_context = PhysicsContext::default();
        let config = GasMaskConfig {
            proximity_radius: 2.,
        };

        let mask = add_gas_mask(&mut world, &mut physics_context, &config, [0., 1., 0.].into())
            .unwrap();
        let near = add_pickable(
            &mut world,
            &mut physics_context,
            "Near",
            [1., 1., 0.].into(),
            Vec3::splat(0.1),
        )
        .unwrap();
        let far = add_pickable(
            &mut world,
            &mut physics_context,
            "Far",
            [5., 1., 0.].into(),
            Vec3::splat(0.1),
        )
        .unwrap();

        assert!(!world.get::<&GasMask>(mask).unwrap().is_equipped);

        update_global_transform_with_parent_system_inner(&mut world);
        physics_system_inner(&mut physics_context, &mut world);
        collision_system_inner(&mut world, &physics_context);

        let (head_collision, (sphere, collider)) = world
            .query::<(&ProximitySphere, &Collider)>()
            .iter()
            .map(|(e, (s, c))| (e, (*s, c.collisions_this_frame.clone())))
            .next()
            .unwrap();
        assert_eq!(sphere.radius, 2.);
        assert_eq!(world.get::<&Parent>(head_collision).unwrap().entity, mask);
        assert!(collider.contains(&near));
        assert!(!collider.contains(&far));
    }
}
