use glam::{Affine3A, Vec3};
use hecs::{Entity, World};
use log::warn;

use crate::{
    components::{GlobalTransform, InteractionState, LocalTransform, Pawn},
    Engine,
};

/// Held object system
/// Locks whatever a pawn is holding to its left anchor. Must run after the global transforms have been updated.
///
/// The held entity takes the anchor's position and rotation, but keeps its own scale.
pub fn held_object_system(engine: &mut Engine) {
    held_object_system_inner(&mut engine.world);
}

pub fn held_object_system_inner(world: &mut World) {
    let holding = world
        .query::<&Pawn>()
        .iter()
        .filter_map(|(e, pawn)| pawn.grabbed_entity().map(|held| (e, pawn.left_anchor, held)))
        .collect::<Vec<(Entity, Entity, Entity)>>();

    for (pawn_entity, anchor, held) in holding {
        let Ok(global_from_anchor) = world.get::<&GlobalTransform>(anchor).map(|g| g.0) else {
            continue;
        };

        // The held entity's local transform is left alone while it's attached, so it still has its scale.
        let scale = world
            .get::<&LocalTransform>(held)
            .map(|l| l.scale)
            .unwrap_or(Vec3::ONE);
        let (_, rotation, translation) = global_from_anchor.to_scale_rotation_translation();

        let updated = world
            .get::<&mut GlobalTransform>(held)
            .map(|mut global_transform| {
                global_transform.0 =
                    Affine3A::from_scale_rotation_translation(scale, rotation, translation)
            })
            .is_ok();

        if !updated {
            warn!("{pawn_entity:?} was holding {held:?}, which no longer exists. Letting go.");
            if let Ok(mut pawn) = world.get::<&mut Pawn>(pawn_entity) {
                pawn.state = InteractionState::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        attachment::{attach, AttachmentRule},
        components::{pawn::add_pawn, Info},
        contexts::{ControllerSample, InputContext, InputSample, PhysicsContext},
        systems::{
            motion_controllers::motion_controllers_system_inner,
            update_global_transform::update_global_transform_system_inner,
            update_global_transform_with_parent::update_global_transform_with_parent_system_inner,
        },
    };
    use approx::assert_relative_eq;
    use glam::Quat;

    fn setup() -> (World, Entity, Entity) {
        let mut world = World::new();
        let mut physics_context = PhysicsContext::default();
        let pawn = add_pawn(&mut world, &mut physics_context, [0., 0., 5.].into()).unwrap();

        let local_transform = LocalTransform {
            translation: [3., 0., 0.].into(),
            scale: Vec3::splat(2.),
            ..Default::default()
        };
        let held = world.spawn((
            Info::new("Held"),
            local_transform,
            GlobalTransform::from(local_transform),
        ));

        let left_anchor = world.get::<&Pawn>(pawn).unwrap().left_anchor;
        attach(&mut world, held, left_anchor, AttachmentRule::SnapToTarget).unwrap();
        world.get::<&mut Pawn>(pawn).unwrap().state = InteractionState::Holding(held);

        (world, pawn, held)
    }

    fn tick(world: &mut World, input_context: &InputContext) {
        motion_controllers_system_inner(world, input_context);
        update_global_transform_system_inner(world);
        update_global_transform_with_parent_system_inner(world);
        held_object_system_inner(world);
    }

    #[test]
    pub fn test_held_object_follows_hand() {
        let (mut world, pawn, held) = setup();
        let left_anchor = world.get::<&Pawn>(pawn).unwrap().left_anchor;
        let mut input_context = InputContext::default();

        for i in 0..10 {
            let t = i as f32 * 0.1;
            let stage_from_grip = Affine3A::from_rotation_translation(
                Quat::from_rotation_y(t) * Quat::from_rotation_x(-t),
                [t - 0.5, 1. + t, -0.3].into(),
            );
            input_context.update(&InputSample {
                left: ControllerSample {
                    stage_from_grip,
                    ..Default::default()
                },
                ..Default::default()
            });
            tick(&mut world, &input_context);

            let (_, anchor_rotation, anchor_translation) = world
                .get::<&GlobalTransform>(left_anchor)
                .unwrap()
                .to_scale_rotation_translation();
            let (scale, rotation, translation) = world
                .get::<&GlobalTransform>(held)
                .unwrap()
                .to_scale_rotation_translation();

            assert_relative_eq!(translation, anchor_translation, epsilon = 0.0001);
            assert_relative_eq!(
                translation,
                Vec3::new(t - 0.5, 1. + t, 4.7),
                epsilon = 0.0001
            );
            // q and -q are the same rotation
            assert!(rotation.dot(anchor_rotation).abs() > 1. - 1e-5);
            assert_relative_eq!(scale, Vec3::splat(2.), epsilon = 0.0001);
        }
    }

    #[test]
    pub fn test_held_object_despawned() {
        let (mut world, pawn, held) = setup();
        world.despawn(held).unwrap();

        tick(&mut world, &InputContext::default());
        assert_eq!(
            world.get::<&Pawn>(pawn).unwrap().state,
            InteractionState::Idle
        );
    }
}
